//! 统一错误类型模块
//!
//! 提供 tokenpair 中所有操作的错误类型定义。

use std::fmt;

/// tokenpair 的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// tokenpair 的错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Token 相关错误
    Token(TokenError),

    /// 配置错误
    Config(ConfigError),

    /// 请求体无法解码
    Decode(String),

    /// 用户名或密码错误
    InvalidCredentials,
}

impl Error {
    /// 创建一个请求解码错误
    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }
}

/// Token 相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token 已过期（签名有效，但 `exp` 已到）
    Expired,
    /// 签名无效，或 Token 结构损坏无法解析
    InvalidSignature,
    /// Token 有效，但 `sub` 指向未知的主体
    UnknownSubject(i64),
    /// 签名失败
    SigningFailed(String),
}

/// 配置相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 缺少必需的配置
    MissingRequired(String),
    /// 无效的配置值
    InvalidValue { key: String, message: String },
}

// ============================================================================
// Display 实现
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Token(e) => write!(f, "Token error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
            Error::InvalidCredentials => write!(f, "Invalid username or password"),
        }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Expired => write!(f, "token has expired"),
            TokenError::InvalidSignature => write!(f, "invalid token signature"),
            TokenError::UnknownSubject(sub) => write!(f, "unknown subject: {}", sub),
            TokenError::SigningFailed(msg) => write!(f, "token signing failed: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingRequired(key) => {
                write!(f, "missing required configuration: {}", key)
            }
            ConfigError::InvalidValue { key, message } => {
                write!(f, "invalid configuration value for '{}': {}", key, message)
            }
        }
    }
}

// ============================================================================
// std::error::Error 实现
// ============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Token(e) => Some(e),
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for TokenError {}
impl std::error::Error for ConfigError {}

// ============================================================================
// From 实现 - 方便错误转换
// ============================================================================

impl From<TokenError> for Error {
    fn from(err: TokenError) -> Self {
        Error::Token(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}
