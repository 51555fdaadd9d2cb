//! 配置模块
//!
//! 签发方与验证方共享的密钥，以及 Token 有效期等配置。
//! 密钥在启动时构造一次，之后只读。

use chrono::Duration;
use std::fmt;
use std::sync::Arc;

use crate::error::{ConfigError, Result};
use crate::token::jwt::JwtAlgorithm;

/// 推荐的最小密钥长度（字节）
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// 默认 Access Token 有效期：15 分钟
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// 默认 Refresh Token 有效期：24 小时
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// 默认写入 Access Token 的受保护消息
pub const DEFAULT_SECRET_MESSAGE: &str = "Shhhhh!";

/// HMAC 共享密钥
///
/// 克隆开销很小（内部为 `Arc`），`Debug` 输出不会泄露密钥内容。
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(Arc<[u8]>);

impl SharedSecret {
    /// 从字节创建密钥
    ///
    /// 空密钥会被拒绝；短于 [`RECOMMENDED_SECRET_LEN`] 的密钥会被接受，但会记录警告。
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return Err(ConfigError::MissingRequired("jwt secret".to_string()).into());
        }
        if bytes.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                len = bytes.len(),
                recommended = RECOMMENDED_SECRET_LEN,
                "jwt secret is shorter than recommended"
            );
        }
        Ok(Self(Arc::from(bytes)))
    }

    /// 密钥字节
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSecret").field(&"<redacted>").finish()
    }
}

/// Token 配置
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// 签名密钥
    pub secret: SharedSecret,
    /// Access Token 有效期
    pub access_token_ttl: Duration,
    /// Refresh Token 有效期
    pub refresh_token_ttl: Duration,
    /// 写入 Access Token `secret_msg` 字段的内容
    pub secret_message: String,
    /// 签名算法
    pub algorithm: JwtAlgorithm,
}

impl TokenConfig {
    /// 使用默认有效期创建配置
    pub fn new(secret: SharedSecret) -> Self {
        Self {
            secret,
            access_token_ttl: Duration::seconds(DEFAULT_ACCESS_TOKEN_TTL_SECS),
            refresh_token_ttl: Duration::seconds(DEFAULT_REFRESH_TOKEN_TTL_SECS),
            secret_message: DEFAULT_SECRET_MESSAGE.to_string(),
            algorithm: JwtAlgorithm::default(),
        }
    }

    /// 设置 Access Token 有效期
    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    /// 设置 Refresh Token 有效期
    pub fn with_refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = ttl;
        self
    }

    /// 设置受保护消息
    pub fn with_secret_message(mut self, message: impl Into<String>) -> Self {
        self.secret_message = message.into();
        self
    }

    /// 设置签名算法
    pub fn with_algorithm(mut self, algorithm: JwtAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// 检查配置是否合理
    ///
    /// 两个有效期都必须为正，且 Access Token 必须比 Refresh Token 短。
    pub fn validate(&self) -> Result<()> {
        if self.access_token_ttl <= Duration::zero() {
            return Err(invalid("access_token_ttl", "must be positive"));
        }
        if self.refresh_token_ttl <= Duration::zero() {
            return Err(invalid("refresh_token_ttl", "must be positive"));
        }
        if self.access_token_ttl >= self.refresh_token_ttl {
            return Err(invalid(
                "access_token_ttl",
                "must be shorter than refresh_token_ttl",
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> crate::Error {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
    .into()
}
