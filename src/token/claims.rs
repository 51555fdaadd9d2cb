//! Token Claims
//!
//! Access Token 与 Refresh Token 各自携带的字段。

use serde::{Deserialize, Serialize};

/// 带绝对过期时间的 claims
pub trait ExpiringClaims {
    /// 过期时间（Unix 时间戳，秒）
    fn exp(&self) -> i64;

    /// 在 `now` 时刻是否已过期
    ///
    /// `exp` 必须严格晚于 `now`，Token 才有效。
    fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp()
    }
}

/// Access Token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// 用户名
    pub username: String,
    /// 受保护的消息
    pub secret_msg: String,
    /// 过期时间（Unix 时间戳）
    pub exp: i64,
    /// 主体 ID
    pub sub: i64,
}

impl ExpiringClaims for AccessClaims {
    fn exp(&self) -> i64 {
        self.exp
    }
}

/// Refresh Token claims
///
/// 不接受多余字段，因此 Access Token 不能冒充 Refresh Token 使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshClaims {
    /// 主体 ID
    pub sub: i64,
    /// 过期时间（Unix 时间戳）
    pub exp: i64,
}

impl ExpiringClaims for RefreshClaims {
    fn exp(&self) -> i64 {
        self.exp
    }
}
