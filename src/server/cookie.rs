//! Refresh Token Cookie
//!
//! 固定为 HttpOnly、SameSite=Strict、Path=/，Max-Age 与 Refresh Token 有效期一致。
//! 是否加 Secure 由部署环境决定（本地 HTTP 调试时不能加）。

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::config::TokenConfig;

/// Refresh Token 所在的 Cookie 名称
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Refresh Token Cookie 的下发设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshCookie {
    max_age: Duration,
    secure: bool,
}

impl RefreshCookie {
    pub fn new(config: &TokenConfig, secure: bool) -> Self {
        Self {
            max_age: Duration::seconds(config.refresh_token_ttl.num_seconds()),
            secure,
        }
    }

    /// 生成携带 Refresh Token 的 Cookie
    pub fn build(&self, token: impl Into<String>) -> Cookie<'static> {
        Cookie::build((REFRESH_TOKEN_COOKIE, token.into()))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .max_age(self.max_age)
            .path("/")
            .build()
    }
}
