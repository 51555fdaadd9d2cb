//! Token 验证器
//!
//! 验证签名、解码 claims、检查过期。不保存任何状态，
//! 结果只取决于 Token、当前时间和共享密钥，可在多个请求间并发复用。

use chrono::Utc;

use crate::config::{SharedSecret, TokenConfig};
use crate::error::Result;
use crate::token::claims::{AccessClaims, RefreshClaims};
use crate::token::jwt::{self, JwtAlgorithm};

/// Access / Refresh Token 验证器
#[derive(Debug, Clone)]
pub struct TokenValidator {
    secret: SharedSecret,
    algorithm: JwtAlgorithm,
}

impl TokenValidator {
    /// 使用共享密钥创建验证器（HS256）
    pub fn new(secret: SharedSecret) -> Self {
        Self {
            secret,
            algorithm: JwtAlgorithm::default(),
        }
    }

    /// 使用 Token 配置创建验证器
    pub fn from_config(config: &TokenConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            algorithm: config.algorithm,
        }
    }

    /// 验证 Access Token，返回完整 claims
    pub fn validate(&self, token: &str) -> Result<AccessClaims> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// 以给定时间验证 Access Token
    pub fn validate_at(&self, token: &str, now: i64) -> Result<AccessClaims> {
        let claims: AccessClaims = jwt::verify(token, &self.secret, self.algorithm, now)?;
        tracing::debug!(sub = claims.sub, exp = claims.exp, "access token accepted");
        Ok(claims)
    }

    /// 以给定时间验证 Refresh Token
    pub fn validate_refresh_at(&self, token: &str, now: i64) -> Result<RefreshClaims> {
        let claims: RefreshClaims = jwt::verify(token, &self.secret, self.algorithm, now)?;
        tracing::debug!(sub = claims.sub, exp = claims.exp, "refresh token accepted");
        Ok(claims)
    }
}
