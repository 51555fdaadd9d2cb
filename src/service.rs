//! 认证服务
//!
//! 登录、刷新、读取受保护资源三个流程的编排。HTTP 层只负责
//! 取参数与映射状态码，其余逻辑都在这里。

use std::sync::Arc;

use crate::config::TokenConfig;
use crate::error::{Error, Result};
use crate::identity::{Credentials, IdentityStore};
use crate::token::issuer::TokenIssuer;

/// 登录成功的结果
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// 放入响应体的 Access Token
    pub access_token: String,
    /// 由 HTTP 层放入 HttpOnly Cookie 的 Refresh Token
    pub refresh_token: String,
}

/// 认证服务
#[derive(Clone)]
pub struct AuthService {
    issuer: TokenIssuer,
    identities: Arc<dyn IdentityStore>,
}

impl AuthService {
    /// 创建认证服务，配置不合理时返回错误
    pub fn new(config: TokenConfig, identities: Arc<dyn IdentityStore>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            issuer: TokenIssuer::new(config, identities.clone()),
            identities,
        })
    }

    /// 内部使用的签发器（HTTP 层从中读取 Refresh Token 有效期）
    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// 登录
    ///
    /// 凭据不匹配时返回 [`Error::InvalidCredentials`]。
    pub fn login(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        let Some(identity) = self.identities.authenticate(credentials) else {
            tracing::warn!(username = %credentials.username, "login rejected");
            return Err(Error::InvalidCredentials);
        };

        let pair = self.issuer.issue(&identity)?;

        tracing::info!(sub = identity.subject, username = %identity.username, "login succeeded");

        Ok(LoginOutcome {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    /// 使用 Refresh Token 换取新的 Access Token
    pub fn refresh(&self, refresh_token: &str) -> Result<String> {
        self.issuer.reissue_access(refresh_token).inspect_err(|e| {
            tracing::warn!(error = %e, "refresh rejected");
        })
    }

    /// 验证 Access Token 并返回其中的受保护消息
    pub fn secret(&self, access_token: &str) -> Result<String> {
        let claims = self.issuer.validator().validate(access_token).inspect_err(|e| {
            tracing::warn!(error = %e, "access token rejected");
        })?;
        Ok(claims.secret_msg)
    }
}
