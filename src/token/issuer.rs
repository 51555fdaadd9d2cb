//! Token 签发器
//!
//! 登录成功后签发 Access Token + Refresh Token；
//! 之后凭 Refresh Token 换取新的 Access Token。
//!
//! ```rust
//! use std::sync::Arc;
//! use tokenpair::{SharedSecret, StaticIdentityStore, TokenConfig, TokenIssuer};
//! use tokenpair::identity::{Credentials, IdentityStore};
//!
//! let secret = SharedSecret::new(b"my-secret-key-at-least-32-bytes!").unwrap();
//! let store = Arc::new(StaticIdentityStore::default());
//! let issuer = TokenIssuer::new(TokenConfig::new(secret), store.clone());
//!
//! let identity = store
//!     .authenticate(&Credentials::new("admin", "password123"))
//!     .unwrap();
//! let pair = issuer.issue(&identity).unwrap();
//!
//! let fresh = issuer.reissue_access(&pair.refresh_token).unwrap();
//! let claims = issuer.validator().validate(&fresh).unwrap();
//! assert_eq!(claims.username, "admin");
//! ```

use chrono::Utc;
use std::sync::Arc;

use crate::config::TokenConfig;
use crate::error::{Result, TokenError};
use crate::identity::{Identity, IdentityStore};
use crate::token::claims::{AccessClaims, RefreshClaims};
use crate::token::jwt;
use crate::token::validator::TokenValidator;

/// Access Token 和 Refresh Token 对
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Access Token（短期有效）
    pub access_token: String,
    /// Refresh Token（长期有效）
    pub refresh_token: String,
    /// Access Token 过期时间（Unix 时间戳）
    pub access_token_expires_at: i64,
    /// Refresh Token 过期时间（Unix 时间戳）
    pub refresh_token_expires_at: i64,
}

/// Token 签发器
#[derive(Clone)]
pub struct TokenIssuer {
    config: TokenConfig,
    validator: TokenValidator,
    identities: Arc<dyn IdentityStore>,
}

impl TokenIssuer {
    /// 创建签发器
    ///
    /// `identities` 用于刷新时按 `sub` 重新查找身份。
    pub fn new(config: TokenConfig, identities: Arc<dyn IdentityStore>) -> Self {
        let validator = TokenValidator::from_config(&config);
        Self {
            config,
            validator,
            identities,
        }
    }

    /// 与签发器使用同一密钥的验证器
    pub fn validator(&self) -> &TokenValidator {
        &self.validator
    }

    /// 当前配置
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// 为已认证的身份签发 Token 对
    ///
    /// 调用方必须先完成凭据校验。
    pub fn issue(&self, identity: &Identity) -> Result<TokenPair> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// 以给定时间签发 Token 对
    pub fn issue_at(&self, identity: &Identity, now: i64) -> Result<TokenPair> {
        let (access_token, access_token_expires_at) = self.sign_access(identity, now)?;

        let refresh_claims = RefreshClaims {
            sub: identity.subject,
            exp: now + self.config.refresh_token_ttl.num_seconds(),
        };
        let refresh_token = jwt::sign(&refresh_claims, &self.config.secret, self.config.algorithm)?;

        tracing::debug!(
            sub = identity.subject,
            access_exp = access_token_expires_at,
            refresh_exp = refresh_claims.exp,
            "issued token pair"
        );

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_token_expires_at,
            refresh_token_expires_at: refresh_claims.exp,
        })
    }

    /// 使用 Refresh Token 换取新的 Access Token
    ///
    /// Refresh Token 本身不会被延长或作废，在自己的 `exp` 之前可以反复使用。
    pub fn reissue_access(&self, refresh_token: &str) -> Result<String> {
        self.reissue_access_at(refresh_token, Utc::now().timestamp())
    }

    /// 以给定时间换取新的 Access Token
    pub fn reissue_access_at(&self, refresh_token: &str, now: i64) -> Result<String> {
        let claims = self.validator.validate_refresh_at(refresh_token, now)?;

        let identity = self.identities.find_by_subject(claims.sub).ok_or_else(|| {
            tracing::warn!(sub = claims.sub, "refresh token references unknown subject");
            TokenError::UnknownSubject(claims.sub)
        })?;

        let (access_token, exp) = self.sign_access(&identity, now)?;
        tracing::debug!(sub = identity.subject, access_exp = exp, "reissued access token");

        Ok(access_token)
    }

    fn sign_access(&self, identity: &Identity, now: i64) -> Result<(String, i64)> {
        let claims = AccessClaims {
            username: identity.username.clone(),
            secret_msg: self.config.secret_message.clone(),
            exp: now + self.config.access_token_ttl.num_seconds(),
            sub: identity.subject,
        };
        let token = jwt::sign(&claims, &self.config.secret, self.config.algorithm)?;
        Ok((token, claims.exp))
    }
}
