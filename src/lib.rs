//! # tokenpair
//!
//! 基于 JWT 的 Access Token / Refresh Token 认证流程。
//!
//! ## 功能特性
//!
//! - **Token 签发**: 登录成功后签发短期 Access Token（默认 15 分钟）和长期 Refresh Token（默认 24 小时）
//! - **Token 验证**: 校验 HMAC 签名与 `exp`，不保存任何会话状态
//! - **Token 刷新**: 凭 Refresh Token 换取新的 Access Token，Refresh Token 本身不轮换
//! - **身份查找**: 通过 [`IdentityStore`] 注入，默认只有一个固定身份
//! - **HTTP 服务**: 基于 axum 的 `/login`、`/refresh`、`/secret` 路由（`server` feature）
//!
//! ## Features
//!
//! - `server` - 启用 HTTP 服务与可执行文件（默认启用）
//!
//! ## 示例
//!
//! ```rust
//! use std::sync::Arc;
//! use tokenpair::{AuthService, Credentials, SharedSecret, StaticIdentityStore, TokenConfig};
//!
//! let secret = SharedSecret::new(b"my-secret-key-at-least-32-bytes!").unwrap();
//! let service = AuthService::new(
//!     TokenConfig::new(secret),
//!     Arc::new(StaticIdentityStore::default()),
//! )
//! .unwrap();
//!
//! // 登录
//! let outcome = service
//!     .login(&Credentials::new("admin", "password123"))
//!     .unwrap();
//!
//! // 读取受保护消息
//! assert_eq!(service.secret(&outcome.access_token).unwrap(), "Shhhhh!");
//!
//! // 换取新的 Access Token
//! let fresh = service.refresh(&outcome.refresh_token).unwrap();
//! assert_eq!(service.secret(&fresh).unwrap(), "Shhhhh!");
//! ```

pub mod config;
pub mod error;
pub mod identity;
#[cfg(feature = "server")]
pub mod server;
pub mod service;
pub mod token;

pub use error::{ConfigError, Error, Result, TokenError};

// ============================================================================
// 配置与身份
// ============================================================================

pub use config::{SharedSecret, TokenConfig};
pub use identity::{Credentials, Identity, IdentityStore, StaticIdentityStore};

// ============================================================================
// Token
// ============================================================================

pub use token::{
    AccessClaims, JwtAlgorithm, RefreshClaims, TokenIssuer, TokenPair, TokenValidator,
};

// ============================================================================
// 服务
// ============================================================================

pub use service::{AuthService, LoginOutcome};
