//! Token 模块
//!
//! 提供 Access Token / Refresh Token 的签发与验证。
//!
//! ## 子模块
//!
//! - **claims**: 两种 Token 携带的字段
//! - **jwt**: HMAC JWT 的签名与解码
//! - **issuer**: 登录签发与刷新换发
//! - **validator**: 签名与过期校验
//!
//! ## 有效性
//!
//! Token 有效当且仅当签名能用共享密钥验证通过，并且 `exp` 严格晚于当前时间。
//! 没有吊销列表，也不保存会话状态，每次都重新计算。

pub mod claims;
pub mod issuer;
pub mod jwt;
pub mod validator;

pub use claims::{AccessClaims, ExpiringClaims, RefreshClaims};
pub use issuer::{TokenIssuer, TokenPair};
pub use jwt::JwtAlgorithm;
pub use validator::TokenValidator;
