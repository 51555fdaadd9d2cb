//! JWT 编解码
//!
//! 对 `jsonwebtoken` 的一层薄封装：只支持 HMAC 算法，
//! 过期判断由本模块自己完成（`now >= exp` 即视为过期），
//! 不使用库内置的带 leeway 的 `exp` 校验。
//!
//! ```rust
//! use tokenpair::SharedSecret;
//! use tokenpair::token::claims::RefreshClaims;
//! use tokenpair::token::jwt::{self, JwtAlgorithm};
//!
//! let secret = SharedSecret::new(b"my-secret-key-at-least-32-bytes!").unwrap();
//! let claims = RefreshClaims { sub: 1, exp: 2_000 };
//!
//! let token = jwt::sign(&claims, &secret, JwtAlgorithm::HS256).unwrap();
//! let decoded: RefreshClaims =
//!     jwt::verify(&token, &secret, JwtAlgorithm::HS256, 1_000).unwrap();
//! assert_eq!(decoded, claims);
//! ```

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::SharedSecret;
use crate::error::{Result, TokenError};
use crate::token::claims::ExpiringClaims;

/// JWT 签名算法（仅对称 HMAC）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JwtAlgorithm {
    /// HMAC-SHA256（默认）
    #[default]
    HS256,
    /// HMAC-SHA384
    HS384,
    /// HMAC-SHA512
    HS512,
}

impl From<JwtAlgorithm> for Algorithm {
    fn from(alg: JwtAlgorithm) -> Self {
        match alg {
            JwtAlgorithm::HS256 => Algorithm::HS256,
            JwtAlgorithm::HS384 => Algorithm::HS384,
            JwtAlgorithm::HS512 => Algorithm::HS512,
        }
    }
}

/// 用共享密钥签名 claims
pub fn sign<T: Serialize>(
    claims: &T,
    secret: &SharedSecret,
    algorithm: JwtAlgorithm,
) -> Result<String> {
    let header = Header::new(algorithm.into());
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key).map_err(|e| {
        tracing::error!(error = %e, "failed to encode JWT");
        TokenError::SigningFailed(e.to_string()).into()
    })
}

/// 验证签名、解码 claims，并以 `now` 为当前时间检查过期
///
/// 签名不匹配、结构损坏、算法不符或 claims 形状不对，一律返回
/// [`TokenError::InvalidSignature`]；签名有效但 `now >= exp` 返回
/// [`TokenError::Expired`]。
pub fn verify<T>(
    token: &str,
    secret: &SharedSecret,
    algorithm: JwtAlgorithm,
    now: i64,
) -> Result<T>
where
    T: DeserializeOwned + ExpiringClaims,
{
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = build_validation(algorithm);

    let token_data: TokenData<T> = decode(token, &key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::InvalidSignature => tracing::debug!("JWT signature mismatch"),
            kind => tracing::debug!(?kind, "JWT could not be decoded"),
        }
        TokenError::InvalidSignature
    })?;

    let claims = token_data.claims;
    if claims.is_expired_at(now) {
        return Err(TokenError::Expired.into());
    }

    Ok(claims)
}

fn build_validation(algorithm: JwtAlgorithm) -> Validation {
    let mut validation = Validation::new(algorithm.into());
    validation.algorithms = vec![algorithm.into()];
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    // 必需字段由 claims 类型自身的反序列化保证
    validation.required_spec_claims.clear();
    validation
}
