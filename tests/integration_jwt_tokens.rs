//! 集成测试：Token 生命周期
//!
//! 测试签发、验证、过期、刷新以及签名篡改等流程。

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::sync::Arc;
use tokenpair::identity::IdentityStore;
use tokenpair::token::jwt::{self, JwtAlgorithm};
use tokenpair::{
    AccessClaims, Credentials, Error, SharedSecret, StaticIdentityStore, TokenConfig, TokenError,
    TokenIssuer, TokenValidator,
};

const SECRET: &[u8] = b"test-secret-key-must-be-32-bytes!";
const NOW: i64 = 1_700_000_000;

fn issuer_with(secret: &[u8]) -> TokenIssuer {
    let config = TokenConfig::new(SharedSecret::new(secret).unwrap());
    TokenIssuer::new(config, Arc::new(StaticIdentityStore::default()))
}

fn login(issuer: &TokenIssuer, now: i64) -> tokenpair::TokenPair {
    let identity = StaticIdentityStore::default()
        .authenticate(&Credentials::new("admin", "password123"))
        .expect("default identity should authenticate");
    issuer.issue_at(&identity, now).expect("issuance should succeed")
}

/// 测试登录后立即验证 Access Token
#[test]
fn test_login_token_validates_immediately() {
    let issuer = issuer_with(SECRET);
    let identity = StaticIdentityStore::default()
        .authenticate(&Credentials::new("admin", "password123"))
        .unwrap();

    // 1. 使用当前时间签发
    let pair = issuer.issue(&identity).expect("issuance should succeed");

    // 2. 独立构造的验证器使用相同密钥即可验证
    let validator = TokenValidator::new(SharedSecret::new(SECRET).unwrap());
    let claims = validator
        .validate(&pair.access_token)
        .expect("fresh access token should validate");

    assert_eq!(claims.username, "admin");
    assert_eq!(claims.secret_msg, "Shhhhh!");
    assert_eq!(claims.sub, 1);
}

/// 测试 Access Token 在 exp 之前有效，之后一律过期
#[test]
fn test_access_token_expiry_boundary() {
    let issuer = issuer_with(SECRET);
    let pair = login(&issuer, NOW);
    let exp = pair.access_token_expires_at;
    let validator = issuer.validator();

    for now in [NOW, NOW + 1, exp - 60, exp - 1] {
        assert!(
            validator.validate_at(&pair.access_token, now).is_ok(),
            "token should be valid at {}",
            now
        );
    }

    for now in [exp, exp + 1, exp + 3600, exp + 365 * 86400] {
        assert_eq!(
            validator.validate_at(&pair.access_token, now),
            Err(Error::Token(TokenError::Expired)),
            "token should be expired at {}",
            now
        );
    }
}

/// 测试 Refresh Token 可反复换取新的 Access Token，直到自身过期
#[test]
fn test_refresh_until_expiry() {
    let issuer = issuer_with(SECRET);
    let pair = login(&issuer, NOW);

    let mut previous_exp = 0;
    for now in [NOW + 1, NOW + 900, NOW + 3600, pair.refresh_token_expires_at - 1] {
        let access = issuer
            .reissue_access_at(&pair.refresh_token, now)
            .expect("refresh should succeed before expiry");
        let claims = issuer.validator().validate_at(&access, now).unwrap();

        assert_eq!(claims.exp, now + 15 * 60);
        assert!(claims.exp > previous_exp);
        previous_exp = claims.exp;
    }

    // 旧的 Access Token 不会因刷新而失效
    assert!(
        issuer
            .validator()
            .validate_at(&pair.access_token, NOW + 1)
            .is_ok()
    );

    let result = issuer.reissue_access_at(&pair.refresh_token, pair.refresh_token_expires_at);
    assert_eq!(result, Err(Error::Token(TokenError::Expired)));
}

/// 测试不同密钥签名的 Token 一律无效
#[test]
fn test_wrong_secret_always_invalid() {
    let issuer = issuer_with(SECRET);
    let other = issuer_with(b"second-secret-key-32-bytes-long!");

    let pair = login(&other, NOW);

    assert_eq!(
        issuer.validator().validate_at(&pair.access_token, NOW),
        Err(Error::Token(TokenError::InvalidSignature))
    );
    assert_eq!(
        issuer.reissue_access_at(&pair.refresh_token, NOW),
        Err(Error::Token(TokenError::InvalidSignature))
    );

    // 即使 claims 与正常签发的一模一样
    let forged = jwt::sign(
        &AccessClaims {
            username: "admin".to_string(),
            secret_msg: "Shhhhh!".to_string(),
            exp: NOW + 900,
            sub: 1,
        },
        &SharedSecret::new(b"attacker-secret").unwrap(),
        JwtAlgorithm::HS256,
    )
    .unwrap();
    assert_eq!(
        issuer.validator().validate_at(&forged, NOW),
        Err(Error::Token(TokenError::InvalidSignature))
    );
}

/// 测试签名后篡改 claims 会使签名失效
#[test]
fn test_tampered_claims_rejected() {
    let issuer = issuer_with(SECRET);
    let pair = login(&issuer, NOW);

    let parts: Vec<&str> = pair.access_token.split('.').collect();
    assert_eq!(parts.len(), 3);

    let payload = URL_SAFE_NO_PAD.decode(parts[1]).unwrap();
    let claims: serde_json::Value = serde_json::from_slice(&payload).unwrap();

    for (field, value) in [
        ("sub", serde_json::json!(2)),
        ("exp", serde_json::json!(NOW + 10 * 365 * 86400)),
        ("username", serde_json::json!("root")),
    ] {
        let mut tampered_claims = claims.clone();
        tampered_claims[field] = value;
        let tampered_payload =
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&tampered_claims).unwrap());
        let tampered = format!("{}.{}.{}", parts[0], tampered_payload, parts[2]);

        assert_eq!(
            issuer.validator().validate_at(&tampered, NOW),
            Err(Error::Token(TokenError::InvalidSignature)),
            "tampering with {} should be detected",
            field
        );
    }

    // 未篡改的原 Token 仍然有效
    assert!(issuer.validator().validate_at(&pair.access_token, NOW).is_ok());
}

/// 测试 Access Token 与 Refresh Token 不能互换使用
#[test]
fn test_token_kinds_not_interchangeable() {
    let issuer = issuer_with(SECRET);
    let pair = login(&issuer, NOW);

    assert_eq!(
        issuer.validator().validate_at(&pair.refresh_token, NOW),
        Err(Error::Token(TokenError::InvalidSignature))
    );
    assert_eq!(
        issuer.reissue_access_at(&pair.access_token, NOW),
        Err(Error::Token(TokenError::InvalidSignature))
    );
}
