//! 身份模块
//!
//! 登录凭据、已认证身份，以及可注入的身份查找接口。
//!
//! 默认的 [`StaticIdentityStore`] 只认识一个固定身份（`admin` / `password123`，
//! 主体 ID 为 1）。需要更多用户时实现 [`IdentityStore`] 即可，Token 签发逻辑不变。

use serde::Deserialize;
use std::fmt;
use subtle::ConstantTimeEq;

/// 默认用户名
pub const DEFAULT_USERNAME: &str = "admin";

/// 默认密码
pub const DEFAULT_PASSWORD: &str = "password123";

/// 默认主体 ID
pub const DEFAULT_SUBJECT: i64 = 1;

/// 登录时提交的凭据
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// 已认证的身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// 主体 ID，写入 Token 的 `sub`
    pub subject: i64,
    /// 用户名，写入 Access Token 的 `username`
    pub username: String,
}

/// 身份查找接口
///
/// 签发方只依赖此接口：登录时用 [`authenticate`](IdentityStore::authenticate)
/// 校验凭据，刷新时用 [`find_by_subject`](IdentityStore::find_by_subject)
/// 重新取得身份信息。
pub trait IdentityStore: Send + Sync {
    /// 校验凭据，成功时返回对应身份
    fn authenticate(&self, credentials: &Credentials) -> Option<Identity>;

    /// 按主体 ID 查找身份
    fn find_by_subject(&self, subject: i64) -> Option<Identity>;
}

/// 只包含一个固定身份的存储
#[derive(Clone)]
pub struct StaticIdentityStore {
    identity: Identity,
    password: String,
}

impl StaticIdentityStore {
    /// 创建只包含给定身份的存储
    pub fn new(subject: i64, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identity: Identity {
                subject,
                username: username.into(),
            },
            password: password.into(),
        }
    }
}

impl Default for StaticIdentityStore {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT, DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl fmt::Debug for StaticIdentityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticIdentityStore")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl IdentityStore for StaticIdentityStore {
    fn authenticate(&self, credentials: &Credentials) -> Option<Identity> {
        // 两项都比较完，避免通过耗时区分是用户名还是密码错误
        let username_ok = credentials
            .username
            .as_bytes()
            .ct_eq(self.identity.username.as_bytes());
        let password_ok = credentials
            .password
            .as_bytes()
            .ct_eq(self.password.as_bytes());

        if bool::from(username_ok & password_ok) {
            Some(self.identity.clone())
        } else {
            None
        }
    }

    fn find_by_subject(&self, subject: i64) -> Option<Identity> {
        (subject == self.identity.subject).then(|| self.identity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity_authenticates() {
        let store = StaticIdentityStore::default();
        let identity = store
            .authenticate(&Credentials::new("admin", "password123"))
            .unwrap();

        assert_eq!(identity.subject, 1);
        assert_eq!(identity.username, "admin");
    }

    #[test]
    fn test_wrong_credentials_rejected() {
        let store = StaticIdentityStore::default();

        assert!(store.authenticate(&Credentials::new("x", "y")).is_none());
        assert!(
            store
                .authenticate(&Credentials::new("admin", "password12"))
                .is_none()
        );
        assert!(
            store
                .authenticate(&Credentials::new("Admin", "password123"))
                .is_none()
        );
        assert!(store.authenticate(&Credentials::new("", "")).is_none());
    }

    #[test]
    fn test_find_by_subject() {
        let store = StaticIdentityStore::new(7, "alice", "hunter2");

        assert_eq!(store.find_by_subject(7).unwrap().username, "alice");
        assert!(store.find_by_subject(1).is_none());
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("admin", "password123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("password123"));

        let store = StaticIdentityStore::default();
        assert!(!format!("{:?}", store).contains("password123"));
    }

    #[test]
    fn test_credentials_deserialize() {
        let creds: Credentials =
            serde_json::from_str(r#"{"username":"admin","password":"password123"}"#).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "password123");
    }
}
