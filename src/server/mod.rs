//! HTTP 服务
//!
//! | 路由 | 说明 |
//! |---|---|
//! | `GET /` | 健康检查 |
//! | `POST /login` | 登录，响应体返回 Access Token，Cookie 写入 Refresh Token |
//! | `GET /refresh` | 凭 Cookie 中的 Refresh Token 换取新的 Access Token |
//! | `POST /secret` | 凭请求体中的 Access Token 读取受保护消息 |

use anyhow::Context;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::{
    DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_REFRESH_TOKEN_TTL_SECS, SharedSecret, TokenConfig,
};
use crate::identity::{DEFAULT_PASSWORD, DEFAULT_SUBJECT, DEFAULT_USERNAME, StaticIdentityStore};
use crate::service::AuthService;

pub mod cookie;
mod handler;
pub mod payload;

use cookie::RefreshCookie;
use handler::AuthHandler;

/// 服务配置（命令行参数或环境变量）
#[derive(Clone, clap::Args)]
pub struct Configuration {
    #[clap(long = "listen", env = "LISTEN_ADDRESS", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    #[clap(long = "jwt-secret", env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    #[clap(
        long = "access-token-ttl-secs",
        env = "ACCESS_TOKEN_TTL_SECS",
        default_value_t = DEFAULT_ACCESS_TOKEN_TTL_SECS
    )]
    pub access_token_ttl_secs: i64,

    #[clap(
        long = "refresh-token-ttl-secs",
        env = "REFRESH_TOKEN_TTL_SECS",
        default_value_t = DEFAULT_REFRESH_TOKEN_TTL_SECS
    )]
    pub refresh_token_ttl_secs: i64,

    #[clap(long = "secure-cookie", env = "SECURE_COOKIE")]
    pub secure_cookie: bool,

    #[clap(long = "admin-username", env = "ADMIN_USERNAME", default_value = DEFAULT_USERNAME)]
    pub admin_username: String,

    #[clap(
        long = "admin-password",
        env = "ADMIN_PASSWORD",
        default_value = DEFAULT_PASSWORD,
        hide_env_values = true
    )]
    pub admin_password: String,
}

impl Configuration {
    /// 由配置构造认证服务
    pub fn auth_service(&self) -> crate::Result<AuthService> {
        let secret = SharedSecret::new(self.jwt_secret.as_bytes())?;
        let config = TokenConfig::new(secret)
            .with_access_token_ttl(chrono::Duration::seconds(self.access_token_ttl_secs))
            .with_refresh_token_ttl(chrono::Duration::seconds(self.refresh_token_ttl_secs));
        let identities = StaticIdentityStore::new(
            DEFAULT_SUBJECT,
            self.admin_username.clone(),
            self.admin_password.clone(),
        );

        AuthService::new(config, Arc::new(identities))
    }
}

pub struct ServerState {
    pub service: AuthService,
    pub refresh_cookie: RefreshCookie,
}

pub struct Server {
    listen: SocketAddr,
    state: Arc<ServerState>,
}

impl Server {
    pub fn new(listen: SocketAddr, service: AuthService, secure_cookie: bool) -> Self {
        let refresh_cookie = RefreshCookie::new(service.issuer().config(), secure_cookie);
        let state = Arc::new(ServerState {
            service,
            refresh_cookie,
        });
        Self { listen, state }
    }

    pub fn from_configuration(configuration: &Configuration) -> anyhow::Result<Self> {
        let service = configuration
            .auth_service()
            .with_context(|| "Invalid token configuration")?;
        Ok(Self::new(
            configuration.listen,
            service,
            configuration.secure_cookie,
        ))
    }

    pub async fn serve(&self) -> anyhow::Result<()> {
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(self.listen)
            .await
            .with_context(|| format!("Failed to bind to TCP address {}", self.listen))?;
        tracing::info!(address = %self.listen, "listening");

        axum::serve(listener, router).await?;
        Ok(())
    }

    pub fn router(&self) -> axum::Router {
        axum::Router::new()
            .route("/", get(AuthHandler::index))
            .route("/login", post(AuthHandler::login))
            .route("/refresh", get(AuthHandler::refresh))
            .route("/secret", post(AuthHandler::secret))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
    }
}
