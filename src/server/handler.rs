use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::error::Error;
use crate::identity::Credentials;
use crate::server::ServerState;
use crate::server::cookie::REFRESH_TOKEN_COOKIE;
use crate::server::payload::{
    AccessTokenResponsePayload, ApiError, MISSING_ACCESS_TOKEN, NO_REFRESH_TOKEN,
    SecretRequestPayload, SecretResponsePayload,
};

pub struct AuthHandler;

impl AuthHandler {
    pub async fn index() -> &'static str {
        "Hello"
    }

    pub async fn login(
        State(state): State<Arc<ServerState>>,
        payload: Result<Json<Credentials>, JsonRejection>,
    ) -> Result<(CookieJar, Json<AccessTokenResponsePayload>), ApiError> {
        let Json(credentials) = payload.map_err(|rejection| {
            tracing::warn!(error = %rejection, "unable to decode credentials");
            ApiError::from_login(Error::decode(rejection.body_text()))
        })?;

        let outcome = state
            .service
            .login(&credentials)
            .map_err(ApiError::from_login)?;

        let cookie_jar = CookieJar::new().add(state.refresh_cookie.build(outcome.refresh_token));

        Ok((
            cookie_jar,
            Json(AccessTokenResponsePayload {
                access_token: outcome.access_token,
            }),
        ))
    }

    pub async fn refresh(
        State(state): State<Arc<ServerState>>,
        jar: CookieJar,
    ) -> Result<Json<AccessTokenResponsePayload>, ApiError> {
        let Some(cookie) = jar.get(REFRESH_TOKEN_COOKIE) else {
            tracing::warn!("refresh requested without a refresh token cookie");
            return Err(ApiError::bad_request(NO_REFRESH_TOKEN));
        };

        let access_token = state
            .service
            .refresh(cookie.value())
            .map_err(ApiError::from_refresh)?;

        Ok(Json(AccessTokenResponsePayload { access_token }))
    }

    pub async fn secret(
        State(state): State<Arc<ServerState>>,
        payload: Result<Json<SecretRequestPayload>, JsonRejection>,
    ) -> Result<Json<SecretResponsePayload>, ApiError> {
        let access_token = match payload {
            Ok(Json(body)) if !body.access_token.is_empty() => body.access_token,
            _ => return Err(ApiError::bad_request(MISSING_ACCESS_TOKEN)),
        };

        let secret = state
            .service
            .secret(&access_token)
            .map_err(ApiError::from_secret)?;

        Ok(Json(SecretResponsePayload { secret }))
    }
}
