use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::{Error, TokenError};

pub const NO_REFRESH_TOKEN: &str = "No refresh token found";
pub const REFRESH_TOKEN_EXPIRED: &str = "Token has expired, please log in";
pub const UNKNOWN_SUBJECT: &str = "Unidentified sub";
pub const MISSING_ACCESS_TOKEN: &str = "Unable to find access token in the body";
pub const UNPARSABLE_ACCESS_TOKEN: &str = "Access token could not be parsed properly";
pub const ACCESS_TOKEN_EXPIRED: &str = "Access token is expired, please get a new one from /refresh";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const MALFORMED_CREDENTIALS: &str = "Unable to decode credentials";
pub const ISSUE_FAILED: &str = "Unable to issue tokens";

#[derive(Debug, Deserialize)]
pub struct SecretRequestPayload {
    #[serde(rename = "access_token", default)]
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenResponsePayload {
    #[serde(rename = "access_token")]
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SecretResponsePayload {
    #[serde(rename = "secret")]
    pub secret: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponsePayload {
    #[serde(rename = "error")]
    pub error: String,
}

/// 以 `{"error": ...}` 形式返回的失败响应
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// `POST /login` 的错误映射
    pub fn from_login(error: Error) -> Self {
        match error {
            Error::InvalidCredentials => Self::new(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS),
            Error::Decode(_) => Self::bad_request(MALFORMED_CREDENTIALS),
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, ISSUE_FAILED),
        }
    }

    /// `GET /refresh` 的错误映射
    pub fn from_refresh(error: Error) -> Self {
        match error {
            Error::Token(TokenError::Expired) => {
                Self::new(StatusCode::NOT_FOUND, REFRESH_TOKEN_EXPIRED)
            }
            Error::Token(TokenError::UnknownSubject(_)) => {
                Self::new(StatusCode::NOT_FOUND, UNKNOWN_SUBJECT)
            }
            Error::Token(TokenError::SigningFailed(_)) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, ISSUE_FAILED)
            }
            Error::Token(e) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            e => Self::new(StatusCode::NOT_FOUND, e.to_string()),
        }
    }

    /// `POST /secret` 的错误映射
    pub fn from_secret(error: Error) -> Self {
        match error {
            Error::Token(TokenError::Expired) => Self::bad_request(ACCESS_TOKEN_EXPIRED),
            _ => Self::bad_request(UNPARSABLE_ACCESS_TOKEN),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponsePayload {
                error: self.message,
            }),
        )
            .into_response()
    }
}
