//! API error type with consistent JSON responses.
//!
//! Validation failures render as `{"error": ...}` and authentication failures
//! as `{"msg": ...}`, which is the shape every client reads through
//! `payloads::ApiErrorBody`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use payloads::ApiErrorBody;

use crate::services::accounts::AccountError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Missing Authorization Header")]
    MissingToken,

    #[error("Token has expired or is invalid")]
    InvalidToken,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    fn status_and_body(&self) -> (StatusCode, ApiErrorBody) {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, ApiErrorBody::error(message.as_str())),
            Self::InvalidCredentials | Self::MissingToken | Self::InvalidToken => {
                (StatusCode::UNAUTHORIZED, ApiErrorBody::msg(self.to_string()))
            }
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, ApiErrorBody::error("Internal server error"))
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, ApiErrorBody::error("Internal server error"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::MissingCredentials | AccountError::UsernameTaken => Self::BadRequest(e.to_string()),
            AccountError::InvalidCredentials => Self::InvalidCredentials,
            AccountError::Hash(msg) => Self::Internal(msg),
            AccountError::Db(db) => Self::Database(db),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
