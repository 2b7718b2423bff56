//! Account routes and the bearer-token extractor.

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use payloads::{Credentials, LoginResponse, SuccessResponse};

use crate::error::ApiError;
use crate::services::{accounts, session};
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parse_bearer(&parts.headers).ok_or(ApiError::MissingToken)?;
        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await?
            .ok_or(ApiError::InvalidToken)?;
        Ok(Self { user })
    }
}

/// Extract the token from `Authorization: Bearer <token>`. The scheme is
/// case-insensitive; an empty token counts as missing.
pub(crate) fn parse_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/register`: create an account.
pub async fn register(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let (username, password) = accounts::validate_credentials(&creds)?;
    let user_id = accounts::register(&state.pool, username, password).await?;
    tracing::info!(%user_id, username, "account registered");
    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())))
}

/// `POST /api/login`: verify credentials and issue a session token.
pub async fn login(State(state): State<AppState>, Json(creds): Json<Credentials>) -> Result<Json<LoginResponse>, ApiError> {
    let (username, password) = accounts::validate_credentials(&creds).map_err(|_| ApiError::InvalidCredentials)?;
    let user_id = accounts::authenticate(&state.pool, username, password).await?;
    let access_token = session::create_session(&state.pool, user_id).await?;
    tracing::info!(%user_id, "session created");
    Ok(Json(LoginResponse { access_token }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
