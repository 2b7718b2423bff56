//! Profile, linking and follow routes. All require [`AuthUser`].

use axum::Json;
use axum::extract::State;
use payloads::{FollowingResponse, LeetcodeStats, LeetcodeUsernameRequest, ProfileResponse, SuccessResponse};

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::services::{accounts, follows};
use crate::state::AppState;

/// Trimmed username from the request body, or the standard 400.
pub(crate) fn requested_username(req: &LeetcodeUsernameRequest) -> Result<&str, ApiError> {
    let name = req.leetcode_username.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("No username provided"));
    }
    Ok(name)
}

async fn resolve_stats(state: &AppState, username: &str) -> Result<LeetcodeStats, ApiError> {
    state
        .stats
        .lookup(username)
        .await
        .ok_or_else(|| ApiError::bad_request("Invalid LeetCode username"))
}

async fn followed_stats(state: &AppState, auth: &AuthUser) -> Result<Vec<LeetcodeStats>, ApiError> {
    let names = follows::followed_usernames(&state.pool, auth.user.id).await?;
    Ok(state.stats.lookup_many(&names).await)
}

/// `GET /api/profile`
pub async fn profile(State(state): State<AppState>, auth: AuthUser) -> Result<Json<ProfileResponse>, ApiError> {
    let leetcode_username = accounts::linked_username(&state.pool, auth.user.id).await?;
    let leetcode_stats = match leetcode_username.as_deref() {
        Some(name) => state.stats.lookup(name).await,
        None => None,
    };
    let followed_stats = followed_stats(&state, &auth).await?;
    Ok(Json(ProfileResponse { leetcode_username, leetcode_stats, followed_stats }))
}

/// `GET /api/following`
pub async fn following(State(state): State<AppState>, auth: AuthUser) -> Result<Json<FollowingResponse>, ApiError> {
    let followed_stats = followed_stats(&state, &auth).await?;
    Ok(Json(FollowingResponse { followed_stats }))
}

/// `POST /api/update_leetcode`: link the account to a judge profile and
/// return that profile's stats.
pub async fn update_leetcode(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LeetcodeUsernameRequest>,
) -> Result<Json<LeetcodeStats>, ApiError> {
    let name = requested_username(&req)?;
    let stats = resolve_stats(&state, name).await?;
    accounts::set_linked_username(&state.pool, auth.user.id, &stats.username).await?;
    tracing::info!(user = %auth.user.username, leetcode_username = %stats.username, "profile linked");
    Ok(Json(stats))
}

/// `POST /api/follow_leetcode`
pub async fn follow_leetcode(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LeetcodeUsernameRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let name = requested_username(&req)?;
    let stats = resolve_stats(&state, name).await?;
    if !follows::follow(&state.pool, auth.user.id, &stats.username).await? {
        return Err(ApiError::bad_request(format!("Already following {name}")));
    }
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /api/unfollow_leetcode`: idempotent.
pub async fn unfollow_leetcode(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LeetcodeUsernameRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let name = requested_username(&req)?;
    follows::unfollow(&state.pool, auth.user.id, name).await?;
    Ok(Json(SuccessResponse::ok()))
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
