//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, auth rejections and validation errors all come back as
//! [`ApiError`]. Pages render [`ApiError::user_message`], which prefers the
//! server's own text and otherwise uses the page's fallback. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{
    ApiErrorBody, Credentials, FollowingResponse, LeetcodeStats, LoginResponse, ProfileResponse, SuccessResponse,
};

/// Base URL used when `API_URL` was not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, extracting the server message from `body`.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: ApiErrorBody::message_from_body(body) }
    }

    /// Text to show inline: the server's message if it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// API base URL, fixed at build time.
pub fn api_base() -> &'static str {
    option_env!("API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    use crate::util::storage::{BrowserTokenStore, TokenStore as _};
    match BrowserTokenStore.load() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = endpoint(api_base(), path);
    let resp = with_auth(gloo_net::http::Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B, authenticated: bool) -> Result<T, ApiError> {
    let url = endpoint(api_base(), path);
    let builder = gloo_net::http::Request::post(&url);
    let builder = if authenticated { with_auth(builder) } else { builder };
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

/// `POST /login`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx response.
pub async fn login(creds: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("login", creds, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = creds;
        Err(ApiError::Unavailable)
    }
}

/// `POST /register`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx response.
pub async fn register(creds: &Credentials) -> Result<SuccessResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("register", creds, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = creds;
        Err(ApiError::Unavailable)
    }
}

/// `GET /profile` with the stored bearer token.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx response.
pub async fn fetch_profile() -> Result<ProfileResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("profile").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /following` with the stored bearer token.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx response.
pub async fn fetch_following() -> Result<FollowingResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("following").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /update_leetcode`; returns the newly linked profile's stats.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx response.
pub async fn update_leetcode(username: &str) -> Result<LeetcodeStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("update_leetcode", &username_body(username), true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(ApiError::Unavailable)
    }
}

/// `POST /follow_leetcode`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx response.
pub async fn follow(username: &str) -> Result<SuccessResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("follow_leetcode", &username_body(username), true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(ApiError::Unavailable)
    }
}

/// `POST /unfollow_leetcode`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx response.
pub async fn unfollow(username: &str) -> Result<SuccessResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("unfollow_leetcode", &username_body(username), true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(ApiError::Unavailable)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn username_body(username: &str) -> super::types::LeetcodeUsernameRequest {
    super::types::LeetcodeUsernameRequest { leetcode_username: username.to_owned() }
}
