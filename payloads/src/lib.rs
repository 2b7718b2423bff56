//! Shared REST payloads for the profile-follow API.
//!
//! This crate owns the JSON shapes exchanged by `server`, `client` and `cli`.
//! Field names match the wire exactly (`snake_case`), so every consumer can
//! deserialize responses without per-crate adapters.

pub mod leaderboard;

use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit JSON `null` as the field's default, same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Username/password pair posted to `/login` and `/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
}

/// Successful `/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token; never parsed by clients.
    pub access_token: String,
}

/// Generic `{ "success": bool }` acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of `/update_leetcode`, `/follow_leetcode` and `/unfollow_leetcode`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeetcodeUsernameRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub leetcode_username: String,
}

/// Solved-problem statistics for one linked coding profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeetcodeStats {
    /// Profile username as reported by the coding judge.
    pub username: String,
    /// Total accepted problems. Absent values sort below every number.
    #[serde(default)]
    pub total_solved: Option<u32>,
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
    /// Global contest ranking, if the judge reports one.
    #[serde(default)]
    pub ranking: Option<u64>,
}

/// `GET /profile` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub leetcode_username: Option<String>,
    #[serde(default)]
    pub leetcode_stats: Option<LeetcodeStats>,
    #[serde(default)]
    pub followed_stats: Vec<LeetcodeStats>,
}

/// `GET /following` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowingResponse {
    #[serde(default)]
    pub followed_stats: Vec<LeetcodeStats>,
}

/// Error body returned by the API.
///
/// Validation failures use `error`; authentication failures use `msg`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ApiErrorBody {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), msg: None }
    }

    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self { error: None, msg: Some(message.into()) }
    }

    /// Human-readable message, preferring `error` over `msg`. Blank strings
    /// count as missing.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        [self.error.as_deref(), self.msg.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|m| !m.is_empty())
    }

    /// Parse a raw response body and extract its message, if any.
    #[must_use]
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|parsed| parsed.message().map(str::to_owned))
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
