//! LeetCode GraphQL stats source.
//!
//! DESIGN
//! ======
//! Handlers and the cache depend on the [`StatsSource`] trait rather than the
//! concrete HTTP client so tests can substitute canned stats. `Ok(None)` means
//! the judge does not know the username; `Err` means the lookup itself failed.

use std::time::Duration;

use payloads::LeetcodeStats;
use serde::Deserialize;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) const USER_PROFILE_QUERY: &str = r"
query getUserProfile($username: String!) {
    matchedUser(username: $username) {
        username
        submitStats: submitStatsGlobal {
            acSubmissionNum {
                difficulty
                count
                submissions
            }
        }
        profile {
            ranking
        }
    }
}
";

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("stats request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("stats endpoint returned {0}")]
    Status(u16),
    #[error("unexpected stats payload: {0}")]
    Decode(String),
}

/// Provider-neutral async lookup of coding-profile stats. Enables mocking in tests.
#[async_trait::async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch current stats for `username`.
    ///
    /// # Errors
    ///
    /// Returns a [`StatsError`] if the upstream request or decoding fails.
    async fn fetch_stats(&self, username: &str) -> Result<Option<LeetcodeStats>, StatsError>;
}

/// HTTP client for the public LeetCode GraphQL endpoint.
pub struct LeetcodeClient {
    http: reqwest::Client,
    graphql_url: String,
}

impl LeetcodeClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(graphql_url: &str) -> Result<Self, StatsError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent("profile-follow")
            .build()?;
        Ok(Self { http, graphql_url: graphql_url.to_owned() })
    }
}

#[async_trait::async_trait]
impl StatsSource for LeetcodeClient {
    async fn fetch_stats(&self, username: &str) -> Result<Option<LeetcodeStats>, StatsError> {
        let started = std::time::Instant::now();
        let resp = self
            .http
            .post(&self.graphql_url)
            .header("Referer", "https://leetcode.com")
            .json(&graphql_request_body(username))
            .send()
            .await?;
        let status = resp.status();
        tracing::info!(
            username,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "leetcode stats request"
        );
        if !status.is_success() {
            return Err(StatsError::Status(status.as_u16()));
        }
        let body = resp.text().await?;
        parse_graphql_stats(&body)
    }
}

pub(crate) fn graphql_request_body(username: &str) -> serde_json::Value {
    serde_json::json!({
        "query": USER_PROFILE_QUERY,
        "variables": { "username": username },
    })
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlData {
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    username: String,
    submit_stats: SubmitStats,
    profile: Option<ProfileBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Debug, Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: u32,
}

#[derive(Debug, Deserialize)]
struct ProfileBlock {
    ranking: Option<u64>,
}

/// Decode a GraphQL response body into stats. A missing `matchedUser`
/// yields `Ok(None)`.
pub(crate) fn parse_graphql_stats(body: &str) -> Result<Option<LeetcodeStats>, StatsError> {
    let parsed: GraphqlResponse = serde_json::from_str(body).map_err(|e| StatsError::Decode(e.to_string()))?;
    Ok(parsed
        .data
        .and_then(|d| d.matched_user)
        .map(matched_user_to_stats))
}

fn matched_user_to_stats(user: MatchedUser) -> LeetcodeStats {
    let counts = &user.submit_stats.ac_submission_num;
    let easy = count_for(counts, "Easy").unwrap_or(0);
    let medium = count_for(counts, "Medium").unwrap_or(0);
    let hard = count_for(counts, "Hard").unwrap_or(0);
    let total = count_for(counts, "All").unwrap_or(easy + medium + hard);

    LeetcodeStats {
        username: user.username,
        total_solved: Some(total),
        easy,
        medium,
        hard,
        ranking: user.profile.and_then(|p| p.ranking),
    }
}

fn count_for(counts: &[DifficultyCount], difficulty: &str) -> Option<u32> {
    counts
        .iter()
        .find(|c| c.difficulty.eq_ignore_ascii_case(difficulty))
        .map(|c| c.count)
}

#[cfg(test)]
#[path = "leetcode_test.rs"]
mod tests;
