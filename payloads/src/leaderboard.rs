//! Leaderboard ranking shared by the web client and the CLI.
//!
//! Ranking sorts a copy of the input by `total_solved` descending. The sort is
//! stable, so equal totals keep their input order, and a missing total ranks
//! below every present one.

use std::collections::HashSet;

use crate::LeetcodeStats;

/// One rendered leaderboard line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// 1-based position in render order.
    pub rank: usize,
    pub username: String,
    pub total_solved: Option<u32>,
}

/// Rank stats records by total solved, descending.
#[must_use]
pub fn rank_by_total_solved(users: &[LeetcodeStats]) -> Vec<LeaderboardRow> {
    let mut sorted: Vec<&LeetcodeStats> = users.iter().collect();
    sorted.sort_by(|a, b| b.total_solved.cmp(&a.total_solved));
    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, stats)| LeaderboardRow {
            rank: idx + 1,
            username: stats.username.clone(),
            total_solved: stats.total_solved,
        })
        .collect()
}

/// Own stats (when linked) followed by every followed user's stats, with
/// duplicate usernames dropped after their first occurrence.
#[must_use]
pub fn combine_own_and_followed(own: Option<&LeetcodeStats>, followed: &[LeetcodeStats]) -> Vec<LeetcodeStats> {
    dedupe_by_username(own.into_iter().chain(followed.iter()).cloned())
}

/// Drop records whose username already appeared earlier in the sequence.
pub fn dedupe_by_username(stats: impl IntoIterator<Item = LeetcodeStats>) -> Vec<LeetcodeStats> {
    let mut seen = HashSet::new();
    stats
        .into_iter()
        .filter(|s| seen.insert(s.username.clone()))
        .collect()
}

/// Display text for a total that may be missing.
#[must_use]
pub fn format_total(total: Option<u32>) -> String {
    total.map_or_else(|| "—".to_owned(), |n| n.to_string())
}

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod tests;
