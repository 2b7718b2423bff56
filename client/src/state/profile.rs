//! Profile page data and its local updates.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use payloads::leaderboard::combine_own_and_followed;
use payloads::{LeetcodeStats, ProfileResponse};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileData {
    pub leetcode_username: Option<String>,
    pub own_stats: Option<LeetcodeStats>,
    pub followed: Vec<LeetcodeStats>,
}

/// What the own-stats slot renders.
#[derive(Clone, Debug, PartialEq)]
pub enum OwnCard<'a> {
    Stats(&'a LeetcodeStats),
    /// Linked, but the judge returned nothing for this name.
    Unavailable(&'a str),
    NotLinked,
}

impl From<ProfileResponse> for ProfileData {
    fn from(resp: ProfileResponse) -> Self {
        Self {
            leetcode_username: resp.leetcode_username,
            own_stats: resp.leetcode_stats,
            followed: resp.followed_stats,
        }
    }
}

impl ProfileData {
    /// Apply a successful relink. Only the own card changes.
    pub fn apply_linked_stats(&mut self, stats: LeetcodeStats) {
        self.leetcode_username = Some(stats.username.clone());
        self.own_stats = Some(stats);
    }

    pub fn own_card(&self) -> OwnCard<'_> {
        match (&self.own_stats, self.leetcode_username.as_deref()) {
            (Some(stats), _) => OwnCard::Stats(stats),
            (None, Some(name)) if !name.is_empty() => OwnCard::Unavailable(name),
            _ => OwnCard::NotLinked,
        }
    }

    pub fn leaderboard_users(&self) -> Vec<LeetcodeStats> {
        combine_own_and_followed(self.own_stats.as_ref(), &self.followed)
    }
}
