//! Followed-users list updates.

#[cfg(test)]
#[path = "following_test.rs"]
mod following_test;

use payloads::LeetcodeStats;

/// Drop the entry for `username` after a successful unfollow. Returns whether
/// anything was removed.
pub fn remove_by_username(followed: &mut Vec<LeetcodeStats>, username: &str) -> bool {
    let before = followed.len();
    followed.retain(|s| s.username != username);
    followed.len() != before
}
