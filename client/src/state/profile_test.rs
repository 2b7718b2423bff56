use super::*;

fn stats(name: &str, total: Option<u32>) -> LeetcodeStats {
    LeetcodeStats {
        username: name.to_owned(),
        total_solved: total,
        easy: 1,
        medium: 2,
        hard: 3,
        ranking: Some(100),
    }
}

fn sample() -> ProfileData {
    ProfileData::from(ProfileResponse {
        leetcode_username: Some("me".to_owned()),
        leetcode_stats: Some(stats("me", Some(50))),
        followed_stats: vec![stats("alice", Some(80)), stats("bob", Some(20))],
    })
}

#[test]
fn relink_replaces_only_own_card() {
    let mut data = sample();
    let followed_before = data.followed.clone();
    data.apply_linked_stats(stats("NewMe", Some(99)));
    assert_eq!(data.leetcode_username.as_deref(), Some("NewMe"));
    assert_eq!(data.own_stats.as_ref().and_then(|s| s.total_solved), Some(99));
    assert_eq!(data.followed, followed_before);
}

#[test]
fn own_card_variants() {
    let data = sample();
    assert!(matches!(data.own_card(), OwnCard::Stats(s) if s.username == "me"));

    let unlinked = ProfileData::default();
    assert_eq!(unlinked.own_card(), OwnCard::NotLinked);

    let missing = ProfileData { leetcode_username: Some("ghost".to_owned()), ..ProfileData::default() };
    assert_eq!(missing.own_card(), OwnCard::Unavailable("ghost"));
}

#[test]
fn leaderboard_includes_self_first_then_followed() {
    let names: Vec<String> = sample().leaderboard_users().into_iter().map(|s| s.username).collect();
    assert_eq!(names, vec!["me", "alice", "bob"]);
}

#[test]
fn leaderboard_without_own_stats_is_followed_only() {
    let mut data = sample();
    data.own_stats = None;
    assert_eq!(data.leaderboard_users().len(), 2);
}
