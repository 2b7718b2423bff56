use super::*;

fn stats(username: &str, total: Option<u32>) -> LeetcodeStats {
    LeetcodeStats {
        username: username.to_owned(),
        total_solved: total,
        easy: 0,
        medium: 0,
        hard: 0,
        ranking: None,
    }
}

fn usernames(rows: &[LeaderboardRow]) -> Vec<&str> {
    rows.iter().map(|r| r.username.as_str()).collect()
}

#[test]
fn rank_orders_by_total_descending() {
    let rows = rank_by_total_solved(&[stats("a", Some(10)), stats("b", Some(300)), stats("c", Some(42))]);
    assert_eq!(usernames(&rows), vec!["b", "c", "a"]);
    for pair in rows.windows(2) {
        assert!(pair[0].total_solved >= pair[1].total_solved);
    }
}

#[test]
fn rank_labels_are_one_through_n() {
    let rows = rank_by_total_solved(&[stats("a", Some(1)), stats("b", Some(2)), stats("c", Some(3)), stats("d", Some(4))]);
    let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn rank_keeps_input_order_for_ties() {
    let rows = rank_by_total_solved(&[
        stats("first", Some(5)),
        stats("top", Some(9)),
        stats("second", Some(5)),
        stats("third", Some(5)),
    ]);
    assert_eq!(usernames(&rows), vec!["top", "first", "second", "third"]);
}

#[test]
fn rank_puts_missing_total_last() {
    let rows = rank_by_total_solved(&[stats("ghost", None), stats("zero", Some(0)), stats("one", Some(1))]);
    assert_eq!(usernames(&rows), vec!["one", "zero", "ghost"]);
    assert_eq!(rows[2].total_solved, None);
}

#[test]
fn rank_does_not_mutate_input() {
    let input = vec![stats("a", Some(1)), stats("b", Some(2))];
    let _ = rank_by_total_solved(&input);
    assert_eq!(input[0].username, "a");
    assert_eq!(input[1].username, "b");
}

#[test]
fn rank_empty_input_yields_no_rows() {
    assert!(rank_by_total_solved(&[]).is_empty());
}

#[test]
fn combine_puts_own_stats_first() {
    let own = stats("me", Some(3));
    let combined = combine_own_and_followed(Some(&own), &[stats("alice", Some(1))]);
    let names: Vec<&str> = combined.iter().map(|s| s.username.as_str()).collect();
    assert_eq!(names, vec!["me", "alice"]);
}

#[test]
fn combine_without_own_stats_is_followed_only() {
    let combined = combine_own_and_followed(None, &[stats("alice", Some(1)), stats("bob", Some(2))]);
    assert_eq!(combined.len(), 2);
}

#[test]
fn combine_drops_duplicate_usernames() {
    let own = stats("alice", Some(7));
    let combined = combine_own_and_followed(Some(&own), &[stats("alice", Some(7)), stats("bob", Some(2))]);
    let names: Vec<&str> = combined.iter().map(|s| s.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[test]
fn format_total_renders_dash_for_missing() {
    assert_eq!(format_total(Some(12)), "12");
    assert_eq!(format_total(None), "—");
}
