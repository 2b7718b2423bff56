use super::*;

#[test]
fn ranking_label_formats_number() {
    assert_eq!(ranking_label(Some(45_678)), "45678");
}

#[test]
fn ranking_label_missing_is_dash() {
    assert_eq!(ranking_label(None), "—");
}
