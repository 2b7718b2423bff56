use super::*;

#[test]
fn sidebar_class_tracks_open_state() {
    assert_eq!(sidebar_class(false), "sidebar");
    assert_eq!(sidebar_class(true), "sidebar sidebar--open");
}

#[test]
fn toggle_icon_switches_between_close_and_menu() {
    assert_eq!(toggle_icon_path(true), ICON_OPEN);
    assert_eq!(toggle_icon_path(false), ICON_CLOSED);
    assert_ne!(ICON_OPEN, ICON_CLOSED);
}
