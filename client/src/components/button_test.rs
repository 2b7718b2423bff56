use super::*;

#[test]
fn button_class_without_extra_is_base() {
    assert_eq!(button_class("btn", ""), "btn");
    assert_eq!(button_class("btn", "   "), "btn");
}

#[test]
fn button_class_appends_trimmed_extra() {
    assert_eq!(button_class("btn", " btn--danger "), "btn btn--danger");
}
