use super::*;

#[test]
fn horizontal_arrows_wrap_around() {
    assert_eq!(roving_target(RovingAxis::Horizontal, "ArrowLeft", 0, 4), Some(3));
    assert_eq!(roving_target(RovingAxis::Horizontal, "ArrowRight", 3, 4), Some(0));
    assert_eq!(roving_target(RovingAxis::Horizontal, "ArrowRight", 1, 4), Some(2));
}

#[test]
fn horizontal_home_end_and_ignored_keys() {
    assert_eq!(roving_target(RovingAxis::Horizontal, "Home", 2, 4), Some(0));
    assert_eq!(roving_target(RovingAxis::Horizontal, "End", 0, 4), Some(3));
    assert_eq!(roving_target(RovingAxis::Horizontal, "ArrowDown", 0, 4), None);
    assert_eq!(roving_target(RovingAxis::Horizontal, "a", 0, 4), None);
}

#[test]
fn grid_uses_vertical_arrows_but_not_home() {
    assert_eq!(roving_target(RovingAxis::Grid, "ArrowDown", 2, 3), Some(0));
    assert_eq!(roving_target(RovingAxis::Grid, "ArrowUp", 0, 3), Some(2));
    assert_eq!(roving_target(RovingAxis::Grid, "Home", 1, 3), None);
}

#[test]
fn empty_group_has_no_target() {
    assert_eq!(roving_target(RovingAxis::Grid, "ArrowDown", 0, 0), None);
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(roving_target(RovingAxis::Horizontal, "ArrowLeft", 9, 3), Some(1));
}

#[test]
fn shortcuts() {
    assert_eq!(alt_shortcut_target("c"), Some("./contact.html"));
    assert_eq!(alt_shortcut_target("x"), None);
    assert!(is_theme_shortcut(true, true, "D"));
    assert!(!is_theme_shortcut(true, false, "D"));
    assert!(!is_theme_shortcut(false, true, "D"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
}
