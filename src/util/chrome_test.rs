use super::*;

// =============================================================
// Navbar
// =============================================================

#[test]
fn navbar_marks_scrolled_past_fifty() {
    let mut nav = NavbarState::new(0.0);
    assert!(!nav.update(50.0, 1200.0).scrolled);
    assert!(nav.update(51.0, 1200.0).scrolled);
}

#[test]
fn navbar_hides_on_scroll_down_and_returns_on_scroll_up() {
    let mut nav = NavbarState::new(0.0);
    assert_eq!(nav.update(300.0, 1200.0).hidden, Some(true));
    assert_eq!(nav.update(302.0, 1200.0).hidden, None);
    assert_eq!(nav.update(250.0, 1200.0).hidden, Some(false));
}

#[test]
fn navbar_always_shown_near_top() {
    let mut nav = NavbarState::new(0.0);
    assert_eq!(nav.update(90.0, 1200.0).hidden, Some(false));
}

#[test]
fn navbar_never_auto_hides_on_mobile() {
    let mut nav = NavbarState::new(0.0);
    assert_eq!(nav.update(600.0, 768.0).hidden, None);
}

#[test]
fn scroll_hint_and_anchor_math() {
    assert!(scroll_hint_visible(100.0));
    assert!(!scroll_hint_visible(101.0));
    assert_eq!(anchor_scroll_top(500.0, 1000.0), 1420.0);
}

#[test]
fn scroll_progress_is_clamped_fraction() {
    assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(5000.0, 2000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
}

#[test]
fn nav_link_activation() {
    assert!(nav_link_is_active("#overview", "overview"));
    assert!(nav_link_is_active("./index.html", "hero"));
    assert!(!nav_link_is_active("./index.html", "overview"));
    assert!(!nav_link_is_active("overview", "overview"));
}

// =============================================================
// Skill meters
// =============================================================

#[test]
fn level_width_formats_percent() {
    assert_eq!(level_width("85"), Some("85%".to_owned()));
    assert_eq!(level_width("72.5%"), Some("72.5%".to_owned()));
    assert_eq!(level_width("140"), Some("100%".to_owned()));
    assert_eq!(level_width("high"), None);
}

#[test]
fn progress_gradient_converts_percent_to_degrees() {
    assert_eq!(
        progress_gradient("50"),
        Some("conic-gradient(var(--primary-color) 180deg, var(--border-color) 180deg)".to_owned())
    );
    assert_eq!(progress_gradient("NaN"), None);
}

#[test]
fn skill_category_matches_exactly_or_all() {
    assert!(skill_in_category("all", None));
    assert!(skill_in_category("all", Some("frontend")));
    assert!(skill_in_category("backend", Some("backend")));
    assert!(!skill_in_category("backend", Some("Backend")));
    assert!(!skill_in_category("backend", Some("backend-ops")));
    assert!(!skill_in_category("backend", None));
}
