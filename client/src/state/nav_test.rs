use super::*;

#[test]
fn nav_starts_closed() {
    let nav = NavState::default();
    assert!(!nav.open);
    assert_eq!(nav.aria_expanded(), "false");
}

#[test]
fn toggle_flips_and_reports_new_state() {
    let mut nav = NavState::default();
    assert!(nav.toggle());
    assert_eq!(nav.aria_expanded(), "true");
    assert!(!nav.toggle());
    assert_eq!(nav.aria_expanded(), "false");
}

#[test]
fn close_for_link_only_reports_when_menu_was_open() {
    let mut nav = NavState::default();
    assert!(!nav.close_for_link());

    nav.toggle();
    assert!(nav.close_for_link());
    assert!(!nav.open);
}
