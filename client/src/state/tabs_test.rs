use super::*;

#[test]
fn first_tab_is_active_initially() {
    let tabs = TabsState::new(3);
    assert_eq!(tabs.active(), 0);
    assert!(tabs.is_active(0));
    assert_eq!(tabs.aria_selected(0), "true");
    assert_eq!(tabs.aria_selected(1), "false");
}

#[test]
fn exactly_one_tab_is_active_after_select() {
    let mut tabs = TabsState::new(4);
    tabs.select(2);
    let active = (0..tabs.count()).filter(|i| tabs.is_active(*i)).count();
    assert_eq!(active, 1);
    assert!(tabs.is_active(2));
}

#[test]
fn arrow_right_wraps_past_last_tab() {
    let mut tabs = TabsState::new(3);
    tabs.select(2);
    assert!(tabs.handle_key(2, "ArrowRight"));
    assert_eq!(tabs.active(), 0);
}

#[test]
fn arrow_left_wraps_before_first_tab() {
    let mut tabs = TabsState::new(3);
    assert!(tabs.handle_key(0, "ArrowLeft"));
    assert_eq!(tabs.active(), 2);
}

#[test]
fn arrow_right_count_times_returns_to_start() {
    let mut tabs = TabsState::new(5);
    tabs.select(3);
    for _ in 0..tabs.count() {
        let from = tabs.active();
        tabs.handle_key(from, "ArrowRight");
    }
    assert_eq!(tabs.active(), 3);
}

#[test]
fn keys_are_relative_to_the_focused_trigger() {
    let mut tabs = TabsState::new(4);
    tabs.select(0);
    tabs.handle_key(2, "ArrowRight");
    assert_eq!(tabs.active(), 3);
}

#[test]
fn other_keys_are_ignored() {
    let mut tabs = TabsState::new(3);
    assert!(!tabs.handle_key(0, "Enter"));
    assert_eq!(tabs.active(), 0);
}

#[test]
fn empty_strip_ignores_everything() {
    let mut tabs = TabsState::new(0);
    tabs.select(4);
    assert!(!tabs.handle_key(0, "ArrowRight"));
    assert_eq!(tabs.active(), 0);
    assert!(!tabs.is_active(0));
}
