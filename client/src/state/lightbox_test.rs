use super::*;

fn opened() -> LightboxState {
    let mut lb = LightboxState::default();
    lb.open("/img/table-1.jpg", "Nine-foot table");
    lb
}

#[test]
fn starts_closed_without_source() {
    let lb = LightboxState::default();
    assert!(!lb.is_open());
    assert_eq!(lb.src(), None);
}

#[test]
fn open_captures_source_and_alt() {
    let lb = opened();
    assert!(lb.is_open());
    assert_eq!(lb.src(), Some("/img/table-1.jpg"));
    assert_eq!(lb.alt(), Some("Nine-foot table"));
}

#[test]
fn blank_alt_falls_back_to_default() {
    let mut lb = LightboxState::default();
    lb.open("/img/bar.jpg", "  ");
    assert_eq!(lb.alt(), Some(DEFAULT_ALT));
}

#[test]
fn escape_closes_and_clears_source() {
    let mut lb = opened();
    assert!(lb.handle_key("Escape"));
    assert!(!lb.is_open());
    assert_eq!(lb.src(), None);
}

#[test]
fn other_keys_keep_overlay_open() {
    let mut lb = opened();
    assert!(!lb.handle_key("Enter"));
    assert!(lb.is_open());
}

#[test]
fn backdrop_click_closes() {
    let mut lb = opened();
    assert!(lb.handle_click(true));
    assert_eq!(lb, LightboxState::Closed);
}

#[test]
fn click_inside_content_keeps_overlay_open() {
    let mut lb = opened();
    assert!(!lb.handle_click(false));
    assert!(lb.is_open());
}

#[test]
fn opening_again_replaces_image() {
    let mut lb = opened();
    lb.open("/img/lounge.jpg", "Lounge");
    assert_eq!(lb.src(), Some("/img/lounge.jpg"));
    assert_eq!(lb.alt(), Some("Lounge"));
}

#[test]
fn close_when_already_closed_reports_false() {
    let mut lb = LightboxState::default();
    assert!(!lb.close());
    assert!(!lb.handle_key("Escape"));
}
