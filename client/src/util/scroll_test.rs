use super::*;

#[test]
fn in_page_target_strips_hash() {
    assert_eq!(in_page_target("#booking"), Some("booking"));
}

#[test]
fn bare_hash_is_ignored() {
    assert_eq!(in_page_target("#"), None);
}

#[test]
fn external_links_are_ignored() {
    assert_eq!(in_page_target("https://example.com/#top"), None);
    assert_eq!(in_page_target("/rules"), None);
    assert_eq!(in_page_target(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn install_is_callable_off_browser() {
    install_smooth_scroll();
}
