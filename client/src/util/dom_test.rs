#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_year_is_unknown_off_browser() {
    assert_eq!(current_year(), None);
}

#[test]
fn set_body_class_is_noop_but_callable() {
    set_body_class("nav-open", true);
    set_body_class("nav-open", false);
}
