use super::*;

#[test]
fn panels_start_collapsed() {
    let acc = AccordionState::new(3);
    assert!((0..3).all(|i| !acc.is_expanded(i)));
    assert_eq!(acc.aria_expanded(1), "false");
}

#[test]
fn toggle_opens_then_closes() {
    let mut acc = AccordionState::new(2);
    assert!(acc.toggle(1));
    assert_eq!(acc.aria_expanded(1), "true");
    assert!(!acc.toggle(1));
    assert!(!acc.is_expanded(1));
}

#[test]
fn panels_are_independent() {
    let mut acc = AccordionState::new(3);
    acc.toggle(0);
    acc.toggle(2);
    assert!(acc.is_expanded(0));
    assert!(!acc.is_expanded(1));
    assert!(acc.is_expanded(2));
}

#[test]
fn out_of_range_toggle_is_a_noop() {
    let mut acc = AccordionState::new(1);
    assert!(!acc.toggle(5));
    assert!(!acc.is_expanded(5));
    assert!(!acc.is_expanded(0));
}
