use super::*;

#[test]
fn hidden_until_first_intersection() {
    let mut reveal = RevealState::default();
    assert!(!reveal.is_visible());
    assert!(!reveal.observe(false));
    assert!(!reveal.is_visible());
    assert!(reveal.observe(true));
    assert!(reveal.is_visible());
}

#[test]
fn marker_applies_at_most_once() {
    let mut reveal = RevealState::default();
    let fired = [true, false, true, true].into_iter().filter(|hit| reveal.observe(*hit)).count();
    assert_eq!(fired, 1);
    assert!(reveal.is_visible());
}

#[test]
fn forced_reveal_suppresses_later_notifications() {
    let mut reveal = RevealState::default();
    reveal.force_visible();
    assert!(reveal.is_visible());
    assert!(!reveal.observe(true));
}

#[test]
fn threshold_is_fifteen_percent() {
    assert!((REVEAL_THRESHOLD - 0.15).abs() < f64::EPSILON);
}
