use super::*;

#[test]
fn starts_on_first_slide_without_timer() {
    let c = CarouselState::new(3);
    assert_eq!(c.index(), 0);
    assert!(!c.is_running());
    assert_eq!(c.transform(), "translateX(-0%)");
}

#[test]
fn show_wraps_negative_index() {
    let mut c = CarouselState::new(3);
    assert_eq!(c.show(-1), 2);
    assert_eq!(c.show(-4), 2);
}

#[test]
fn show_wraps_past_end() {
    let mut c = CarouselState::new(3);
    assert_eq!(c.show(3), 0);
    assert_eq!(c.show(7), 1);
}

#[test]
fn transform_tracks_index() {
    let mut c = CarouselState::new(4);
    c.show(2);
    assert_eq!(c.transform(), "translateX(-200%)");
}

#[test]
fn navigate_moves_and_rearms_timer() {
    let mut c = CarouselState::new(3);
    let first = c.start_auto();
    let second = c.navigate(-1);
    assert_eq!(c.index(), 2);
    assert_ne!(first, second);
    assert!(c.is_running());
    assert!(!c.tick(first));
    assert!(c.tick(second));
    assert_eq!(c.index(), 0);
}

#[test]
fn repeated_starts_leave_one_live_timer() {
    let mut c = CarouselState::new(5);
    let tokens: Vec<_> = (0..4).map(|_| c.start_auto()).collect();

    // Every interval fires once; only the newest may advance.
    let advanced = tokens.iter().filter(|t| c.tick(**t)).count();
    assert_eq!(advanced, 1);
    assert_eq!(c.index(), 1);
}

#[test]
fn stop_suspends_ticks_until_restarted() {
    let mut c = CarouselState::new(3);
    let token = c.start_auto();
    c.stop_auto();
    assert!(!c.is_running());
    assert!(!c.tick(token));
    assert_eq!(c.index(), 0);

    let resumed = c.start_auto();
    assert!(c.tick(resumed));
    assert_eq!(c.index(), 1);
}

#[test]
fn ticks_cycle_through_all_slides() {
    let mut c = CarouselState::new(3);
    let token = c.start_auto();
    for _ in 0..3 {
        c.tick(token);
    }
    assert_eq!(c.index(), 0);
}

#[test]
fn empty_carousel_stays_at_zero() {
    let mut c = CarouselState::new(0);
    assert!(c.is_empty());
    assert_eq!(c.show(-1), 0);
    let token = c.start_auto();
    c.tick(token);
    assert_eq!(c.index(), 0);
}
