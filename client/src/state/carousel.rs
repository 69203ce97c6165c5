//! Testimonial carousel: cyclic index plus a single auto-advance timer.
//!
//! DESIGN
//! ======
//! The browser timer lives in the component; this state only records which
//! timer is current. Every `start_auto` issues a fresh [`TimerToken`] and
//! retires the previous one, and `tick` ignores tokens that are not current.
//! A stale interval that fires after being replaced therefore cannot advance
//! the slide, so at most one timer is ever live.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Auto-advance period.
pub const AUTO_ADVANCE_MS: u32 = 5_000;

/// Identifies one armed auto-advance timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    armed: Option<TimerToken>,
    issued: u64,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, armed: None, issued: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    /// Move to slide `i`, wrapping in either direction. Returns the new index.
    pub fn show(&mut self, i: isize) -> usize {
        if self.len == 0 {
            return 0;
        }
        let n = isize::try_from(self.len).unwrap_or(isize::MAX);
        self.index = usize::try_from(((i % n) + n) % n).unwrap_or(0);
        self.index
    }

    pub fn step(&mut self, delta: isize) -> usize {
        let current = isize::try_from(self.index).unwrap_or(0);
        self.show(current + delta)
    }

    /// Manual prev/next: move by `delta` and re-arm auto-advance.
    pub fn navigate(&mut self, delta: isize) -> TimerToken {
        self.step(delta);
        self.start_auto()
    }

    /// Arm a new timer, retiring any existing one.
    pub fn start_auto(&mut self) -> TimerToken {
        self.issued += 1;
        let token = TimerToken(self.issued);
        self.armed = Some(token);
        token
    }

    pub fn stop_auto(&mut self) {
        self.armed = None;
    }

    /// Timer callback. Advances one slide only when `token` is the live timer.
    pub fn tick(&mut self, token: TimerToken) -> bool {
        if self.armed != Some(token) {
            return false;
        }
        self.step(1);
        true
    }

    /// CSS transform that brings the current slide into view.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}
