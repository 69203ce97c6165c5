//! One-shot reveal-on-scroll marker.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of the element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feed one intersection notification.
    ///
    /// Returns `true` only for the first intersecting notification; the caller
    /// stops watching the element at that point.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if !intersecting || self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    /// Reveal immediately, used when the runtime cannot observe intersections.
    pub fn force_visible(&mut self) {
        self.visible = true;
    }
}
