//! Single-selection tab strip with arrow-key wraparound.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// Active index into an ordered list of trigger/panel pairs.
///
/// The index is always `< count` when `count > 0`; an empty strip keeps the
/// index at zero and ignores every request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsState {
    count: usize,
    active: usize,
}

impl TabsState {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.count > 0 && self.active == index
    }

    /// `"true"`/`"false"` for the trigger's `aria-selected` attribute.
    #[must_use]
    pub fn aria_selected(&self, index: usize) -> &'static str {
        if self.is_active(index) { "true" } else { "false" }
    }

    pub fn select(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.active = index % self.count;
    }

    /// Apply a keydown received on the trigger at `from`.
    ///
    /// Returns `true` when the key moved the selection.
    pub fn handle_key(&mut self, from: usize, key: &str) -> bool {
        if self.count == 0 {
            return false;
        }
        let from = from % self.count;
        match key {
            "ArrowRight" => self.select(from + 1),
            "ArrowLeft" => self.select(from + self.count - 1),
            _ => return false,
        }
        true
    }
}
