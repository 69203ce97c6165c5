//! Mobile navigation menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed flag for the collapsible header navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    /// Flip the menu and return the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Collapse the menu after an in-page link was followed.
    ///
    /// Returns `true` when the menu was open and is now closed.
    pub fn close_for_link(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
