//! Non-exclusive accordion: every panel expands and collapses on its own.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Vec<bool>,
}

impl AccordionState {
    /// All panels start collapsed.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { expanded: vec![false; count] }
    }

    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn aria_expanded(&self, index: usize) -> &'static str {
        if self.is_expanded(index) { "true" } else { "false" }
    }

    /// Flip one panel and return its new state. Unknown indices stay collapsed.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(slot) = self.expanded.get_mut(index) else {
            return false;
        };
        *slot = !*slot;
        *slot
    }
}
