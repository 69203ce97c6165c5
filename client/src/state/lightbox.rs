//! Image overlay state machine: `Closed` or `Open` with one image.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// Alt text used when the thumbnail carries none.
pub const DEFAULT_ALT: &str = "Image preview";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String, alt: String },
}

impl LightboxState {
    /// Show `src`, replacing whatever image is currently open.
    pub fn open(&mut self, src: impl Into<String>, alt: &str) {
        let alt = if alt.trim().is_empty() { DEFAULT_ALT } else { alt };
        *self = Self::Open { src: src.into(), alt: alt.to_owned() };
    }

    /// Returns `true` when the overlay was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Image source to display. `None` clears the `src` attribute.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Open { src, .. } => Some(src),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        match self {
            Self::Open { alt, .. } => Some(alt),
            Self::Closed => None,
        }
    }

    /// Keydown while the overlay listener is attached. Only Escape closes.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Click on the overlay. Only clicks whose target is the backdrop itself close it.
    pub fn handle_click(&mut self, on_backdrop: bool) -> bool {
        on_backdrop && self.close()
    }
}
