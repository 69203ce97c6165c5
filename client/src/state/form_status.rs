//! Summary line shown under a form after a submit attempt.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Error,
    Success,
}

/// Message plus the inline color the status element is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub message: &'static str,
    pub tone: StatusTone,
    pub color: &'static str,
}

impl FormStatus {
    #[must_use]
    pub const fn error(message: &'static str, color: &'static str) -> Self {
        Self { message, tone: StatusTone::Error, color }
    }

    #[must_use]
    pub const fn success(message: &'static str, color: &'static str) -> Self {
        Self { message, tone: StatusTone::Success, color }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.tone == StatusTone::Error
    }

    /// Inline `style` value for the status element.
    #[must_use]
    pub fn style(&self) -> String {
        format!("color: {}", self.color)
    }
}
