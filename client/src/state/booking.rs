//! Booking request form: field model and submit validation.
//!
//! Submission never leaves the page. A valid request is acknowledged locally
//! and the form is cleared.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use super::form_status::FormStatus;
use crate::util::validation::{is_valid_email, parse_players};

pub const BOOKING_REJECTED: FormStatus =
    FormStatus::error("Please fix the highlighted fields.", "#a23333");
pub const BOOKING_ACCEPTED: FormStatus = FormStatus::success(
    "Thanks! We received your request. We will confirm via email.",
    "var(--green)",
);

/// Minimum trimmed length for the name field, in UTF-16 code units.
pub const MIN_NAME_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Email,
    Date,
    Time,
    Players,
}

impl BookingField {
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Date, Self::Time, Self::Players];

    /// Form control `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time => "time",
            Self::Players => "players",
        }
    }

    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Please enter your full name.",
            Self::Email => "Enter a valid email.",
            Self::Date => "Select a date.",
            Self::Time => "Select a time.",
            Self::Players => "Players must be 1–8.",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Date => 2,
            Self::Time => 3,
            Self::Players => 4,
        }
    }

    fn check(self, value: &str) -> Option<&'static str> {
        let ok = match self {
            Self::Name => value.trim().encode_utf16().count() >= MIN_NAME_LEN,
            Self::Email => is_valid_email(value),
            Self::Date | Self::Time => !value.is_empty(),
            Self::Players => parse_players(value).is_some(),
        };
        (!ok).then(|| self.error_message())
    }
}

/// Raw field values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingInput {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub players: String,
}

impl BookingInput {
    #[must_use]
    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::Players => &self.players,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Date => &mut self.date,
            BookingField::Time => &mut self.time,
            BookingField::Players => &mut self.players,
        };
        *slot = value;
    }

    /// Field values left in the form after a submit attempt.
    #[must_use]
    pub fn after_submit(&self, outcome: &BookingOutcome) -> Self {
        if outcome.accepted() { Self::default() } else { self.clone() }
    }
}

/// Per-field inline error text from one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingErrors([Option<&'static str>; 5]);

impl BookingErrors {
    #[must_use]
    pub fn get(&self, field: BookingField) -> Option<&'static str> {
        self.0[field.index()]
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// `aria-invalid` value for a checked field.
    #[must_use]
    pub fn aria_invalid(&self, field: BookingField) -> &'static str {
        if self.get(field).is_some() { "true" } else { "false" }
    }
}

/// Check every field; passing fields come back explicitly cleared.
#[must_use]
pub fn validate_booking(input: &BookingInput) -> BookingErrors {
    let mut errors = BookingErrors::default();
    for field in BookingField::ALL {
        errors.0[field.index()] = field.check(input.value(field));
    }
    errors
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingOutcome {
    pub errors: BookingErrors,
    pub status: FormStatus,
}

impl BookingOutcome {
    /// Accepted requests clear the form.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.errors.is_empty()
    }
}

#[must_use]
pub fn submit_booking(input: &BookingInput) -> BookingOutcome {
    let errors = validate_booking(input);
    let status = if errors.is_empty() { BOOKING_ACCEPTED } else { BOOKING_REJECTED };
    BookingOutcome { errors, status }
}
