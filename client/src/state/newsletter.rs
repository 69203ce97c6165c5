//! Newsletter signup: a single email field.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use super::form_status::FormStatus;
use crate::util::validation::is_valid_email;

pub const NEWSLETTER_REJECTED: FormStatus =
    FormStatus::error("Enter a valid email to subscribe.", "#ffd1d1");
pub const NEWSLETTER_ACCEPTED: FormStatus =
    FormStatus::success("Subscribed! Welcome to the club.", "#dfe8e2");

/// Validate one signup attempt.
///
/// On rejection the field keeps its value and gets focus back; on acceptance
/// the field is cleared.
#[must_use]
pub fn submit_newsletter(email: &str) -> FormStatus {
    if is_valid_email(email) { NEWSLETTER_ACCEPTED } else { NEWSLETTER_REJECTED }
}

/// Field value after a submit attempt: kept on rejection, cleared on acceptance.
#[must_use]
pub fn next_value(current: &str, status: FormStatus) -> String {
    if status.is_error() { current.to_owned() } else { String::new() }
}
