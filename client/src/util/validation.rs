//! Field checks shared by the booking and newsletter forms.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

/// Party size accepted by the booking form.
pub const PLAYERS_RANGE: std::ops::RangeInclusive<u8> = 1..=8;

// Deliberately loose: something, `@`, something, `.`, something, no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Parse the players field as a whole number inside [`PLAYERS_RANGE`].
///
/// Numeric spellings of a whole number such as `4.0` are accepted; fractions
/// are not.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_players(value: &str) -> Option<u8> {
    let n = value.trim().parse::<f64>().ok()?;
    let bounds = f64::from(*PLAYERS_RANGE.start())..=f64::from(*PLAYERS_RANGE.end());
    if !bounds.contains(&n) || n.fract().abs() > 0.0 {
        return None;
    }
    Some(n as u8)
}
