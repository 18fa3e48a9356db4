//! Input - Parsing and validation of user-entered fields
//!
//! TigerStyle: Nothing malformed reaches the storage unit. Every parser here
//! either returns a value the core accepts or an [`InputError`].

use chrono::{Days, NaiveDate, NaiveDateTime};
use traystack_core::{Mode, DATE_FORMAT};

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// How far past the placement date a best-before date may be.
pub const BEST_BEFORE_DAYS_AHEAD_MAX: u64 = 14;

// =============================================================================
// Errors
// =============================================================================

/// Rejected user input. The session prints the message and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input format. Please try again.")]
    InvalidFormat,

    #[error("Name cannot be empty, try again.")]
    EmptyName,

    #[error("Weight must be a positive number of grams.")]
    NonPositiveWeight,

    #[error(
        "Best-before date too far ahead (max {max} days allowed).",
        max = BEST_BEFORE_DAYS_AHEAD_MAX
    )]
    BestBeforeTooFar { best_before: NaiveDate, limit: NaiveDate },
}

// =============================================================================
// Parsers
// =============================================================================

/// Trimmed, non-empty item name.
pub fn parse_name(input: &str) -> Result<String, InputError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_string())
}

/// Weight of a new item in grams. Must be a positive 32-bit signed integer.
pub fn parse_weight(input: &str) -> Result<u32, InputError> {
    let value: i32 = input.trim().parse().map_err(|_| InputError::InvalidFormat)?;
    if value <= 0 {
        return Err(InputError::NonPositiveWeight);
    }
    u32::try_from(value).map_err(|_| InputError::InvalidFormat)
}

/// One end of a weight search range.
///
/// Any 32-bit signed integer is accepted. Negative bounds are raised to zero,
/// which matches the same items since weights are positive.
pub fn parse_weight_bound(input: &str) -> Result<u32, InputError> {
    let value: i32 = input.trim().parse().map_err(|_| InputError::InvalidFormat)?;
    u32::try_from(value.max(0)).map_err(|_| InputError::InvalidFormat)
}

/// Strict ISO calendar date: exactly `DDDD-DD-DD`, then validated as a date.
pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let input = input.trim();
    if !is_iso_date_shape(input) {
        return Err(InputError::InvalidFormat);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| InputError::InvalidFormat)
}

fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Mode sub-menu choice: `1` is the stack, anything else the queue.
pub fn parse_mode_choice(input: &str) -> Mode {
    if input.trim() == "1" {
        Mode::StackFrontBoth
    } else {
        Mode::AddFrontRemoveOpp
    }
}

/// Reject best-before dates more than [`BEST_BEFORE_DAYS_AHEAD_MAX`] days
/// after the placement date. Past dates are allowed.
pub fn check_best_before(best_before: NaiveDate, placed_at: NaiveDateTime) -> Result<(), InputError> {
    let Some(limit) = placed_at
        .date()
        .checked_add_days(Days::new(BEST_BEFORE_DAYS_AHEAD_MAX))
    else {
        return Ok(());
    };

    if best_before > limit {
        tracing::debug!(%best_before, %limit, "best-before rejected");
        return Err(InputError::BestBeforeTooFar { best_before, limit });
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
