//! # Birth Date Segment
//!
//! Both forms embed the holder's birth date after the six-digit division
//! code. The 15-character form stores `YYMMDD` and always means the 1900s;
//! the 18-character form stores `YYYYMMDD`.
//!
//! Parsing is strict: the segment must be exactly eight ASCII digits naming
//! a real calendar day. No bounds are placed on the year.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Century prefix implied by the 15-character form.
pub const LEGACY_CENTURY: &str = "19";

const DATE_FORMAT: &str = "%Y%m%d";

/// Parse an eight-digit `YYYYMMDD` segment.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBirthDate`] if the segment is not eight
/// ASCII digits or does not name a real day (month 00 or 13, day 00 or 32,
/// Feb 30, Feb 29 outside a leap year).
pub fn parse_yyyymmdd(segment: &str) -> Result<NaiveDate, ValidationError> {
    if segment.len() != 8 || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidBirthDate(segment.to_string()));
    }
    NaiveDate::parse_from_str(segment, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthDate(segment.to_string()))
}

/// Parse a six-digit `YYMMDD` segment from the 15-character form, reading
/// the year as `19YY`.
///
/// # Errors
///
/// Same as [`parse_yyyymmdd`], reported against the expanded eight-digit
/// string.
pub fn parse_legacy_yymmdd(segment: &str) -> Result<NaiveDate, ValidationError> {
    parse_yyyymmdd(&format!("{LEGACY_CENTURY}{segment}"))
}
