//! # Error Types
//!
//! The boolean [`crate::validate`] predicate collapses every failure into
//! `false`. [`crate::IdCardNumber::new`] runs the same stages and reports the
//! first one that rejected the input through [`ValidationError`].

use thiserror::Error;

/// Reason an identity card number was rejected.
///
/// Variants are ordered by the stage that produces them: shape, region,
/// birth date, check character.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not 15 ASCII digits, and not 17 ASCII digits followed by a digit or `X`.
    #[error("malformed identity card number {0:?}: expected 15 digits, or 17 digits followed by a digit or 'X'")]
    Malformed(String),

    /// The two-character prefix is not an allow-listed region code.
    #[error("unknown region code {0:?}")]
    UnknownRegion(String),

    /// The embedded birth date segment is not a real calendar date.
    #[error("invalid birth date {0:?}: not a calendar date in YYYYMMDD form")]
    InvalidBirthDate(String),

    /// The trailing character does not match the computed check character.
    #[error("check character mismatch: expected '{expected}', found '{found}'")]
    ChecksumMismatch {
        /// Character computed from the first 17 digits.
        expected: char,
        /// Character actually present at position 17.
        found: char,
    },
}

impl ValidationError {
    /// Short machine-readable name of the failing stage.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "shape",
            Self::UnknownRegion(_) => "region",
            Self::InvalidBirthDate(_) => "birth_date",
            Self::ChecksumMismatch { .. } => "checksum",
        }
    }
}
