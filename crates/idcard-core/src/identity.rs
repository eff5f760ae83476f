//! # Identity Card Numbers
//!
//! Resident identity card numbers come in two forms:
//!
//! | Form | Length | Layout |
//! |------|--------|--------|
//! | Legacy | 15 | 6-digit division code + `YYMMDD` birth date + 3-digit sequence |
//! | Current | 18 | 6-digit division code + `YYYYMMDD` birth date + 3-digit sequence + check character |
//!
//! ## Validation
//!
//! Validation runs in stages and stops at the first failure:
//!
//! 1. Shape: 15 ASCII digits, or 17 ASCII digits followed by a digit or `X`.
//! 2. Region: the first two characters are an allow-listed [`Region`] code.
//! 3. Birth date: the embedded date is a real calendar day.
//! 4. Check character (18-character form only): see [`crate::checksum`].
//!
//! [`validate`] answers yes or no. [`IdCardNumber::new`] runs the same
//! stages and reports which one failed.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::birth_date::{parse_legacy_yymmdd, parse_yyyymmdd};
use crate::checksum::{check_character, CHECKED_DIGITS};
use crate::error::ValidationError;
use crate::region::Region;
use crate::text::char_span;

/// `\d` in the `regex` crate is Unicode-aware, so digits are spelled `[0-9]`.
static SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{15}$|^[0-9]{17}([0-9]|X)$").expect("shape pattern is a valid regex")
});

/// Return `true` iff `candidate` is a valid identity card number in either
/// form.
///
/// Never panics. Every kind of failure, from the wrong length to a bad
/// check character, yields `false`.
///
/// ```
/// assert!(idcard_core::validate("110101199003071233"));
/// assert!(!idcard_core::validate("11010119900307123X"));
/// assert!(!idcard_core::validate(""));
/// ```
pub fn validate(candidate: &str) -> bool {
    IdCardNumber::new(candidate).is_ok()
}

/// Which of the two layouts a number uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdCardFormat {
    /// 15 digits, two-digit birth year, no check character.
    #[serde(rename = "legacy_15")]
    Legacy15,
    /// 18 characters, four-digit birth year, trailing check character.
    #[serde(rename = "current_18")]
    Current18,
}

impl IdCardFormat {
    /// Character length of numbers in this form.
    pub fn length(&self) -> usize {
        match self {
            Self::Legacy15 => 15,
            Self::Current18 => 18,
        }
    }

    /// Character range `(from, to)`, inclusive, of the birth date segment.
    fn birth_date_span(&self) -> (usize, usize) {
        match self {
            Self::Legacy15 => (6, 11),
            Self::Current18 => (6, 13),
        }
    }

    /// Character range `(from, to)`, inclusive, of the sequence code.
    fn sequence_span(&self) -> (usize, usize) {
        match self {
            Self::Legacy15 => (12, 14),
            Self::Current18 => (14, 16),
        }
    }
}

impl std::fmt::Display for IdCardFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy15 => f.write_str("legacy_15"),
            Self::Current18 => f.write_str("current_18"),
        }
    }
}

/// A resident identity card number that passed every validation stage.
///
/// Stored exactly as given. The decoded region and birth date are kept
/// alongside so accessors never re-parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdCardNumber {
    raw: String,
    format: IdCardFormat,
    region: Region,
    birth_date: NaiveDate,
}

impl IdCardNumber {
    /// Validate `value` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first stage that rejects the
    /// input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();

        if !SHAPE.is_match(&raw) {
            return Err(ValidationError::Malformed(raw));
        }
        // Past the shape check every character is ASCII, so byte and
        // character offsets agree.
        let format = if raw.len() == 15 {
            IdCardFormat::Legacy15
        } else {
            IdCardFormat::Current18
        };

        let region = Region::from_code(&raw[..2])
            .ok_or_else(|| ValidationError::UnknownRegion(raw[..2].to_string()))?;

        let (from, to) = format.birth_date_span();
        let segment =
            char_span(&raw, from, to).ok_or_else(|| ValidationError::Malformed(raw.clone()))?;
        let birth_date = match format {
            IdCardFormat::Legacy15 => parse_legacy_yymmdd(segment)?,
            IdCardFormat::Current18 => parse_yyyymmdd(segment)?,
        };

        if format == IdCardFormat::Current18 {
            let expected = check_character(&raw[..CHECKED_DIGITS])
                .ok_or_else(|| ValidationError::Malformed(raw.clone()))?;
            let found = raw.chars().last().unwrap_or_default();
            if found != expected {
                return Err(ValidationError::ChecksumMismatch { expected, found });
            }
        }

        Ok(Self {
            raw,
            format,
            region,
            birth_date,
        })
    }

    /// The number as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Legacy 15-digit or current 18-character layout.
    pub fn format(&self) -> IdCardFormat {
        self.format
    }

    /// Issuing province-level division.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Holder's birth date. Legacy numbers are read as 19YY.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// The three-digit sequence code after the birth date.
    pub fn sequence_code(&self) -> &str {
        let (from, to) = self.format.sequence_span();
        &self.raw[from..=to]
    }

    /// Trailing check character. `None` for the legacy form.
    pub fn check_character(&self) -> Option<char> {
        match self.format {
            IdCardFormat::Legacy15 => None,
            IdCardFormat::Current18 => self.raw.chars().last(),
        }
    }
}

impl std::fmt::Display for IdCardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for IdCardNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for IdCardNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

/// Deserializes as a plain `String` and routes through [`IdCardNumber::new`],
/// so invalid numbers are rejected instead of silently accepted.
impl<'de> Deserialize<'de> for IdCardNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- validate --

    #[test]
    fn valid_current_form() {
        assert!(validate("110101199003071233"));
        assert!(validate("440303199912319996"));
    }

    #[test]
    fn valid_current_form_with_x() {
        // 11010519491231002 sums to 167, 167 % 11 = 2 -> 'X'
        assert!(validate("11010519491231002X"));
    }

    #[test]
    fn wrong_check_character_rejected() {
        assert!(!validate("11010119900307123X"));
        assert!(!validate("110101199003071234"));
    }

    #[test]
    fn lowercase_x_rejected() {
        assert!(!validate("11010519491231002x"));
    }

    #[test]
    fn unknown_region_rejected() {
        assert!(!validate("990101123456789"));
        assert!(!validate("000101880101001"));
    }

    #[test]
    fn legacy_form_has_no_checksum() {
        assert!(validate("110101880101001"));
        assert!(validate("110101880101999"));
        assert!(validate("110000800101001"));
    }

    #[test]
    fn legacy_form_bad_date_rejected() {
        assert!(!validate("110101800001001"));
        assert!(!validate("110101881301001"));
        assert!(!validate("110101000229001"));
    }

    #[test]
    fn malformed_shapes_rejected() {
        assert!(!validate(""));
        assert!(!validate("11010119900307123"));
        assert!(!validate("1101011990030712333"));
        assert!(!validate("11010188010100"));
        assert!(!validate("1101018801010011"));
        assert!(!validate("11010188010100X"));
        assert!(!validate(" 110101199003071233"));
        assert!(!validate("110101199003071233\n"));
        assert!(!validate("X10101199003071233"));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // Arabic-Indic digits are `\d` under Unicode rules.
        assert!(!validate("١١٠١٠١٨٨٠١٠١٠٠١"));
        assert!(!validate("１１０１０１８８０１０１００１"));
    }

    // -- IdCardNumber --

    #[test]
    fn accessors_current_form() {
        let id = IdCardNumber::new("110101199003071233").unwrap();
        assert_eq!(id.as_str(), "110101199003071233");
        assert_eq!(id.format(), IdCardFormat::Current18);
        assert_eq!(id.region(), Region::Beijing);
        assert_eq!(id.birth_date(), ymd(1990, 3, 7));
        assert_eq!(id.sequence_code(), "123");
        assert_eq!(id.check_character(), Some('3'));
    }

    #[test]
    fn accessors_legacy_form() {
        let id = IdCardNumber::new("440303880101042").unwrap();
        assert_eq!(id.format(), IdCardFormat::Legacy15);
        assert_eq!(id.format().length(), 15);
        assert_eq!(id.region(), Region::Guangdong);
        assert_eq!(id.birth_date(), ymd(1988, 1, 1));
        assert_eq!(id.sequence_code(), "042");
        assert_eq!(id.check_character(), None);
    }

    #[test]
    fn errors_name_the_failing_stage() {
        assert_eq!(
            IdCardNumber::new(""),
            Err(ValidationError::Malformed(String::new()))
        );
        assert_eq!(
            IdCardNumber::new("990101123456789"),
            Err(ValidationError::UnknownRegion("99".into()))
        );
        assert_eq!(
            IdCardNumber::new("110101800001001"),
            Err(ValidationError::InvalidBirthDate("19800001".into()))
        );
        assert_eq!(
            IdCardNumber::new("110101199002301233"),
            Err(ValidationError::InvalidBirthDate("19900230".into()))
        );
        assert_eq!(
            IdCardNumber::new("11010119900307123X"),
            Err(ValidationError::ChecksumMismatch {
                expected: '3',
                found: 'X'
            })
        );
    }

    #[test]
    fn region_checked_before_date() {
        // Both the region and the date are bad; region wins.
        assert_eq!(
            IdCardNumber::new("990101800001001"),
            Err(ValidationError::UnknownRegion("99".into()))
        );
    }

    #[test]
    fn date_checked_before_checksum() {
        // Month 13 and a wrong check character.
        assert!(matches!(
            IdCardNumber::new("110101199013071230"),
            Err(ValidationError::InvalidBirthDate(_))
        ));
    }

    #[test]
    fn display_and_from_str() {
        let id: IdCardNumber = "11010519491231002X".parse().unwrap();
        assert_eq!(id.to_string(), "11010519491231002X");
        assert!("11010519491231002x".parse::<IdCardNumber>().is_err());
    }

    #[test]
    fn format_display() {
        assert_eq!(IdCardFormat::Legacy15.to_string(), "legacy_15");
        assert_eq!(IdCardFormat::Current18.to_string(), "current_18");
        assert_eq!(
            serde_json::to_string(&IdCardFormat::Current18).unwrap(),
            "\"current_18\""
        );
    }

    // -- Serde --

    #[test]
    fn serde_roundtrip() {
        let id = IdCardNumber::new("110101199003071233").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"110101199003071233\"");
        let back: IdCardNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn deserialize_rejects_invalid() {
        let err = serde_json::from_str::<IdCardNumber>("\"11010119900307123X\"").unwrap_err();
        assert!(err.to_string().contains("check character mismatch"));
        assert!(serde_json::from_str::<IdCardNumber>("\"\"").is_err());
        assert!(serde_json::from_str::<IdCardNumber>("110101199003071233").is_err());
    }

    #[test]
    fn usable_in_hashset() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(IdCardNumber::new("110101199003071233").unwrap());
        set.insert(IdCardNumber::new("110101199003071233").unwrap());
        set.insert(IdCardNumber::new("110101880101001").unwrap());
        assert_eq!(set.len(), 2);
    }
}
