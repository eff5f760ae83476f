//! # idcard-core — Resident Identity Card Number Validation
//!
//! Decides whether a string is a structurally and arithmetically valid
//! resident identity card number, in either the 15-digit legacy form or the
//! 18-character current form.
//!
//! ## Entry Points
//!
//! - [`validate`] — pure predicate, `&str -> bool`. Never panics, never
//!   distinguishes why an input failed.
//! - [`IdCardNumber::new`] — same stages, returns a validated newtype on
//!   success and a [`ValidationError`] naming the failing stage otherwise.
//!
//! ## Crate Policy
//!
//! - No I/O, no shared mutable state. Lookup tables are `const`; the shape
//!   regex is compiled once into an immutable static.
//! - No `unsafe` code.
//! - Validation never panics, whatever the input.

pub mod birth_date;
pub mod checksum;
pub mod error;
pub mod identity;
pub mod region;
pub mod text;

// Re-export primary types for ergonomic imports.
pub use chrono::NaiveDate;
pub use error::ValidationError;
pub use identity::{validate, IdCardFormat, IdCardNumber};
pub use region::{Region, REGION_CODES};
