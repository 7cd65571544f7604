// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch days
//!
//! This crate converts between calendar dates/times and a single floating
//! point number: the **epoch day**, i.e. signed days elapsed since
//! 1970-01-01T00:00:00 UTC, with the fraction encoding the time of day.
//!
//! # Core types
//!
//! - [`EpochDay`] — immutable epoch-day value with arithmetic and a
//!   human-readable display (`19040.0 <2022-02-17 00:00:00+00:00>`).
//! - [`DayInput`] — the inputs an epoch day can be built from.
//! - [`CivilDateTime`] — proleptic Gregorian reading with unbounded years.
//! - [`EdayError`] — error taxonomy.
//!
//! # Free functions
//!
//! | Function | Direction |
//! |----------|-----------|
//! | [`from_date`] | date string / clock expression / chrono date-time → `f64` |
//! | [`to_date`] | `f64` / numeric string → `chrono::DateTime<Utc>` |
//! | [`to_civil`] | `f64` / numeric string → [`CivilDateTime`] (unbounded years) |
//! | [`now`] | system clock → [`EpochDay`] |
//!
//! # Accepted strings
//!
//! - ISO-8601 dates and date-times: `2022-02-17`, `2022-02-17T12:00:00+00:00`.
//! - Clock durations anchored at the epoch: `12:00`, `25:50`, `0:0:1.5`.
//!
//! A leading `-` negates the whole result, so `-1:15` and `1:15` add up to
//! zero.  The same rule applies to dates (`-1970-01-10` is `-9.0`); the
//! minus sign is **not** a BCE marker.
//!
//! ```rust
//! use eday::{from_date, to_date, EpochDay};
//!
//! assert_eq!(from_date("2022-02-17").unwrap(), 19_040.0);
//! assert_eq!(from_date("-12:00").unwrap(), -0.5);
//!
//! let dt = to_date(18_864.5).unwrap();
//! assert_eq!(dt.to_rfc3339(), "2021-08-25T12:00:00+00:00");
//!
//! let day = EpochDay::new("2022-02-17").unwrap() + 1.0;
//! assert_eq!(day.to_string(), "19041.0 <2022-02-18 00:00:00+00:00>");
//! ```
//!
//! # Display range
//!
//! Values in `[MIN_DISPLAY_DAY, MAX_DISPLAY_DAY]` (0001-01-01 to 9999-12-31)
//! display with their calendar date.  Anything outside echoes the input it
//! was built from; [`EpochDay::to_civil`] and the [`julian`] module still
//! give a calendar reading for any finite value up to ±1.7e38 days.

mod convert;
mod error;
mod input;
mod instant;
pub mod julian;
mod parse;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use convert::{
    in_display_range, CivilDateTime, MAX_DISPLAY_DAY, MIN_DISPLAY_DAY, SECONDS_PER_DAY,
};
pub use error::EdayError;
pub use input::DayInput;
pub use instant::EpochDay;
pub use julian::UNIX_EPOCH_JD;

use chrono::{DateTime, Utc};

/// Convert a date string, clock expression or chrono date-time to epoch days.
///
/// Numeric inputs are returned unchanged.
pub fn from_date(input: impl Into<DayInput>) -> Result<f64, EdayError> {
    input.into().days()
}

/// Convert epoch days to a UTC `chrono::DateTime`.
///
/// Strings are read as a decimal number first (`"18864.5"`) and otherwise
/// parsed like [`from_date`] does.
pub fn to_date(input: impl Into<DayInput>) -> Result<DateTime<Utc>, EdayError> {
    convert::to_date(input.into().day_value()?)
}

/// Convert epoch days to a proleptic Gregorian reading.
///
/// Works far past chrono's range; only NaN/±∞ and magnitudes beyond `i128`
/// whole days fail.
pub fn to_civil(input: impl Into<DayInput>) -> Result<CivilDateTime, EdayError> {
    convert::to_timestamp(input.into().day_value()?)
}

/// The current UTC instant as an [`EpochDay`].
pub fn now() -> EpochDay {
    EpochDay::now()
}
