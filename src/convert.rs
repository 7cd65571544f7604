// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timestamp ⇄ epoch-day conversion.
//!
//! The mapping is purely linear: `days = posix_seconds / 86 400`.  Leap
//! seconds are ignored, as POSIX does.
//!
//! The forward direction ([`to_days`]) works on the parser's normalised
//! [`Timestamp`].  The inverse direction comes in two flavours:
//!
//! - [`to_date`] returns a `chrono::DateTime<Utc>` and fails with
//!   [`EdayError::OutOfRange`] when chrono cannot hold the instant.
//! - [`to_timestamp`] returns a [`CivilDateTime`].  It asks chrono first
//!   and, when chrono rejects the value, falls back to linear day
//!   arithmetic through [`julian`](crate::julian), which covers every whole
//!   day count in `i128`.

use crate::error::EdayError;
use crate::julian;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};
use qtty::Days;
use std::fmt;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of SI seconds in one epoch day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Epoch day of 0001-01-01T00:00:00Z, the first instant with a display date.
pub const MIN_DISPLAY_DAY: f64 = -719_162.0;

/// Epoch day of 9999-12-31T00:00:00Z, the last day with a display date.
pub const MAX_DISPLAY_DAY: f64 = 2_932_896.0;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// `true` when `day` lies in `[MIN_DISPLAY_DAY, MAX_DISPLAY_DAY]`.
///
/// NaN is never in range.
#[inline]
pub fn in_display_range(day: f64) -> bool {
    (MIN_DISPLAY_DAY..=MAX_DISPLAY_DAY).contains(&day)
}

// ═══════════════════════════════════════════════════════════════════════════
// Timestamp — parser output
// ═══════════════════════════════════════════════════════════════════════════

/// Wall-clock date/time plus the fixed UTC offset it was written in.
///
/// The offset is always resolved; naive inputs are pinned to UTC.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Timestamp {
    pub(crate) local: NaiveDateTime,
    pub(crate) offset: FixedOffset,
}

impl Timestamp {
    /// A naive wall-clock reading interpreted as UTC.
    #[inline]
    pub(crate) fn utc(local: NaiveDateTime) -> Self {
        Self {
            local,
            offset: Utc.fix(),
        }
    }

    #[inline]
    pub(crate) fn with_offset(local: NaiveDateTime, offset: FixedOffset) -> Self {
        Self { local, offset }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::with_offset(datetime.naive_local(), datetime.offset().fix())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Forward: timestamp → days
// ═══════════════════════════════════════════════════════════════════════════

/// Signed days since 1970-01-01T00:00:00Z for `timestamp`.
pub(crate) fn to_days(timestamp: &Timestamp) -> f64 {
    let wall = timestamp.local.and_utc();
    let whole = wall.timestamp() - i64::from(timestamp.offset.local_minus_utc());
    let seconds = whole as f64 + f64::from(wall.timestamp_subsec_nanos()) / 1e9;
    seconds / SECONDS_PER_DAY
}

// ═══════════════════════════════════════════════════════════════════════════
// Inverse: days → calendar
// ═══════════════════════════════════════════════════════════════════════════

/// Build a UTC instant `micros` microseconds after the Unix epoch.
pub(crate) fn utc_from_micros(micros: i64) -> Option<DateTime<Utc>> {
    let secs = micros.div_euclid(MICROS_PER_SECOND);
    let nanos = (micros.rem_euclid(MICROS_PER_SECOND) * 1_000) as u32;
    DateTime::<Utc>::from_timestamp(secs, nanos)
}

/// Round a second count to whole microseconds, or `None` past `i64`.
pub(crate) fn seconds_to_micros(seconds: f64) -> Option<i64> {
    let micros = (seconds * 1e6).round();
    // i64::MAX as f64 rounds up to 2^63, so the bound is exclusive.
    if micros.is_finite() && micros.abs() < i64::MAX as f64 {
        Some(micros as i64)
    } else {
        None
    }
}

/// Ask chrono for the UTC instant `day` epoch days after the epoch.
fn utc_from_epoch_day(day: f64) -> Option<DateTime<Utc>> {
    utc_from_micros(seconds_to_micros(day * SECONDS_PER_DAY)?)
}

#[inline]
fn ensure_finite(day: f64) -> Result<f64, EdayError> {
    if day.is_finite() {
        Ok(day)
    } else {
        Err(EdayError::NonFinite { value: day })
    }
}

/// Convert an epoch day to a `chrono::DateTime<Utc>`.
pub(crate) fn to_date(day: f64) -> Result<DateTime<Utc>, EdayError> {
    utc_from_epoch_day(ensure_finite(day)?).ok_or(EdayError::OutOfRange { value: day })
}

/// Convert an epoch day to a proleptic Gregorian calendar tuple.
///
/// Values chrono rejects are decomposed with plain day arithmetic instead.
/// Only magnitudes past `i128` days (about 1.7e38) fail, with
/// [`EdayError::OutOfRange`].
pub(crate) fn to_timestamp(day: f64) -> Result<CivilDateTime, EdayError> {
    let day = ensure_finite(day)?;
    match utc_from_epoch_day(day) {
        Some(datetime) => Ok(CivilDateTime::from(datetime)),
        None => {
            trace!(day, "calendar primitive rejected value, using linear day arithmetic");
            julian::civil_from_epoch_day(day).ok_or(EdayError::OutOfRange { value: day })
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CivilDateTime
// ═══════════════════════════════════════════════════════════════════════════

/// A UTC calendar reading on the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: year `0` is 1 BCE and negative years
/// are allowed, so every epoch day up to ±1.7e38 has a `CivilDateTime`.
///
/// ```
/// use eday::to_civil;
///
/// let civil = to_civil(18_864.5).unwrap();
/// assert_eq!((civil.year, civil.month, civil.day, civil.hour), (2021, 8, 25, 12));
/// assert_eq!(civil.to_string(), "2021-08-25 12:00:00+00:00");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDateTime {
    pub year: i128,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
}

impl CivilDateTime {
    /// Convert to `chrono::DateTime<Utc>`, if chrono can represent the year.
    pub fn to_chrono(&self) -> Option<DateTime<Utc>> {
        let year = i32::try_from(self.year).ok()?;
        let date = NaiveDate::from_ymd_opt(year, self.month.into(), self.day.into())?;
        let time = date.and_hms_micro_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.microsecond,
        )?;
        Some(time.and_utc())
    }

    /// Signed epoch days for this reading.
    pub fn epoch_day(&self) -> f64 {
        julian::epoch_day_from_civil(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            f64::from(self.second) + f64::from(self.microsecond) / 1e6,
        )
    }

    /// Julian Day for this reading.
    #[inline]
    pub fn julian_day(&self) -> Days {
        julian::epoch_day_to_jd(self.epoch_day())
    }
}

impl From<DateTime<Utc>> for CivilDateTime {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self {
            year: i128::from(datetime.year()),
            month: datetime.month() as u8,
            day: datetime.day() as u8,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second() as u8,
            // nanosecond() exceeds 1e9 only during a leap second
            microsecond: (datetime.nanosecond() / 1_000).min(999_999),
        }
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02} {:02}:{:02}:{:02}",
            self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        f.write_str("+00:00")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
