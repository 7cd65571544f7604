// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Extended-range calendar formatter on the Julian-day axis.
//!
//! chrono only covers years ±262 143, while an epoch day may be any finite
//! `f64`.  This module maps Julian Days to proleptic Gregorian calendar
//! tuples (and back) with `i128` era arithmetic.  Any whole day count that
//! fits in `i128` (about ±4.6e35 years) has a reading; larger magnitudes
//! have none.  Years are astronomical: year `0` exists and precedes year `1`.
//!
//! ```rust
//! use eday::julian::{from_gregorian, to_gregorian, UNIX_EPOCH_JD};
//!
//! assert_eq!(from_gregorian(1970, 1, 1, 0, 0, 0.0), UNIX_EPOCH_JD);
//!
//! let civil = to_gregorian(qtty::Days::new(2_451_545.0)).unwrap();
//! assert_eq!((civil.year, civil.month, civil.day, civil.hour), (2000, 1, 1, 12));
//! ```

use crate::convert::{CivilDateTime, SECONDS_PER_DAY};
use qtty::Days;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// Days from 0000-03-01 to 1970-01-01.
const CIVIL_EPOCH_SHIFT: i128 = 719_468;

/// Days in one 400-year Gregorian cycle.
const DAYS_PER_ERA: i128 = 146_097;

const MICROS_PER_DAY: i64 = 86_400_000_000;

/// Julian Day corresponding to an epoch day.
#[inline]
pub fn epoch_day_to_jd(day: f64) -> Days {
    Days::new(day) + UNIX_EPOCH_JD
}

/// Epoch day corresponding to a Julian Day.
#[inline]
pub fn jd_to_epoch_day(jd: Days) -> f64 {
    (jd - UNIX_EPOCH_JD).value()
}

/// Proleptic Gregorian reading (UTC) of a Julian Day.
///
/// `None` for non-finite input and for day counts beyond `i128`.
pub fn to_gregorian(jd: Days) -> Option<CivilDateTime> {
    civil_from_epoch_day(jd_to_epoch_day(jd))
}

/// Julian Day of a proleptic Gregorian reading (UTC).
///
/// Fields are not validated; `month` must lie in `1..=12` for the result
/// to be meaningful.
pub fn from_gregorian(
    year: i128,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    seconds: f64,
) -> Days {
    epoch_day_to_jd(epoch_day_from_civil(year, month, day, hour, minute, seconds))
}

/// Epoch day of a proleptic Gregorian reading; `seconds` may carry a fraction.
pub(crate) fn epoch_day_from_civil(
    year: i128,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    seconds: f64,
) -> f64 {
    let whole_days = days_from_civil(year, month, day);
    let clock = f64::from(hour) * 3_600.0 + f64::from(minute) * 60.0 + seconds;
    whole_days + clock / SECONDS_PER_DAY
}

/// Split an epoch day into a calendar date and a microsecond-rounded
/// time of day.
///
/// `None` when the whole-day count does not fit in `i128`.
pub(crate) fn civil_from_epoch_day(day: f64) -> Option<CivilDateTime> {
    let whole = day.floor();
    // i128::MIN and i128::MAX + 1 are both exact powers of two
    if !(whole >= i128::MIN as f64 && whole < i128::MAX as f64) {
        return None;
    }
    let mut micros = ((day - whole) * MICROS_PER_DAY as f64).round() as i64;
    let mut days = whole as i128;
    if micros >= MICROS_PER_DAY {
        micros -= MICROS_PER_DAY;
        days += 1;
    }

    let (year, month, day_of_month) = civil_from_days(days);
    let second_of_day = micros / 1_000_000;
    Some(CivilDateTime {
        year,
        month,
        day: day_of_month,
        hour: (second_of_day / 3_600) as u8,
        minute: (second_of_day / 60 % 60) as u8,
        second: (second_of_day % 60) as u8,
        microsecond: (micros % 1_000_000) as u32,
    })
}

/// Days since 1970-01-01 → `(year, month, day)`.
///
/// Howard Hinnant's era algorithm with Euclidean division, so negative
/// day counts need no special casing.
fn civil_from_days(days: i128) -> (i128, u8, u8) {
    let z = days + CIVIL_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA); // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11], March-based
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i128::from(month <= 2);
    (year, month as u8, day as u8)
}

/// `(year, month, day)` → days since 1970-01-01.
///
/// The era product is taken in `f64` so that any `i128` year is accepted.
fn days_from_civil(year: i128, month: u8, day: u8) -> f64 {
    let y = year.saturating_sub(i128::from(month <= 2));
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400); // [0, 399]
    let m = i128::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i128::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era as f64 * DAYS_PER_ERA as f64 + (doe - CIVIL_EPOCH_SHIFT) as f64
}
