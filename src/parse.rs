// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date and clock-expression parsing.
//!
//! A raw string is classified into one of two grammars, tried in order:
//!
//! | Grammar | Shape | Example |
//! |---------|-------|---------|
//! | ISO-8601 | `YYYY-MM-DD[THH:MM[:SS[.f]]][Z\|±HH:MM]` | `2022-02-17T12:00:00+00:00` |
//! | Clock duration | `H[.f]:M[.f][:S[.f]]`, each part optionally signed | `25:50`, `1:-30` |
//!
//! A single leading `-` is stripped before either grammar runs and negates
//! the final day count, so `-1:15` and `1:15` cancel out, and `-1970-01-10`
//! is `-9.0`: the sign is an arithmetic inverse, never a BCE marker.
//!
//! Clock durations are anchored at 1970-01-01T00:00:00Z, which lets values
//! past 24 hours (`25:50`) flow through the same timestamp conversion as
//! calendar dates.  Durations too long for the calendar keep their plain
//! `seconds / 86 400` day count.

use crate::convert::{self, Timestamp, SECONDS_PER_DAY};
use crate::error::EdayError;
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static ISO_DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2})(?:[.,](\d{1,9}))?)?(Z|[+-]\d{2}(?::?\d{2})?)?)?$",
    )
    .expect("ISO-8601 pattern is valid")
});

static CLOCK_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([-+]?\d+(?:\.\d+)?):([-+]?\d+(?:\.\d+)?)(?::([-+]?\d+(?:\.\d+)?))?$")
        .expect("clock-duration pattern is valid")
});

/// Which grammar accepted the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Grammar {
    Iso,
    Clock,
}

impl Grammar {
    fn label(self) -> &'static str {
        match self {
            Grammar::Iso => "iso",
            Grammar::Clock => "clock",
        }
    }
}

/// Normalised parser output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Parsed {
    /// Day count of the body, before the leading minus is applied.
    pub(crate) days: f64,
    pub(crate) negative: bool,
    pub(crate) grammar: Grammar,
}

impl Parsed {
    /// Signed epoch days, with the leading-minus negation applied.
    pub(crate) fn to_days(&self) -> f64 {
        if self.negative {
            -self.days
        } else {
            self.days
        }
    }
}

/// Classify and normalise `raw`.
pub(crate) fn parse(raw: &str) -> Result<Parsed, EdayError> {
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let (days, grammar) = if let Some(timestamp) = parse_iso(body) {
        (convert::to_days(&timestamp), Grammar::Iso)
    } else if let Some(days) = parse_clock(body)? {
        (days, Grammar::Clock)
    } else {
        return Err(EdayError::invalid_format(body));
    };

    debug!(input = raw, grammar = grammar.label(), negative, "classified date expression");
    Ok(Parsed {
        days,
        negative,
        grammar,
    })
}

/// Strict ISO-8601 date or date-time.  Calendar validity is left to chrono.
fn parse_iso(s: &str) -> Option<Timestamp> {
    let caps = ISO_DATETIME.captures(s)?;
    let field = |i: usize| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let year: i32 = caps[1].parse().ok()?;
    if year == 0 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?;
    let nanos = match caps.get(7) {
        Some(m) => fraction_nanos(m.as_str())?,
        None => 0,
    };
    let local = date.and_hms_nano_opt(field(4)?, field(5)?, field(6)?, nanos)?;

    match caps.get(8) {
        Some(m) => Some(Timestamp::with_offset(local, parse_offset(m.as_str())?)),
        None => Some(Timestamp::utc(local)),
    }
}

/// Right-pad a decimal fraction to nanoseconds: `"5"` → 500 000 000.
fn fraction_nanos(digits: &str) -> Option<u32> {
    let value: u32 = digits.parse().ok()?;
    let scale = 10_u32.checked_pow(9_u32.checked_sub(digits.len() as u32)?)?;
    value.checked_mul(scale)
}

/// `Z`, `±HH`, `±HHMM` or `±HH:MM`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    if s == "Z" {
        return Some(Utc.fix());
    }
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+')?),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = match digits.get(2..) {
        Some("") | None => 0,
        Some(m) => m.parse().ok()?,
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3_600 + minutes * 60))
}

/// `H:M[:S]` with independently signed, optionally fractional parts, as
/// days after the epoch.
///
/// Returns `Ok(None)` when the grammar does not match at all, and
/// [`EdayError::NonFinite`] when a component overflows `f64`.
fn parse_clock(s: &str) -> Result<Option<f64>, EdayError> {
    let Some(caps) = CLOCK_DURATION.captures(s) else {
        return Ok(None);
    };
    let component = |i: usize| -> Result<f64, EdayError> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|_| EdayError::invalid_format(s)),
            None => Ok(0.0),
        }
    };

    let seconds = component(1)? * 3_600.0 + component(2)? * 60.0 + component(3)?;
    if !seconds.is_finite() {
        return Err(EdayError::NonFinite {
            value: seconds / SECONDS_PER_DAY,
        });
    }
    let anchored = convert::seconds_to_micros(seconds).and_then(convert::utc_from_micros);
    match anchored {
        Some(anchored) => Ok(Some(convert::to_days(&Timestamp::utc(anchored.naive_utc())))),
        None => {
            trace!(seconds, "clock duration leaves the calendar, keeping linear day count");
            Ok(Some(seconds / SECONDS_PER_DAY))
        }
    }
}
