// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Accepted inputs for epoch-day construction.
//!
//! [`DayInput`] is the closed set of things an [`EpochDay`](crate::EpochDay)
//! can be built from.  Everything else is rejected at compile time; the
//! dynamic `serde_json::Value` bridge (feature `serde`) turns the remaining
//! JSON kinds into [`EdayError::UnsupportedInput`].

use crate::convert::{self, Timestamp};
use crate::error::EdayError;
use crate::parse;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

/// A value that can be turned into epoch days.
#[derive(Debug, Clone, PartialEq)]
pub enum DayInput {
    /// Epoch days, used as-is.
    Number(f64),
    /// Whole epoch days, used as-is.
    Integer(i64),
    /// An ISO-8601 date/date-time or a clock-duration expression.
    Text(String),
    /// A timezone-naive date-time, taken as UTC.
    Naive(NaiveDateTime),
    /// A date-time with a fixed UTC offset.
    Aware(DateTime<FixedOffset>),
}

impl DayInput {
    /// Signed epoch days for this input.
    ///
    /// Numbers pass through unchanged; text goes through the parser.
    pub fn days(&self) -> Result<f64, EdayError> {
        match self {
            DayInput::Number(value) => Ok(*value),
            DayInput::Integer(value) => Ok(*value as f64),
            DayInput::Text(text) => Ok(parse::parse(text)?.to_days()),
            DayInput::Naive(naive) => Ok(convert::to_days(&Timestamp::utc(*naive))),
            DayInput::Aware(aware) => Ok(convert::to_days(&Timestamp::from(*aware))),
        }
    }

    /// Like [`days`](Self::days), but text that reads as a plain decimal
    /// number (`"18864.5"`) is taken as that number first.
    pub fn day_value(&self) -> Result<f64, EdayError> {
        match self {
            DayInput::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) => Ok(value),
                Err(_) => self.days(),
            },
            _ => self.days(),
        }
    }

    /// The input rendered back as text, used as display provenance when no
    /// calendar date can be shown.
    pub(crate) fn echo(&self) -> String {
        match self {
            DayInput::Number(value) => float_repr(*value),
            DayInput::Integer(value) => value.to_string(),
            DayInput::Text(text) => text.clone(),
            DayInput::Naive(naive) => naive.to_string(),
            DayInput::Aware(aware) => aware.to_string(),
        }
    }
}

/// Shortest round-trip rendering of `value`, with a signed exponent of at
/// least two digits (`1e-05`, `1.5e+16`) and a lowercase `nan`.
///
/// Plain notation is used for magnitudes in `[1e-4, 1e16)`, as `{:?}` does.
pub(crate) fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    let debug = format!("{value:?}");
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => debug,
    }
}

// ── From conversions ──────────────────────────────────────────────────────

impl From<f64> for DayInput {
    #[inline]
    fn from(value: f64) -> Self {
        DayInput::Number(value)
    }
}

impl From<f32> for DayInput {
    #[inline]
    fn from(value: f32) -> Self {
        DayInput::Number(value.into())
    }
}

impl From<i64> for DayInput {
    #[inline]
    fn from(value: i64) -> Self {
        DayInput::Integer(value)
    }
}

impl From<i32> for DayInput {
    #[inline]
    fn from(value: i32) -> Self {
        DayInput::Integer(value.into())
    }
}

impl From<u32> for DayInput {
    #[inline]
    fn from(value: u32) -> Self {
        DayInput::Integer(value.into())
    }
}

impl From<&str> for DayInput {
    #[inline]
    fn from(text: &str) -> Self {
        DayInput::Text(text.to_owned())
    }
}

impl From<String> for DayInput {
    #[inline]
    fn from(text: String) -> Self {
        DayInput::Text(text)
    }
}

impl From<&String> for DayInput {
    #[inline]
    fn from(text: &String) -> Self {
        DayInput::Text(text.clone())
    }
}

impl From<NaiveDateTime> for DayInput {
    #[inline]
    fn from(naive: NaiveDateTime) -> Self {
        DayInput::Naive(naive)
    }
}

impl From<NaiveDate> for DayInput {
    /// Midnight UTC of the given date.
    #[inline]
    fn from(date: NaiveDate) -> Self {
        DayInput::Naive(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DayInput {
    #[inline]
    fn from(datetime: DateTime<Tz>) -> Self {
        DayInput::Aware(datetime.fixed_offset())
    }
}

// ── Dynamic values ────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(feature = "serde")]
impl TryFrom<&serde_json::Value> for DayInput {
    type Error = EdayError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(DayInput::Integer)
                .or_else(|| n.as_f64().map(DayInput::Number))
                .ok_or(EdayError::UnsupportedInput { kind: "number" }),
            Value::String(text) => Ok(DayInput::Text(text.clone())),
            other => Err(EdayError::UnsupportedInput {
                kind: json_kind(other),
            }),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for DayInput {
    type Error = EdayError;

    #[inline]
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        DayInput::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(DayInput::from(19_040.5).days(), Ok(19_040.5));
        assert_eq!(DayInput::from(3_i32).days(), Ok(3.0));
        assert_eq!(DayInput::from(-7_i64).days(), Ok(-7.0));
    }

    #[test]
    fn text_goes_through_the_parser() {
        let days = DayInput::from("2022-02-17").days().unwrap();
        assert!((days - 19_040.0).abs() < 1e-9);
        assert!(matches!(
            DayInput::from("soon").days(),
            Err(EdayError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn naive_is_utc() {
        let naive = NaiveDate::from_ymd_opt(2022, 2, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let days = DayInput::from(naive).days().unwrap();
        assert!((days - 19_040.5).abs() < 1e-9);

        let midnight = DayInput::from(NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());
        assert_eq!(midnight.days(), Ok(1.0));
    }

    #[test]
    fn aware_respects_offset() {
        let utc = Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(DayInput::from(utc).days(), Ok(1.0));

        let east = FixedOffset::east_opt(6 * 3_600)
            .unwrap()
            .with_ymd_and_hms(1970, 1, 2, 6, 0, 0)
            .unwrap();
        assert_eq!(DayInput::from(east).days(), Ok(1.0));
    }

    #[test]
    fn day_value_prefers_plain_numbers() {
        assert_eq!(DayInput::from("18864.5").day_value(), Ok(18_864.5));
        assert_eq!(DayInput::from(" -2 ").day_value(), Ok(-2.0));
        // "-12:00" is not a float, so it falls through to the parser
        assert_eq!(DayInput::from("-12:00").day_value(), Ok(-0.5));
    }

    #[test]
    fn echo_renders_the_constructor_argument() {
        assert_eq!(DayInput::from(3_000_000.0).echo(), "3000000.0");
        assert_eq!(DayInput::from(3_000_000_i64).echo(), "3000000");
        assert_eq!(DayInput::from("9999999:00").echo(), "9999999:00");
        assert_eq!(DayInput::from(1e16).echo(), "1e+16");
    }

    #[test]
    fn float_repr_signs_and_pads_the_exponent() {
        assert_eq!(float_repr(19_040.0), "19040.0");
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(1e-5), "1e-05");
        assert_eq!(float_repr(-2.5e-7), "-2.5e-07");
        assert_eq!(float_repr(1e15), "1000000000000000.0");
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(1.5e300), "1.5e+300");
        assert_eq!(float_repr(f64::NEG_INFINITY), "-inf");
        assert_eq!(float_repr(f64::NAN), "nan");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_values() {
        use serde_json::json;

        assert_eq!(DayInput::try_from(json!(2)), Ok(DayInput::Integer(2)));
        assert_eq!(DayInput::try_from(json!(2.5)), Ok(DayInput::Number(2.5)));
        assert_eq!(
            DayInput::try_from(json!("1970-01-01")),
            Ok(DayInput::Text("1970-01-01".to_owned()))
        );
        assert_eq!(
            DayInput::try_from(json!(true)),
            Err(EdayError::UnsupportedInput { kind: "bool" })
        );
        assert_eq!(
            DayInput::try_from(&json!([1, 2])),
            Err(EdayError::UnsupportedInput { kind: "array" })
        );
        assert_eq!(
            DayInput::try_from(json!(null)),
            Err(EdayError::UnsupportedInput { kind: "null" })
        );
    }
}
