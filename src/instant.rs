// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`EpochDay`] value type.
//!
//! An `EpochDay` stores a single [`Days`] quantity (signed days since
//! 1970-01-01T00:00:00Z) plus the text it displays next to that number.
//! The display text is computed once at construction:
//!
//! - inside `[MIN_DISPLAY_DAY, MAX_DISPLAY_DAY]` it is the UTC calendar
//!   reading, e.g. `2022-02-17 00:00:00+00:00`;
//! - outside that window it echoes the constructor argument.
//!
//! Values are immutable; every arithmetic operation returns a new one.
//! Equality and ordering look only at the number.

use crate::convert::{self, CivilDateTime, Timestamp};
use crate::error::EdayError;
use crate::input::{self, DayInput};
use crate::julian;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use qtty::Days;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Signed days since 1970-01-01T00:00:00 UTC.
///
/// ```
/// use eday::EpochDay;
///
/// let day = EpochDay::new("2022-02-17").unwrap();
/// assert_eq!(day.value(), 19_040.0);
/// assert_eq!(day.to_string(), "19040.0 <2022-02-17 00:00:00+00:00>");
///
/// let later = day + 0.5;
/// assert_eq!(later.to_string(), "19040.5 <2022-02-17 12:00:00+00:00>");
/// ```
#[derive(Debug, Clone)]
pub struct EpochDay {
    quantity: Days,
    origin: String,
}

impl EpochDay {
    // ── constructors ──────────────────────────────────────────────────

    /// Build from a number, a date/clock string, or a chrono date-time.
    pub fn new(input: impl Into<DayInput>) -> Result<Self, EdayError> {
        let input = input.into();
        let value = input.days()?;
        Ok(Self::with_origin(value, &input))
    }

    /// Build from a raw scalar (epoch days).
    #[inline]
    pub fn from_value(value: f64) -> Self {
        Self::with_origin(value, &DayInput::Number(value))
    }

    /// Build from a [`Days`] quantity.
    #[inline]
    pub fn from_days(days: Days) -> Self {
        Self::from_value(days.value())
    }

    /// The current UTC instant.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    fn with_origin(value: f64, input: &DayInput) -> Self {
        let origin = if convert::in_display_range(value) {
            match convert::to_timestamp(value) {
                Ok(civil) => civil.to_string(),
                Err(_) => input.echo(),
            }
        } else {
            input.echo()
        };
        Self {
            quantity: Days::new(value),
            origin,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Text shown next to the number: a calendar reading or the echoed input.
    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `true` when the value has a conventional (year 1–9999) calendar date.
    #[inline]
    pub fn is_displayable(&self) -> bool {
        convert::in_display_range(self.value())
    }

    /// Julian Day of this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        julian::epoch_day_to_jd(self.value())
    }

    // ── calendar conversion ───────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    pub fn to_date(&self) -> Result<DateTime<Utc>, EdayError> {
        convert::to_date(self.value())
    }

    /// Convert to a proleptic Gregorian reading; total for finite values.
    pub fn to_civil(&self) -> Result<CivilDateTime, EdayError> {
        convert::to_timestamp(self.value())
    }

    // ── dynamic arithmetic ────────────────────────────────────────────

    /// `self + rhs` for a dynamically typed right-hand side.
    ///
    /// Only JSON numbers are accepted; anything else is
    /// [`EdayError::UnsupportedOperand`].
    #[cfg(feature = "serde")]
    pub fn checked_add_value(&self, rhs: &serde_json::Value) -> Result<Self, EdayError> {
        Ok(self.clone() + operand(rhs)?)
    }

    /// `self - rhs` for a dynamically typed right-hand side.
    #[cfg(feature = "serde")]
    pub fn checked_sub_value(&self, rhs: &serde_json::Value) -> Result<Self, EdayError> {
        Ok(self.clone() - operand(rhs)?)
    }
}

#[cfg(feature = "serde")]
fn operand(rhs: &serde_json::Value) -> Result<f64, EdayError> {
    match rhs {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or(EdayError::UnsupportedOperand { kind: "number" }),
        other => Err(EdayError::UnsupportedOperand {
            kind: input::json_kind(other),
        }),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for EpochDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", input::float_repr(self.value()), self.origin)
    }
}

// ── Comparison ────────────────────────────────────────────────────────────

impl PartialEq for EpochDay {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl PartialEq<f64> for EpochDay {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value() == *other
    }
}

impl PartialOrd for EpochDay {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl PartialOrd<f64> for EpochDay {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value().partial_cmp(other)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<f64> for EpochDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        Self::from_value(self.value() + rhs)
    }
}

impl Add<Days> for EpochDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Add for EpochDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self + rhs.quantity
    }
}

impl Add<&EpochDay> for EpochDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: &EpochDay) -> Self::Output {
        self + rhs.quantity
    }
}

impl Sub<f64> for EpochDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        Self::from_value(self.value() - rhs)
    }
}

impl Sub<Days> for EpochDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for EpochDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self - rhs.quantity
    }
}

impl Sub<&EpochDay> for EpochDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: &EpochDay) -> Self::Output {
        self - rhs.quantity
    }
}

impl Neg for EpochDay {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_value(-self.value())
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<f64> for EpochDay {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

impl From<Days> for EpochDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for EpochDay {
    fn from(datetime: DateTime<Tz>) -> Self {
        let value = convert::to_days(&Timestamp::from(datetime.clone()));
        Self::with_origin(value, &DayInput::from(datetime))
    }
}

impl From<NaiveDateTime> for EpochDay {
    fn from(naive: NaiveDateTime) -> Self {
        let value = convert::to_days(&Timestamp::utc(naive));
        Self::with_origin(value, &DayInput::from(naive))
    }
}

impl From<EpochDay> for f64 {
    #[inline]
    fn from(day: EpochDay) -> Self {
        day.value()
    }
}

impl From<EpochDay> for Days {
    #[inline]
    fn from(day: EpochDay) -> Self {
        day.quantity
    }
}

impl FromStr for EpochDay {
    type Err = EdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for EpochDay {
    type Error = EdayError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for EpochDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EpochDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochDayVisitor)
    }
}

#[cfg(feature = "serde")]
struct EpochDayVisitor;

#[cfg(feature = "serde")]
impl EpochDayVisitor {
    fn unsupported<E: de::Error>(kind: &'static str) -> E {
        E::custom(EdayError::UnsupportedInput { kind })
    }
}

#[cfg(feature = "serde")]
impl<'de> de::Visitor<'de> for EpochDayVisitor {
    type Value = EpochDay;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch days as a number, or a date / clock-duration string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<EpochDay, E> {
        Ok(EpochDay::from_value(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<EpochDay, E> {
        EpochDay::new(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<EpochDay, E> {
        match i64::try_from(v) {
            Ok(v) => self.visit_i64(v),
            Err(_) => Ok(EpochDay::from_value(v as f64)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<EpochDay, E> {
        EpochDay::new(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<EpochDay, E> {
        Err(Self::unsupported("bool"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<EpochDay, E> {
        Err(Self::unsupported("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<EpochDay, E> {
        Err(Self::unsupported("null"))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, _: A) -> Result<EpochDay, A::Error> {
        Err(Self::unsupported("array"))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, _: A) -> Result<EpochDay, A::Error> {
        Err(Self::unsupported("object"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
