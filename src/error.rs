// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for every fallible epoch-day operation.

/// Error type for all fallible operations in the eday crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EdayError {
    /// Returned when a string matches neither the ISO-8601 nor the
    /// clock-duration grammar.
    #[error("invalid date or time expression: {input:?}")]
    InvalidFormat {
        /// The offending input, after sign stripping.
        input: String,
    },

    /// Returned when a dynamic value cannot be turned into an epoch day.
    #[error("unsupported input type for epoch day creation: {kind}")]
    UnsupportedInput {
        /// Name of the rejected value kind.
        kind: &'static str,
    },

    /// Returned when the right-hand side of `+` or `-` is neither a number
    /// nor an epoch day.
    #[error("unsupported operand type: {kind}")]
    UnsupportedOperand {
        /// Name of the rejected operand kind.
        kind: &'static str,
    },

    /// Returned when a day value is NaN or infinite.
    #[error("epoch day must be finite, got {value}")]
    NonFinite {
        /// The non-finite value.
        value: f64,
    },

    /// Returned when a value has no `chrono::DateTime<Utc>` representation,
    /// or no calendar reading at all (past `i128` whole days).
    #[error("epoch day {value} is outside the representable calendar range")]
    OutOfRange {
        /// The epoch day that could not be placed.
        value: f64,
    },
}

impl EdayError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }
}
