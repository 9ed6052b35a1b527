// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A guest is younger than the minimum age.
    UnderAge {
        /// The rejected age.
        age: u8,
    },
    /// A required field is empty.
    EmptyField {
        /// The name of the empty field.
        field: &'static str,
    },
    /// A night's check-out date is not strictly after its check-in date.
    CheckOutNotAfterCheckIn {
        /// The check-in date.
        check_in: Date,
        /// The check-out date.
        check_out: Date,
    },
    /// A moment extension multiplier is below 1.
    InvalidMultiplier {
        /// The rejected multiplier.
        multiplier: u32,
    },
    /// A price is negative.
    NegativePrice {
        /// The rejected price, in gourdes.
        price: i64,
    },
    /// Failed to parse a date from a string.
    DateParse {
        /// The invalid date string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time-of-day from a string.
    TimeParse {
        /// The invalid time string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Calendar arithmetic produced an out-of-range date.
    DateArithmetic {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A booking status string is not one of the known states.
    InvalidStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnderAge { age } => {
                write!(f, "Guests must be at least 18 years old, got {age}")
            }
            Self::EmptyField { field } => write!(f, "Field '{field}' cannot be empty"),
            Self::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be strictly after check-in date {check_in}"
                )
            }
            Self::InvalidMultiplier { multiplier } => {
                write!(
                    f,
                    "Extension multiplier must be at least 1, got {multiplier}"
                )
            }
            Self::NegativePrice { price } => {
                write!(f, "Price cannot be negative, got {price}")
            }
            Self::DateParse { value, error } => {
                write!(f, "Failed to parse date '{value}': {error}")
            }
            Self::TimeParse { value, error } => {
                write!(f, "Failed to parse time '{value}': {error}")
            }
            Self::DateArithmetic { operation } => {
                write!(f, "Calendar arithmetic failed while {operation}")
            }
            Self::InvalidStatus(value) => write!(f, "Unknown booking status '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
