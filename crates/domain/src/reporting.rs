// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side reporting rollups.
//!
//! Statistics are computed over a date-filtered slice of bookings: moments
//! are selected by their `date`, nights by their `check_in_date`, both
//! inclusive of the range bounds. Cancelled bookings stay in the status
//! tallies but are excluded from every revenue sum.

use crate::error::DomainError;
use crate::types::{BookingStatus, Moment, Night};
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// A reporting period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// The current calendar day.
    Today,
    /// The current calendar week (starting Sunday).
    Week,
    /// The current calendar month.
    Month,
    /// The current calendar year.
    Year,
    /// An arbitrary inclusive date pair.
    Custom {
        /// The first day of the range.
        start: Date,
        /// The last day of the range.
        end: Date,
    },
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first day of the range.
    pub start: Date,
    /// The last day of the range.
    pub end: Date,
}

impl DateRange {
    /// Checks whether a date falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }
}

impl Period {
    /// Resolves this period to a concrete date range relative to `today`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmetic` if the resolved range falls
    /// outside the calendar range supported by `time`.
    pub fn date_range(&self, today: Date) -> Result<DateRange, DomainError> {
        match self {
            Self::Today => Ok(DateRange {
                start: today,
                end: today,
            }),
            Self::Week => {
                let days_from_sunday: i64 =
                    i64::from(today.weekday().number_days_from_sunday());
                let start: Date = today
                    .checked_sub(Duration::days(days_from_sunday))
                    .ok_or_else(|| DomainError::DateArithmetic {
                        operation: String::from("resolving the start of the week"),
                    })?;
                let end: Date = start.checked_add(Duration::days(6)).ok_or_else(|| {
                    DomainError::DateArithmetic {
                        operation: String::from("resolving the end of the week"),
                    }
                })?;
                Ok(DateRange { start, end })
            }
            Self::Month => {
                let start: Date =
                    today
                        .replace_day(1)
                        .map_err(|_| DomainError::DateArithmetic {
                            operation: String::from("resolving the start of the month"),
                        })?;
                let last_day: u8 = today.month().length(today.year());
                let end: Date =
                    today
                        .replace_day(last_day)
                        .map_err(|_| DomainError::DateArithmetic {
                            operation: String::from("resolving the end of the month"),
                        })?;
                Ok(DateRange { start, end })
            }
            Self::Year => {
                let start: Date = Date::from_calendar_date(today.year(), Month::January, 1)
                    .map_err(|_| DomainError::DateArithmetic {
                        operation: String::from("resolving the start of the year"),
                    })?;
                let end: Date = Date::from_calendar_date(today.year(), Month::December, 31)
                    .map_err(|_| DomainError::DateArithmetic {
                        operation: String::from("resolving the end of the year"),
                    })?;
                Ok(DateRange { start, end })
            }
            Self::Custom { start, end } => Ok(DateRange {
                start: *start,
                end: *end,
            }),
        }
    }
}

/// Booking counts and revenue over one reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of moments in the period, any status.
    pub total_moments: usize,
    /// Number of active moments.
    pub active_moments: usize,
    /// Number of completed moments.
    pub completed_moments: usize,
    /// Number of cancelled moments.
    pub cancelled_moments: usize,
    /// Moment revenue in gourdes, cancelled bookings excluded.
    pub moments_revenue: i64,
    /// Number of nights in the period, any status.
    pub total_nights: usize,
    /// Number of active nights.
    pub active_nights: usize,
    /// Number of completed nights.
    pub completed_nights: usize,
    /// Number of cancelled nights.
    pub cancelled_nights: usize,
    /// Night revenue in gourdes, cancelled bookings excluded.
    pub nights_revenue: i64,
    /// Combined revenue in gourdes.
    pub total_revenue: i64,
}

/// Aggregates bookings over a date range.
///
/// # Arguments
///
/// * `moments` - All moment bookings, filtered here by `date`
/// * `nights` - All night bookings, filtered here by `check_in_date`
/// * `range` - The inclusive reporting range
#[must_use]
pub fn aggregate(moments: &[Moment], nights: &[Night], range: &DateRange) -> Statistics {
    let mut stats: Statistics = Statistics::default();

    for moment in moments.iter().filter(|m| range.contains(m.date)) {
        stats.total_moments += 1;
        match moment.status {
            BookingStatus::Active => stats.active_moments += 1,
            BookingStatus::Completed => stats.completed_moments += 1,
            BookingStatus::Cancelled => stats.cancelled_moments += 1,
        }
        if moment.status != BookingStatus::Cancelled {
            stats.moments_revenue += moment.price;
        }
    }

    for night in nights.iter().filter(|n| range.contains(n.check_in_date)) {
        stats.total_nights += 1;
        match night.status {
            BookingStatus::Active => stats.active_nights += 1,
            BookingStatus::Completed => stats.completed_nights += 1,
            BookingStatus::Cancelled => stats.cancelled_nights += 1,
        }
        if night.status != BookingStatus::Cancelled {
            stats.nights_revenue += night.price;
        }
    }

    stats.total_revenue = stats.moments_revenue + stats.nights_revenue;
    stats
}
