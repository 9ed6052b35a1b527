// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room occupancy derivation.
//!
//! This module is the single source of truth for the question "is this room
//! occupied right now". It is consulted by every booking transition, by the
//! periodic re-evaluation sweep, and by the read-only display layer.
//!
//! ## Invariants
//!
//! - A moment occupies its room over the half-open window
//!   `[start, start + 2h * multiplier)`: at the exact end instant the room
//!   is free.
//! - A night occupies its room over the closed window
//!   `[check-in 00:00:00, check-out 23:59:59.999]`.
//! - Only `Active` bookings contribute to occupancy.
//! - Several bookings covering the same room at once is a data anomaly the
//!   resolver tolerates: all matches are returned.
//! - `now` is always an explicit parameter; nothing here reads a clock.

use crate::types::{BookingStatus, Moment, Night, RoomId};
use time::{Duration, PrimitiveDateTime};

/// The derived occupancy of one room at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOccupancy {
    /// Whether any active booking covers the instant.
    pub occupied: bool,
    /// Every active moment whose window covers the instant.
    pub active_moments: Vec<Moment>,
    /// Every active night whose window covers the instant.
    pub active_nights: Vec<Night>,
}

/// Derives the occupancy of a room at a given instant.
///
/// # Arguments
///
/// * `room_id` - The room to evaluate
/// * `moments` - All moment bookings in the system
/// * `nights` - All night bookings in the system
/// * `now` - The instant to evaluate occupancy at
#[must_use]
pub fn room_occupancy(
    room_id: &RoomId,
    moments: &[Moment],
    nights: &[Night],
    now: PrimitiveDateTime,
) -> RoomOccupancy {
    let active_moments: Vec<Moment> = moments
        .iter()
        .filter(|moment| {
            moment.room_id == *room_id
                && moment.status == BookingStatus::Active
                && moment_covers(moment, now)
        })
        .cloned()
        .collect();

    let active_nights: Vec<Night> = nights
        .iter()
        .filter(|night| {
            night.room_id == *room_id
                && night.status == BookingStatus::Active
                && night_covers(night, now)
        })
        .cloned()
        .collect();

    RoomOccupancy {
        occupied: !active_moments.is_empty() || !active_nights.is_empty(),
        active_moments,
        active_nights,
    }
}

/// Checks whether a moment's half-open window covers an instant.
#[must_use]
pub fn moment_covers(moment: &Moment, now: PrimitiveDateTime) -> bool {
    now >= moment.start_datetime() && now < moment.end_datetime()
}

/// Checks whether a night's closed end-of-day window covers an instant.
#[must_use]
pub fn night_covers(night: &Night, now: PrimitiveDateTime) -> bool {
    now >= night.occupancy_start() && now <= night.occupancy_end()
}

/// Time left before a moment's window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// The window has already closed.
    Expired,
    /// The window is still open for the given duration.
    Running(Duration),
}

impl std::fmt::Display for Remaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expired => write!(f, "Terminé"),
            Self::Running(duration) => write!(f, "{}", format_span(*duration)),
        }
    }
}

/// Computes the time remaining before a moment expires.
///
/// Returns `Remaining::Expired` once `now` has reached the end of the
/// window (extension included).
#[must_use]
pub fn remaining(moment: &Moment, now: PrimitiveDateTime) -> Remaining {
    let end: PrimitiveDateTime = moment.end_datetime();
    if now >= end {
        Remaining::Expired
    } else {
        Remaining::Running(end - now)
    }
}

/// Computes the time elapsed since a moment started.
///
/// Never negative: before the start instant this returns zero.
#[must_use]
pub fn elapsed(moment: &Moment, now: PrimitiveDateTime) -> Duration {
    let start: PrimitiveDateTime = moment.start_datetime();
    if now < start {
        Duration::ZERO
    } else {
        now - start
    }
}

/// Renders a duration as a countdown, omitting zero-valued leading units:
/// `"1h 5min 3s"`, `"5min 3s"`, `"3s"`.
#[must_use]
pub fn format_span(duration: Duration) -> String {
    let hours: i64 = duration.whole_hours();
    let minutes: i64 = duration.whole_minutes() % 60;
    let seconds: i64 = duration.whole_seconds() % 60;

    if hours > 0 {
        format!("{hours}h {minutes}min {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}min {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
