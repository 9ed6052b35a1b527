// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Periodic re-evaluation planning.
//!
//! Bookings expire while the page sits idle; the sweep re-derives
//! occupancy for every room without waiting for a user-triggered mutation.
//! Planning is pure so tests can drive it with any clock; the engine runs
//! one `sweep` per tick as a single synchronous pass over a settled
//! snapshot.
//!
//! Moments whose windows have elapsed are completed first, then room flags
//! are realigned against the post-expiry state. This is the only place a
//! booking status auto-advances; nights are completed by explicit user
//! action only.

use crate::apply::apply;
use crate::command::Command;
use crate::state::AppState;
use room_desk_domain::{BookingStatus, Moment, RoomOccupancy, room_occupancy};
use time::PrimitiveDateTime;

/// Collects the active moments whose windows have elapsed, returned with
/// their status already moved to `Completed`.
#[must_use]
pub fn expired_moments(state: &AppState, now: PrimitiveDateTime) -> Vec<Moment> {
    state
        .moments
        .iter()
        .filter(|moment| moment.status == BookingStatus::Active && now >= moment.end_datetime())
        .map(|moment| Moment {
            status: BookingStatus::Completed,
            ..moment.clone()
        })
        .collect()
}

/// Plans the flag patches needed to realign every room with its derived
/// occupancy.
///
/// Rooms whose stored flags already match the derivation produce no
/// command. Manual overrides made while a room is unoccupied are overwritten
/// here; that drift window is bounded by the sweep interval.
#[must_use]
pub fn room_flag_corrections(state: &AppState, now: PrimitiveDateTime) -> Vec<Command> {
    state
        .rooms
        .iter()
        .filter_map(|room| {
            let occupancy: RoomOccupancy =
                room_occupancy(&room.id, &state.moments, &state.nights, now);
            let expected: bool = !occupancy.occupied;
            if room.is_available == expected && room.is_clean == expected {
                None
            } else {
                Some(Command::UpdateRoomStatusAuto {
                    room_id: room.id.clone(),
                    is_available: expected,
                    is_clean: expected,
                })
            }
        })
        .collect()
}

/// Runs one full sweep pass: complete expired moments, then realign room
/// flags against the post-expiry state.
#[must_use]
pub fn sweep(state: &AppState, now: PrimitiveDateTime) -> AppState {
    let mut next: AppState = state.clone();
    for moment in expired_moments(&next, now) {
        next = apply(&next, Command::UpdateMoment { moment }, now);
    }
    for command in room_flag_corrections(&next, now) {
        next = apply(&next, command, now);
    }
    next
}
