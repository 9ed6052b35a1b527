// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::state::AppState;
use room_desk_domain::{
    BASE_MOMENT_HOURS, Moment, Night, Room, RoomId, RoomOccupancy, room_occupancy,
};
use time::{Duration, PrimitiveDateTime};

/// Applies a command to the current state, producing a new state.
///
/// This is a pure reducer step: the input state is never mutated, and the
/// same `(state, command, now)` triple always produces the same result.
/// Commands referencing an absent id leave the state unchanged.
///
/// Every mutation that touches a booking re-derives the affected room's
/// availability/cleanliness flags through the occupancy resolver, so the
/// room invariant (an actively covered room is neither available nor
/// clean) holds immediately after the transition.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `now` - The instant occupancy is derived at
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn apply(state: &AppState, command: Command, now: PrimitiveDateTime) -> AppState {
    match command {
        Command::SetAuthenticated { authenticated } => AppState {
            is_authenticated: authenticated,
            ..state.clone()
        },
        Command::AddRoom { room } => {
            let mut rooms: Vec<Room> = state.rooms.clone();
            rooms.push(room);
            AppState {
                rooms,
                ..state.clone()
            }
        }
        Command::UpdateRoom { room } => {
            let rooms: Vec<Room> = state
                .rooms
                .iter()
                .map(|existing| {
                    if existing.id == room.id {
                        room.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect();
            AppState {
                rooms,
                ..state.clone()
            }
        }
        Command::DeleteRoom { id } => {
            let rooms: Vec<Room> = state
                .rooms
                .iter()
                .filter(|room| room.id != id)
                .cloned()
                .collect();
            AppState {
                rooms,
                ..state.clone()
            }
        }
        Command::AddMoment { moment } => {
            let room_id: RoomId = moment.room_id.clone();
            let mut moments: Vec<Moment> = state.moments.clone();
            moments.push(moment);
            // New bookings always start active: mark the room without
            // consulting the resolver.
            let rooms: Vec<Room> = with_room_flags(&state.rooms, &room_id, false, false);
            AppState {
                rooms,
                moments,
                ..state.clone()
            }
        }
        Command::UpdateMoment { moment } => {
            let room_id: RoomId = moment.room_id.clone();
            let moments: Vec<Moment> = state
                .moments
                .iter()
                .map(|existing| {
                    if existing.id == moment.id {
                        moment.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect();
            let rooms: Vec<Room> =
                with_derived_flags(&state.rooms, &room_id, &moments, &state.nights, now);
            AppState {
                rooms,
                moments,
                ..state.clone()
            }
        }
        Command::DeleteMoment { id } => {
            let Some(deleted) = state.moments.iter().find(|moment| moment.id == id) else {
                return state.clone();
            };
            let room_id: RoomId = deleted.room_id.clone();
            let moments: Vec<Moment> = state
                .moments
                .iter()
                .filter(|moment| moment.id != id)
                .cloned()
                .collect();
            let rooms: Vec<Room> =
                with_derived_flags(&state.rooms, &room_id, &moments, &state.nights, now);
            AppState {
                rooms,
                moments,
                ..state.clone()
            }
        }
        Command::ExtendMoment { id, multiplier } => {
            let moments: Vec<Moment> = state
                .moments
                .iter()
                .map(|existing| {
                    if existing.id == id {
                        let mut extended: Moment = existing.clone();
                        extended.multiplier = multiplier;
                        let end: PrimitiveDateTime = extended.start_datetime()
                            + Duration::hours(BASE_MOMENT_HOURS * i64::from(multiplier));
                        extended.actual_end_time = Some(end.time());
                        extended.price = state.settings.moment_price * i64::from(multiplier);
                        extended
                    } else {
                        existing.clone()
                    }
                })
                .collect();
            // Extension only ever lengthens an active window; the room
            // stays occupied, so no re-derivation.
            AppState {
                moments,
                ..state.clone()
            }
        }
        Command::AddNight { night } => {
            let room_id: RoomId = night.room_id.clone();
            let mut nights: Vec<Night> = state.nights.clone();
            nights.push(night);
            let rooms: Vec<Room> = with_room_flags(&state.rooms, &room_id, false, false);
            AppState {
                rooms,
                nights,
                ..state.clone()
            }
        }
        Command::UpdateNight { night } => {
            let room_id: RoomId = night.room_id.clone();
            let nights: Vec<Night> = state
                .nights
                .iter()
                .map(|existing| {
                    if existing.id == night.id {
                        night.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect();
            let rooms: Vec<Room> =
                with_derived_flags(&state.rooms, &room_id, &state.moments, &nights, now);
            AppState {
                rooms,
                nights,
                ..state.clone()
            }
        }
        Command::DeleteNight { id } => {
            let Some(deleted) = state.nights.iter().find(|night| night.id == id) else {
                return state.clone();
            };
            let room_id: RoomId = deleted.room_id.clone();
            let nights: Vec<Night> = state
                .nights
                .iter()
                .filter(|night| night.id != id)
                .cloned()
                .collect();
            let rooms: Vec<Room> =
                with_derived_flags(&state.rooms, &room_id, &state.moments, &nights, now);
            AppState {
                rooms,
                nights,
                ..state.clone()
            }
        }
        Command::UpdateSettings { settings } => AppState {
            settings,
            ..state.clone()
        },
        Command::AddMenuCategory { category } => {
            let mut menu_categories = state.menu_categories.clone();
            menu_categories.push(category);
            AppState {
                menu_categories,
                ..state.clone()
            }
        }
        Command::UpdateMenuCategory { category } => {
            let menu_categories = state
                .menu_categories
                .iter()
                .map(|existing| {
                    if existing.id == category.id {
                        category.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect();
            AppState {
                menu_categories,
                ..state.clone()
            }
        }
        Command::DeleteMenuCategory { id } => {
            let menu_categories = state
                .menu_categories
                .iter()
                .filter(|category| category.id != id)
                .cloned()
                .collect();
            // Soft reference: items of the deleted category go with it.
            let menu_items = state
                .menu_items
                .iter()
                .filter(|item| item.category_id != id)
                .cloned()
                .collect();
            AppState {
                menu_categories,
                menu_items,
                ..state.clone()
            }
        }
        Command::AddMenuItem { item } => {
            let mut menu_items = state.menu_items.clone();
            menu_items.push(item);
            AppState {
                menu_items,
                ..state.clone()
            }
        }
        Command::UpdateMenuItem { item } => {
            let menu_items = state
                .menu_items
                .iter()
                .map(|existing| {
                    if existing.id == item.id {
                        item.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect();
            AppState {
                menu_items,
                ..state.clone()
            }
        }
        Command::DeleteMenuItem { id } => {
            let menu_items = state
                .menu_items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect();
            AppState {
                menu_items,
                ..state.clone()
            }
        }
        Command::LoadData { state: loaded } => loaded,
        Command::UpdateRoomStatusAuto {
            room_id,
            is_available,
            is_clean,
        } => {
            let rooms: Vec<Room> = with_room_flags(&state.rooms, &room_id, is_available, is_clean);
            AppState {
                rooms,
                ..state.clone()
            }
        }
    }
}

/// Returns a room list with one room's flags overwritten.
fn with_room_flags(
    rooms: &[Room],
    room_id: &RoomId,
    is_available: bool,
    is_clean: bool,
) -> Vec<Room> {
    rooms
        .iter()
        .map(|room| {
            if room.id == *room_id {
                Room {
                    is_available,
                    is_clean,
                    ..room.clone()
                }
            } else {
                room.clone()
            }
        })
        .collect()
}

/// Returns a room list with one room's flags re-derived from the given
/// booking arrays.
fn with_derived_flags(
    rooms: &[Room],
    room_id: &RoomId,
    moments: &[Moment],
    nights: &[Night],
    now: PrimitiveDateTime,
) -> Vec<Room> {
    let occupancy: RoomOccupancy = room_occupancy(room_id, moments, nights, now);
    with_room_flags(rooms, room_id, !occupancy.occupied, !occupancy.occupied)
}
