// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_desk_domain::{MenuCategory, MenuItem, Moment, Night, Room, RoomId, Settings};
use serde::{Deserialize, Serialize};

/// The aggregate root holding the whole console state.
///
/// Owned exclusively by the store; the persistence adapter only ever reads
/// and writes this aggregate as a whole, never individual entities.
///
/// Every field carries a serde default so that a partially-shaped persisted
/// blob fills in from the initial state instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// All rooms of the motel.
    #[serde(default = "default_rooms")]
    pub rooms: Vec<Room>,
    /// All short-stay bookings, any status.
    #[serde(default)]
    pub moments: Vec<Moment>,
    /// All overnight bookings, any status.
    #[serde(default)]
    pub nights: Vec<Night>,
    /// The global settings record.
    #[serde(default)]
    pub settings: Settings,
    /// Whether an operator session is open.
    #[serde(default)]
    pub is_authenticated: bool,
    /// Restaurant menu categories.
    #[serde(default)]
    pub menu_categories: Vec<MenuCategory>,
    /// Restaurant menu items.
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

fn default_rooms() -> Vec<Room> {
    vec![
        Room {
            id: RoomId::new("1"),
            number: String::from("101"),
            is_available: true,
            is_clean: true,
        },
        Room {
            id: RoomId::new("2"),
            number: String::from("102"),
            is_available: true,
            is_clean: true,
        },
        Room {
            id: RoomId::new("3"),
            number: String::from("103"),
            is_available: false,
            is_clean: false,
        },
    ]
}

impl AppState {
    /// Creates the initial state a fresh install starts from: three seed
    /// rooms, default settings, and no bookings.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            rooms: default_rooms(),
            moments: Vec::new(),
            nights: Vec::new(),
            settings: Settings::default(),
            is_authenticated: false,
            menu_categories: Vec::new(),
            menu_items: Vec::new(),
        }
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == *id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}
