// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::AppState;
use room_desk_domain::{
    BookingId, MenuCategory, MenuCategoryId, MenuItem, MenuItemId, Moment, Night, Room, RoomId,
    Settings,
};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes. Commands targeting
/// an id that does not exist are silent no-ops; validation happens at the
/// form boundary before a command is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open or close the operator session.
    SetAuthenticated {
        /// The new session flag.
        authenticated: bool,
    },
    /// Add a room.
    AddRoom {
        /// The room to add.
        room: Room,
    },
    /// Replace a room by id.
    UpdateRoom {
        /// The replacement room.
        room: Room,
    },
    /// Remove a room by id.
    DeleteRoom {
        /// The room to remove.
        id: RoomId,
    },
    /// Add a moment booking. The target room is marked occupied and dirty
    /// unconditionally: new bookings always start active.
    AddMoment {
        /// The moment to add.
        moment: Moment,
    },
    /// Replace a moment by id and re-derive its room's flags.
    UpdateMoment {
        /// The replacement moment.
        moment: Moment,
    },
    /// Remove a moment by id and re-derive its room's flags.
    DeleteMoment {
        /// The moment to remove.
        id: BookingId,
    },
    /// Lengthen a moment's window. Extension never shortens an active
    /// window, so the room's flags are left untouched.
    ExtendMoment {
        /// The moment to extend.
        id: BookingId,
        /// The new duration/price multiplier.
        multiplier: u32,
    },
    /// Add a night booking. Same unconditional room marking as
    /// `AddMoment`.
    AddNight {
        /// The night to add.
        night: Night,
    },
    /// Replace a night by id and re-derive its room's flags.
    UpdateNight {
        /// The replacement night.
        night: Night,
    },
    /// Remove a night by id and re-derive its room's flags.
    DeleteNight {
        /// The night to remove.
        id: BookingId,
    },
    /// Replace the settings record wholesale. Stored booking prices are
    /// never touched retroactively.
    UpdateSettings {
        /// The replacement settings.
        settings: Settings,
    },
    /// Add a menu category.
    AddMenuCategory {
        /// The category to add.
        category: MenuCategory,
    },
    /// Replace a menu category by id.
    UpdateMenuCategory {
        /// The replacement category.
        category: MenuCategory,
    },
    /// Remove a menu category and every item that references it.
    DeleteMenuCategory {
        /// The category to remove.
        id: MenuCategoryId,
    },
    /// Add a menu item.
    AddMenuItem {
        /// The item to add.
        item: MenuItem,
    },
    /// Replace a menu item by id.
    UpdateMenuItem {
        /// The replacement item.
        item: MenuItem,
    },
    /// Remove a menu item by id.
    DeleteMenuItem {
        /// The item to remove.
        id: MenuItemId,
    },
    /// Replace the whole aggregate. Used only by the persistence adapter
    /// at startup.
    LoadData {
        /// The replacement state.
        state: AppState,
    },
    /// Narrow room-flag patch used exclusively by the periodic
    /// re-evaluator.
    UpdateRoomStatusAuto {
        /// The room to patch.
        room_id: RoomId,
        /// The derived availability flag.
        is_available: bool,
        /// The derived cleanliness flag.
        is_clean: bool,
    },
}
