// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod occupancy;
mod reporting;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use occupancy::{
    Remaining, RoomOccupancy, elapsed, format_span, moment_covers, night_covers, remaining,
    room_occupancy,
};
pub use reporting::{DateRange, Period, Statistics, aggregate};
pub use types::{
    BASE_MOMENT_HOURS, BookingId, BookingStatus, MenuCategory, MenuCategoryId, MenuItem,
    MenuItemId, Moment, Night, Person, Room, RoomId, Settings, parse_date, parse_time,
};
pub use validation::{
    MINIMUM_GUEST_AGE, validate_menu_category, validate_menu_item, validate_multiplier,
    validate_person, validate_room_number, validate_settings, validate_stay_window,
};
