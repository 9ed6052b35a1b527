// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::macros::{format_description, time};
use time::{Date, Duration, PrimitiveDateTime, Time};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(hm_time, Time, "[hour]:[minute]");

/// Date format used throughout the persisted blob (`2024-01-31`).
const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Time-of-day format used throughout the persisted blob (`14:30`).
const TIME_FORMAT: &[time::format_description::BorrowedFormatItem<'_>] =
    format_description!("[hour]:[minute]");

/// Base duration of a moment booking before any extension multiplier.
pub const BASE_MOMENT_HOURS: i64 = 2;

/// Parses a calendar date from its blob representation.
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the string is not a valid
/// `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParse {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses a time-of-day from its blob representation.
///
/// # Errors
///
/// Returns `DomainError::TimeParse` if the string is not a valid
/// `HH:MM` time.
pub fn parse_time(value: &str) -> Result<Time, DomainError> {
    Time::parse(value, TIME_FORMAT).map_err(|e| DomainError::TimeParse {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Identifier of a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId {
    value: String,
}

impl RoomId {
    /// Creates a new `RoomId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifier of a booking, shared by moments and nights.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId {
    value: String,
}

impl BookingId {
    /// Creates a new `BookingId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifier of a menu category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCategoryId {
    value: String,
}

impl MenuCategoryId {
    /// Creates a new `MenuCategoryId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Identifier of a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId {
    value: String,
}

impl MenuItemId {
    /// Creates a new `MenuItemId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Lifecycle state of a booking.
///
/// A booking is created `Active`. Moments are moved to `Completed`
/// automatically once their window has elapsed; nights are completed only
/// by an explicit user action. `Cancelled` is always user-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// The booking currently holds (or will hold) its room.
    #[default]
    Active,
    /// The booking ran its course.
    Completed,
    /// The booking was cancelled by the user.
    Cancelled,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this status to its blob representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A room of the motel.
///
/// `is_available` and `is_clean` are derived from active bookings on every
/// booking transition, but remain directly editable when no active booking
/// covers the room (manual override for cleaning staff).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// The room identifier.
    pub id: RoomId,
    /// The room number as displayed to staff (e.g. "101").
    pub number: String,
    /// Whether the room can take a new booking right now.
    pub is_available: bool,
    /// Whether the room has been cleaned since its last occupancy.
    pub is_clean: bool,
}

/// A guest identity, embedded in each booking.
///
/// Two persons are recorded per booking and never shared between bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// The guest's full name.
    pub full_name: String,
    /// The guest's identity document number.
    pub id_number: String,
    /// The guest's address.
    pub address: String,
    /// The guest's phone number (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The guest's age. Must be 18 or older, enforced at the form boundary.
    pub age: u8,
}

/// A short-stay booking occupying a room for `2h * multiplier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    /// The booking identifier.
    pub id: BookingId,
    /// The occupied room.
    pub room_id: RoomId,
    /// The calendar date the moment starts on.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The wall-clock start time.
    #[serde(with = "hm_time")]
    pub start_time: Time,
    /// The nominal end time recorded at creation (start + 2h).
    #[serde(with = "hm_time")]
    pub end_time: Time,
    /// The first guest.
    pub person1: Person,
    /// The second guest.
    pub person2: Person,
    /// The price charged, in gourdes.
    pub price: i64,
    /// The booking lifecycle state.
    pub status: BookingStatus,
    /// Extension multiplier; scales both duration and price linearly.
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
    /// The real end time once extended past the nominal 2-hour block.
    #[serde(default, with = "hm_time::option", skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<Time>,
}

const fn default_multiplier() -> u32 {
    1
}

impl Moment {
    /// Returns the instant this moment's occupancy window opens.
    #[must_use]
    pub const fn start_datetime(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.start_time)
    }

    /// Returns the full occupancy duration, extension included.
    #[must_use]
    pub fn effective_duration(&self) -> Duration {
        Duration::hours(BASE_MOMENT_HOURS * i64::from(self.multiplier))
    }

    /// Returns the instant this moment's occupancy window closes.
    ///
    /// The window is half-open: at this exact instant the room is free.
    #[must_use]
    pub fn end_datetime(&self) -> PrimitiveDateTime {
        self.start_datetime() + self.effective_duration()
    }
}

/// An overnight booking spanning one or more nights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Night {
    /// The booking identifier.
    pub id: BookingId,
    /// The occupied room.
    pub room_id: RoomId,
    /// The check-in date.
    #[serde(with = "iso_date")]
    pub check_in_date: Date,
    /// The check-out date. Strictly after check-in.
    #[serde(with = "iso_date")]
    pub check_out_date: Date,
    /// The first guest.
    pub person1: Person,
    /// The second guest.
    pub person2: Person,
    /// The price recorded at creation, in gourdes. Not recalculated when
    /// settings change later.
    pub price: i64,
    /// The booking lifecycle state.
    pub status: BookingStatus,
}

impl Night {
    /// Returns the number of nights between check-in and check-out.
    #[must_use]
    pub fn span_nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).whole_days()
    }

    /// Returns the display total for this stay: nights spanned times the
    /// current per-night price. Independent of the stored `price`.
    #[must_use]
    pub fn stay_total(&self, night_price: i64) -> i64 {
        self.span_nights() * night_price
    }

    /// Returns the instant this night's occupancy window opens
    /// (check-in day at midnight).
    #[must_use]
    pub const fn occupancy_start(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.check_in_date, Time::MIDNIGHT)
    }

    /// Returns the last occupied instant of this night's window
    /// (check-out day at 23:59:59.999, inclusive).
    #[must_use]
    pub const fn occupancy_end(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.check_out_date, time!(23:59:59.999))
    }
}

/// Global pricing and identity settings.
///
/// A single record; changes take effect for new bookings only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Price of a base (2-hour) moment, in gourdes.
    pub moment_price: i64,
    /// Price of one night, in gourdes.
    pub night_price: i64,
    /// The motel's display name.
    pub motel_name: String,
    /// The restaurant's display name, if the motel runs one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    /// A short restaurant description for the public menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_description: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            moment_price: 1500,
            night_price: 5000,
            motel_name: String::from("Parapli ROOM"),
            restaurant_name: None,
            restaurant_description: None,
        }
    }
}

/// A restaurant menu category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    /// The category identifier.
    pub id: MenuCategoryId,
    /// The category display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sort position within the menu.
    pub order: u32,
    /// Whether the category is shown on the public menu.
    pub is_active: bool,
}

/// A restaurant menu item.
///
/// `category_id` is a soft reference; deleting a category cascades to its
/// items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// The item identifier.
    pub id: MenuItemId,
    /// The category this item belongs to.
    pub category_id: MenuCategoryId,
    /// The item display name.
    pub name: String,
    /// The item description.
    pub description: String,
    /// The item price, in gourdes.
    pub price: i64,
    /// Optional image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Whether the item can currently be ordered.
    pub is_available: bool,
    /// Whether the item is highlighted as popular.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    /// Allergens present in the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    /// Preparation time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<u32>,
}
