// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form-boundary request DTOs.
//!
//! These are distinct from domain types and represent the form contract:
//! raw strings in, validated commands out. Validation errors surface here,
//! before any command is built; the store itself never rejects input.
//! Guest identities are sealed for storage on the way through.

use crate::error::{ApiError, translate_domain_error};
use room_desk::Command;
use room_desk_domain::{
    BookingId, BookingStatus, MenuCategory, MenuCategoryId, MenuItem, MenuItemId, Moment, Night,
    Person, Room, RoomId, Settings, parse_date, parse_time, validate_menu_category,
    validate_menu_item, validate_multiplier, validate_person, validate_room_number,
    validate_settings, validate_stay_window,
};
use room_desk_privacy::AtRestCodec;
use time::{Date, Duration, Time};
use uuid::Uuid;

fn next_id() -> String {
    Uuid::new_v4().to_string()
}

/// A guest identity as entered in a booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonForm {
    /// The guest's full name.
    pub full_name: String,
    /// The guest's identity document number.
    pub id_number: String,
    /// The guest's address.
    pub address: String,
    /// The guest's phone number (optional).
    pub phone: Option<String>,
    /// The guest's age.
    pub age: u8,
}

impl PersonForm {
    /// Validates the form and seals the identity for storage.
    fn into_sealed_person(self, codec: &AtRestCodec) -> Result<Person, ApiError> {
        let person: Person = Person {
            full_name: self.full_name,
            id_number: self.id_number,
            address: self.address,
            phone: self.phone,
            age: self.age,
        };
        validate_person(&person).map_err(translate_domain_error)?;
        Ok(codec.seal_person(&person))
    }
}

/// Form request to add a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoomRequest {
    /// The room number as displayed to staff.
    pub number: String,
}

impl CreateRoomRequest {
    /// Validates the form and builds the add command.
    ///
    /// # Errors
    ///
    /// Returns an error if the room number is empty.
    pub fn into_command(self) -> Result<Command, ApiError> {
        validate_room_number(&self.number).map_err(translate_domain_error)?;
        Ok(Command::AddRoom {
            room: Room {
                id: RoomId::new(&next_id()),
                number: self.number,
                is_available: true,
                is_clean: true,
            },
        })
    }
}

/// Form request to book a moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMomentRequest {
    /// The room to book.
    pub room_id: String,
    /// The start date (`YYYY-MM-DD`).
    pub date: String,
    /// The start time (`HH:MM`).
    pub start_time: String,
    /// The first guest.
    pub person1: PersonForm,
    /// The second guest.
    pub person2: PersonForm,
}

impl CreateMomentRequest {
    /// Validates the form and builds the add command.
    ///
    /// The booking starts active with the base two-hour window, priced
    /// from the current settings. Guests are sealed for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if a guest is invalid or a date/time does not
    /// parse.
    pub fn into_command(
        self,
        settings: &Settings,
        codec: &AtRestCodec,
    ) -> Result<Command, ApiError> {
        let date: Date = parse_date(&self.date).map_err(translate_domain_error)?;
        let start_time: Time = parse_time(&self.start_time).map_err(translate_domain_error)?;
        let person1: Person = self.person1.into_sealed_person(codec)?;
        let person2: Person = self.person2.into_sealed_person(codec)?;

        Ok(Command::AddMoment {
            moment: Moment {
                id: BookingId::new(&next_id()),
                room_id: RoomId::new(&self.room_id),
                date,
                start_time,
                end_time: start_time + Duration::hours(2),
                person1,
                person2,
                price: settings.moment_price,
                status: BookingStatus::Active,
                multiplier: 1,
                actual_end_time: None,
            },
        })
    }
}

/// Form request to extend a moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendMomentRequest {
    /// The moment to extend.
    pub id: String,
    /// The new duration/price multiplier.
    pub multiplier: u32,
}

impl ExtendMomentRequest {
    /// Validates the form and builds the extend command.
    ///
    /// # Errors
    ///
    /// Returns an error if the multiplier is below 1.
    pub fn into_command(self) -> Result<Command, ApiError> {
        validate_multiplier(self.multiplier).map_err(translate_domain_error)?;
        Ok(Command::ExtendMoment {
            id: BookingId::new(&self.id),
            multiplier: self.multiplier,
        })
    }
}

/// Form request to book a night stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNightRequest {
    /// The room to book.
    pub room_id: String,
    /// The check-in date (`YYYY-MM-DD`).
    pub check_in_date: String,
    /// The check-out date (`YYYY-MM-DD`), strictly after check-in.
    pub check_out_date: String,
    /// The first guest.
    pub person1: PersonForm,
    /// The second guest.
    pub person2: PersonForm,
}

impl CreateNightRequest {
    /// Validates the form and builds the add command.
    ///
    /// The stored price is the current per-night rate; the detail view
    /// derives the stay total from the span instead.
    ///
    /// # Errors
    ///
    /// Returns an error if a guest is invalid, a date does not parse, or
    /// check-out is not after check-in.
    pub fn into_command(
        self,
        settings: &Settings,
        codec: &AtRestCodec,
    ) -> Result<Command, ApiError> {
        let check_in_date: Date = parse_date(&self.check_in_date).map_err(translate_domain_error)?;
        let check_out_date: Date =
            parse_date(&self.check_out_date).map_err(translate_domain_error)?;
        validate_stay_window(check_in_date, check_out_date).map_err(translate_domain_error)?;
        let person1: Person = self.person1.into_sealed_person(codec)?;
        let person2: Person = self.person2.into_sealed_person(codec)?;

        Ok(Command::AddNight {
            night: Night {
                id: BookingId::new(&next_id()),
                room_id: RoomId::new(&self.room_id),
                check_in_date,
                check_out_date,
                person1,
                person2,
                price: settings.night_price,
                status: BookingStatus::Active,
            },
        })
    }
}

/// Form request to replace the global settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSettingsRequest {
    /// Price of a base moment, in gourdes.
    pub moment_price: i64,
    /// Price of one night, in gourdes.
    pub night_price: i64,
    /// The motel's display name.
    pub motel_name: String,
    /// The restaurant's display name.
    pub restaurant_name: Option<String>,
    /// The restaurant's description.
    pub restaurant_description: Option<String>,
}

impl UpdateSettingsRequest {
    /// Validates the form and builds the update command.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is negative or the motel name is
    /// empty.
    pub fn into_command(self) -> Result<Command, ApiError> {
        let settings: Settings = Settings {
            moment_price: self.moment_price,
            night_price: self.night_price,
            motel_name: self.motel_name,
            restaurant_name: self.restaurant_name,
            restaurant_description: self.restaurant_description,
        };
        validate_settings(&settings).map_err(translate_domain_error)?;
        Ok(Command::UpdateSettings { settings })
    }
}

/// Form request to add a menu category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMenuCategoryRequest {
    /// The category display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Sort position within the menu.
    pub order: u32,
    /// Whether the category is shown on the public menu.
    pub is_active: bool,
}

impl CreateMenuCategoryRequest {
    /// Validates the form and builds the add command.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn into_command(self) -> Result<Command, ApiError> {
        let category: MenuCategory = MenuCategory {
            id: MenuCategoryId::new(&next_id()),
            name: self.name,
            description: self.description,
            order: self.order,
            is_active: self.is_active,
        };
        validate_menu_category(&category).map_err(translate_domain_error)?;
        Ok(Command::AddMenuCategory { category })
    }
}

/// Form request to add a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMenuItemRequest {
    /// The category the item belongs to.
    pub category_id: String,
    /// The item display name.
    pub name: String,
    /// The item description.
    pub description: String,
    /// The item price, in gourdes.
    pub price: i64,
    /// Optional image URL.
    pub image: Option<String>,
    /// Whether the item is highlighted as popular.
    pub is_popular: Option<bool>,
    /// Allergens present in the item.
    pub allergens: Option<Vec<String>>,
    /// Preparation time in minutes.
    pub preparation_time: Option<u32>,
}

impl CreateMenuItemRequest {
    /// Validates the form and builds the add command.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the price is negative.
    pub fn into_command(self) -> Result<Command, ApiError> {
        let item: MenuItem = MenuItem {
            id: MenuItemId::new(&next_id()),
            category_id: MenuCategoryId::new(&self.category_id),
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            is_available: true,
            is_popular: self.is_popular,
            allergens: self.allergens,
            preparation_time: self.preparation_time,
        };
        validate_menu_item(&item).map_err(translate_domain_error)?;
        Ok(Command::AddMenuItem { item })
    }
}
