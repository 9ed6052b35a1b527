// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{MenuCategory, MenuItem, Person, Settings};
use time::Date;

/// Minimum guest age accepted at the form boundary.
pub const MINIMUM_GUEST_AGE: u8 = 18;

/// Validates a guest identity.
///
/// These checks run at the form boundary; the state store itself never
/// rejects a person.
///
/// # Errors
///
/// Returns an error if:
/// - The full name, id number, or address is empty
/// - The guest is younger than 18
pub fn validate_person(person: &Person) -> Result<(), DomainError> {
    if person.full_name.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "fullName" });
    }
    if person.id_number.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "idNumber" });
    }
    if person.address.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "address" });
    }
    if person.age < MINIMUM_GUEST_AGE {
        return Err(DomainError::UnderAge { age: person.age });
    }
    Ok(())
}

/// Validates a night's stay window.
///
/// # Errors
///
/// Returns `DomainError::CheckOutNotAfterCheckIn` unless the check-out
/// date is strictly after the check-in date.
pub fn validate_stay_window(check_in: Date, check_out: Date) -> Result<(), DomainError> {
    if check_out <= check_in {
        return Err(DomainError::CheckOutNotAfterCheckIn {
            check_in,
            check_out,
        });
    }
    Ok(())
}

/// Validates a moment extension multiplier.
///
/// # Errors
///
/// Returns `DomainError::InvalidMultiplier` if the multiplier is 0.
pub fn validate_multiplier(multiplier: u32) -> Result<(), DomainError> {
    if multiplier < 1 {
        return Err(DomainError::InvalidMultiplier { multiplier });
    }
    Ok(())
}

/// Validates a room number.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the number is empty.
pub fn validate_room_number(number: &str) -> Result<(), DomainError> {
    if number.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "number" });
    }
    Ok(())
}

/// Validates the global settings record.
///
/// # Errors
///
/// Returns an error if either price is negative or the motel name is
/// empty.
pub fn validate_settings(settings: &Settings) -> Result<(), DomainError> {
    if settings.moment_price < 0 {
        return Err(DomainError::NegativePrice {
            price: settings.moment_price,
        });
    }
    if settings.night_price < 0 {
        return Err(DomainError::NegativePrice {
            price: settings.night_price,
        });
    }
    if settings.motel_name.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "motelName" });
    }
    Ok(())
}

/// Validates a menu category.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the name is empty.
pub fn validate_menu_category(category: &MenuCategory) -> Result<(), DomainError> {
    if category.name.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "name" });
    }
    Ok(())
}

/// Validates a menu item.
///
/// # Errors
///
/// Returns an error if the name is empty or the price is negative.
pub fn validate_menu_item(item: &MenuItem) -> Result<(), DomainError> {
    if item.name.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "name" });
    }
    if item.price < 0 {
        return Err(DomainError::NegativePrice { price: item.price });
    }
    Ok(())
}
