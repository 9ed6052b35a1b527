// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::AppState;
use room_desk_domain::{
    BookingId, BookingStatus, MenuCategory, MenuCategoryId, MenuItem, MenuItemId, Moment, Night,
    Person, Room, RoomId,
};
use time::{Date, Duration, PrimitiveDateTime};

pub fn create_test_person() -> Person {
    Person {
        full_name: String::from("Marie Joseph"),
        id_number: String::from("ID-0042"),
        address: String::from("12 Rue Capois"),
        phone: None,
        age: 30,
    }
}

pub fn create_test_room(id: &str, number: &str) -> Room {
    Room {
        id: RoomId::new(id),
        number: String::from(number),
        is_available: true,
        is_clean: true,
    }
}

pub fn create_test_moment(id: &str, room_id: &str, start: PrimitiveDateTime) -> Moment {
    Moment {
        id: BookingId::new(id),
        room_id: RoomId::new(room_id),
        date: start.date(),
        start_time: start.time(),
        end_time: start.time() + Duration::hours(2),
        person1: create_test_person(),
        person2: create_test_person(),
        price: 1500,
        status: BookingStatus::Active,
        multiplier: 1,
        actual_end_time: None,
    }
}

pub fn create_test_night(id: &str, room_id: &str, check_in: Date, check_out: Date) -> Night {
    Night {
        id: BookingId::new(id),
        room_id: RoomId::new(room_id),
        check_in_date: check_in,
        check_out_date: check_out,
        person1: create_test_person(),
        person2: create_test_person(),
        price: 5000,
        status: BookingStatus::Active,
    }
}

pub fn create_test_category(id: &str, name: &str) -> MenuCategory {
    MenuCategory {
        id: MenuCategoryId::new(id),
        name: String::from(name),
        description: None,
        order: 1,
        is_active: true,
    }
}

pub fn create_test_item(id: &str, category_id: &str, name: &str) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        category_id: MenuCategoryId::new(category_id),
        name: String::from(name),
        description: String::from("House specialty"),
        price: 450,
        image: None,
        is_available: true,
        is_popular: None,
        allergens: None,
        preparation_time: None,
    }
}

/// A single-room state, the common starting point for transition tests.
pub fn create_test_state(room_id: &str, number: &str) -> AppState {
    AppState {
        rooms: vec![create_test_room(room_id, number)],
        moments: Vec::new(),
        nights: Vec::new(),
        ..AppState::initial()
    }
}
