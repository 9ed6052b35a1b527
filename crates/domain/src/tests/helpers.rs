// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BookingId, BookingStatus, Moment, Night, Person, RoomId};
use time::{Date, Duration, PrimitiveDateTime};

pub fn create_test_person() -> Person {
    Person {
        full_name: String::from("Jean Baptiste"),
        id_number: String::from("ID-1984"),
        address: String::from("8 Avenue Lamartinière"),
        phone: Some(String::from("+509 3456 7890")),
        age: 27,
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
