// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_desk_domain::{BookingId, BookingStatus, Moment, Person, RoomId};
use time::{Duration, PrimitiveDateTime};

pub fn create_test_person() -> Person {
    Person {
        full_name: String::from("Marie Joseph"),
        id_number: String::from("ID-0042"),
        address: String::from("12 Rue Capois"),
        phone: None,
        age: 30,
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
