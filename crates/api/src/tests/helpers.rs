// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::CredentialVerifier;
use crate::error::AuthError;
use crate::requests::PersonForm;
use room_desk_domain::{BookingId, BookingStatus, Moment, Night, Person, RoomId};
use room_desk_privacy::AtRestCodec;
use time::{Date, Duration, PrimitiveDateTime};

pub fn create_test_codec() -> AtRestCodec {
    AtRestCodec::new("test-shared-key")
}

pub fn create_test_person() -> Person {
    Person {
        full_name: String::from("Marie Joseph"),
        id_number: String::from("ID-0042"),
        address: String::from("12 Rue Capois"),
        phone: Some(String::from("+509 3456 7890")),
        age: 30,
    }
}

pub fn create_test_person_form() -> PersonForm {
    let person: Person = create_test_person();
    PersonForm {
        full_name: person.full_name,
        id_number: person.id_number,
        address: person.address,
        phone: person.phone,
        age: person.age,
    }
}

pub fn create_sealed_moment(id: &str, start: PrimitiveDateTime, codec: &AtRestCodec) -> Moment {
    Moment {
        id: BookingId::new(id),
        room_id: RoomId::new("1"),
        date: start.date(),
        start_time: start.time(),
        end_time: start.time() + Duration::hours(2),
        person1: codec.seal_person(&create_test_person()),
        person2: codec.seal_person(&create_test_person()),
        price: 1500,
        status: BookingStatus::Active,
        multiplier: 1,
        actual_end_time: None,
    }
}

pub fn create_sealed_night(
    id: &str,
    check_in: Date,
    check_out: Date,
    codec: &AtRestCodec,
) -> Night {
    Night {
        id: BookingId::new(id),
        room_id: RoomId::new("1"),
        check_in_date: check_in,
        check_out_date: check_out,
        person1: codec.seal_person(&create_test_person()),
        person2: codec.seal_person(&create_test_person()),
        price: 5000,
        status: BookingStatus::Active,
    }
}

/// A verifier with a fixed expected password, for tests.
pub struct StaticVerifier {
    pub expected: String,
}

impl CredentialVerifier for StaticVerifier {
    fn verify(&self, password: &str) -> Result<bool, AuthError> {
        Ok(password == self.expected)
    }
}

/// A verifier that always fails internally, for tests.
pub struct BrokenVerifier;

impl CredentialVerifier for BrokenVerifier {
    fn verify(&self, _password: &str) -> Result<bool, AuthError> {
        Err(AuthError::VerifierFailure {
            reason: String::from("identity provider unreachable"),
        })
    }
}
