// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::{AtRestCodec, PinGate, PrivacyError, UnlockPrompt, mask_full, mask_partial, obscure_person};
use room_desk_domain::Person;
use std::collections::VecDeque;

fn guest() -> Person {
    Person {
        full_name: String::from("Wisline Étienne"),
        id_number: String::from("ID-7731"),
        address: String::from("45 Rue Pavée"),
        phone: Some(String::from("+509 4455 6677")),
        age: 24,
    }
}

fn codec() -> AtRestCodec {
    AtRestCodec::new("test-shared-key")
}

#[test]
fn test_seal_open_round_trips_ascii() {
    let sealed: String = codec().seal("Jean Baptiste");
    assert_ne!(sealed, "Jean Baptiste");
    assert_eq!(codec().open(&sealed).unwrap(), "Jean Baptiste");
}

#[test]
fn test_seal_open_round_trips_multi_byte_text() {
    for original in ["Wisline Étienne", "Ayiti 🇭🇹", "漢字テスト"] {
        let sealed: String = codec().seal(original);
        assert_eq!(codec().open(&sealed).unwrap(), original);
    }
}

#[test]
fn test_seal_open_round_trips_empty_string() {
    assert_eq!(codec().seal(""), "");
    assert_eq!(codec().open("").unwrap(), "");
}

#[test]
fn test_open_rejects_garbage() {
    assert!(matches!(
        codec().open("not base64 at all!!"),
        Err(PrivacyError::NotBase64(_))
    ));
}

#[test]
fn test_sealed_person_round_trips() {
    let sealed: Person = codec().seal_person(&guest());
    assert_ne!(sealed.full_name, guest().full_name);
    assert_eq!(sealed.age, 24);

    let opened: Person = codec().open_person(&sealed).unwrap();
    assert_eq!(opened, guest());
}

#[test]
fn test_mask_full_pads_short_values() {
    assert_eq!(mask_full("abc"), "xxxxxx");
    assert_eq!(mask_full("abcdefgh"), "xxxxxxxx");
    assert_eq!(mask_full(""), "");
}

#[test]
fn test_mask_partial_keeps_edges() {
    assert_eq!(mask_partial("ID-7731"), "IDxxx31");
    assert_eq!(mask_partial("abcd"), "xxxx");
    assert_eq!(mask_partial(""), "");
}

#[test]
fn test_obscure_person_masks_identity_but_not_age() {
    let obscured: Person = obscure_person(&guest());

    assert_eq!(obscured.full_name, "x".repeat(15));
    assert_eq!(obscured.id_number, "xxxxxxx");
    assert!(obscured.phone.unwrap().starts_with('x'));
    assert_eq!(obscured.age, 24);
}

struct ScriptedPrompt {
    attempts: VecDeque<Option<String>>,
}

impl UnlockPrompt for ScriptedPrompt {
    async fn read_pin(&mut self) -> Option<String> {
        self.attempts.pop_front().flatten()
    }
}

#[test]
fn test_unlock_succeeds_on_exact_match() {
    let gate: PinGate = PinGate::new("070528");
    let mut prompt = ScriptedPrompt {
        attempts: VecDeque::from([Some(String::from("070528"))]),
    };

    assert!(futures::executor::block_on(gate.request_unlock(&mut prompt)));
}

#[test]
fn test_unlock_retries_after_a_wrong_code() {
    let gate: PinGate = PinGate::new("070528");
    let mut prompt = ScriptedPrompt {
        attempts: VecDeque::from([
            Some(String::from("123456")),
            Some(String::from("070528")),
        ]),
    };

    assert!(futures::executor::block_on(gate.request_unlock(&mut prompt)));
}

#[test]
fn test_unlock_resolves_false_on_cancel() {
    let gate: PinGate = PinGate::new("070528");
    let mut prompt = ScriptedPrompt {
        attempts: VecDeque::from([Some(String::from("999999")), None]),
    };

    assert!(!futures::executor::block_on(gate.request_unlock(&mut prompt)));
}

#[test]
fn test_verify_trims_whitespace_but_requires_exact_code() {
    let gate: PinGate = PinGate::new("070528");

    assert!(gate.verify(" 070528 "));
    assert!(!gate.verify("70528"));
    assert!(!gate.verify("0705280"));
}
