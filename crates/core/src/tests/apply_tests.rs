// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_category, create_test_item, create_test_moment, create_test_night,
    create_test_room, create_test_state,
};
use crate::{AppState, Command, apply};
use room_desk_domain::{BookingId, BookingStatus, MenuCategoryId, RoomId, Settings};
use time::macros::{date, datetime, time};

#[test]
fn test_add_room_appends_without_derived_effects() {
    let state: AppState = create_test_state("1", "101");
    let next: AppState = apply(
        &state,
        Command::AddRoom {
            room: create_test_room("2", "102"),
        },
        datetime!(2024-03-01 12:00),
    );

    assert_eq!(next.rooms.len(), 2);
    assert_eq!(next.rooms[1].number, "102");
    // the input state is untouched
    assert_eq!(state.rooms.len(), 1);
}

#[test]
fn test_update_room_replaces_by_id() {
    let state: AppState = create_test_state("1", "101");
    let mut renumbered = create_test_room("1", "101bis");
    renumbered.is_clean = false;

    let next: AppState = apply(
        &state,
        Command::UpdateRoom { room: renumbered },
        datetime!(2024-03-01 12:00),
    );

    assert_eq!(next.rooms[0].number, "101bis");
    assert!(!next.rooms[0].is_clean);
}

#[test]
fn test_update_room_with_unknown_id_is_a_noop() {
    let state: AppState = create_test_state("1", "101");
    let next: AppState = apply(
        &state,
        Command::UpdateRoom {
            room: create_test_room("9", "909"),
        },
        datetime!(2024-03-01 12:00),
    );

    assert_eq!(next, state);
}

#[test]
fn test_delete_room_removes_by_id() {
    let state: AppState = create_test_state("1", "101");
    let next: AppState = apply(
        &state,
        Command::DeleteRoom {
            id: RoomId::new("1"),
        },
        datetime!(2024-03-01 12:00),
    );

    assert!(next.rooms.is_empty());
}

#[test]
fn test_add_moment_marks_room_occupied_and_dirty() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 14:00);

    let next: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", now),
        },
        now,
    );

    assert_eq!(next.moments.len(), 1);
    assert!(!next.rooms[0].is_available);
    assert!(!next.rooms[0].is_clean);
}

#[test]
fn test_cancelling_a_moment_frees_the_room() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 14:00);
    let moment = create_test_moment("m1", "1", now);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: moment.clone(),
        },
        now,
    );

    let mut cancelled = moment;
    cancelled.status = BookingStatus::Cancelled;
    let next: AppState = apply(
        &occupied,
        Command::UpdateMoment { moment: cancelled },
        now,
    );

    assert!(next.rooms[0].is_available);
    assert!(next.rooms[0].is_clean);
}

#[test]
fn test_deleting_last_covering_booking_frees_the_room() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 14:30);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", datetime!(2024-03-01 14:00)),
        },
        now,
    );
    assert!(!occupied.rooms[0].is_available);

    let next: AppState = apply(
        &occupied,
        Command::DeleteMoment {
            id: BookingId::new("m1"),
        },
        now,
    );

    assert!(next.moments.is_empty());
    assert!(next.rooms[0].is_available);
    assert!(next.rooms[0].is_clean);
}

#[test]
fn test_deleting_one_of_two_covering_bookings_keeps_room_occupied() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 14:30);
    let mut current: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", datetime!(2024-03-01 14:00)),
        },
        now,
    );
    current = apply(
        &current,
        Command::AddNight {
            night: create_test_night("n1", "1", date!(2024-03-01), date!(2024-03-02)),
        },
        now,
    );

    let next: AppState = apply(
        &current,
        Command::DeleteMoment {
            id: BookingId::new("m1"),
        },
        now,
    );

    assert!(!next.rooms[0].is_available);
    assert!(!next.rooms[0].is_clean);
}

#[test]
fn test_delete_moment_with_unknown_id_changes_nothing() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 14:00);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", now),
        },
        now,
    );

    let next: AppState = apply(
        &occupied,
        Command::DeleteMoment {
            id: BookingId::new("missing"),
        },
        now,
    );

    assert_eq!(next, occupied);
}

#[test]
fn test_extend_moment_scales_price_and_end_time() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 14:10);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", datetime!(2024-03-01 14:00)),
        },
        now,
    );

    let next: AppState = apply(
        &occupied,
        Command::ExtendMoment {
            id: BookingId::new("m1"),
            multiplier: 2,
        },
        now,
    );

    let extended = &next.moments[0];
    assert_eq!(extended.multiplier, 2);
    assert_eq!(extended.price, 3000);
    assert_eq!(extended.actual_end_time, Some(time!(18:00)));
    // the room is assumed still occupied after an extension
    assert!(!next.rooms[0].is_available);
}

#[test]
fn test_extend_moment_prices_from_current_settings() {
    let mut state: AppState = create_test_state("1", "101");
    state.settings.moment_price = 2000;
    let now = datetime!(2024-03-01 14:10);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", datetime!(2024-03-01 14:00)),
        },
        now,
    );

    let next: AppState = apply(
        &occupied,
        Command::ExtendMoment {
            id: BookingId::new("m1"),
            multiplier: 3,
        },
        now,
    );

    assert_eq!(next.moments[0].price, 6000);
}

#[test]
fn test_update_settings_never_reprices_existing_bookings() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 14:00);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", now),
        },
        now,
    );

    let next: AppState = apply(
        &occupied,
        Command::UpdateSettings {
            settings: Settings {
                moment_price: 9000,
                ..Settings::default()
            },
        },
        now,
    );

    assert_eq!(next.settings.moment_price, 9000);
    assert_eq!(next.moments[0].price, 1500);
}

#[test]
fn test_add_night_marks_room_occupied_and_dirty() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 12:00);

    let next: AppState = apply(
        &state,
        Command::AddNight {
            night: create_test_night("n1", "1", date!(2024-03-01), date!(2024-03-03)),
        },
        now,
    );

    assert_eq!(next.nights.len(), 1);
    assert!(!next.rooms[0].is_available);
    assert!(!next.rooms[0].is_clean);
}

#[test]
fn test_completing_a_night_frees_the_room() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-02 12:00);
    let night = create_test_night("n1", "1", date!(2024-03-01), date!(2024-03-03));
    let occupied: AppState = apply(
        &state,
        Command::AddNight {
            night: night.clone(),
        },
        now,
    );

    let mut completed = night;
    completed.status = BookingStatus::Completed;
    let next: AppState = apply(&occupied, Command::UpdateNight { night: completed }, now);

    assert!(next.rooms[0].is_available);
    assert!(next.rooms[0].is_clean);
}

#[test]
fn test_delete_night_with_unknown_id_changes_nothing() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 12:00);

    let next: AppState = apply(
        &state,
        Command::DeleteNight {
            id: BookingId::new("missing"),
        },
        now,
    );

    assert_eq!(next, state);
}

#[test]
fn test_delete_menu_category_cascades_to_its_items() {
    let mut state: AppState = AppState::initial();
    state.menu_categories = vec![
        create_test_category("c1", "Entrées"),
        create_test_category("c2", "Boissons"),
    ];
    state.menu_items = vec![
        create_test_item("i1", "c1", "Griot"),
        create_test_item("i2", "c1", "Accra"),
        create_test_item("i3", "c2", "Jus de grenadia"),
    ];

    let next: AppState = apply(
        &state,
        Command::DeleteMenuCategory {
            id: MenuCategoryId::new("c1"),
        },
        datetime!(2024-03-01 12:00),
    );

    assert_eq!(next.menu_categories.len(), 1);
    assert_eq!(next.menu_items.len(), 1);
    assert_eq!(next.menu_items[0].name, "Jus de grenadia");
}

#[test]
fn test_update_menu_item_replaces_by_id() {
    let mut state: AppState = AppState::initial();
    state.menu_categories = vec![create_test_category("c1", "Entrées")];
    state.menu_items = vec![create_test_item("i1", "c1", "Griot")];

    let mut repriced = create_test_item("i1", "c1", "Griot");
    repriced.price = 600;
    let next: AppState = apply(
        &state,
        Command::UpdateMenuItem { item: repriced },
        datetime!(2024-03-01 12:00),
    );

    assert_eq!(next.menu_items[0].price, 600);
}

#[test]
fn test_load_data_replaces_the_aggregate_wholesale() {
    let state: AppState = create_test_state("1", "101");
    let replacement: AppState = create_test_state("7", "707");

    let next: AppState = apply(
        &state,
        Command::LoadData {
            state: replacement.clone(),
        },
        datetime!(2024-03-01 12:00),
    );

    assert_eq!(next, replacement);
}

#[test]
fn test_set_authenticated_flips_the_session_flag() {
    let state: AppState = AppState::initial();
    let next: AppState = apply(
        &state,
        Command::SetAuthenticated {
            authenticated: true,
        },
        datetime!(2024-03-01 12:00),
    );

    assert!(next.is_authenticated);
}

#[test]
fn test_update_room_status_auto_patches_only_flags() {
    let state: AppState = create_test_state("1", "101");
    let next: AppState = apply(
        &state,
        Command::UpdateRoomStatusAuto {
            room_id: RoomId::new("1"),
            is_available: false,
            is_clean: false,
        },
        datetime!(2024-03-01 12:00),
    );

    assert!(!next.rooms[0].is_available);
    assert!(!next.rooms[0].is_clean);
    assert_eq!(next.rooms[0].number, "101");
}
