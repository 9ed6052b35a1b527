// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_moment, create_test_night, create_test_state};
use crate::{AppState, Command, apply, expired_moments, room_flag_corrections, sweep};
use room_desk_domain::{BookingId, BookingStatus};
use time::Duration;
use time::macros::{date, datetime};

#[test]
fn test_expired_moment_is_completed_and_room_freed() {
    let state: AppState = create_test_state("1", "101");
    let start = datetime!(2024-03-01 14:00);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", start),
        },
        start,
    );

    let after_end = start + Duration::hours(2);
    let next: AppState = sweep(&occupied, after_end);

    assert_eq!(next.moments[0].status, BookingStatus::Completed);
    assert!(next.rooms[0].is_available);
    assert!(next.rooms[0].is_clean);
}

#[test]
fn test_flags_stay_stale_until_a_sweep_runs() {
    // The 60s sweep cadence means derived flags can lag reality by up to
    // one interval. That staleness window is an accepted property, not a
    // bug; this test pins it down.
    let state: AppState = create_test_state("1", "101");
    let start = datetime!(2024-03-01 14:00);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", start),
        },
        start,
    );

    // window elapsed, no sweep yet: stored flags still say occupied
    assert!(!occupied.rooms[0].is_available);
    assert_eq!(occupied.moments[0].status, BookingStatus::Active);
}

#[test]
fn test_full_moment_lifecycle_with_extension() {
    // create room -> book -> extend -> expire -> sweep
    let state: AppState = create_test_state("1", "101");
    let start = datetime!(2024-03-01 14:00);

    let booked: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", start),
        },
        start,
    );
    assert!(!booked.rooms[0].is_available);
    assert!(!booked.rooms[0].is_clean);

    let extended: AppState = apply(
        &booked,
        Command::ExtendMoment {
            id: BookingId::new("m1"),
            multiplier: 2,
        },
        start + Duration::minutes(30),
    );
    assert_eq!(extended.moments[0].price, 3000);
    assert!(!extended.rooms[0].is_available);

    // the original 2h mark passes: still occupied thanks to the extension
    let mid_sweep: AppState = sweep(&extended, start + Duration::hours(3));
    assert_eq!(mid_sweep.moments[0].status, BookingStatus::Active);
    assert!(!mid_sweep.rooms[0].is_available);

    // the extended window elapses
    let final_sweep: AppState = sweep(&mid_sweep, start + Duration::hours(4));
    assert_eq!(final_sweep.moments[0].status, BookingStatus::Completed);
    assert!(final_sweep.rooms[0].is_available);
    assert!(final_sweep.rooms[0].is_clean);
}

#[test]
fn test_nights_never_auto_complete() {
    let state: AppState = create_test_state("1", "101");
    let now = datetime!(2024-03-01 12:00);
    let occupied: AppState = apply(
        &state,
        Command::AddNight {
            night: create_test_night("n1", "1", date!(2024-03-01), date!(2024-03-02)),
        },
        now,
    );

    let after_checkout = datetime!(2024-03-03 08:00);
    let next: AppState = sweep(&occupied, after_checkout);

    // the room frees up, but the night waits for a manual completion
    assert_eq!(next.nights[0].status, BookingStatus::Active);
    assert!(next.rooms[0].is_available);
    assert!(next.rooms[0].is_clean);
}

#[test]
fn test_sweep_overwrites_manual_override_on_unoccupied_room() {
    let mut state: AppState = create_test_state("1", "101");
    state.rooms[0].is_clean = false;

    let next: AppState = sweep(&state, datetime!(2024-03-01 12:00));

    assert!(next.rooms[0].is_available);
    assert!(next.rooms[0].is_clean);
}

#[test]
fn test_sweep_is_idempotent_on_a_settled_state() {
    let state: AppState = create_test_state("1", "101");
    let start = datetime!(2024-03-01 14:00);
    let occupied: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", start),
        },
        start,
    );

    let now = start + Duration::hours(2);
    let once: AppState = sweep(&occupied, now);
    let twice: AppState = sweep(&once, now);

    assert_eq!(once, twice);
}

#[test]
fn test_expired_moments_only_touch_elapsed_active_ones() {
    let state: AppState = create_test_state("1", "101");
    let start = datetime!(2024-03-01 14:00);
    let mut current: AppState = apply(
        &state,
        Command::AddMoment {
            moment: create_test_moment("m1", "1", start),
        },
        start,
    );
    let mut cancelled = create_test_moment("m2", "1", start);
    cancelled.status = BookingStatus::Cancelled;
    current = apply(&current, Command::AddMoment { moment: cancelled }, start);
    current = apply(
        &current,
        Command::AddMoment {
            moment: create_test_moment("m3", "1", start + Duration::hours(1)),
        },
        start,
    );

    let expired = expired_moments(&current, start + Duration::hours(2));

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].id, BookingId::new("m1"));
    assert_eq!(expired[0].status, BookingStatus::Completed);
}

#[test]
fn test_no_corrections_planned_when_flags_match() {
    let state: AppState = create_test_state("1", "101");
    let corrections = room_flag_corrections(&state, datetime!(2024-03-01 12:00));
    assert!(corrections.is_empty());
}
