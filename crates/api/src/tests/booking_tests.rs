// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle tests: creation, totals, status machine, double
//! booking.

use super::helpers::{seed_guest, seed_room, signed_in_staff, test_persistence};
use crate::error::ApiError;
use crate::handlers::{create_booking, update_booking};
use crate::request_response::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use frontdesk_domain::RoomStatus;
use frontdesk_persistence::Persistence;
use rust_decimal::Decimal;

fn booking_request(room_id: i64, guest_id: i64) -> CreateBookingRequest {
    CreateBookingRequest {
        room_id,
        guest_id,
        check_in: "2024-01-01".to_string(),
        check_out: "2024-01-03".to_string(),
    }
}

fn update_request(from: &BookingResponse) -> UpdateBookingRequest {
    UpdateBookingRequest {
        room_id: from.room_id,
        guest_id: from.guest_id,
        check_in: from.check_in.clone(),
        check_out: from.check_out.clone(),
        status: from.status.clone(),
        payment_status: from.payment_status.clone(),
    }
}

#[test]
fn test_create_booking_derives_total_and_occupies_room() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");

    // ₦20,000/night, 2024-01-01 → 2024-01-03 is 2 nights.
    let booking = create_booking(
        &mut persistence,
        booking_request(room_id, guest_id),
        &staff,
    )
    .unwrap();

    assert_eq!(booking.total_amount, Decimal::from(40_000));
    assert_eq!(booking.status, "active");
    assert_eq!(booking.payment_status, "unpaid");
    assert_eq!(booking.room_number, "101");
    assert_eq!(booking.guest_name, "Ada Obi");

    let room = persistence.get_room(room_id).unwrap().unwrap();
    assert_eq!(room.status, RoomStatus::Occupied);
}

#[test]
fn test_create_booking_rejects_inverted_dates() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");

    let mut request = booking_request(room_id, guest_id);
    request.check_in = "2024-01-03".to_string();
    request.check_out = "2024-01-01".to_string();

    assert!(matches!(
        create_booking(&mut persistence, request, &staff),
        Err(ApiError::InvalidInput { field, .. }) if field == "check_out"
    ));
}

#[test]
fn test_create_booking_rejects_unavailable_room() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");

    persistence
        .set_room_status(room_id, RoomStatus::Maintenance)
        .unwrap();

    assert!(matches!(
        create_booking(&mut persistence, booking_request(room_id, guest_id), &staff),
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "room_not_available"
    ));
}

#[test]
fn test_create_booking_rejects_overlapping_active_booking() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");
    let other_guest = seed_guest(&mut persistence, &staff, "Bola Ade");

    create_booking(
        &mut persistence,
        booking_request(room_id, guest_id),
        &staff,
    )
    .unwrap();

    // A staff edit puts the room back to available without touching
    // the active booking; the overlap check must still refuse.
    persistence
        .set_room_status(room_id, RoomStatus::Available)
        .unwrap();

    let mut overlapping = booking_request(room_id, other_guest);
    overlapping.check_in = "2024-01-02".to_string();
    overlapping.check_out = "2024-01-04".to_string();

    assert!(matches!(
        create_booking(&mut persistence, overlapping, &staff),
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "room_double_booked"
    ));
}

#[test]
fn test_create_booking_missing_room_or_guest() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");

    assert!(matches!(
        create_booking(&mut persistence, booking_request(404, 1), &staff),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        create_booking(&mut persistence, booking_request(room_id, 404), &staff),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_manual_completion_allowed_regardless_of_dates() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");

    let booking = create_booking(
        &mut persistence,
        booking_request(room_id, guest_id),
        &staff,
    )
    .unwrap();

    let mut request = update_request(&booking);
    request.status = "completed".to_string();

    let updated = update_booking(&mut persistence, booking.booking_id, request, &staff).unwrap();
    assert_eq!(updated.status, "completed");
    // Unchanged stay keeps its total.
    assert_eq!(updated.total_amount, Decimal::from(40_000));
}

#[test]
fn test_terminal_booking_cannot_return_to_active() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");

    let booking = create_booking(
        &mut persistence,
        booking_request(room_id, guest_id),
        &staff,
    )
    .unwrap();

    let mut cancel = update_request(&booking);
    cancel.status = "cancelled".to_string();
    update_booking(&mut persistence, booking.booking_id, cancel, &staff).unwrap();

    for illegal in ["active", "completed"] {
        let current = crate::handlers::get_booking(&mut persistence, booking.booking_id).unwrap();
        let mut request = update_request(&current);
        request.status = illegal.to_string();
        assert!(matches!(
            update_booking(&mut persistence, booking.booking_id, request, &staff),
            Err(ApiError::DomainRuleViolation { rule, .. })
                if rule == "booking_status_transition"
        ));
    }
}

#[test]
fn test_update_recomputes_total_only_when_stay_changes() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");

    let booking = create_booking(
        &mut persistence,
        booking_request(room_id, guest_id),
        &staff,
    )
    .unwrap();

    // Payment status alone: total untouched.
    let mut pay = update_request(&booking);
    pay.payment_status = "paid".to_string();
    let paid = update_booking(&mut persistence, booking.booking_id, pay, &staff).unwrap();
    assert_eq!(paid.total_amount, Decimal::from(40_000));

    // Extending the stay to 4 nights recomputes against the rate.
    let mut extend = update_request(&paid);
    extend.check_out = "2024-01-05".to_string();
    let extended = update_booking(&mut persistence, booking.booking_id, extend, &staff).unwrap();
    assert_eq!(extended.total_amount, Decimal::from(80_000));
}
