// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer tests over in-memory databases.

#![allow(clippy::unwrap_used)]

mod staff_tests;

use crate::Persistence;
use frontdesk_domain::{Booking, BookingStatus, Guest, PaymentStatus, Room, RoomType};
use rust_decimal::Decimal;
use time::OffsetDateTime;

/// Creates an isolated in-memory persistence instance.
pub(crate) fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Creates an account and linked staff record, returning the staff id.
pub(crate) fn seed_staff(persistence: &mut Persistence, email: &str) -> i64 {
    let account_id = persistence.create_account(email, "a sufficiently long password").unwrap();
    persistence
        .create_staff(account_id, email, "Test Staff", "receptionist")
        .unwrap()
}

/// Creates a standard room at ₦20,000/night, returning its id.
pub(crate) fn seed_room(persistence: &mut Persistence, room_number: &str) -> i64 {
    let room = Room::new(
        room_number.to_string(),
        RoomType::Standard,
        Decimal::from(20_000),
    );
    persistence.create_room(&room).unwrap()
}

/// Creates a guest, returning their id.
pub(crate) fn seed_guest(persistence: &mut Persistence, full_name: &str) -> i64 {
    let guest = Guest {
        guest_id: None,
        full_name: full_name.to_string(),
        email: format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
        phone: "+2348000000000".to_string(),
        address: "12 Marina Road, Lagos".to_string(),
    };
    persistence.create_guest(&guest).unwrap()
}

/// Builds an unpersisted active booking with a ₦40,000 total.
pub(crate) fn build_booking(
    room_id: i64,
    guest_id: i64,
    staff_id: i64,
    check_in: OffsetDateTime,
    check_out: OffsetDateTime,
) -> Booking {
    Booking {
        booking_id: None,
        room_id,
        guest_id,
        check_in,
        check_out,
        total_amount: Decimal::from(40_000),
        status: BookingStatus::Active,
        payment_status: PaymentStatus::Unpaid,
        created_by: staff_id,
        created_at: check_in,
    }
}
