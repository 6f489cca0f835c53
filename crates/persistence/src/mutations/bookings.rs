// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations, including the auto-checkout sweep.

use diesel::prelude::*;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::convert::format_stored_timestamp;
use crate::data_models::SweepOutcome;
use crate::diesel_schema::{bookings, rooms};
use crate::error::PersistenceError;
use crate::sqlite;
use frontdesk_domain::{Booking, BookingStatus, RoomStatus};

/// Creates a new booking.
///
/// This inserts the booking row only; the caller flips the room to
/// occupied afterwards. The ordering is deliberate: the booking insert
/// precedes the room-status update, and a failure between the two
/// leaves an active booking on a room still marked available.
///
/// # Errors
///
/// Returns an error if the booking cannot be created.
pub fn create_booking(
    conn: &mut SqliteConnection,
    booking: &Booking,
) -> Result<i64, PersistenceError> {
    info!(
        room_id = booking.room_id,
        guest_id = booking.guest_id,
        "Creating booking"
    );

    diesel::insert_into(bookings::table)
        .values((
            bookings::room_id.eq(booking.room_id),
            bookings::guest_id.eq(booking.guest_id),
            bookings::check_in.eq(format_stored_timestamp(
                booking.check_in,
                "bookings.check_in",
            )?),
            bookings::check_out.eq(format_stored_timestamp(
                booking.check_out,
                "bookings.check_out",
            )?),
            bookings::total_amount.eq(booking.total_amount.to_string()),
            bookings::status.eq(booking.status.as_str()),
            bookings::payment_status.eq(booking.payment_status.as_str()),
            bookings::created_by.eq(booking.created_by),
            bookings::created_at.eq(format_stored_timestamp(
                booking.created_at,
                "bookings.created_at",
            )?),
        ))
        .execute(conn)?;

    let booking_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(booking_id, "Booking created");
    Ok(booking_id)
}

/// Updates a booking's room, guest, dates, total, status, and payment
/// status.
///
/// Status legality is the caller's concern; this mutation writes what
/// it is given.
///
/// # Errors
///
/// Returns an error if the update fails or the booking does not exist.
pub fn update_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
    booking: &Booking,
) -> Result<(), PersistenceError> {
    debug!("Updating booking {}", booking_id);

    let updated: usize =
        diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
            .set((
                bookings::room_id.eq(booking.room_id),
                bookings::guest_id.eq(booking.guest_id),
                bookings::check_in.eq(format_stored_timestamp(
                    booking.check_in,
                    "bookings.check_in",
                )?),
                bookings::check_out.eq(format_stored_timestamp(
                    booking.check_out,
                    "bookings.check_out",
                )?),
                bookings::total_amount.eq(booking.total_amount.to_string()),
                bookings::status.eq(booking.status.as_str()),
                bookings::payment_status.eq(booking.payment_status.as_str()),
            ))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Booking {booking_id}")));
    }
    Ok(())
}

/// Completes every active booking whose check-out time has passed and
/// frees the rooms they reference.
///
/// The booking update re-checks `status = 'active'` in its predicate,
/// so a booking completed or cancelled concurrently between selection
/// and update is left alone and running the sweep twice is harmless.
/// The room update is a separate statement: if it fails after the
/// booking update succeeded, the rooms stay occupied until a later
/// pass or a manual edit.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The sweep cutoff; bookings with `check_out <= now` expire
///
/// # Errors
///
/// Returns an error if any statement fails.
pub fn complete_expired_bookings(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> Result<SweepOutcome, PersistenceError> {
    let cutoff: String = format_stored_timestamp(now, "bookings.check_out")?;

    let expired: Vec<(i64, i64)> = bookings::table
        .filter(bookings::status.eq(BookingStatus::Active.as_str()))
        .filter(bookings::check_out.le(&cutoff))
        .select((bookings::booking_id, bookings::room_id))
        .load(conn)?;

    if expired.is_empty() {
        debug!("No expired bookings to sweep");
        return Ok(SweepOutcome {
            completed_bookings: 0,
            freed_rooms: 0,
        });
    }

    let booking_ids: Vec<i64> = expired.iter().map(|(booking_id, _)| *booking_id).collect();
    let room_ids: Vec<i64> = expired.iter().map(|(_, room_id)| *room_id).collect();

    let completed_bookings: usize = diesel::update(
        bookings::table
            .filter(bookings::booking_id.eq_any(&booking_ids))
            .filter(bookings::status.eq(BookingStatus::Active.as_str()))
            .filter(bookings::check_out.le(&cutoff)),
    )
    .set(bookings::status.eq(BookingStatus::Completed.as_str()))
    .execute(conn)?;

    let freed_rooms: usize =
        diesel::update(rooms::table.filter(rooms::room_id.eq_any(&room_ids)))
            .set(rooms::status.eq(RoomStatus::Available.as_str()))
            .execute(conn)?;

    info!(
        completed_bookings,
        freed_rooms, "Auto-checkout sweep completed expired bookings"
    );

    Ok(SweepOutcome {
        completed_bookings,
        freed_rooms,
    })
}
