// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.
//!
//! Timestamp comparisons are done on the stored ISO 8601 strings,
//! which share one fixed-width UTC format and therefore order
//! correctly as text.

use diesel::prelude::*;
use std::str::FromStr;
use tracing::debug;

use crate::convert::{parse_amount, parse_stored_timestamp, serialization_error};
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use frontdesk_domain::{Booking, BookingStatus, PaymentStatus};

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
struct BookingRow {
    booking_id: i64,
    room_id: i64,
    guest_id: i64,
    check_in: String,
    check_out: String,
    total_amount: String,
    status: String,
    payment_status: String,
    created_by: i64,
    created_at: String,
}

fn booking_from_row(row: BookingRow) -> Result<Booking, PersistenceError> {
    Ok(Booking {
        booking_id: Some(row.booking_id),
        room_id: row.room_id,
        guest_id: row.guest_id,
        check_in: parse_stored_timestamp(&row.check_in, "bookings.check_in")?,
        check_out: parse_stored_timestamp(&row.check_out, "bookings.check_out")?,
        total_amount: parse_amount(&row.total_amount, "bookings.total_amount")?,
        status: BookingStatus::from_str(&row.status)
            .map_err(|e| serialization_error("bookings.status", e))?,
        payment_status: PaymentStatus::parse(&row.payment_status)
            .map_err(|e| serialization_error("bookings.payment_status", e))?,
        created_by: row.created_by,
        created_at: parse_stored_timestamp(&row.created_at, "bookings.created_at")?,
    })
}

/// Retrieves a booking by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is corrupt.
/// Returns `Ok(None)` if the booking is not found.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<Booking>, PersistenceError> {
    debug!("Looking up booking by id: {}", booking_id);

    let result: Result<BookingRow, diesel::result::Error> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(booking_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all bookings, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is corrupt.
pub fn list_bookings(conn: &mut SqliteConnection) -> Result<Vec<Booking>, PersistenceError> {
    debug!("Listing all bookings");

    let rows: Vec<BookingRow> = bookings::table
        .select(BookingRow::as_select())
        .order_by(bookings::created_at.desc())
        .load(conn)?;

    rows.into_iter().map(booking_from_row).collect()
}

/// Lists bookings with status active, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is corrupt.
pub fn list_active_bookings(
    conn: &mut SqliteConnection,
) -> Result<Vec<Booking>, PersistenceError> {
    debug!("Listing active bookings");

    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::status.eq(BookingStatus::Active.as_str()))
        .select(BookingRow::as_select())
        .order_by(bookings::created_at.desc())
        .load(conn)?;

    rows.into_iter().map(booking_from_row).collect()
}

/// Lists the most recent bookings, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is corrupt.
pub fn list_recent_bookings(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<Booking>, PersistenceError> {
    debug!("Listing {} most recent bookings", limit);

    let rows: Vec<BookingRow> = bookings::table
        .select(BookingRow::as_select())
        .order_by(bookings::created_at.desc())
        .limit(limit)
        .load(conn)?;

    rows.into_iter().map(booking_from_row).collect()
}

/// Lists bookings whose stay interval overlaps the given range.
///
/// A booking overlaps when `check_in <= range_end` and
/// `check_out >= range_start`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `range_start` - Range start as a stored-format timestamp string
/// * `range_end` - Range end as a stored-format timestamp string
///
/// # Errors
///
/// Returns an error if the database query fails or a row is corrupt.
pub fn list_bookings_overlapping(
    conn: &mut SqliteConnection,
    range_start: &str,
    range_end: &str,
) -> Result<Vec<Booking>, PersistenceError> {
    debug!(
        "Listing bookings overlapping {} .. {}",
        range_start, range_end
    );

    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::check_in.le(range_end))
        .filter(bookings::check_out.ge(range_start))
        .select(BookingRow::as_select())
        .order_by(bookings::check_in.asc())
        .load(conn)?;

    rows.into_iter().map(booking_from_row).collect()
}

/// Checks whether a room has an active booking overlapping the given
/// stay interval.
///
/// Intervals touch-but-not-overlap at the boundary: a stay checking in
/// exactly when another checks out is not a conflict.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room to check
/// * `check_in` - Proposed check-in as a stored-format timestamp string
/// * `check_out` - Proposed check-out as a stored-format timestamp string
/// * `exclude_booking_id` - A booking to ignore (the one being edited)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn has_active_overlap(
    conn: &mut SqliteConnection,
    room_id: i64,
    check_in: &str,
    check_out: &str,
    exclude_booking_id: Option<i64>,
) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    debug!(
        "Checking active booking overlap for room {} over {} .. {}",
        room_id, check_in, check_out
    );

    let mut query = bookings::table
        .filter(bookings::room_id.eq(room_id))
        .filter(bookings::status.eq(BookingStatus::Active.as_str()))
        .filter(bookings::check_in.lt(check_out))
        .filter(bookings::check_out.gt(check_in))
        .select(count(bookings::booking_id))
        .into_boxed();

    if let Some(exclude) = exclude_booking_id {
        query = query.filter(bookings::booking_id.ne(exclude));
    }

    let overlapping: i64 = query.first(conn)?;

    Ok(overlapping > 0)
}

/// Counts bookings with status active.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_active_bookings(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = bookings::table
        .filter(bookings::status.eq(BookingStatus::Active.as_str()))
        .select(count(bookings::booking_id))
        .first(conn)?;

    Ok(count)
}
