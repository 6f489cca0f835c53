// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room queries.

use diesel::prelude::*;
use tracing::debug;

use crate::convert::{parse_amount, serialization_error};
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;
use frontdesk_domain::{Room, RoomStatus, RoomType};

/// Diesel Queryable struct for room rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
struct RoomRow {
    room_id: i64,
    room_number: String,
    room_type: String,
    rate: String,
    status: String,
}

fn room_from_row(row: RoomRow) -> Result<Room, PersistenceError> {
    Ok(Room {
        room_id: Some(row.room_id),
        room_number: row.room_number,
        room_type: RoomType::parse(&row.room_type)
            .map_err(|e| serialization_error("rooms.room_type", e))?,
        rate: parse_amount(&row.rate, "rooms.rate")?,
        status: RoomStatus::parse(&row.status)
            .map_err(|e| serialization_error("rooms.status", e))?,
    })
}

/// Retrieves a room by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is corrupt.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room(
    conn: &mut SqliteConnection,
    room_id: i64,
) -> Result<Option<Room>, PersistenceError> {
    debug!("Looking up room by id: {}", room_id);

    let result: Result<RoomRow, diesel::result::Error> = rooms::table
        .filter(rooms::room_id.eq(room_id))
        .select(RoomRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(room_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a room by its display number.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is corrupt.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room_by_number(
    conn: &mut SqliteConnection,
    room_number: &str,
) -> Result<Option<Room>, PersistenceError> {
    debug!("Looking up room by number: {}", room_number);

    let result: Result<RoomRow, diesel::result::Error> = rooms::table
        .filter(rooms::room_number.eq(room_number))
        .select(RoomRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(room_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all rooms ordered by room number.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is corrupt.
pub fn list_rooms(conn: &mut SqliteConnection) -> Result<Vec<Room>, PersistenceError> {
    debug!("Listing all rooms");

    let rows: Vec<RoomRow> = rooms::table
        .select(RoomRow::as_select())
        .order_by(rooms::room_number.asc())
        .load(conn)?;

    rows.into_iter().map(room_from_row).collect()
}

/// Counts all rooms.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_rooms(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = rooms::table
        .select(count(rooms::room_id))
        .first(conn)?;

    Ok(count)
}

/// Counts rooms currently marked occupied.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_occupied_rooms(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = rooms::table
        .filter(rooms::status.eq(RoomStatus::Occupied.as_str()))
        .select(count(rooms::room_id))
        .first(conn)?;

    Ok(count)
}
