// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room mutations.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::rooms;
use crate::error::PersistenceError;
use crate::sqlite;
use frontdesk_domain::{Room, RoomStatus};

/// Creates a new room.
///
/// # Errors
///
/// Returns an error if the room cannot be created (e.g. the room
/// number is already taken).
pub fn create_room(conn: &mut SqliteConnection, room: &Room) -> Result<i64, PersistenceError> {
    info!(
        "Creating room {} ({}, rate {})",
        room.room_number, room.room_type, room.rate
    );

    diesel::insert_into(rooms::table)
        .values((
            rooms::room_number.eq(&room.room_number),
            rooms::room_type.eq(room.room_type.as_str()),
            rooms::rate.eq(room.rate.to_string()),
            rooms::status.eq(room.status.as_str()),
        ))
        .execute(conn)?;

    let room_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(room_id, "Room created");
    Ok(room_id)
}

/// Updates a room's number, type, rate, and status.
///
/// # Errors
///
/// Returns an error if the update fails or the room does not exist.
pub fn update_room(
    conn: &mut SqliteConnection,
    room_id: i64,
    room: &Room,
) -> Result<(), PersistenceError> {
    debug!("Updating room {}", room_id);

    let updated: usize = diesel::update(rooms::table.filter(rooms::room_id.eq(room_id)))
        .set((
            rooms::room_number.eq(&room.room_number),
            rooms::room_type.eq(room.room_type.as_str()),
            rooms::rate.eq(room.rate.to_string()),
            rooms::status.eq(room.status.as_str()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Room {room_id}")));
    }
    Ok(())
}

/// Sets a room's availability status.
///
/// # Errors
///
/// Returns an error if the update fails or the room does not exist.
pub fn set_room_status(
    conn: &mut SqliteConnection,
    room_id: i64,
    status: RoomStatus,
) -> Result<(), PersistenceError> {
    debug!("Setting room {} status to {}", room_id, status);

    let updated: usize = diesel::update(rooms::table.filter(rooms::room_id.eq(room_id)))
        .set(rooms::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Room {room_id}")));
    }
    Ok(())
}
