// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest mutations.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::guests;
use crate::error::PersistenceError;
use crate::sqlite;
use frontdesk_domain::Guest;

/// Creates a new guest record.
///
/// # Errors
///
/// Returns an error if the guest cannot be created.
pub fn create_guest(conn: &mut SqliteConnection, guest: &Guest) -> Result<i64, PersistenceError> {
    info!("Creating guest {}", guest.full_name);

    diesel::insert_into(guests::table)
        .values((
            guests::full_name.eq(&guest.full_name),
            guests::email.eq(&guest.email),
            guests::phone.eq(&guest.phone),
            guests::address.eq(&guest.address),
        ))
        .execute(conn)?;

    let guest_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(guest_id, "Guest created");
    Ok(guest_id)
}

/// Updates a guest's contact details.
///
/// # Errors
///
/// Returns an error if the update fails or the guest does not exist.
pub fn update_guest(
    conn: &mut SqliteConnection,
    guest_id: i64,
    guest: &Guest,
) -> Result<(), PersistenceError> {
    debug!("Updating guest {}", guest_id);

    let updated: usize = diesel::update(guests::table.filter(guests::guest_id.eq(guest_id)))
        .set((
            guests::full_name.eq(&guest.full_name),
            guests::email.eq(&guest.email),
            guests::phone.eq(&guest.phone),
            guests::address.eq(&guest.address),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Guest {guest_id}")));
    }
    Ok(())
}
