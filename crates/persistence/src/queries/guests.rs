// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest queries.

use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::guests;
use crate::error::PersistenceError;
use frontdesk_domain::Guest;

/// Diesel Queryable struct for guest rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = guests)]
struct GuestRow {
    guest_id: i64,
    full_name: String,
    email: String,
    phone: String,
    address: String,
}

fn guest_from_row(row: GuestRow) -> Guest {
    Guest {
        guest_id: Some(row.guest_id),
        full_name: row.full_name,
        email: row.email,
        phone: row.phone,
        address: row.address,
    }
}

/// Retrieves a guest by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the guest is not found.
pub fn get_guest(
    conn: &mut SqliteConnection,
    guest_id: i64,
) -> Result<Option<Guest>, PersistenceError> {
    debug!("Looking up guest by id: {}", guest_id);

    let result: Result<GuestRow, diesel::result::Error> = guests::table
        .filter(guests::guest_id.eq(guest_id))
        .select(GuestRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(guest_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all guests ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_guests(conn: &mut SqliteConnection) -> Result<Vec<Guest>, PersistenceError> {
    debug!("Listing all guests");

    let rows: Vec<GuestRow> = guests::table
        .select(GuestRow::as_select())
        .order_by(guests::full_name.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(guest_from_row).collect())
}

/// Counts all guests.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_guests(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = guests::table
        .select(count(guests::guest_id))
        .first(conn)?;

    Ok(count)
}
