// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account, staff, and session queries.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{AccountData, SessionData, StaffData};
use crate::diesel_schema::{auth_accounts, sessions, staff};
use crate::error::PersistenceError;

/// Diesel Queryable struct for auth account rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = auth_accounts)]
struct AccountRow {
    account_id: i64,
    email: String,
    password_hash: String,
    created_at: String,
}

/// Diesel Queryable struct for staff rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = staff)]
struct StaffRow {
    staff_id: i64,
    account_id: i64,
    email: String,
    full_name: String,
    role: String,
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
struct SessionRow {
    session_id: i64,
    session_token: String,
    account_id: i64,
    created_at: String,
    last_activity_at: String,
    expires_at: String,
}

fn account_from_row(row: AccountRow) -> AccountData {
    AccountData {
        account_id: row.account_id,
        email: row.email,
        password_hash: row.password_hash,
        created_at: row.created_at,
    }
}

fn staff_from_row(row: StaffRow) -> StaffData {
    StaffData {
        staff_id: row.staff_id,
        account_id: row.account_id,
        email: row.email,
        full_name: row.full_name,
        role: row.role,
    }
}

fn session_from_row(row: SessionRow) -> SessionData {
    SessionData {
        session_id: row.session_id,
        session_token: row.session_token,
        account_id: row.account_id,
        created_at: row.created_at,
        last_activity_at: row.last_activity_at,
        expires_at: row.expires_at,
    }
}

/// Retrieves an auth account by email.
///
/// Emails are normalized to lowercase for case-insensitive lookup.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    let normalized: String = email.to_lowercase();

    debug!("Looking up account by email: {}", normalized);

    let result: Result<AccountRow, diesel::result::Error> = auth_accounts::table
        .filter(auth_accounts::email.eq(&normalized))
        .select(AccountRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(account_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves an auth account by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_id(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!("Looking up account by id: {}", account_id);

    let result: Result<AccountRow, diesel::result::Error> = auth_accounts::table
        .filter(auth_accounts::account_id.eq(account_id))
        .select(AccountRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(account_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a staff record by email.
///
/// Emails are normalized to lowercase for case-insensitive lookup.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no staff record exists.
pub fn get_staff_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<StaffData>, PersistenceError> {
    let normalized: String = email.to_lowercase();

    debug!("Looking up staff by email: {}", normalized);

    let result: Result<StaffRow, diesel::result::Error> = staff::table
        .filter(staff::email.eq(&normalized))
        .select(StaffRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(staff_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves the staff record linked to an auth account.
///
/// Sign-in requires this record to exist: an account without one is an
/// orphan and is refused a session.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no staff record is linked to the account.
pub fn get_staff_by_account(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<StaffData>, PersistenceError> {
    debug!("Looking up staff by account id: {}", account_id);

    let result: Result<StaffRow, diesel::result::Error> = staff::table
        .filter(staff::account_id.eq(account_id))
        .select(StaffRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(staff_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a staff record by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the staff record is not found.
pub fn get_staff_by_id(
    conn: &mut SqliteConnection,
    staff_id: i64,
) -> Result<Option<StaffData>, PersistenceError> {
    debug!("Looking up staff by id: {}", staff_id);

    let result: Result<StaffRow, diesel::result::Error> = staff::table
        .filter(staff::staff_id.eq(staff_id))
        .select(StaffRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(staff_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a session by token.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    debug!("Looking up session by token");

    let result: Result<SessionRow, diesel::result::Error> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(session_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Verifies a password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if password verification itself fails (a malformed
/// hash, not a mismatch).
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
