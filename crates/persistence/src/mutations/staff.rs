// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account, staff, and session mutations.

use diesel::prelude::*;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::convert::format_stored_timestamp;
use crate::diesel_schema::{auth_accounts, sessions, staff};
use crate::error::PersistenceError;
use crate::sqlite;

/// Creates an authentication account.
///
/// The email is normalized to lowercase for case-insensitive
/// uniqueness; the password is hashed with bcrypt before storage.
///
/// # Errors
///
/// Returns an error if the account cannot be created or the email is
/// already taken.
pub fn create_account(
    conn: &mut SqliteConnection,
    email: &str,
    password: &str,
) -> Result<i64, PersistenceError> {
    let normalized: String = email.to_lowercase();

    info!("Creating auth account for {}", normalized);

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    let created_at: String =
        format_stored_timestamp(OffsetDateTime::now_utc(), "auth_accounts.created_at")?;

    diesel::insert_into(auth_accounts::table)
        .values((
            auth_accounts::email.eq(&normalized),
            auth_accounts::password_hash.eq(&password_hash),
            auth_accounts::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let account_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(account_id, "Auth account created");
    Ok(account_id)
}

/// Updates an account's password hash.
///
/// # Errors
///
/// Returns an error if the update fails or the account does not exist.
pub fn update_account_password(
    conn: &mut SqliteConnection,
    account_id: i64,
    new_password: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating password for account {}", account_id);

    let password_hash: String = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    let updated: usize =
        diesel::update(auth_accounts::table.filter(auth_accounts::account_id.eq(account_id)))
            .set(auth_accounts::password_hash.eq(&password_hash))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Account {account_id}")));
    }
    Ok(())
}

/// Creates a staff record linked to an auth account.
///
/// # Errors
///
/// Returns an error if the staff record cannot be created (e.g. the
/// email or account link is already taken).
pub fn create_staff(
    conn: &mut SqliteConnection,
    account_id: i64,
    email: &str,
    full_name: &str,
    role: &str,
) -> Result<i64, PersistenceError> {
    let normalized: String = email.to_lowercase();

    info!(
        "Creating staff record for {} (role {})",
        normalized, role
    );

    diesel::insert_into(staff::table)
        .values((
            staff::account_id.eq(account_id),
            staff::email.eq(&normalized),
            staff::full_name.eq(full_name),
            staff::role.eq(role),
        ))
        .execute(conn)?;

    let staff_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(staff_id, "Staff record created");
    Ok(staff_id)
}

/// Updates a staff member's full name.
///
/// # Errors
///
/// Returns an error if the update fails or the staff record does not
/// exist.
pub fn update_staff_name(
    conn: &mut SqliteConnection,
    staff_id: i64,
    full_name: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating name for staff {}", staff_id);

    let updated: usize = diesel::update(staff::table.filter(staff::staff_id.eq(staff_id)))
        .set(staff::full_name.eq(full_name))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Staff {staff_id}")));
    }
    Ok(())
}

/// Creates a session for an account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The opaque token handed to the client
/// * `account_id` - The authenticated account
/// * `expires_at` - Expiry as a stored-format timestamp string
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    account_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!("Creating session for account {}", account_id);

    let now: String = format_stored_timestamp(OffsetDateTime::now_utc(), "sessions.created_at")?;

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::account_id.eq(account_id),
            sessions::created_at.eq(&now),
            sessions::last_activity_at.eq(&now),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = sqlite::last_insert_rowid(conn)?;

    debug!(session_id, "Session created");
    Ok(session_id)
}

/// Bumps a session's last-activity timestamp.
///
/// # Errors
///
/// Returns an error if the update fails or the session does not exist.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), PersistenceError> {
    let now: String =
        format_stored_timestamp(OffsetDateTime::now_utc(), "sessions.last_activity_at")?;

    let updated: usize =
        diesel::update(sessions::table.filter(sessions::session_id.eq(session_id)))
            .set(sessions::last_activity_at.eq(&now))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Session {session_id}")));
    }
    Ok(())
}

/// Deletes a session by token.
///
/// Deleting an absent token is not an error: sign-out is idempotent.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    debug!("Deleting session");

    diesel::delete(sessions::table.filter(sessions::session_token.eq(session_token)))
        .execute(conn)?;

    Ok(())
}
