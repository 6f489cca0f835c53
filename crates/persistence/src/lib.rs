// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the frontdesk system.
//!
//! This crate provides database persistence for rooms, guests, the
//! drink catalog, bookings, kitchen/bar orders, staff, and sessions.
//! It is built on Diesel over `SQLite`.
//!
//! ## Storage conventions
//!
//! - Ids are `SQLite` rowids (`INTEGER PRIMARY KEY`).
//! - Monetary amounts are stored as decimal text and parsed back into
//!   `rust_decimal::Decimal`; no floating point touches money.
//! - Timestamps are stored as ISO 8601 text in UTC through one
//!   formatting helper, so stored values share a fixed-width
//!   representation and compare correctly as strings.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory` hands out a unique shared in-memory
//! database per call (named by an atomic counter), so tests are
//! isolated without time-based collisions and need no external
//! infrastructure.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

use frontdesk_domain::{
    BarOrder, Booking, Drink, DrinkCategory, Guest, KitchenOrder, OrderStatus, Room, RoomStatus,
};

mod convert;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{AccountData, SessionData, StaffData, SweepOutcome};
pub use error::PersistenceError;
pub use queries::staff::verify_password;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// test databases never collide.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter owning the database connection.
///
/// All reads and writes go through this adapter; callers never touch
/// the connection directly.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("frontdesk_memdb_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or
    /// initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Rooms
    // ========================================================================

    /// Creates a room and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_room(&mut self, room: &Room) -> Result<i64, PersistenceError> {
        mutations::rooms::create_room(&mut self.conn, room)
    }

    /// Updates a room.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the room does not exist.
    pub fn update_room(&mut self, room_id: i64, room: &Room) -> Result<(), PersistenceError> {
        mutations::rooms::update_room(&mut self.conn, room_id, room)
    }

    /// Sets a room's availability status.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the room does not exist.
    pub fn set_room_status(
        &mut self,
        room_id: i64,
        status: RoomStatus,
    ) -> Result<(), PersistenceError> {
        mutations::rooms::set_room_status(&mut self.conn, room_id, status)
    }

    /// Retrieves a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_room(&mut self, room_id: i64) -> Result<Option<Room>, PersistenceError> {
        queries::rooms::get_room(&mut self.conn, room_id)
    }

    /// Retrieves a room by display number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_room_by_number(
        &mut self,
        room_number: &str,
    ) -> Result<Option<Room>, PersistenceError> {
        queries::rooms::get_room_by_number(&mut self.conn, room_number)
    }

    /// Lists all rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(&mut self) -> Result<Vec<Room>, PersistenceError> {
        queries::rooms::list_rooms(&mut self.conn)
    }

    /// Counts all rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_rooms(&mut self) -> Result<i64, PersistenceError> {
        queries::rooms::count_rooms(&mut self.conn)
    }

    /// Counts rooms currently marked occupied.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_occupied_rooms(&mut self) -> Result<i64, PersistenceError> {
        queries::rooms::count_occupied_rooms(&mut self.conn)
    }

    // ========================================================================
    // Guests
    // ========================================================================

    /// Creates a guest and returns their id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_guest(&mut self, guest: &Guest) -> Result<i64, PersistenceError> {
        mutations::guests::create_guest(&mut self.conn, guest)
    }

    /// Updates a guest's contact details.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the guest does not exist.
    pub fn update_guest(&mut self, guest_id: i64, guest: &Guest) -> Result<(), PersistenceError> {
        mutations::guests::update_guest(&mut self.conn, guest_id, guest)
    }

    /// Retrieves a guest by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_guest(&mut self, guest_id: i64) -> Result<Option<Guest>, PersistenceError> {
        queries::guests::get_guest(&mut self.conn, guest_id)
    }

    /// Lists all guests.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_guests(&mut self) -> Result<Vec<Guest>, PersistenceError> {
        queries::guests::list_guests(&mut self.conn)
    }

    /// Counts all guests.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_guests(&mut self) -> Result<i64, PersistenceError> {
        queries::guests::count_guests(&mut self.conn)
    }

    // ========================================================================
    // Drink catalog
    // ========================================================================

    /// Creates a drink category and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_drink_category(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::drinks::create_drink_category(&mut self.conn, name)
    }

    /// Creates a catalog drink and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_drink(&mut self, drink: &Drink) -> Result<i64, PersistenceError> {
        mutations::drinks::create_drink(&mut self.conn, drink)
    }

    /// Retrieves a drink by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_drink(&mut self, drink_id: i64) -> Result<Option<Drink>, PersistenceError> {
        queries::drinks::get_drink(&mut self.conn, drink_id)
    }

    /// Lists the drink catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_drinks(&mut self) -> Result<Vec<Drink>, PersistenceError> {
        queries::drinks::list_drinks(&mut self.conn)
    }

    /// Lists the drink categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_drink_categories(&mut self) -> Result<Vec<DrinkCategory>, PersistenceError> {
        queries::drinks::list_drink_categories(&mut self.conn)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Creates a booking and returns its id.
    ///
    /// The caller is responsible for flipping the room to occupied
    /// afterwards; the insert deliberately precedes the room update.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_booking(&mut self, booking: &Booking) -> Result<i64, PersistenceError> {
        mutations::bookings::create_booking(&mut self.conn, booking)
    }

    /// Updates a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the booking does not
    /// exist.
    pub fn update_booking(
        &mut self,
        booking_id: i64,
        booking: &Booking,
    ) -> Result<(), PersistenceError> {
        mutations::bookings::update_booking(&mut self.conn, booking_id, booking)
    }

    /// Retrieves a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, PersistenceError> {
        queries::bookings::get_booking(&mut self.conn, booking_id)
    }

    /// Lists all bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(&mut self) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_bookings(&mut self.conn)
    }

    /// Lists active bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_active_bookings(&mut self) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_active_bookings(&mut self.conn)
    }

    /// Lists the most recent bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_recent_bookings(&mut self, limit: i64) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_recent_bookings(&mut self.conn, limit)
    }

    /// Lists bookings overlapping a stored-format timestamp range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings_overlapping(
        &mut self,
        range_start: &str,
        range_end: &str,
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_bookings_overlapping(&mut self.conn, range_start, range_end)
    }

    /// Checks whether a room has an active booking overlapping the
    /// given stay interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn has_active_overlap(
        &mut self,
        room_id: i64,
        check_in: &str,
        check_out: &str,
        exclude_booking_id: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        queries::bookings::has_active_overlap(
            &mut self.conn,
            room_id,
            check_in,
            check_out,
            exclude_booking_id,
        )
    }

    /// Counts active bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_active_bookings(&mut self) -> Result<i64, PersistenceError> {
        queries::bookings::count_active_bookings(&mut self.conn)
    }

    /// Completes expired active bookings and frees their rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if any sweep statement fails.
    pub fn complete_expired_bookings(
        &mut self,
        now: OffsetDateTime,
    ) -> Result<SweepOutcome, PersistenceError> {
        mutations::bookings::complete_expired_bookings(&mut self.conn, now)
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Creates a kitchen order and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_kitchen_order(&mut self, order: &KitchenOrder) -> Result<i64, PersistenceError> {
        mutations::orders::create_kitchen_order(&mut self.conn, order)
    }

    /// Sets a kitchen order's status.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the order does not
    /// exist.
    pub fn set_kitchen_order_status(
        &mut self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<(), PersistenceError> {
        mutations::orders::set_kitchen_order_status(&mut self.conn, order_id, status)
    }

    /// Retrieves a kitchen order by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_kitchen_order(
        &mut self,
        order_id: i64,
    ) -> Result<Option<KitchenOrder>, PersistenceError> {
        queries::orders::get_kitchen_order(&mut self.conn, order_id)
    }

    /// Lists kitchen orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_kitchen_orders(&mut self) -> Result<Vec<KitchenOrder>, PersistenceError> {
        queries::orders::list_kitchen_orders(&mut self.conn)
    }

    /// Creates a bar order and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_bar_order(&mut self, order: &BarOrder) -> Result<i64, PersistenceError> {
        mutations::orders::create_bar_order(&mut self.conn, order)
    }

    /// Sets a bar order's status.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the order does not
    /// exist.
    pub fn set_bar_order_status(
        &mut self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<(), PersistenceError> {
        mutations::orders::set_bar_order_status(&mut self.conn, order_id, status)
    }

    /// Retrieves a bar order by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_bar_order(&mut self, order_id: i64) -> Result<Option<BarOrder>, PersistenceError> {
        queries::orders::get_bar_order(&mut self.conn, order_id)
    }

    /// Lists bar orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bar_orders(&mut self) -> Result<Vec<BarOrder>, PersistenceError> {
        queries::orders::list_bar_orders(&mut self.conn)
    }

    // ========================================================================
    // Accounts, staff, sessions
    // ========================================================================

    /// Creates an auth account and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the email is taken.
    pub fn create_account(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::staff::create_account(&mut self.conn, email, password)
    }

    /// Updates an account's password.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the account does not
    /// exist.
    pub fn update_account_password(
        &mut self,
        account_id: i64,
        new_password: &str,
    ) -> Result<(), PersistenceError> {
        mutations::staff::update_account_password(&mut self.conn, account_id, new_password)
    }

    /// Creates a staff record and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_staff(
        &mut self,
        account_id: i64,
        email: &str,
        full_name: &str,
        role: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::staff::create_staff(&mut self.conn, account_id, email, full_name, role)
    }

    /// Updates a staff member's full name.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the staff record does
    /// not exist.
    pub fn update_staff_name(
        &mut self,
        staff_id: i64,
        full_name: &str,
    ) -> Result<(), PersistenceError> {
        mutations::staff::update_staff_name(&mut self.conn, staff_id, full_name)
    }

    /// Retrieves an account by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_account_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::staff::get_account_by_email(&mut self.conn, email)
    }

    /// Retrieves an account by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_account_by_id(
        &mut self,
        account_id: i64,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::staff::get_account_by_id(&mut self.conn, account_id)
    }

    /// Retrieves a staff record by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_staff_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<StaffData>, PersistenceError> {
        queries::staff::get_staff_by_email(&mut self.conn, email)
    }

    /// Retrieves the staff record linked to an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_staff_by_account(
        &mut self,
        account_id: i64,
    ) -> Result<Option<StaffData>, PersistenceError> {
        queries::staff::get_staff_by_account(&mut self.conn, account_id)
    }

    /// Retrieves a staff record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_staff_by_id(
        &mut self,
        staff_id: i64,
    ) -> Result<Option<StaffData>, PersistenceError> {
        queries::staff::get_staff_by_id(&mut self.conn, staff_id)
    }

    /// Creates a session and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn create_session(
        &mut self,
        session_token: &str,
        account_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::staff::create_session(&mut self.conn, session_token, account_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::staff::get_session_by_token(&mut self.conn, session_token)
    }

    /// Bumps a session's last-activity timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails or the session does not
    /// exist.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::staff::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::staff::delete_session(&mut self.conn, session_token)
    }
}
