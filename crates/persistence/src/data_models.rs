// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Serializable representation of an authentication account.
///
/// The account is the in-store rendition of the auth principal: it
/// carries the credentials and nothing else. The linked staff record
/// carries everything the application knows about the person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountData {
    pub account_id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

/// Serializable representation of a staff row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffData {
    pub staff_id: i64,
    pub account_id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

/// Serializable representation of a session row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub account_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Result of one auto-checkout sweep pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepOutcome {
    /// Bookings moved from active to completed.
    pub completed_bookings: usize,
    /// Rooms set back to available.
    pub freed_rooms: usize,
}
