// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries, one module per concern.
//!
//! Queries map private Diesel row structs into domain entities (or the
//! auth data models) and return `Ok(None)` when a single-row lookup
//! finds nothing.

pub mod bookings;
pub mod drinks;
pub mod guests;
pub mod orders;
pub mod rooms;
pub mod staff;
