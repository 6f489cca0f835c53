// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and business rules for the frontdesk system.
//!
//! This crate is pure: entity definitions, status machines with explicit
//! transition validation, billing arithmetic (nights, totals, VAT), and
//! report derivations. No I/O lives here.

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

mod billing;
mod entities;
mod error;
mod reporting;
mod timestamps;
mod types;

pub use billing::{
    ReceiptTotals, VAT_RATE, booking_total, grand_total, nights_between, order_total,
    receipt_totals, vat_amount,
};
pub use entities::{
    BarOrder, Booking, Drink, DrinkCategory, Guest, KitchenOrder, Room, StaffMember,
};
pub use error::DomainError;
pub use reporting::{
    BookingStats, BookingSummary, DailyOccupancy, RoomTypeRevenue, booking_stats, daily_occupancy,
    revenue_by_room_type,
};
pub use timestamps::{format_date, format_timestamp, parse_date, parse_timestamp};
pub use types::{
    BillingType, BookingStatus, GuestKind, OrderKind, OrderStatus, PaymentStatus, RoomStatus,
    RoomType,
};
