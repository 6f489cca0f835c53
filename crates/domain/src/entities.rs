// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persisted entity definitions.
//!
//! Entity ids are `Option<i64>`: `None` until the persistence layer
//! assigns one on first save.

use crate::types::{
    BillingType, BookingStatus, GuestKind, OrderStatus, PaymentStatus, RoomStatus, RoomType,
};
use rust_decimal::Decimal;
use time::OffsetDateTime;

/// A hotel room.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Canonical identifier assigned by the database.
    pub room_id: Option<i64>,
    /// Display number, unique across the hotel (e.g. "204").
    pub room_number: String,
    /// Room type classification.
    pub room_type: RoomType,
    /// Nightly rate.
    pub rate: Decimal,
    /// Availability status.
    pub status: RoomStatus,
}

impl Room {
    /// Creates a room without a persisted id.
    #[must_use]
    pub const fn new(room_number: String, room_type: RoomType, rate: Decimal) -> Self {
        Self {
            room_id: None,
            room_number,
            room_type,
            rate,
            status: RoomStatus::Available,
        }
    }
}

/// A guest record.
///
/// Guests have an independent lifecycle: created and edited directly
/// by staff, whether or not they ever hold a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    /// Canonical identifier assigned by the database.
    pub guest_id: Option<i64>,
    /// Full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
}

/// A booking of one room by one guest.
///
/// Invariant: `total_amount == room rate × ceil(nights between
/// check_in and check_out)` at creation time and after any edit that
/// changes the room or the dates.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Canonical identifier assigned by the database.
    pub booking_id: Option<i64>,
    /// The booked room.
    pub room_id: i64,
    /// The lodging guest.
    pub guest_id: i64,
    /// Check-in timestamp.
    pub check_in: OffsetDateTime,
    /// Check-out timestamp.
    pub check_out: OffsetDateTime,
    /// Derived stay total.
    pub total_amount: Decimal,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Settlement status; unpaid bookings accept room-bill orders.
    pub payment_status: PaymentStatus,
    /// Staff member who created the booking.
    pub created_by: i64,
    /// Creation timestamp.
    pub created_at: OffsetDateTime,
}

/// A kitchen (food) order.
///
/// The line item is free-form: name and unit price are entered by the
/// staff member taking the order.
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenOrder {
    /// Canonical identifier assigned by the database.
    pub order_id: Option<i64>,
    /// The booking this order is charged against, if the customer is lodged.
    pub booking_id: Option<i64>,
    /// Room number captured from the booking at order time.
    pub room_number: Option<String>,
    /// Customer name (resolved from the booking, or the walk-in name).
    pub guest_name: String,
    /// Food item name.
    pub item_name: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: i32,
    /// Derived total: unit price × quantity. VAT is not stored.
    pub total_amount: Decimal,
    /// Preparation status.
    pub status: OrderStatus,
    /// Free-form preparation notes.
    pub notes: Option<String>,
    /// How the order is settled.
    pub billing_type: BillingType,
    /// Staff member who took the order.
    pub created_by: i64,
    /// Creation timestamp.
    pub created_at: OffsetDateTime,
}

/// A bar (drink) order.
///
/// Unlike kitchen orders, the line item references the drink catalog;
/// the unit price is captured from the drink at order time so later
/// price changes do not rewrite history.
#[derive(Debug, Clone, PartialEq)]
pub struct BarOrder {
    /// Canonical identifier assigned by the database.
    pub order_id: Option<i64>,
    /// The booking this order is charged against, if the customer is lodged.
    pub booking_id: Option<i64>,
    /// Room number captured from the booking at order time.
    pub room_number: Option<String>,
    /// Customer name (resolved from the booking, or the walk-in name).
    pub guest_name: String,
    /// Lodged guest or walk-in customer.
    pub guest_kind: GuestKind,
    /// The ordered drink.
    pub drink_id: i64,
    /// Drink name captured at order time.
    pub drink_name: String,
    /// Price per unit, captured from the drink at order time.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: i32,
    /// Derived total: unit price × quantity. VAT is not stored.
    pub total_amount: Decimal,
    /// Preparation status.
    pub status: OrderStatus,
    /// Free-form preparation notes.
    pub notes: Option<String>,
    /// How the order is settled.
    pub billing_type: BillingType,
    /// Staff member who took the order.
    pub created_by: i64,
    /// Creation timestamp.
    pub created_at: OffsetDateTime,
}

/// A catalog drink sold at the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    /// Canonical identifier assigned by the database.
    pub drink_id: Option<i64>,
    /// The category this drink belongs to.
    pub category_id: i64,
    /// Drink name.
    pub name: String,
    /// Current unit price.
    pub price: Decimal,
}

/// A drink catalog category (e.g. "Beer", "Soft Drinks").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkCategory {
    /// Canonical identifier assigned by the database.
    pub category_id: Option<i64>,
    /// Category name.
    pub name: String,
}

/// A staff member, linked one-to-one with an authentication account.
///
/// The role is informational; no authorization logic hangs off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    /// Canonical identifier assigned by the database.
    pub staff_id: Option<i64>,
    /// The linked authentication account.
    pub account_id: i64,
    /// Email, unique across staff.
    pub email: String,
    /// Full name.
    pub full_name: String,
    /// Role label (e.g. "manager", "receptionist").
    pub role: String,
}
