// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed request and response structs for the API boundary.
//!
//! Dates and timestamps cross this boundary as strings (`YYYY-MM-DD`
//! or full ISO 8601); enums as their storage strings; money as
//! [`Decimal`], which serializes as a decimal string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Rooms
// ============================================================================

/// Request to create a room.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateRoomRequest {
    /// Display number, unique across the hotel.
    pub room_number: String,
    /// Room type (standard/deluxe/suite/executive).
    pub room_type: String,
    /// Nightly rate.
    pub rate: Decimal,
    /// Initial status; defaults to available.
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to update a room.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateRoomRequest {
    /// Display number.
    pub room_number: String,
    /// Room type.
    pub room_type: String,
    /// Nightly rate.
    pub rate: Decimal,
    /// Availability status.
    pub status: String,
}

/// A room as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomResponse {
    /// The room id.
    pub room_id: i64,
    /// Display number.
    pub room_number: String,
    /// Room type.
    pub room_type: String,
    /// Nightly rate.
    pub rate: Decimal,
    /// Availability status.
    pub status: String,
}

// ============================================================================
// Guests
// ============================================================================

/// Request to create a guest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateGuestRequest {
    /// Full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
}

/// Request to update a guest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateGuestRequest {
    /// Full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
}

/// A guest as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuestResponse {
    /// The guest id.
    pub guest_id: i64,
    /// Full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
}

// ============================================================================
// Drink catalog
// ============================================================================

/// Request to create a drink category.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateDrinkCategoryRequest {
    /// Category name.
    pub name: String,
}

/// Request to create a catalog drink.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateDrinkRequest {
    /// The category the drink belongs to.
    pub category_id: i64,
    /// Drink name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
}

/// A drink category as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DrinkCategoryResponse {
    /// The category id.
    pub category_id: i64,
    /// Category name.
    pub name: String,
}

/// A catalog drink as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DrinkResponse {
    /// The drink id.
    pub drink_id: i64,
    /// The category id.
    pub category_id: i64,
    /// Drink name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
}

// ============================================================================
// Bookings
// ============================================================================

/// Request to create a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateBookingRequest {
    /// The room to book.
    pub room_id: i64,
    /// The lodging guest.
    pub guest_id: i64,
    /// Check-in date (`YYYY-MM-DD`) or full ISO 8601 timestamp.
    pub check_in: String,
    /// Check-out date (`YYYY-MM-DD`) or full ISO 8601 timestamp.
    pub check_out: String,
}

/// Request to update a booking.
///
/// The total is recomputed only when the room or the dates change;
/// status changes are validated against the booking status machine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateBookingRequest {
    /// The booked room.
    pub room_id: i64,
    /// The lodging guest.
    pub guest_id: i64,
    /// Check-in date or timestamp.
    pub check_in: String,
    /// Check-out date or timestamp.
    pub check_out: String,
    /// Lifecycle status (active/completed/cancelled).
    pub status: String,
    /// Settlement status (paid/unpaid).
    pub payment_status: String,
}

/// A booking as returned by the API, with display fields resolved.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingResponse {
    /// The booking id.
    pub booking_id: i64,
    /// The booked room.
    pub room_id: i64,
    /// Room display number.
    pub room_number: String,
    /// The lodging guest.
    pub guest_id: i64,
    /// Guest full name.
    pub guest_name: String,
    /// Check-in timestamp (ISO 8601).
    pub check_in: String,
    /// Check-out timestamp (ISO 8601).
    pub check_out: String,
    /// Stay total.
    pub total_amount: Decimal,
    /// Lifecycle status.
    pub status: String,
    /// Settlement status.
    pub payment_status: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

// ============================================================================
// Orders
// ============================================================================

/// Request to create a kitchen order.
///
/// Supply `booking_id` for a lodged guest (name and room are resolved
/// from the booking) or `guest_name` for a walk-in.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateKitchenOrderRequest {
    /// The booking to charge, when the customer is lodged.
    #[serde(default)]
    pub booking_id: Option<i64>,
    /// Walk-in customer name; ignored when a booking is supplied.
    #[serde(default)]
    pub guest_name: Option<String>,
    /// Food item name.
    pub item_name: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: i32,
    /// Free-form preparation notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to create a bar order.
///
/// The line item references the drink catalog; the unit price is
/// captured from the drink at order time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateBarOrderRequest {
    /// The booking to charge, when the customer is lodged.
    #[serde(default)]
    pub booking_id: Option<i64>,
    /// Walk-in customer name; ignored when a booking is supplied.
    #[serde(default)]
    pub guest_name: Option<String>,
    /// The ordered drink.
    pub drink_id: i64,
    /// Number of units.
    pub quantity: i32,
    /// Free-form preparation notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to advance an order's status one step.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdvanceOrderStatusRequest {
    /// The requested next status.
    pub next_status: String,
}

/// A kitchen order as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KitchenOrderResponse {
    /// The order id.
    pub order_id: i64,
    /// The charged booking, when the customer is lodged.
    pub booking_id: Option<i64>,
    /// Room number captured at order time.
    pub room_number: Option<String>,
    /// Customer name.
    pub guest_name: String,
    /// Food item name.
    pub item_name: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: i32,
    /// Line total.
    pub total_amount: Decimal,
    /// Preparation status.
    pub status: String,
    /// Free-form preparation notes.
    pub notes: Option<String>,
    /// How the order is settled.
    pub billing_type: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// A bar order as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BarOrderResponse {
    /// The order id.
    pub order_id: i64,
    /// The charged booking, when the customer is lodged.
    pub booking_id: Option<i64>,
    /// Room number captured at order time.
    pub room_number: Option<String>,
    /// Customer name.
    pub guest_name: String,
    /// Lodged guest or walk-in.
    pub guest_kind: String,
    /// The ordered drink.
    pub drink_id: i64,
    /// Drink name captured at order time.
    pub drink_name: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: i32,
    /// Line total.
    pub total_amount: Decimal,
    /// Preparation status.
    pub status: String,
    /// Free-form preparation notes.
    pub notes: Option<String>,
    /// How the order is settled.
    pub billing_type: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

// ============================================================================
// Reports
// ============================================================================

/// Booking counts and revenue for a report range.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingStatsInfo {
    /// All bookings in range.
    pub total_bookings: usize,
    /// Bookings with status active.
    pub active_bookings: usize,
    /// Bookings with status completed.
    pub completed_bookings: usize,
    /// Bookings with status cancelled.
    pub cancelled_bookings: usize,
    /// Sum of booking totals.
    pub total_revenue: Decimal,
    /// Revenue divided by booking count; zero for an empty range.
    pub average_booking_value: Decimal,
}

/// Revenue rollup for one room type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomTypeRevenueInfo {
    /// The room type.
    pub room_type: String,
    /// Number of bookings of this type in range.
    pub bookings: usize,
    /// Sum of booking totals for this type.
    pub revenue: Decimal,
}

/// Occupancy figures for one calendar day.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DailyOccupancyInfo {
    /// The day (`YYYY-MM-DD`).
    pub date: String,
    /// Rooms with a non-cancelled booking covering the day.
    pub occupied_rooms: usize,
    /// Total rooms in the hotel.
    pub total_rooms: usize,
    /// `occupied / total × 100`; zero when the hotel has no rooms.
    pub occupancy_rate: f64,
}

/// The booking report over a date range.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingReportResponse {
    /// Range start (`YYYY-MM-DD`, inclusive).
    pub start_date: String,
    /// Range end (`YYYY-MM-DD`, inclusive).
    pub end_date: String,
    /// Counts and revenue.
    pub stats: BookingStatsInfo,
    /// Revenue grouped by room type.
    pub revenue_by_room_type: Vec<RoomTypeRevenueInfo>,
    /// Per-day occupancy.
    pub occupancy: Vec<DailyOccupancyInfo>,
}

/// The dashboard summary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardResponse {
    /// Total rooms in the hotel.
    pub total_rooms: i64,
    /// Rooms currently marked occupied.
    pub occupied_rooms: i64,
    /// Total guest records.
    pub total_guests: i64,
    /// Bookings with status active.
    pub active_bookings: i64,
    /// The five most recent bookings.
    pub recent_bookings: Vec<BookingResponse>,
}

// ============================================================================
// Authentication
// ============================================================================

/// Request to register a staff member.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignUpRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Staff full name.
    pub full_name: String,
    /// Role label.
    pub role: String,
}

/// Response to a successful registration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignUpResponse {
    /// The created staff id.
    pub staff_id: i64,
    /// The normalized account email.
    pub email: String,
    /// A success message.
    pub message: String,
}

/// Request to sign in.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignInRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Response to a successful sign-in.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignInResponse {
    /// The opaque session token.
    pub session_token: String,
    /// The signed-in staff member.
    pub staff: StaffInfo,
}

/// The signed-in staff member as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaffInfo {
    /// The staff id.
    pub staff_id: i64,
    /// Staff email.
    pub email: String,
    /// Staff full name.
    pub full_name: String,
    /// Role label.
    pub role: String,
}

/// Request to update the signed-in staff member's profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateProfileRequest {
    /// New full name.
    pub full_name: String,
}

/// Request to change the signed-in staff member's password.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChangePasswordRequest {
    /// The current password.
    pub current_password: String,
    /// The new password.
    pub new_password: String,
    /// Confirmation of the new password.
    pub confirm_password: String,
}
