// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the frontdesk system.
//!
//! This crate sits between the HTTP server and the persistence layer:
//! typed requests in, validation and domain rules applied, typed
//! responses or [`ApiError`]s out. Domain and persistence errors are
//! translated here and never leak raw.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod occupancy_csv;
mod password_policy;
mod receipt;
mod reports;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedStaff, AuthenticationService};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use handlers::{
    advance_bar_order_status, advance_kitchen_order_status, create_bar_order, create_booking,
    create_drink, create_drink_category, create_guest, create_kitchen_order, create_room,
    get_booking, list_bar_orders, list_bookings, list_drink_categories, list_drinks, list_guests,
    list_kitchen_orders, list_rooms, update_booking, update_guest, update_room,
};
pub use occupancy_csv::occupancy_report_csv;
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use receipt::{
    ReceiptLayout, render_bar_docket, render_bar_receipt, render_booking_receipt,
    render_kitchen_docket, render_kitchen_receipt,
};
pub use reports::{booking_report, dashboard_summary};
pub use request_response::{
    AdvanceOrderStatusRequest, BarOrderResponse, BookingReportResponse, BookingResponse,
    BookingStatsInfo, ChangePasswordRequest, CreateBarOrderRequest, CreateBookingRequest,
    CreateDrinkCategoryRequest, CreateDrinkRequest, CreateGuestRequest, CreateKitchenOrderRequest,
    CreateRoomRequest, DailyOccupancyInfo, DashboardResponse, DrinkCategoryResponse,
    DrinkResponse, GuestResponse, KitchenOrderResponse, RoomResponse,
    RoomTypeRevenueInfo, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, StaffInfo,
    UpdateBookingRequest, UpdateGuestRequest, UpdateProfileRequest, UpdateRoomRequest,
};
