// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler takes the persistence adapter plus a typed request
//! and the authenticated staff member, applies validation and domain
//! rules, and returns a typed response or an [`ApiError`]. Status
//! transition legality is enforced here for every caller; there is no
//! path around the validators.

use std::collections::HashMap;
use std::str::FromStr;
use time::OffsetDateTime;
use tracing::info;

use frontdesk_domain::{
    BarOrder, BillingType, Booking, BookingStatus, Drink, DrinkCategory, Guest, GuestKind,
    KitchenOrder, OrderKind, OrderStatus, PaymentStatus, Room, RoomStatus, RoomType,
    booking_total, format_timestamp, nights_between, order_total, parse_date, parse_timestamp,
};
use frontdesk_persistence::Persistence;

use crate::auth::AuthenticatedStaff;
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AdvanceOrderStatusRequest, BarOrderResponse, BookingResponse, CreateBarOrderRequest,
    CreateBookingRequest, CreateDrinkCategoryRequest, CreateDrinkRequest, CreateGuestRequest,
    CreateKitchenOrderRequest, CreateRoomRequest, DrinkCategoryResponse, DrinkResponse,
    GuestResponse, KitchenOrderResponse, RoomResponse, UpdateBookingRequest, UpdateGuestRequest,
    UpdateRoomRequest,
};

/// Parses a request date field: a full ISO 8601 timestamp, or a bare
/// `YYYY-MM-DD` taken as midnight UTC.
fn parse_point_in_time(value: &str, field: &str) -> Result<OffsetDateTime, ApiError> {
    if let Ok(timestamp) = parse_timestamp(value) {
        return Ok(timestamp);
    }
    parse_date(value)
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{value}' is not a date (YYYY-MM-DD) or ISO 8601 timestamp"),
        })
}

fn require_field(value: &str, field: &'static str) -> Result<String, ApiError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("must not be empty"),
        });
    }
    Ok(trimmed.to_string())
}

fn room_not_found(room_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Room"),
        message: format!("Room {room_id} does not exist"),
    }
}

fn guest_not_found(guest_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Guest"),
        message: format!("Guest {guest_id} does not exist"),
    }
}

fn format_response_timestamp(value: OffsetDateTime) -> Result<String, ApiError> {
    format_timestamp(value).map_err(translate_domain_error)
}

fn room_to_response(room: &Room) -> Result<RoomResponse, ApiError> {
    Ok(RoomResponse {
        room_id: room.room_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Room row is missing its id"),
        })?,
        room_number: room.room_number.clone(),
        room_type: room.room_type.as_str().to_string(),
        rate: room.rate,
        status: room.status.as_str().to_string(),
    })
}

fn guest_to_response(guest: &Guest) -> Result<GuestResponse, ApiError> {
    Ok(GuestResponse {
        guest_id: guest.guest_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Guest row is missing its id"),
        })?,
        full_name: guest.full_name.clone(),
        email: guest.email.clone(),
        phone: guest.phone.clone(),
        address: guest.address.clone(),
    })
}

fn booking_to_response(
    booking: &Booking,
    room_number: &str,
    guest_name: &str,
) -> Result<BookingResponse, ApiError> {
    Ok(BookingResponse {
        booking_id: booking.booking_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Booking row is missing its id"),
        })?,
        room_id: booking.room_id,
        room_number: room_number.to_string(),
        guest_id: booking.guest_id,
        guest_name: guest_name.to_string(),
        check_in: format_response_timestamp(booking.check_in)?,
        check_out: format_response_timestamp(booking.check_out)?,
        total_amount: booking.total_amount,
        status: booking.status.as_str().to_string(),
        payment_status: booking.payment_status.as_str().to_string(),
        created_at: format_response_timestamp(booking.created_at)?,
    })
}

/// Resolves display names for a booking and builds its response.
fn booking_with_details(
    persistence: &mut Persistence,
    booking: &Booking,
) -> Result<BookingResponse, ApiError> {
    let room: Room = persistence
        .get_room(booking.room_id)?
        .ok_or_else(|| room_not_found(booking.room_id))?;
    let guest: Guest = persistence
        .get_guest(booking.guest_id)?
        .ok_or_else(|| guest_not_found(booking.guest_id))?;
    booking_to_response(booking, &room.room_number, &guest.full_name)
}

fn kitchen_order_to_response(order: &KitchenOrder) -> Result<KitchenOrderResponse, ApiError> {
    Ok(KitchenOrderResponse {
        order_id: order.order_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Kitchen order row is missing its id"),
        })?,
        booking_id: order.booking_id,
        room_number: order.room_number.clone(),
        guest_name: order.guest_name.clone(),
        item_name: order.item_name.clone(),
        unit_price: order.unit_price,
        quantity: order.quantity,
        total_amount: order.total_amount,
        status: order.status.as_str().to_string(),
        notes: order.notes.clone(),
        billing_type: order.billing_type.as_str().to_string(),
        created_at: format_response_timestamp(order.created_at)?,
    })
}

fn bar_order_to_response(order: &BarOrder) -> Result<BarOrderResponse, ApiError> {
    Ok(BarOrderResponse {
        order_id: order.order_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Bar order row is missing its id"),
        })?,
        booking_id: order.booking_id,
        room_number: order.room_number.clone(),
        guest_name: order.guest_name.clone(),
        guest_kind: order.guest_kind.as_str().to_string(),
        drink_id: order.drink_id,
        drink_name: order.drink_name.clone(),
        unit_price: order.unit_price,
        quantity: order.quantity,
        total_amount: order.total_amount,
        status: order.status.as_str().to_string(),
        notes: order.notes.clone(),
        billing_type: order.billing_type.as_str().to_string(),
        created_at: format_response_timestamp(order.created_at)?,
    })
}

/// The booking context an order is placed against: resolved customer
/// name, captured room number, and billing type.
struct OrderContext {
    booking_id: Option<i64>,
    room_number: Option<String>,
    guest_name: String,
    guest_kind: GuestKind,
    billing_type: BillingType,
}

/// Resolves the customer context for a new order.
///
/// A supplied booking must exist and be active (only lodged guests are
/// charged to a room); the guest name and room number are captured
/// from it and the billing type follows its payment status. Without a
/// booking the order is a walk-in and needs a name.
fn resolve_order_context(
    persistence: &mut Persistence,
    booking_id: Option<i64>,
    walk_in_name: Option<&str>,
) -> Result<OrderContext, ApiError> {
    match booking_id {
        Some(booking_id) => {
            let booking: Booking =
                persistence
                    .get_booking(booking_id)?
                    .ok_or_else(|| ApiError::ResourceNotFound {
                        resource_type: String::from("Booking"),
                        message: format!("Booking {booking_id} does not exist"),
                    })?;

            if booking.status != BookingStatus::Active {
                return Err(ApiError::DomainRuleViolation {
                    rule: String::from("order_requires_active_booking"),
                    message: format!(
                        "Booking {booking_id} is {}; only lodged guests can be charged to a room",
                        booking.status
                    ),
                });
            }

            let room: Room = persistence
                .get_room(booking.room_id)?
                .ok_or_else(|| room_not_found(booking.room_id))?;
            let guest: Guest = persistence
                .get_guest(booking.guest_id)?
                .ok_or_else(|| guest_not_found(booking.guest_id))?;

            Ok(OrderContext {
                booking_id: Some(booking_id),
                room_number: Some(room.room_number),
                guest_name: guest.full_name,
                guest_kind: GuestKind::Lodged,
                billing_type: BillingType::for_order(Some(booking.payment_status)),
            })
        }
        None => {
            let guest_name: String =
                require_field(walk_in_name.unwrap_or_default(), "guest_name")?;
            Ok(OrderContext {
                booking_id: None,
                room_number: None,
                guest_name,
                guest_kind: GuestKind::WalkIn,
                billing_type: BillingType::Separate,
            })
        }
    }
}

// ============================================================================
// Rooms
// ============================================================================

/// Creates a room.
///
/// # Errors
///
/// Returns an error if a field is invalid or persistence fails (e.g.
/// the room number is taken).
pub fn create_room(
    persistence: &mut Persistence,
    request: CreateRoomRequest,
    staff: &AuthenticatedStaff,
) -> Result<RoomResponse, ApiError> {
    info!(staff_id = staff.staff_id, room_number = %request.room_number, "Creating room");

    let room_number: String = require_field(&request.room_number, "room_number")?;
    let room_type: RoomType =
        RoomType::parse(&request.room_type).map_err(translate_domain_error)?;
    if request.rate.is_sign_negative() {
        return Err(ApiError::InvalidInput {
            field: String::from("rate"),
            message: String::from("Rate must not be negative"),
        });
    }
    let status: RoomStatus = match &request.status {
        Some(value) => RoomStatus::parse(value).map_err(translate_domain_error)?,
        None => RoomStatus::Available,
    };

    let mut room: Room = Room::new(room_number, room_type, request.rate);
    room.status = status;

    let room_id: i64 = persistence.create_room(&room).map_err(|e| {
        ApiError::DomainRuleViolation {
            rule: String::from("unique_room_number"),
            message: format!("Could not create room: {e}"),
        }
    })?;
    room.room_id = Some(room_id);

    room_to_response(&room)
}

/// Updates a room.
///
/// # Errors
///
/// Returns an error if the room does not exist or a field is invalid.
pub fn update_room(
    persistence: &mut Persistence,
    room_id: i64,
    request: UpdateRoomRequest,
    staff: &AuthenticatedStaff,
) -> Result<RoomResponse, ApiError> {
    info!(staff_id = staff.staff_id, room_id, "Updating room");

    let existing: Room = persistence
        .get_room(room_id)?
        .ok_or_else(|| room_not_found(room_id))?;

    let room: Room = Room {
        room_id: existing.room_id,
        room_number: require_field(&request.room_number, "room_number")?,
        room_type: RoomType::parse(&request.room_type).map_err(translate_domain_error)?,
        rate: request.rate,
        status: RoomStatus::parse(&request.status).map_err(translate_domain_error)?,
    };
    if room.rate.is_sign_negative() {
        return Err(ApiError::InvalidInput {
            field: String::from("rate"),
            message: String::from("Rate must not be negative"),
        });
    }

    persistence.update_room(room_id, &room)?;
    room_to_response(&room)
}

/// Lists all rooms.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_rooms(persistence: &mut Persistence) -> Result<Vec<RoomResponse>, ApiError> {
    persistence
        .list_rooms()?
        .iter()
        .map(room_to_response)
        .collect()
}

// ============================================================================
// Guests
// ============================================================================

/// Creates a guest record.
///
/// # Errors
///
/// Returns an error if a field is invalid or persistence fails.
pub fn create_guest(
    persistence: &mut Persistence,
    request: CreateGuestRequest,
    staff: &AuthenticatedStaff,
) -> Result<GuestResponse, ApiError> {
    info!(staff_id = staff.staff_id, guest_name = %request.full_name, "Creating guest");

    let mut guest: Guest = Guest {
        guest_id: None,
        full_name: require_field(&request.full_name, "full_name")?,
        email: request.email,
        phone: request.phone,
        address: request.address,
    };

    let guest_id: i64 = persistence.create_guest(&guest)?;
    guest.guest_id = Some(guest_id);

    guest_to_response(&guest)
}

/// Updates a guest's contact details.
///
/// # Errors
///
/// Returns an error if the guest does not exist or a field is invalid.
pub fn update_guest(
    persistence: &mut Persistence,
    guest_id: i64,
    request: UpdateGuestRequest,
    staff: &AuthenticatedStaff,
) -> Result<GuestResponse, ApiError> {
    info!(staff_id = staff.staff_id, guest_id, "Updating guest");

    persistence
        .get_guest(guest_id)?
        .ok_or_else(|| guest_not_found(guest_id))?;

    let guest: Guest = Guest {
        guest_id: Some(guest_id),
        full_name: require_field(&request.full_name, "full_name")?,
        email: request.email,
        phone: request.phone,
        address: request.address,
    };

    persistence.update_guest(guest_id, &guest)?;
    guest_to_response(&guest)
}

/// Lists all guests.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_guests(persistence: &mut Persistence) -> Result<Vec<GuestResponse>, ApiError> {
    persistence
        .list_guests()?
        .iter()
        .map(guest_to_response)
        .collect()
}

// ============================================================================
// Drink catalog
// ============================================================================

/// Creates a drink category.
///
/// # Errors
///
/// Returns an error if the name is invalid or persistence fails.
pub fn create_drink_category(
    persistence: &mut Persistence,
    request: CreateDrinkCategoryRequest,
    staff: &AuthenticatedStaff,
) -> Result<DrinkCategoryResponse, ApiError> {
    info!(staff_id = staff.staff_id, name = %request.name, "Creating drink category");

    let name: String = require_field(&request.name, "name")?;
    let category_id: i64 = persistence.create_drink_category(&name).map_err(|e| {
        ApiError::DomainRuleViolation {
            rule: String::from("unique_drink_category"),
            message: format!("Could not create drink category: {e}"),
        }
    })?;

    Ok(DrinkCategoryResponse { category_id, name })
}

/// Creates a catalog drink.
///
/// # Errors
///
/// Returns an error if a field is invalid or the category is missing.
pub fn create_drink(
    persistence: &mut Persistence,
    request: CreateDrinkRequest,
    staff: &AuthenticatedStaff,
) -> Result<DrinkResponse, ApiError> {
    info!(staff_id = staff.staff_id, name = %request.name, "Creating drink");

    if request.price.is_sign_negative() {
        return Err(ApiError::InvalidInput {
            field: String::from("price"),
            message: String::from("Price must not be negative"),
        });
    }

    let mut drink: Drink = Drink {
        drink_id: None,
        category_id: request.category_id,
        name: require_field(&request.name, "name")?,
        price: request.price,
    };

    let drink_id: i64 =
        persistence
            .create_drink(&drink)
            .map_err(|e| ApiError::ResourceNotFound {
                resource_type: String::from("Drink category"),
                message: format!("Could not create drink: {e}"),
            })?;
    drink.drink_id = Some(drink_id);

    Ok(DrinkResponse {
        drink_id,
        category_id: drink.category_id,
        name: drink.name,
        price: drink.price,
    })
}

/// Lists the drink catalog.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_drinks(persistence: &mut Persistence) -> Result<Vec<DrinkResponse>, ApiError> {
    Ok(persistence
        .list_drinks()?
        .into_iter()
        .filter_map(|drink: Drink| {
            drink.drink_id.map(|drink_id| DrinkResponse {
                drink_id,
                category_id: drink.category_id,
                name: drink.name,
                price: drink.price,
            })
        })
        .collect())
}

/// Lists the drink categories.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_drink_categories(
    persistence: &mut Persistence,
) -> Result<Vec<DrinkCategoryResponse>, ApiError> {
    Ok(persistence
        .list_drink_categories()?
        .into_iter()
        .filter_map(|category: DrinkCategory| {
            category.category_id.map(|category_id| DrinkCategoryResponse {
                category_id,
                name: category.name,
            })
        })
        .collect())
}

// ============================================================================
// Bookings
// ============================================================================

/// Creates a booking.
///
/// Validates that check-out falls after check-in, that the room exists
/// and is available, and that the room has no overlapping active
/// booking. The stay total is `rate × ceil(nights)`. The booking
/// insert deliberately precedes the room-status flip to occupied: a
/// failure between the two leaves an active booking on a room still
/// marked available.
///
/// # Errors
///
/// Returns an error if validation fails, the room or guest is missing,
/// the room is not available, or the room is double-booked.
pub fn create_booking(
    persistence: &mut Persistence,
    request: CreateBookingRequest,
    staff: &AuthenticatedStaff,
) -> Result<BookingResponse, ApiError> {
    info!(
        staff_id = staff.staff_id,
        room_id = request.room_id,
        guest_id = request.guest_id,
        "Creating booking"
    );

    let check_in: OffsetDateTime = parse_point_in_time(&request.check_in, "check_in")?;
    let check_out: OffsetDateTime = parse_point_in_time(&request.check_out, "check_out")?;
    let nights: i64 = nights_between(check_in, check_out).map_err(translate_domain_error)?;

    let room: Room = persistence
        .get_room(request.room_id)?
        .ok_or_else(|| room_not_found(request.room_id))?;
    if room.status != RoomStatus::Available {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("room_not_available"),
            message: format!(
                "Room {} is {}; only available rooms can be booked",
                room.room_number, room.status
            ),
        });
    }

    let check_in_str: String = format_response_timestamp(check_in)?;
    let check_out_str: String = format_response_timestamp(check_out)?;
    if persistence.has_active_overlap(request.room_id, &check_in_str, &check_out_str, None)? {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("room_double_booked"),
            message: format!(
                "Room {} already has an active booking overlapping this stay",
                room.room_number
            ),
        });
    }

    let guest: Guest = persistence
        .get_guest(request.guest_id)?
        .ok_or_else(|| guest_not_found(request.guest_id))?;

    let total_amount = booking_total(room.rate, nights).map_err(translate_domain_error)?;

    let mut booking: Booking = Booking {
        booking_id: None,
        room_id: request.room_id,
        guest_id: request.guest_id,
        check_in,
        check_out,
        total_amount,
        status: BookingStatus::Active,
        payment_status: PaymentStatus::Unpaid,
        created_by: staff.staff_id,
        created_at: OffsetDateTime::now_utc(),
    };

    let booking_id: i64 = persistence.create_booking(&booking)?;
    booking.booking_id = Some(booking_id);

    // Room flip comes after the insert; see the ordering note above.
    persistence.set_room_status(request.room_id, RoomStatus::Occupied)?;

    info!(booking_id, nights, %total_amount, "Booking created");

    booking_to_response(&booking, &room.room_number, &guest.full_name)
}

/// Updates a booking.
///
/// The total is recomputed only when the room or the dates change.
/// Status changes go through the booking status machine: active can be
/// completed or cancelled at any time regardless of dates, and nothing
/// leaves a terminal state.
///
/// # Errors
///
/// Returns an error if the booking does not exist, a field is invalid,
/// the status transition is illegal, or the new room/dates collide
/// with another active booking.
pub fn update_booking(
    persistence: &mut Persistence,
    booking_id: i64,
    request: UpdateBookingRequest,
    staff: &AuthenticatedStaff,
) -> Result<BookingResponse, ApiError> {
    info!(staff_id = staff.staff_id, booking_id, "Updating booking");

    let existing: Booking =
        persistence
            .get_booking(booking_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Booking"),
                message: format!("Booking {booking_id} does not exist"),
            })?;

    let check_in: OffsetDateTime = parse_point_in_time(&request.check_in, "check_in")?;
    let check_out: OffsetDateTime = parse_point_in_time(&request.check_out, "check_out")?;
    let status: BookingStatus =
        BookingStatus::from_str(&request.status).map_err(translate_domain_error)?;
    let payment_status: PaymentStatus =
        PaymentStatus::parse(&request.payment_status).map_err(translate_domain_error)?;

    if status != existing.status && !existing.status.can_transition_to(status) {
        return Err(translate_domain_error(
            frontdesk_domain::DomainError::IllegalBookingTransition {
                from: existing.status.as_str().to_string(),
                to: status.as_str().to_string(),
            },
        ));
    }

    let room: Room = persistence
        .get_room(request.room_id)?
        .ok_or_else(|| room_not_found(request.room_id))?;
    let guest: Guest = persistence
        .get_guest(request.guest_id)?
        .ok_or_else(|| guest_not_found(request.guest_id))?;

    let stay_changed: bool = request.room_id != existing.room_id
        || check_in != existing.check_in
        || check_out != existing.check_out;

    let total_amount = if stay_changed {
        let nights: i64 = nights_between(check_in, check_out).map_err(translate_domain_error)?;

        let check_in_str: String = format_response_timestamp(check_in)?;
        let check_out_str: String = format_response_timestamp(check_out)?;
        if persistence.has_active_overlap(
            request.room_id,
            &check_in_str,
            &check_out_str,
            Some(booking_id),
        )? {
            return Err(ApiError::DomainRuleViolation {
                rule: String::from("room_double_booked"),
                message: format!(
                    "Room {} already has an active booking overlapping this stay",
                    room.room_number
                ),
            });
        }

        booking_total(room.rate, nights).map_err(translate_domain_error)?
    } else {
        existing.total_amount
    };

    let booking: Booking = Booking {
        booking_id: Some(booking_id),
        room_id: request.room_id,
        guest_id: request.guest_id,
        check_in,
        check_out,
        total_amount,
        status,
        payment_status,
        created_by: existing.created_by,
        created_at: existing.created_at,
    };

    persistence.update_booking(booking_id, &booking)?;

    booking_to_response(&booking, &room.room_number, &guest.full_name)
}

/// Retrieves a booking with display fields resolved.
///
/// # Errors
///
/// Returns an error if the booking does not exist.
pub fn get_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let booking: Booking =
        persistence
            .get_booking(booking_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Booking"),
                message: format!("Booking {booking_id} does not exist"),
            })?;
    booking_with_details(persistence, &booking)
}

/// Lists bookings, newest first, optionally filtered by status.
///
/// # Errors
///
/// Returns an error if the status filter is invalid or persistence
/// fails.
pub fn list_bookings(
    persistence: &mut Persistence,
    status_filter: Option<&str>,
) -> Result<Vec<BookingResponse>, ApiError> {
    let filter: Option<BookingStatus> = match status_filter {
        Some(value) => Some(BookingStatus::from_str(value).map_err(translate_domain_error)?),
        None => None,
    };

    let bookings: Vec<Booking> = persistence.list_bookings()?;

    let rooms: HashMap<i64, Room> = persistence
        .list_rooms()?
        .into_iter()
        .filter_map(|room| room.room_id.map(|room_id| (room_id, room)))
        .collect();
    let guests: HashMap<i64, Guest> = persistence
        .list_guests()?
        .into_iter()
        .filter_map(|guest| guest.guest_id.map(|guest_id| (guest_id, guest)))
        .collect();

    bookings
        .iter()
        .filter(|booking| filter.is_none_or(|status| booking.status == status))
        .map(|booking| {
            let room: &Room = rooms
                .get(&booking.room_id)
                .ok_or_else(|| room_not_found(booking.room_id))?;
            let guest: &Guest = guests
                .get(&booking.guest_id)
                .ok_or_else(|| guest_not_found(booking.guest_id))?;
            booking_to_response(booking, &room.room_number, &guest.full_name)
        })
        .collect()
}

// ============================================================================
// Kitchen orders
// ============================================================================

/// Creates a kitchen order.
///
/// The customer context comes from the booking when one is supplied
/// (lodged guest, room-bill while the booking is unpaid) or from the
/// walk-in name otherwise. The total is `unit price × quantity`; VAT
/// is never stored.
///
/// # Errors
///
/// Returns an error if validation fails or the booking is missing or
/// not active.
pub fn create_kitchen_order(
    persistence: &mut Persistence,
    request: CreateKitchenOrderRequest,
    staff: &AuthenticatedStaff,
) -> Result<KitchenOrderResponse, ApiError> {
    info!(
        staff_id = staff.staff_id,
        item_name = %request.item_name,
        "Creating kitchen order"
    );

    let item_name: String = require_field(&request.item_name, "item_name")?;
    let total_amount = order_total(request.unit_price, request.quantity)
        .map_err(translate_domain_error)?;

    let context: OrderContext = resolve_order_context(
        persistence,
        request.booking_id,
        request.guest_name.as_deref(),
    )?;

    let mut order: KitchenOrder = KitchenOrder {
        order_id: None,
        booking_id: context.booking_id,
        room_number: context.room_number,
        guest_name: context.guest_name,
        item_name,
        unit_price: request.unit_price,
        quantity: request.quantity,
        total_amount,
        status: OrderStatus::Pending,
        notes: request.notes.filter(|notes| !notes.trim().is_empty()),
        billing_type: context.billing_type,
        created_by: staff.staff_id,
        created_at: OffsetDateTime::now_utc(),
    };

    let order_id: i64 = persistence.create_kitchen_order(&order)?;
    order.order_id = Some(order_id);

    kitchen_order_to_response(&order)
}

/// Advances a kitchen order one step along
/// pending → preparing → ready → delivered → completed.
///
/// The requested status must be the single legal next step; the check
/// runs here for every caller, so a direct call cannot skip steps or
/// move backwards.
///
/// # Errors
///
/// Returns an error if the order does not exist, the status string is
/// invalid, or the transition is not the legal next step.
pub fn advance_kitchen_order_status(
    persistence: &mut Persistence,
    order_id: i64,
    request: AdvanceOrderStatusRequest,
    staff: &AuthenticatedStaff,
) -> Result<KitchenOrderResponse, ApiError> {
    info!(
        staff_id = staff.staff_id,
        order_id,
        next_status = %request.next_status,
        "Advancing kitchen order status"
    );

    let next: OrderStatus =
        OrderStatus::from_str(&request.next_status).map_err(translate_domain_error)?;

    let mut order: KitchenOrder = persistence.get_kitchen_order(order_id)?.ok_or_else(|| {
        ApiError::ResourceNotFound {
            resource_type: String::from("Kitchen order"),
            message: format!("Kitchen order {order_id} does not exist"),
        }
    })?;

    if !order.status.can_transition_to(OrderKind::Kitchen, next) {
        return Err(translate_domain_error(
            frontdesk_domain::DomainError::IllegalOrderTransition {
                kind: OrderKind::Kitchen.as_str().to_string(),
                from: order.status.as_str().to_string(),
                to: next.as_str().to_string(),
            },
        ));
    }

    persistence.set_kitchen_order_status(order_id, next)?;
    order.status = next;

    kitchen_order_to_response(&order)
}

/// Lists kitchen orders, newest first.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_kitchen_orders(
    persistence: &mut Persistence,
) -> Result<Vec<KitchenOrderResponse>, ApiError> {
    persistence
        .list_kitchen_orders()?
        .iter()
        .map(kitchen_order_to_response)
        .collect()
}

// ============================================================================
// Bar orders
// ============================================================================

/// Creates a bar order.
///
/// The line item references the drink catalog; the unit price and name
/// are captured from the drink at order time. Customer context follows
/// the same rules as kitchen orders.
///
/// # Errors
///
/// Returns an error if validation fails, the drink is missing, or the
/// booking is missing or not active.
pub fn create_bar_order(
    persistence: &mut Persistence,
    request: CreateBarOrderRequest,
    staff: &AuthenticatedStaff,
) -> Result<BarOrderResponse, ApiError> {
    info!(
        staff_id = staff.staff_id,
        drink_id = request.drink_id,
        "Creating bar order"
    );

    let drink: Drink = persistence.get_drink(request.drink_id)?.ok_or_else(|| {
        ApiError::ResourceNotFound {
            resource_type: String::from("Drink"),
            message: format!("Drink {} does not exist", request.drink_id),
        }
    })?;

    let total_amount =
        order_total(drink.price, request.quantity).map_err(translate_domain_error)?;

    let context: OrderContext = resolve_order_context(
        persistence,
        request.booking_id,
        request.guest_name.as_deref(),
    )?;

    let mut order: BarOrder = BarOrder {
        order_id: None,
        booking_id: context.booking_id,
        room_number: context.room_number,
        guest_name: context.guest_name,
        guest_kind: context.guest_kind,
        drink_id: request.drink_id,
        drink_name: drink.name,
        unit_price: drink.price,
        quantity: request.quantity,
        total_amount,
        status: OrderStatus::Pending,
        notes: request.notes.filter(|notes| !notes.trim().is_empty()),
        billing_type: context.billing_type,
        created_by: staff.staff_id,
        created_at: OffsetDateTime::now_utc(),
    };

    let order_id: i64 = persistence.create_bar_order(&order)?;
    order.order_id = Some(order_id);

    bar_order_to_response(&order)
}

/// Advances a bar order one step along
/// pending → preparing → ready → served → completed.
///
/// # Errors
///
/// Returns an error if the order does not exist, the status string is
/// invalid, or the transition is not the legal next step.
pub fn advance_bar_order_status(
    persistence: &mut Persistence,
    order_id: i64,
    request: AdvanceOrderStatusRequest,
    staff: &AuthenticatedStaff,
) -> Result<BarOrderResponse, ApiError> {
    info!(
        staff_id = staff.staff_id,
        order_id,
        next_status = %request.next_status,
        "Advancing bar order status"
    );

    let next: OrderStatus =
        OrderStatus::from_str(&request.next_status).map_err(translate_domain_error)?;

    let mut order: BarOrder = persistence.get_bar_order(order_id)?.ok_or_else(|| {
        ApiError::ResourceNotFound {
            resource_type: String::from("Bar order"),
            message: format!("Bar order {order_id} does not exist"),
        }
    })?;

    if !order.status.can_transition_to(OrderKind::Bar, next) {
        return Err(translate_domain_error(
            frontdesk_domain::DomainError::IllegalOrderTransition {
                kind: OrderKind::Bar.as_str().to_string(),
                from: order.status.as_str().to_string(),
                to: next.as_str().to_string(),
            },
        ));
    }

    persistence.set_bar_order_status(order_id, next)?;
    order.status = next;

    bar_order_to_response(&order)
}

/// Lists bar orders, newest first.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_bar_orders(
    persistence: &mut Persistence,
) -> Result<Vec<BarOrderResponse>, ApiError> {
    persistence
        .list_bar_orders()?
        .iter()
        .map(bar_order_to_response)
        .collect()
}
