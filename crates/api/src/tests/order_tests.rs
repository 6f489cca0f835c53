// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Kitchen and bar order tests: totals, billing type resolution, and
//! the status machine.

use super::helpers::{seed_drink, seed_guest, seed_room, signed_in_staff, test_persistence};
use crate::auth::AuthenticatedStaff;
use crate::error::ApiError;
use crate::handlers::{
    advance_bar_order_status, advance_kitchen_order_status, create_bar_order, create_booking,
    create_kitchen_order, update_booking,
};
use crate::request_response::{
    AdvanceOrderStatusRequest, CreateBarOrderRequest, CreateBookingRequest,
    CreateKitchenOrderRequest, UpdateBookingRequest,
};
use frontdesk_persistence::Persistence;
use rust_decimal::Decimal;

fn walk_in_kitchen_request() -> CreateKitchenOrderRequest {
    CreateKitchenOrderRequest {
        booking_id: None,
        guest_name: Some("Walk-in Customer".to_string()),
        item_name: "Jollof Rice".to_string(),
        unit_price: Decimal::from(3_000),
        quantity: 2,
        notes: None,
    }
}

fn lodged_booking(persistence: &mut Persistence, staff: &AuthenticatedStaff) -> i64 {
    let room_id = seed_room(persistence, staff, "101");
    let guest_id = seed_guest(persistence, staff, "Ada Obi");
    create_booking(
        persistence,
        CreateBookingRequest {
            room_id,
            guest_id,
            check_in: "2024-01-01".to_string(),
            check_out: "2024-01-03".to_string(),
        },
        staff,
    )
    .unwrap()
    .booking_id
}

#[test]
fn test_walk_in_kitchen_order_billed_separately() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);

    let order = create_kitchen_order(&mut persistence, walk_in_kitchen_request(), &staff).unwrap();

    assert_eq!(order.total_amount, Decimal::from(6_000));
    assert_eq!(order.billing_type, "separate");
    assert_eq!(order.status, "pending");
    assert_eq!(order.guest_name, "Walk-in Customer");
    assert!(order.room_number.is_none());
}

#[test]
fn test_walk_in_order_requires_a_name() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);

    let mut request = walk_in_kitchen_request();
    request.guest_name = None;
    assert!(matches!(
        create_kitchen_order(&mut persistence, request, &staff),
        Err(ApiError::InvalidInput { field, .. }) if field == "guest_name"
    ));
}

#[test]
fn test_order_rejects_zero_quantity() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);

    let mut request = walk_in_kitchen_request();
    request.quantity = 0;
    assert!(matches!(
        create_kitchen_order(&mut persistence, request, &staff),
        Err(ApiError::InvalidInput { field, .. }) if field == "quantity"
    ));
}

#[test]
fn test_lodged_order_resolves_booking_context() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let booking_id = lodged_booking(&mut persistence, &staff);

    let order = create_kitchen_order(
        &mut persistence,
        CreateKitchenOrderRequest {
            booking_id: Some(booking_id),
            guest_name: None,
            item_name: "Egusi Soup".to_string(),
            unit_price: Decimal::from(4_000),
            quantity: 1,
            notes: Some("No pepper".to_string()),
        },
        &staff,
    )
    .unwrap();

    // Unpaid booking: charged to the room, with name and room captured.
    assert_eq!(order.billing_type, "room_bill");
    assert_eq!(order.guest_name, "Ada Obi");
    assert_eq!(order.room_number.as_deref(), Some("101"));
    assert_eq!(order.booking_id, Some(booking_id));
}

#[test]
fn test_paid_booking_orders_billed_separately() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let booking_id = lodged_booking(&mut persistence, &staff);

    let booking = crate::handlers::get_booking(&mut persistence, booking_id).unwrap();
    update_booking(
        &mut persistence,
        booking_id,
        UpdateBookingRequest {
            room_id: booking.room_id,
            guest_id: booking.guest_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            status: booking.status,
            payment_status: "paid".to_string(),
        },
        &staff,
    )
    .unwrap();

    let order = create_kitchen_order(
        &mut persistence,
        CreateKitchenOrderRequest {
            booking_id: Some(booking_id),
            guest_name: None,
            item_name: "Egusi Soup".to_string(),
            unit_price: Decimal::from(4_000),
            quantity: 1,
            notes: None,
        },
        &staff,
    )
    .unwrap();

    assert_eq!(order.billing_type, "separate");
}

#[test]
fn test_order_against_completed_booking_rejected() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let booking_id = lodged_booking(&mut persistence, &staff);

    let booking = crate::handlers::get_booking(&mut persistence, booking_id).unwrap();
    update_booking(
        &mut persistence,
        booking_id,
        UpdateBookingRequest {
            room_id: booking.room_id,
            guest_id: booking.guest_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            status: "completed".to_string(),
            payment_status: booking.payment_status,
        },
        &staff,
    )
    .unwrap();

    let result = create_kitchen_order(
        &mut persistence,
        CreateKitchenOrderRequest {
            booking_id: Some(booking_id),
            guest_name: None,
            item_name: "Egusi Soup".to_string(),
            unit_price: Decimal::from(4_000),
            quantity: 1,
            notes: None,
        },
        &staff,
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. })
            if rule == "order_requires_active_booking"
    ));
}

#[test]
fn test_bar_order_prices_from_catalog() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let drink_id = seed_drink(&mut persistence, &staff);

    // ₦1,500 × 3 from the catalog price.
    let order = create_bar_order(
        &mut persistence,
        CreateBarOrderRequest {
            booking_id: None,
            guest_name: Some("Walk-in Customer".to_string()),
            drink_id,
            quantity: 3,
            notes: None,
        },
        &staff,
    )
    .unwrap();

    assert_eq!(order.unit_price, Decimal::from(1_500));
    assert_eq!(order.total_amount, Decimal::from(4_500));
    assert_eq!(order.drink_name, "Chapman");
    assert_eq!(order.guest_kind, "walk_in");
    assert_eq!(order.billing_type, "separate");
}

#[test]
fn test_bar_order_unknown_drink_rejected() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);

    let result = create_bar_order(
        &mut persistence,
        CreateBarOrderRequest {
            booking_id: None,
            guest_name: Some("Walk-in Customer".to_string()),
            drink_id: 404,
            quantity: 1,
            notes: None,
        },
        &staff,
    );
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_kitchen_order_walks_the_full_status_path() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);

    let order = create_kitchen_order(&mut persistence, walk_in_kitchen_request(), &staff).unwrap();

    for next in ["preparing", "ready", "delivered", "completed"] {
        let advanced = advance_kitchen_order_status(
            &mut persistence,
            order.order_id,
            AdvanceOrderStatusRequest {
                next_status: next.to_string(),
            },
            &staff,
        )
        .unwrap();
        assert_eq!(advanced.status, next);
    }

    // Completed is terminal.
    assert!(
        advance_kitchen_order_status(
            &mut persistence,
            order.order_id,
            AdvanceOrderStatusRequest {
                next_status: "pending".to_string(),
            },
            &staff,
        )
        .is_err()
    );
}

#[test]
fn test_order_status_cannot_skip_steps() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);

    let order = create_kitchen_order(&mut persistence, walk_in_kitchen_request(), &staff).unwrap();

    for illegal in ["ready", "delivered", "completed", "pending"] {
        assert!(matches!(
            advance_kitchen_order_status(
                &mut persistence,
                order.order_id,
                AdvanceOrderStatusRequest {
                    next_status: illegal.to_string(),
                },
                &staff,
            ),
            Err(ApiError::DomainRuleViolation { rule, .. })
                if rule == "order_status_transition"
        ));
    }
}

#[test]
fn test_bar_orders_serve_rather_than_deliver() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let drink_id = seed_drink(&mut persistence, &staff);

    let order = create_bar_order(
        &mut persistence,
        CreateBarOrderRequest {
            booking_id: None,
            guest_name: Some("Walk-in Customer".to_string()),
            drink_id,
            quantity: 1,
            notes: None,
        },
        &staff,
    )
    .unwrap();

    for next in ["preparing", "ready"] {
        advance_bar_order_status(
            &mut persistence,
            order.order_id,
            AdvanceOrderStatusRequest {
                next_status: next.to_string(),
            },
            &staff,
        )
        .unwrap();
    }

    // A ready bar order is served, never delivered.
    assert!(
        advance_bar_order_status(
            &mut persistence,
            order.order_id,
            AdvanceOrderStatusRequest {
                next_status: "delivered".to_string(),
            },
            &staff,
        )
        .is_err()
    );
    let served = advance_bar_order_status(
        &mut persistence,
        order.order_id,
        AdvanceOrderStatusRequest {
            next_status: "served".to_string(),
        },
        &staff,
    )
    .unwrap();
    assert_eq!(served.status, "served");
}
