// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for API tests.

use frontdesk_persistence::Persistence;
use rust_decimal::Decimal;

use crate::auth::{AuthenticatedStaff, AuthenticationService};
use crate::handlers::{create_drink, create_drink_category, create_guest, create_room};
use crate::request_response::{
    CreateDrinkCategoryRequest, CreateDrinkRequest, CreateGuestRequest, CreateRoomRequest,
    SignInRequest, SignUpRequest,
};

/// Creates an isolated in-memory persistence instance.
pub(crate) fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Registers and signs in a staff member, returning the authenticated
/// context and the session token.
pub(crate) fn signed_in_staff(persistence: &mut Persistence) -> (AuthenticatedStaff, String) {
    AuthenticationService::sign_up(
        persistence,
        &SignUpRequest {
            email: "desk@example.com".to_string(),
            password: "front desk pass".to_string(),
            full_name: "Ada Obi".to_string(),
            role: "receptionist".to_string(),
        },
    )
    .unwrap();

    let sign_in = AuthenticationService::sign_in(
        persistence,
        &SignInRequest {
            email: "desk@example.com".to_string(),
            password: "front desk pass".to_string(),
        },
    )
    .unwrap();

    let staff = AuthenticationService::validate_session(persistence, &sign_in.session_token)
        .unwrap();
    (staff, sign_in.session_token)
}

/// Creates a standard room at ₦20,000/night, returning its id.
pub(crate) fn seed_room(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    room_number: &str,
) -> i64 {
    create_room(
        persistence,
        CreateRoomRequest {
            room_number: room_number.to_string(),
            room_type: "standard".to_string(),
            rate: Decimal::from(20_000),
            status: None,
        },
        staff,
    )
    .unwrap()
    .room_id
}

/// Creates a guest, returning their id.
pub(crate) fn seed_guest(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    full_name: &str,
) -> i64 {
    create_guest(
        persistence,
        CreateGuestRequest {
            full_name: full_name.to_string(),
            email: "guest@example.com".to_string(),
            phone: "+2348000000000".to_string(),
            address: "12 Marina Road, Lagos".to_string(),
        },
        staff,
    )
    .unwrap()
    .guest_id
}

/// Creates a ₦1,500 catalog drink, returning its id.
pub(crate) fn seed_drink(persistence: &mut Persistence, staff: &AuthenticatedStaff) -> i64 {
    let category = create_drink_category(
        persistence,
        CreateDrinkCategoryRequest {
            name: "Soft Drinks".to_string(),
        },
        staff,
    )
    .unwrap();

    create_drink(
        persistence,
        CreateDrinkRequest {
            category_id: category.category_id,
            name: "Chapman".to_string(),
            price: Decimal::from(1_500),
        },
        staff,
    )
    .unwrap()
    .drink_id
}
