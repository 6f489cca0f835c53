// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    rooms (room_id) {
        room_id -> BigInt,
        room_number -> Text,
        room_type -> Text,
        rate -> Text,
        status -> Text,
    }
}

diesel::table! {
    guests (guest_id) {
        guest_id -> BigInt,
        full_name -> Text,
        email -> Text,
        phone -> Text,
        address -> Text,
    }
}

diesel::table! {
    drink_categories (category_id) {
        category_id -> BigInt,
        name -> Text,
    }
}

diesel::table! {
    drinks (drink_id) {
        drink_id -> BigInt,
        category_id -> BigInt,
        name -> Text,
        price -> Text,
    }
}

diesel::table! {
    auth_accounts (account_id) {
        account_id -> BigInt,
        email -> Text,
        password_hash -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    staff (staff_id) {
        staff_id -> BigInt,
        account_id -> BigInt,
        email -> Text,
        full_name -> Text,
        role -> Text,
    }
}

diesel::table! {
    sessions (session_id) {
        session_id -> BigInt,
        session_token -> Text,
        account_id -> BigInt,
        created_at -> Text,
        last_activity_at -> Text,
        expires_at -> Text,
    }
}

diesel::table! {
    bookings (booking_id) {
        booking_id -> BigInt,
        room_id -> BigInt,
        guest_id -> BigInt,
        check_in -> Text,
        check_out -> Text,
        total_amount -> Text,
        status -> Text,
        payment_status -> Text,
        created_by -> BigInt,
        created_at -> Text,
    }
}

diesel::table! {
    kitchen_orders (order_id) {
        order_id -> BigInt,
        booking_id -> Nullable<BigInt>,
        room_number -> Nullable<Text>,
        guest_name -> Text,
        item_name -> Text,
        unit_price -> Text,
        quantity -> Integer,
        total_amount -> Text,
        status -> Text,
        notes -> Nullable<Text>,
        billing_type -> Text,
        created_by -> BigInt,
        created_at -> Text,
    }
}

diesel::table! {
    bar_orders (order_id) {
        order_id -> BigInt,
        booking_id -> Nullable<BigInt>,
        room_number -> Nullable<Text>,
        guest_name -> Text,
        guest_kind -> Text,
        drink_id -> BigInt,
        drink_name -> Text,
        unit_price -> Text,
        quantity -> Integer,
        total_amount -> Text,
        status -> Text,
        notes -> Nullable<Text>,
        billing_type -> Text,
        created_by -> BigInt,
        created_at -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    rooms,
    guests,
    drink_categories,
    drinks,
    auth_accounts,
    staff,
    sessions,
    bookings,
    kitchen_orders,
    bar_orders,
);
