// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Kitchen and bar order mutations.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::convert::format_stored_timestamp;
use crate::diesel_schema::{bar_orders, kitchen_orders};
use crate::error::PersistenceError;
use crate::sqlite;
use frontdesk_domain::{BarOrder, KitchenOrder, OrderStatus};

/// Creates a kitchen order.
///
/// # Errors
///
/// Returns an error if the order cannot be created.
pub fn create_kitchen_order(
    conn: &mut SqliteConnection,
    order: &KitchenOrder,
) -> Result<i64, PersistenceError> {
    info!(
        guest_name = %order.guest_name,
        item_name = %order.item_name,
        quantity = order.quantity,
        "Creating kitchen order"
    );

    diesel::insert_into(kitchen_orders::table)
        .values((
            kitchen_orders::booking_id.eq(order.booking_id),
            kitchen_orders::room_number.eq(order.room_number.as_deref()),
            kitchen_orders::guest_name.eq(&order.guest_name),
            kitchen_orders::item_name.eq(&order.item_name),
            kitchen_orders::unit_price.eq(order.unit_price.to_string()),
            kitchen_orders::quantity.eq(order.quantity),
            kitchen_orders::total_amount.eq(order.total_amount.to_string()),
            kitchen_orders::status.eq(order.status.as_str()),
            kitchen_orders::notes.eq(order.notes.as_deref()),
            kitchen_orders::billing_type.eq(order.billing_type.as_str()),
            kitchen_orders::created_by.eq(order.created_by),
            kitchen_orders::created_at.eq(format_stored_timestamp(
                order.created_at,
                "kitchen_orders.created_at",
            )?),
        ))
        .execute(conn)?;

    let order_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(order_id, "Kitchen order created");
    Ok(order_id)
}

/// Sets a kitchen order's status.
///
/// Transition legality is validated at the API boundary; this mutation
/// writes what it is given.
///
/// # Errors
///
/// Returns an error if the update fails or the order does not exist.
pub fn set_kitchen_order_status(
    conn: &mut SqliteConnection,
    order_id: i64,
    status: OrderStatus,
) -> Result<(), PersistenceError> {
    debug!("Setting kitchen order {} status to {}", order_id, status);

    let updated: usize =
        diesel::update(kitchen_orders::table.filter(kitchen_orders::order_id.eq(order_id)))
            .set(kitchen_orders::status.eq(status.as_str()))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Kitchen order {order_id}"
        )));
    }
    Ok(())
}

/// Creates a bar order.
///
/// # Errors
///
/// Returns an error if the order cannot be created (e.g. the drink
/// does not exist).
pub fn create_bar_order(
    conn: &mut SqliteConnection,
    order: &BarOrder,
) -> Result<i64, PersistenceError> {
    info!(
        guest_name = %order.guest_name,
        drink_name = %order.drink_name,
        quantity = order.quantity,
        "Creating bar order"
    );

    diesel::insert_into(bar_orders::table)
        .values((
            bar_orders::booking_id.eq(order.booking_id),
            bar_orders::room_number.eq(order.room_number.as_deref()),
            bar_orders::guest_name.eq(&order.guest_name),
            bar_orders::guest_kind.eq(order.guest_kind.as_str()),
            bar_orders::drink_id.eq(order.drink_id),
            bar_orders::drink_name.eq(&order.drink_name),
            bar_orders::unit_price.eq(order.unit_price.to_string()),
            bar_orders::quantity.eq(order.quantity),
            bar_orders::total_amount.eq(order.total_amount.to_string()),
            bar_orders::status.eq(order.status.as_str()),
            bar_orders::notes.eq(order.notes.as_deref()),
            bar_orders::billing_type.eq(order.billing_type.as_str()),
            bar_orders::created_by.eq(order.created_by),
            bar_orders::created_at.eq(format_stored_timestamp(
                order.created_at,
                "bar_orders.created_at",
            )?),
        ))
        .execute(conn)?;

    let order_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(order_id, "Bar order created");
    Ok(order_id)
}

/// Sets a bar order's status.
///
/// Transition legality is validated at the API boundary; this mutation
/// writes what it is given.
///
/// # Errors
///
/// Returns an error if the update fails or the order does not exist.
pub fn set_bar_order_status(
    conn: &mut SqliteConnection,
    order_id: i64,
    status: OrderStatus,
) -> Result<(), PersistenceError> {
    debug!("Setting bar order {} status to {}", order_id, status);

    let updated: usize =
        diesel::update(bar_orders::table.filter(bar_orders::order_id.eq(order_id)))
            .set(bar_orders::status.eq(status.as_str()))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Bar order {order_id}")));
    }
    Ok(())
}
