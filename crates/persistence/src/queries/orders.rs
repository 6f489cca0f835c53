// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Kitchen and bar order queries.

use diesel::prelude::*;
use std::str::FromStr;
use tracing::debug;

use crate::convert::{parse_amount, parse_stored_timestamp, serialization_error};
use crate::diesel_schema::{bar_orders, kitchen_orders};
use crate::error::PersistenceError;
use frontdesk_domain::{BarOrder, BillingType, GuestKind, KitchenOrder, OrderStatus};

/// Diesel Queryable struct for kitchen order rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = kitchen_orders)]
struct KitchenOrderRow {
    order_id: i64,
    booking_id: Option<i64>,
    room_number: Option<String>,
    guest_name: String,
    item_name: String,
    unit_price: String,
    quantity: i32,
    total_amount: String,
    status: String,
    notes: Option<String>,
    billing_type: String,
    created_by: i64,
    created_at: String,
}

/// Diesel Queryable struct for bar order rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bar_orders)]
struct BarOrderRow {
    order_id: i64,
    booking_id: Option<i64>,
    room_number: Option<String>,
    guest_name: String,
    guest_kind: String,
    drink_id: i64,
    drink_name: String,
    unit_price: String,
    quantity: i32,
    total_amount: String,
    status: String,
    notes: Option<String>,
    billing_type: String,
    created_by: i64,
    created_at: String,
}

fn kitchen_order_from_row(row: KitchenOrderRow) -> Result<KitchenOrder, PersistenceError> {
    Ok(KitchenOrder {
        order_id: Some(row.order_id),
        booking_id: row.booking_id,
        room_number: row.room_number,
        guest_name: row.guest_name,
        item_name: row.item_name,
        unit_price: parse_amount(&row.unit_price, "kitchen_orders.unit_price")?,
        quantity: row.quantity,
        total_amount: parse_amount(&row.total_amount, "kitchen_orders.total_amount")?,
        status: OrderStatus::from_str(&row.status)
            .map_err(|e| serialization_error("kitchen_orders.status", e))?,
        notes: row.notes,
        billing_type: BillingType::parse(&row.billing_type)
            .map_err(|e| serialization_error("kitchen_orders.billing_type", e))?,
        created_by: row.created_by,
        created_at: parse_stored_timestamp(&row.created_at, "kitchen_orders.created_at")?,
    })
}

fn bar_order_from_row(row: BarOrderRow) -> Result<BarOrder, PersistenceError> {
    Ok(BarOrder {
        order_id: Some(row.order_id),
        booking_id: row.booking_id,
        room_number: row.room_number,
        guest_name: row.guest_name,
        guest_kind: GuestKind::parse(&row.guest_kind)
            .map_err(|e| serialization_error("bar_orders.guest_kind", e))?,
        drink_id: row.drink_id,
        drink_name: row.drink_name,
        unit_price: parse_amount(&row.unit_price, "bar_orders.unit_price")?,
        quantity: row.quantity,
        total_amount: parse_amount(&row.total_amount, "bar_orders.total_amount")?,
        status: OrderStatus::from_str(&row.status)
            .map_err(|e| serialization_error("bar_orders.status", e))?,
        notes: row.notes,
        billing_type: BillingType::parse(&row.billing_type)
            .map_err(|e| serialization_error("bar_orders.billing_type", e))?,
        created_by: row.created_by,
        created_at: parse_stored_timestamp(&row.created_at, "bar_orders.created_at")?,
    })
}

/// Retrieves a kitchen order by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is corrupt.
/// Returns `Ok(None)` if the order is not found.
pub fn get_kitchen_order(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Option<KitchenOrder>, PersistenceError> {
    debug!("Looking up kitchen order by id: {}", order_id);

    let result: Result<KitchenOrderRow, diesel::result::Error> = kitchen_orders::table
        .filter(kitchen_orders::order_id.eq(order_id))
        .select(KitchenOrderRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(kitchen_order_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all kitchen orders, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is corrupt.
pub fn list_kitchen_orders(
    conn: &mut SqliteConnection,
) -> Result<Vec<KitchenOrder>, PersistenceError> {
    debug!("Listing kitchen orders");

    let rows: Vec<KitchenOrderRow> = kitchen_orders::table
        .select(KitchenOrderRow::as_select())
        .order_by(kitchen_orders::created_at.desc())
        .load(conn)?;

    rows.into_iter().map(kitchen_order_from_row).collect()
}

/// Retrieves a bar order by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is corrupt.
/// Returns `Ok(None)` if the order is not found.
pub fn get_bar_order(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Option<BarOrder>, PersistenceError> {
    debug!("Looking up bar order by id: {}", order_id);

    let result: Result<BarOrderRow, diesel::result::Error> = bar_orders::table
        .filter(bar_orders::order_id.eq(order_id))
        .select(BarOrderRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(bar_order_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all bar orders, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is corrupt.
pub fn list_bar_orders(conn: &mut SqliteConnection) -> Result<Vec<BarOrder>, PersistenceError> {
    debug!("Listing bar orders");

    let rows: Vec<BarOrderRow> = bar_orders::table
        .select(BarOrderRow::as_select())
        .order_by(bar_orders::created_at.desc())
        .load(conn)?;

    rows.into_iter().map(bar_order_from_row).collect()
}
