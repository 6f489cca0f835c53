// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drink catalog queries.

use diesel::prelude::*;
use tracing::debug;

use crate::convert::parse_amount;
use crate::diesel_schema::{drink_categories, drinks};
use crate::error::PersistenceError;
use frontdesk_domain::{Drink, DrinkCategory};

/// Diesel Queryable struct for drink rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = drinks)]
struct DrinkRow {
    drink_id: i64,
    category_id: i64,
    name: String,
    price: String,
}

/// Diesel Queryable struct for drink category rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = drink_categories)]
struct CategoryRow {
    category_id: i64,
    name: String,
}

fn drink_from_row(row: DrinkRow) -> Result<Drink, PersistenceError> {
    Ok(Drink {
        drink_id: Some(row.drink_id),
        category_id: row.category_id,
        name: row.name,
        price: parse_amount(&row.price, "drinks.price")?,
    })
}

/// Retrieves a drink by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is corrupt.
/// Returns `Ok(None)` if the drink is not found.
pub fn get_drink(
    conn: &mut SqliteConnection,
    drink_id: i64,
) -> Result<Option<Drink>, PersistenceError> {
    debug!("Looking up drink by id: {}", drink_id);

    let result: Result<DrinkRow, diesel::result::Error> = drinks::table
        .filter(drinks::drink_id.eq(drink_id))
        .select(DrinkRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(drink_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists the full drink catalog ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is corrupt.
pub fn list_drinks(conn: &mut SqliteConnection) -> Result<Vec<Drink>, PersistenceError> {
    debug!("Listing all drinks");

    let rows: Vec<DrinkRow> = drinks::table
        .select(DrinkRow::as_select())
        .order_by(drinks::name.asc())
        .load(conn)?;

    rows.into_iter().map(drink_from_row).collect()
}

/// Lists the drink categories ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_drink_categories(
    conn: &mut SqliteConnection,
) -> Result<Vec<DrinkCategory>, PersistenceError> {
    debug!("Listing drink categories");

    let rows: Vec<CategoryRow> = drink_categories::table
        .select(CategoryRow::as_select())
        .order_by(drink_categories::name.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| DrinkCategory {
            category_id: Some(row.category_id),
            name: row.name,
        })
        .collect())
}
