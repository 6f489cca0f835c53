// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drink catalog mutations.

use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::{drink_categories, drinks};
use crate::error::PersistenceError;
use crate::sqlite;
use frontdesk_domain::Drink;

/// Creates a drink category.
///
/// # Errors
///
/// Returns an error if the category cannot be created (e.g. the name
/// is already taken).
pub fn create_drink_category(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating drink category {}", name);

    diesel::insert_into(drink_categories::table)
        .values(drink_categories::name.eq(name))
        .execute(conn)?;

    let category_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(category_id, "Drink category created");
    Ok(category_id)
}

/// Creates a catalog drink.
///
/// # Errors
///
/// Returns an error if the drink cannot be created (e.g. the category
/// does not exist).
pub fn create_drink(conn: &mut SqliteConnection, drink: &Drink) -> Result<i64, PersistenceError> {
    info!("Creating drink {} (price {})", drink.name, drink.price);

    diesel::insert_into(drinks::table)
        .values((
            drinks::category_id.eq(drink.category_id),
            drinks::name.eq(&drink.name),
            drinks::price.eq(drink.price.to_string()),
        ))
        .execute(conn)?;

    let drink_id: i64 = sqlite::last_insert_rowid(conn)?;

    info!(drink_id, "Drink created");
    Ok(drink_id)
}
