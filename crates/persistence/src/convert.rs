// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row/domain conversion helpers shared by queries and mutations.
//!
//! Amounts are stored as decimal text and timestamps as ISO 8601 text;
//! a stored value that no longer parses is a serialization error, not
//! a query error.

use crate::error::PersistenceError;
use frontdesk_domain::{format_timestamp, parse_timestamp};
use rust_decimal::Decimal;
use std::str::FromStr;
use time::OffsetDateTime;

pub(crate) fn serialization_error(
    column: &'static str,
    err: impl std::fmt::Display,
) -> PersistenceError {
    PersistenceError::SerializationError(format!("column '{column}': {err}"))
}

/// Parses a stored decimal amount.
pub(crate) fn parse_amount(
    value: &str,
    column: &'static str,
) -> Result<Decimal, PersistenceError> {
    Decimal::from_str(value).map_err(|e| serialization_error(column, e))
}

/// Parses a stored ISO 8601 timestamp.
pub(crate) fn parse_stored_timestamp(
    value: &str,
    column: &'static str,
) -> Result<OffsetDateTime, PersistenceError> {
    parse_timestamp(value).map_err(|e| serialization_error(column, e))
}

/// Formats a timestamp for storage.
pub(crate) fn format_stored_timestamp(
    value: OffsetDateTime,
    column: &'static str,
) -> Result<String, PersistenceError> {
    format_timestamp(value).map_err(|e| serialization_error(column, e))
}
