// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp and date string conversions.
//!
//! All timestamps cross the persistence boundary as ISO 8601 text in
//! UTC. Formatting goes through these helpers so that stored values
//! share one fixed-width representation and compare correctly as
//! strings.

use crate::error::DomainError;
use time::format_description::well_known::Iso8601;
use time::{Date, OffsetDateTime};

/// Formats a timestamp as an ISO 8601 string.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, DomainError> {
    value
        .format(&Iso8601::DEFAULT)
        .map_err(|e| DomainError::DateFormatError {
            error: e.to_string(),
        })
}

/// Parses an ISO 8601 timestamp string.
///
/// # Errors
///
/// Returns an error if the string is not a valid ISO 8601 timestamp.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::parse(value, &Iso8601::DEFAULT).map_err(|e| DomainError::DateParseError {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn format_date(value: Date) -> Result<String, DomainError> {
    let format =
        time::format_description::parse("[year]-[month]-[day]").map_err(|e| {
            DomainError::DateFormatError {
                error: e.to_string(),
            }
        })?;
    value
        .format(&format)
        .map_err(|e| DomainError::DateFormatError {
            error: e.to_string(),
        })
}

/// Parses an ISO 8601 calendar date string (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    let format =
        time::format_description::parse("[year]-[month]-[day]").map_err(|e| {
            DomainError::DateFormatError {
                error: e.to_string(),
            }
        })?;
    Date::parse(value, &format).map_err(|e| DomainError::DateParseError {
        value: value.to_string(),
        error: e.to_string(),
    })
}
