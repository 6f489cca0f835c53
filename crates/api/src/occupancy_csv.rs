// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the occupancy report.

use crate::error::ApiError;
use crate::request_response::DailyOccupancyInfo;

/// Renders the occupancy rows as CSV.
///
/// Columns: `Date`, `Occupied Rooms`, `Total Rooms`, `Occupancy Rate`
/// (percentage with two decimals and a `%` suffix).
///
/// # Errors
///
/// Returns an error if CSV serialization fails.
pub fn occupancy_report_csv(occupancy: &[DailyOccupancyInfo]) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["Date", "Occupied Rooms", "Total Rooms", "Occupancy Rate"])
        .map_err(csv_error)?;

    for day in occupancy {
        writer
            .write_record([
                day.date.clone(),
                day.occupied_rooms.to_string(),
                day.total_rooms.to_string(),
                format!("{:.2}%", day.occupancy_rate),
            ])
            .map_err(csv_error)?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to flush CSV writer: {e}"),
        })?;

    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV output was not valid UTF-8: {e}"),
    })
}

fn csv_error(err: csv::Error) -> ApiError {
    ApiError::Internal {
        message: format!("Failed to write CSV: {err}"),
    }
}
