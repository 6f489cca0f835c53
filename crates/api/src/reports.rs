// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report assembly: fetch rows, derive with the domain rollups, shape
//! the response. Read-only; nothing here mutates.

use std::collections::HashMap;
use time::Date;

use frontdesk_domain::{
    Booking, BookingStats, BookingSummary, DailyOccupancy, Guest, Room, RoomTypeRevenue,
    booking_stats, daily_occupancy, format_date, format_timestamp, revenue_by_room_type,
};
use frontdesk_persistence::Persistence;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    BookingReportResponse, BookingResponse, BookingStatsInfo, DailyOccupancyInfo,
    DashboardResponse, RoomTypeRevenueInfo,
};

fn parse_report_date(value: &str, field: &str) -> Result<Date, ApiError> {
    frontdesk_domain::parse_date(value).map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("'{value}' is not a date (YYYY-MM-DD)"),
    })
}

/// Builds the booking report for an inclusive date range.
///
/// Bookings overlapping the range are bucketed by status, summed for
/// revenue, grouped by room type, and tested day by day for occupancy.
/// The average booking value is zero for an empty range, and the
/// occupancy rate is zero when the hotel has no rooms.
///
/// # Errors
///
/// Returns an error if the dates are invalid, the range is inverted,
/// or persistence fails.
pub fn booking_report(
    persistence: &mut Persistence,
    start_date: &str,
    end_date: &str,
) -> Result<BookingReportResponse, ApiError> {
    let start: Date = parse_report_date(start_date, "start_date")?;
    let end: Date = parse_report_date(end_date, "end_date")?;
    if start > end {
        return Err(ApiError::InvalidInput {
            field: String::from("end_date"),
            message: String::from("End date must not fall before start date"),
        });
    }

    let range_start: String = format_timestamp(start.midnight().assume_utc())
        .map_err(translate_domain_error)?;
    let range_end: String = format_timestamp(
        end.with_hms(23, 59, 59)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to build range end: {e}"),
            })?
            .assume_utc(),
    )
    .map_err(translate_domain_error)?;

    let bookings: Vec<Booking> =
        persistence.list_bookings_overlapping(&range_start, &range_end)?;

    let room_types: HashMap<i64, frontdesk_domain::RoomType> = persistence
        .list_rooms()?
        .into_iter()
        .filter_map(|room: Room| room.room_id.map(|room_id| (room_id, room.room_type)))
        .collect();

    let summaries: Vec<BookingSummary> = bookings
        .iter()
        .map(|booking| {
            let room_type = room_types.get(&booking.room_id).copied().ok_or_else(|| {
                ApiError::ResourceNotFound {
                    resource_type: String::from("Room"),
                    message: format!("Room {} does not exist", booking.room_id),
                }
            })?;
            Ok(BookingSummary {
                status: booking.status,
                total_amount: booking.total_amount,
                room_type,
                check_in: booking.check_in.date(),
                check_out: booking.check_out.date(),
            })
        })
        .collect::<Result<Vec<BookingSummary>, ApiError>>()?;

    let stats: BookingStats = booking_stats(&summaries);
    let by_type: Vec<RoomTypeRevenue> = revenue_by_room_type(&summaries);

    let total_rooms: usize = usize::try_from(persistence.count_rooms()?).unwrap_or(0);
    let occupancy: Vec<DailyOccupancy> = daily_occupancy(start, end, &summaries, total_rooms);

    Ok(BookingReportResponse {
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        stats: BookingStatsInfo {
            total_bookings: stats.total_bookings,
            active_bookings: stats.active_bookings,
            completed_bookings: stats.completed_bookings,
            cancelled_bookings: stats.cancelled_bookings,
            total_revenue: stats.total_revenue,
            average_booking_value: stats.average_booking_value,
        },
        revenue_by_room_type: by_type
            .into_iter()
            .map(|entry| RoomTypeRevenueInfo {
                room_type: entry.room_type.as_str().to_string(),
                bookings: entry.bookings,
                revenue: entry.revenue,
            })
            .collect(),
        occupancy: occupancy
            .into_iter()
            .map(|day| {
                Ok(DailyOccupancyInfo {
                    date: format_date(day.date).map_err(translate_domain_error)?,
                    occupied_rooms: day.occupied_rooms,
                    total_rooms: day.total_rooms,
                    occupancy_rate: day.occupancy_rate,
                })
            })
            .collect::<Result<Vec<DailyOccupancyInfo>, ApiError>>()?,
    })
}

/// Builds the dashboard summary: room and guest counts, active
/// bookings, and the five most recent bookings.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn dashboard_summary(persistence: &mut Persistence) -> Result<DashboardResponse, ApiError> {
    const RECENT_LIMIT: i64 = 5;

    let total_rooms: i64 = persistence.count_rooms()?;
    let occupied_rooms: i64 = persistence.count_occupied_rooms()?;
    let total_guests: i64 = persistence.count_guests()?;
    let active_bookings: i64 = persistence.count_active_bookings()?;

    let recent: Vec<Booking> = persistence.list_recent_bookings(RECENT_LIMIT)?;
    let mut recent_bookings: Vec<BookingResponse> = Vec::with_capacity(recent.len());
    for booking in &recent {
        let room: Room = persistence.get_room(booking.room_id)?.ok_or_else(|| {
            ApiError::ResourceNotFound {
                resource_type: String::from("Room"),
                message: format!("Room {} does not exist", booking.room_id),
            }
        })?;
        let guest: Guest = persistence.get_guest(booking.guest_id)?.ok_or_else(|| {
            ApiError::ResourceNotFound {
                resource_type: String::from("Guest"),
                message: format!("Guest {} does not exist", booking.guest_id),
            }
        })?;
        recent_bookings.push(BookingResponse {
            booking_id: booking.booking_id.ok_or_else(|| ApiError::Internal {
                message: String::from("Booking row is missing its id"),
            })?,
            room_id: booking.room_id,
            room_number: room.room_number,
            guest_id: booking.guest_id,
            guest_name: guest.full_name,
            check_in: format_timestamp(booking.check_in).map_err(translate_domain_error)?,
            check_out: format_timestamp(booking.check_out).map_err(translate_domain_error)?,
            total_amount: booking.total_amount,
            status: booking.status.as_str().to_string(),
            payment_status: booking.payment_status.as_str().to_string(),
            created_at: format_timestamp(booking.created_at).map_err(translate_domain_error)?,
        });
    }

    Ok(DashboardResponse {
        total_rooms,
        occupied_rooms,
        total_guests,
        active_bookings,
        recent_bookings,
    })
}
