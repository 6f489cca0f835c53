// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report derivations.
//!
//! Pure rollups over booking summaries fetched for a date range:
//! status buckets, revenue, per-room-type revenue, and per-day
//! occupancy. Nothing here mutates anything.

use crate::types::{BookingStatus, RoomType};
use rust_decimal::Decimal;
use time::Date;

/// The slice of a booking a report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Stay total.
    pub total_amount: Decimal,
    /// Type of the booked room.
    pub room_type: RoomType,
    /// Check-in date.
    pub check_in: Date,
    /// Check-out date.
    pub check_out: Date,
}

/// Booking counts and revenue for a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingStats {
    /// All bookings in range.
    pub total_bookings: usize,
    /// Bookings with status active.
    pub active_bookings: usize,
    /// Bookings with status completed.
    pub completed_bookings: usize,
    /// Bookings with status cancelled.
    pub cancelled_bookings: usize,
    /// Sum of booking totals.
    pub total_revenue: Decimal,
    /// Revenue divided by booking count; zero for an empty range.
    pub average_booking_value: Decimal,
}

/// Revenue rollup for one room type.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTypeRevenue {
    /// The room type.
    pub room_type: RoomType,
    /// Number of bookings of this type in range.
    pub bookings: usize,
    /// Sum of booking totals for this type.
    pub revenue: Decimal,
}

/// Occupancy figures for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOccupancy {
    /// The day.
    pub date: Date,
    /// Rooms with a non-cancelled booking covering the day.
    pub occupied_rooms: usize,
    /// Total rooms in the hotel.
    pub total_rooms: usize,
    /// `occupied / total × 100`; zero when the hotel has no rooms.
    pub occupancy_rate: f64,
}

/// Buckets bookings by status and sums revenue.
///
/// The average booking value is zero, not an error, when the range
/// holds no bookings.
#[must_use]
pub fn booking_stats(bookings: &[BookingSummary]) -> BookingStats {
    let active_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Active)
        .count();
    let completed_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .count();
    let cancelled_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Cancelled)
        .count();
    let total_revenue: Decimal = bookings.iter().map(|b| b.total_amount).sum();
    let average_booking_value = if bookings.is_empty() {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(bookings.len() as u64)
    };

    BookingStats {
        total_bookings: bookings.len(),
        active_bookings,
        completed_bookings,
        cancelled_bookings,
        total_revenue,
        average_booking_value,
    }
}

/// Groups bookings by room type, in catalog order, skipping types with
/// no bookings in range.
#[must_use]
pub fn revenue_by_room_type(bookings: &[BookingSummary]) -> Vec<RoomTypeRevenue> {
    RoomType::ALL
        .iter()
        .filter_map(|room_type| {
            let matching: Vec<&BookingSummary> = bookings
                .iter()
                .filter(|b| b.room_type == *room_type)
                .collect();
            if matching.is_empty() {
                return None;
            }
            Some(RoomTypeRevenue {
                room_type: *room_type,
                bookings: matching.len(),
                revenue: matching.iter().map(|b| b.total_amount).sum(),
            })
        })
        .collect()
}

/// Computes per-day occupancy across a date range (inclusive on both
/// ends).
///
/// A room counts as occupied on a day when any non-cancelled booking's
/// `[check_in, check_out]` date interval contains that day. The rate
/// is zero when the hotel has no rooms.
#[must_use]
pub fn daily_occupancy(
    start: Date,
    end: Date,
    bookings: &[BookingSummary],
    total_rooms: usize,
) -> Vec<DailyOccupancy> {
    let mut days: Vec<DailyOccupancy> = Vec::new();
    let mut day = start;
    while day <= end {
        let occupied_rooms = bookings
            .iter()
            .filter(|b| {
                b.status != BookingStatus::Cancelled && b.check_in <= day && day <= b.check_out
            })
            .count();
        let occupancy_rate = if total_rooms == 0 {
            0.0
        } else {
            occupied_rooms as f64 / total_rooms as f64 * 100.0
        };
        days.push(DailyOccupancy {
            date: day,
            occupied_rooms,
            total_rooms,
            occupancy_rate,
        });
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn summary(
        status: BookingStatus,
        total: i64,
        room_type: RoomType,
        check_in: Date,
        check_out: Date,
    ) -> BookingSummary {
        BookingSummary {
            status,
            total_amount: Decimal::from(total),
            room_type,
            check_in,
            check_out,
        }
    }

    #[test]
    fn test_stats_over_empty_range_average_is_zero() {
        let stats = booking_stats(&[]);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.average_booking_value, Decimal::ZERO);
    }

    #[test]
    fn test_stats_buckets_and_revenue() {
        let bookings = vec![
            summary(
                BookingStatus::Active,
                40_000,
                RoomType::Standard,
                date!(2024 - 01 - 01),
                date!(2024 - 01 - 03),
            ),
            summary(
                BookingStatus::Completed,
                60_000,
                RoomType::Deluxe,
                date!(2024 - 01 - 02),
                date!(2024 - 01 - 05),
            ),
            summary(
                BookingStatus::Cancelled,
                20_000,
                RoomType::Standard,
                date!(2024 - 01 - 04),
                date!(2024 - 01 - 05),
            ),
        ];
        let stats = booking_stats(&bookings);
        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.active_bookings, 1);
        assert_eq!(stats.completed_bookings, 1);
        assert_eq!(stats.cancelled_bookings, 1);
        assert_eq!(stats.total_revenue, Decimal::from(120_000));
        assert_eq!(stats.average_booking_value, Decimal::from(40_000));
    }

    #[test]
    fn test_revenue_grouped_by_room_type_in_catalog_order() {
        let bookings = vec![
            summary(
                BookingStatus::Completed,
                30_000,
                RoomType::Suite,
                date!(2024 - 01 - 01),
                date!(2024 - 01 - 02),
            ),
            summary(
                BookingStatus::Active,
                10_000,
                RoomType::Standard,
                date!(2024 - 01 - 01),
                date!(2024 - 01 - 02),
            ),
            summary(
                BookingStatus::Active,
                15_000,
                RoomType::Standard,
                date!(2024 - 01 - 02),
                date!(2024 - 01 - 03),
            ),
        ];
        let rollup = revenue_by_room_type(&bookings);
        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].room_type, RoomType::Standard);
        assert_eq!(rollup[0].bookings, 2);
        assert_eq!(rollup[0].revenue, Decimal::from(25_000));
        assert_eq!(rollup[1].room_type, RoomType::Suite);
        assert_eq!(rollup[1].revenue, Decimal::from(30_000));
    }

    #[test]
    fn test_daily_occupancy_counts_covering_bookings() {
        let bookings = vec![
            summary(
                BookingStatus::Active,
                40_000,
                RoomType::Standard,
                date!(2024 - 01 - 01),
                date!(2024 - 01 - 03),
            ),
            summary(
                BookingStatus::Cancelled,
                40_000,
                RoomType::Standard,
                date!(2024 - 01 - 01),
                date!(2024 - 01 - 03),
            ),
        ];
        let days = daily_occupancy(date!(2024 - 01 - 01), date!(2024 - 01 - 04), &bookings, 4);
        assert_eq!(days.len(), 4);
        // Cancelled bookings never count toward occupancy.
        assert_eq!(days[0].occupied_rooms, 1);
        assert!((days[0].occupancy_rate - 25.0).abs() < f64::EPSILON);
        // Check-out day is still covered by the interval.
        assert_eq!(days[2].occupied_rooms, 1);
        assert_eq!(days[3].occupied_rooms, 0);
        assert!((days[3].occupancy_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_occupancy_rate_zero_without_rooms() {
        let days = daily_occupancy(date!(2024 - 01 - 01), date!(2024 - 01 - 01), &[], 0);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].occupied_rooms, 0);
        assert!((days[0].occupancy_rate - 0.0).abs() < f64::EPSILON);
    }
}
