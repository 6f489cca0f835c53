// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report and CSV export tests.

use super::helpers::{seed_guest, seed_room, signed_in_staff, test_persistence};
use crate::error::ApiError;
use crate::handlers::{create_booking, update_booking};
use crate::occupancy_csv::occupancy_report_csv;
use crate::reports::{booking_report, dashboard_summary};
use crate::request_response::{CreateBookingRequest, UpdateBookingRequest};
use frontdesk_persistence::Persistence;
use rust_decimal::Decimal;

#[test]
fn test_empty_range_report_has_zero_average() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    seed_room(&mut persistence, &staff, "101");

    let report = booking_report(&mut persistence, "2024-06-01", "2024-06-03").unwrap();

    assert_eq!(report.stats.total_bookings, 0);
    assert_eq!(report.stats.total_revenue, Decimal::ZERO);
    assert_eq!(report.stats.average_booking_value, Decimal::ZERO);
    assert!(report.revenue_by_room_type.is_empty());
    assert_eq!(report.occupancy.len(), 3);
    assert!(report.occupancy.iter().all(|day| day.occupied_rooms == 0));
}

#[test]
fn test_occupancy_rate_zero_when_no_rooms() {
    let mut persistence: Persistence = test_persistence();
    let (_staff, _token) = signed_in_staff(&mut persistence);

    let report = booking_report(&mut persistence, "2024-06-01", "2024-06-01").unwrap();
    assert_eq!(report.occupancy.len(), 1);
    assert_eq!(report.occupancy[0].total_rooms, 0);
    assert!((report.occupancy[0].occupancy_rate - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_report_rejects_inverted_range() {
    let mut persistence: Persistence = test_persistence();
    let (_staff, _token) = signed_in_staff(&mut persistence);

    assert!(matches!(
        booking_report(&mut persistence, "2024-06-03", "2024-06-01"),
        Err(ApiError::InvalidInput { field, .. }) if field == "end_date"
    ));
}

#[test]
fn test_report_buckets_revenue_and_occupancy() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_a = seed_room(&mut persistence, &staff, "101");
    let room_b = seed_room(&mut persistence, &staff, "102");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");

    // Two 2-night standard bookings at ₦20,000/night; one later
    // cancelled.
    create_booking(
        &mut persistence,
        CreateBookingRequest {
            room_id: room_a,
            guest_id,
            check_in: "2024-01-01".to_string(),
            check_out: "2024-01-03".to_string(),
        },
        &staff,
    )
    .unwrap();

    let cancelled = create_booking(
        &mut persistence,
        CreateBookingRequest {
            room_id: room_b,
            guest_id,
            check_in: "2024-01-02".to_string(),
            check_out: "2024-01-04".to_string(),
        },
        &staff,
    )
    .unwrap();
    update_booking(
        &mut persistence,
        cancelled.booking_id,
        UpdateBookingRequest {
            room_id: cancelled.room_id,
            guest_id: cancelled.guest_id,
            check_in: cancelled.check_in.clone(),
            check_out: cancelled.check_out.clone(),
            status: "cancelled".to_string(),
            payment_status: cancelled.payment_status.clone(),
        },
        &staff,
    )
    .unwrap();

    let report = booking_report(&mut persistence, "2024-01-01", "2024-01-04").unwrap();

    assert_eq!(report.stats.total_bookings, 2);
    assert_eq!(report.stats.active_bookings, 1);
    assert_eq!(report.stats.cancelled_bookings, 1);
    assert_eq!(report.stats.total_revenue, Decimal::from(80_000));
    assert_eq!(report.stats.average_booking_value, Decimal::from(40_000));

    assert_eq!(report.revenue_by_room_type.len(), 1);
    assert_eq!(report.revenue_by_room_type[0].room_type, "standard");
    assert_eq!(report.revenue_by_room_type[0].bookings, 2);
    assert_eq!(
        report.revenue_by_room_type[0].revenue,
        Decimal::from(80_000)
    );

    // Jan 2 is covered by both stays, but the cancelled one never
    // counts toward occupancy.
    let jan_2 = report
        .occupancy
        .iter()
        .find(|day| day.date == "2024-01-02")
        .unwrap();
    assert_eq!(jan_2.occupied_rooms, 1);
    assert_eq!(jan_2.total_rooms, 2);
    assert!((jan_2.occupancy_rate - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_occupancy_csv_shape() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");
    create_booking(
        &mut persistence,
        CreateBookingRequest {
            room_id,
            guest_id,
            check_in: "2024-01-01".to_string(),
            check_out: "2024-01-02".to_string(),
        },
        &staff,
    )
    .unwrap();

    let report = booking_report(&mut persistence, "2024-01-01", "2024-01-02").unwrap();
    let csv_text = occupancy_report_csv(&report.occupancy).unwrap();

    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines[0], "Date,Occupied Rooms,Total Rooms,Occupancy Rate");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "2024-01-01,1,1,100.00%");
    assert_eq!(lines[2], "2024-01-02,1,1,100.00%");
}

#[test]
fn test_dashboard_summary_counts() {
    let mut persistence: Persistence = test_persistence();
    let (staff, _token) = signed_in_staff(&mut persistence);
    let room_id = seed_room(&mut persistence, &staff, "101");
    seed_room(&mut persistence, &staff, "102");
    let guest_id = seed_guest(&mut persistence, &staff, "Ada Obi");

    create_booking(
        &mut persistence,
        CreateBookingRequest {
            room_id,
            guest_id,
            check_in: "2024-01-01".to_string(),
            check_out: "2024-01-03".to_string(),
        },
        &staff,
    )
    .unwrap();

    let dashboard = dashboard_summary(&mut persistence).unwrap();
    assert_eq!(dashboard.total_rooms, 2);
    assert_eq!(dashboard.occupied_rooms, 1);
    assert_eq!(dashboard.total_guests, 1);
    assert_eq!(dashboard.active_bookings, 1);
    assert_eq!(dashboard.recent_bookings.len(), 1);
    assert_eq!(dashboard.recent_bookings[0].room_number, "101");
}
