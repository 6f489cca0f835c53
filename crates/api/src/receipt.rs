// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Printable receipts and production dockets.
//!
//! Pure formatting: entity in, HTML fragment out, rendered through one
//! data-to-document mapping parameterized by [`ReceiptLayout`]. Money
//! lines derive VAT via the domain billing rules for display only;
//! nothing here is written back to the store. Dockets (the ticket sent
//! to the kitchen or bar) carry no money at all.

use rust_decimal::Decimal;

use frontdesk_domain::{ReceiptTotals, receipt_totals};

use crate::error::ApiError;
use crate::request_response::{BarOrderResponse, BookingResponse, KitchenOrderResponse};

/// Hotel name printed on every receipt header.
const HOTEL_NAME: &str = "FRONTDESK HOTEL & SUITES";

/// Presentation variant for a receipt.
///
/// Both layouts render the same data contract; the selector only
/// switches the wrapper and verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptLayout {
    /// Full-page styled document.
    Full,
    /// Register-tape document for thermal printers.
    Compact,
}

impl ReceiptLayout {
    /// Parses a layout from its query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known layout.
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        match s {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            _ => Err(ApiError::InvalidInput {
                field: String::from("layout"),
                message: format!("'{s}' is not a layout (full or compact)"),
            }),
        }
    }

    const fn css_class(self) -> &'static str {
        match self {
            Self::Full => "receipt receipt-full",
            Self::Compact => "receipt receipt-compact",
        }
    }
}

/// Escapes text for embedding in HTML.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formats a naira amount with thousands separators and two decimals.
fn naira(amount: Decimal) -> String {
    let formatted: String = format!("{amount:.2}");
    let (integer_part, fraction_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = integer_part
        .strip_prefix('-')
        .map_or(("", integer_part), |rest| ("-", rest));

    let mut grouped: String = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("\u{20a6}{sign}{grouped}.{fraction_part}")
}

/// Trims a stored ISO 8601 timestamp down to `YYYY-MM-DD HH:MM` for
/// display.
fn display_time(timestamp: &str) -> String {
    let trimmed: &str = if timestamp.len() >= 16 {
        &timestamp[..16]
    } else {
        timestamp
    };
    trimmed.replace('T', " ")
}

/// The single data-to-document mapping behind every receipt variant.
fn render_document(
    title: &str,
    detail_rows: &[(&str, String)],
    money_rows: &[(&str, String)],
    footer: Option<&str>,
    layout: ReceiptLayout,
) -> String {
    let mut html: String = String::new();

    html.push_str(&format!("<div class=\"{}\">\n", layout.css_class()));

    match layout {
        ReceiptLayout::Full => {
            html.push_str("  <header class=\"receipt-header\">\n");
            html.push_str(&format!("    <h1>{HOTEL_NAME}</h1>\n"));
            html.push_str(&format!("    <h2>{}</h2>\n", escape_html(title)));
            html.push_str("  </header>\n");
        }
        ReceiptLayout::Compact => {
            html.push_str("  <div class=\"center\">\n");
            html.push_str(&format!("    <strong>{HOTEL_NAME}</strong>\n"));
            html.push_str(&format!("    <p>{}</p>\n", escape_html(title)));
            html.push_str("  </div>\n  <hr/>\n");
        }
    }

    html.push_str("  <section class=\"receipt-details\">\n");
    for (label, value) in detail_rows {
        html.push_str(&format!(
            "    <div class=\"row\"><span>{}</span><span>{}</span></div>\n",
            escape_html(label),
            escape_html(value)
        ));
    }
    html.push_str("  </section>\n");

    if !money_rows.is_empty() {
        html.push_str("  <hr/>\n  <section class=\"receipt-totals\">\n");
        for (label, value) in money_rows {
            let class: &str = if *label == "Grand Total" {
                "row bold"
            } else {
                "row"
            };
            html.push_str(&format!(
                "    <div class=\"{class}\"><span>{}</span><span>{}</span></div>\n",
                escape_html(label),
                escape_html(value)
            ));
        }
        html.push_str("  </section>\n");
    }

    if let Some(footer) = footer {
        html.push_str("  <hr/>\n");
        html.push_str(&format!(
            "  <footer class=\"center small\"><p>{}</p></footer>\n",
            escape_html(footer)
        ));
    }

    html.push_str("</div>\n");
    html
}

/// Builds the three VAT money rows for a subtotal.
fn money_rows(subtotal: Decimal) -> Vec<(&'static str, String)> {
    let totals: ReceiptTotals = receipt_totals(subtotal);
    vec![
        ("Subtotal", naira(totals.subtotal)),
        ("VAT (7.5%)", naira(totals.vat)),
        ("Grand Total", naira(totals.grand_total)),
    ]
}

/// Renders a booking receipt.
#[must_use]
pub fn render_booking_receipt(booking: &BookingResponse, layout: ReceiptLayout) -> String {
    let detail_rows: Vec<(&str, String)> = vec![
        ("Receipt No", format!("BK-{}", booking.booking_id)),
        ("Guest", booking.guest_name.clone()),
        ("Room", booking.room_number.clone()),
        ("Check-In", display_time(&booking.check_in)),
        ("Check-Out", display_time(&booking.check_out)),
        ("Status", booking.status.clone()),
        ("Payment", booking.payment_status.clone()),
    ];

    render_document(
        "Booking Receipt",
        &detail_rows,
        &money_rows(booking.total_amount),
        Some("Thank you for your patronage"),
        layout,
    )
}

/// Renders a kitchen order receipt.
#[must_use]
pub fn render_kitchen_receipt(order: &KitchenOrderResponse, layout: ReceiptLayout) -> String {
    let mut detail_rows: Vec<(&str, String)> = vec![
        ("Receipt No", format!("KO-{}", order.order_id)),
        ("Customer", order.guest_name.clone()),
    ];
    if let Some(room_number) = &order.room_number {
        detail_rows.push(("Room", room_number.clone()));
    }
    detail_rows.push((
        "Item",
        format!("{}x {}", order.quantity, order.item_name),
    ));
    detail_rows.push(("Unit Price", naira(order.unit_price)));
    detail_rows.push(("Billing", order.billing_type.clone()));
    detail_rows.push(("Time", display_time(&order.created_at)));

    render_document(
        "Kitchen Receipt",
        &detail_rows,
        &money_rows(order.total_amount),
        Some("Thank you for your patronage"),
        layout,
    )
}

/// Renders a bar order receipt.
#[must_use]
pub fn render_bar_receipt(order: &BarOrderResponse, layout: ReceiptLayout) -> String {
    let mut detail_rows: Vec<(&str, String)> = vec![
        ("Receipt No", format!("BO-{}", order.order_id)),
        ("Customer", order.guest_name.clone()),
    ];
    if let Some(room_number) = &order.room_number {
        detail_rows.push(("Room", room_number.clone()));
    }
    detail_rows.push((
        "Item",
        format!("{}x {}", order.quantity, order.drink_name),
    ));
    detail_rows.push(("Unit Price", naira(order.unit_price)));
    detail_rows.push(("Billing", order.billing_type.clone()));
    detail_rows.push(("Time", display_time(&order.created_at)));

    render_document(
        "Bar Receipt",
        &detail_rows,
        &money_rows(order.total_amount),
        Some("Thank you for your patronage"),
        layout,
    )
}

/// Renders the kitchen production docket: what to cook, for whom, no
/// money.
#[must_use]
pub fn render_kitchen_docket(order: &KitchenOrderResponse) -> String {
    let mut detail_rows: Vec<(&str, String)> = vec![
        ("Order No", order.order_id.to_string()),
        ("Customer", order.guest_name.clone()),
    ];
    if let Some(room_number) = &order.room_number {
        detail_rows.push(("Room", room_number.clone()));
    }
    detail_rows.push((
        "Prepare",
        format!("{}x {}", order.quantity, order.item_name),
    ));
    if let Some(notes) = &order.notes {
        detail_rows.push(("Note", notes.clone()));
    }
    detail_rows.push(("Time", display_time(&order.created_at)));

    render_document("KITCHEN ORDER", &detail_rows, &[], None, ReceiptLayout::Compact)
}

/// Renders the bar production docket: what to pour, for whom, no
/// money.
#[must_use]
pub fn render_bar_docket(order: &BarOrderResponse) -> String {
    let mut detail_rows: Vec<(&str, String)> = vec![
        ("Order No", order.order_id.to_string()),
        ("Customer", order.guest_name.clone()),
        ("Type", order.guest_kind.clone()),
    ];
    if let Some(room_number) = &order.room_number {
        detail_rows.push(("Room", room_number.clone()));
    }
    detail_rows.push((
        "Prepare",
        format!("{}x {}", order.quantity, order.drink_name),
    ));
    if let Some(notes) = &order.notes {
        detail_rows.push(("Note", notes.clone()));
    }
    detail_rows.push(("Time", display_time(&order.created_at)));

    render_document("BAR ORDER", &detail_rows, &[], None, ReceiptLayout::Compact)
}
