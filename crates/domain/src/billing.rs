// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Billing arithmetic.
//!
//! Nights, booking totals, order totals, and the VAT derivation used
//! by receipts. All amounts are [`Decimal`]; no rounding is applied
//! anywhere — ₦4,500 × 0.075 is exactly ₦337.50 and is carried as
//! computed. VAT exists only at receipt-rendering time and is never
//! written back to the store.

use crate::error::DomainError;
use crate::timestamps::format_timestamp;
use rust_decimal::Decimal;
use time::OffsetDateTime;

const SECONDS_PER_DAY: i64 = 86_400;

/// Value-added tax rate applied on receipts (7.5%).
pub const VAT_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 3);

/// Computes the number of billable nights between check-in and check-out.
///
/// A partial day counts as a full night: the duration is divided by
/// one day and rounded up.
///
/// # Errors
///
/// Returns an error if check-out does not fall strictly after check-in.
pub fn nights_between(
    check_in: OffsetDateTime,
    check_out: OffsetDateTime,
) -> Result<i64, DomainError> {
    let seconds: i64 = (check_out - check_in).whole_seconds();
    if seconds <= 0 {
        return Err(DomainError::InvalidStayRange {
            check_in: format_timestamp(check_in).unwrap_or_else(|_| check_in.to_string()),
            check_out: format_timestamp(check_out).unwrap_or_else(|_| check_out.to_string()),
        });
    }
    // `i64::div_ceil` is still unstable on stable Rust; both operands are
    // guaranteed positive here, so compute via `u64::div_ceil` equivalently.
    Ok((seconds as u64).div_ceil(SECONDS_PER_DAY as u64) as i64)
}

/// Computes a booking total: nightly rate × nights.
///
/// # Errors
///
/// Returns an error if the rate is negative.
pub fn booking_total(rate: Decimal, nights: i64) -> Result<Decimal, DomainError> {
    if rate.is_sign_negative() {
        return Err(DomainError::NegativeAmount { field: "rate" });
    }
    Ok(rate * Decimal::from(nights))
}

/// Computes an order total: unit price × quantity.
///
/// # Errors
///
/// Returns an error if the quantity is below 1 or the unit price is
/// negative.
pub fn order_total(unit_price: Decimal, quantity: i32) -> Result<Decimal, DomainError> {
    if quantity < 1 {
        return Err(DomainError::InvalidQuantity { quantity });
    }
    if unit_price.is_sign_negative() {
        return Err(DomainError::NegativeAmount { field: "unit_price" });
    }
    Ok(unit_price * Decimal::from(quantity))
}

/// Computes the VAT portion of a subtotal.
#[must_use]
pub fn vat_amount(subtotal: Decimal) -> Decimal {
    subtotal * VAT_RATE
}

/// Computes a VAT-inclusive grand total.
#[must_use]
pub fn grand_total(subtotal: Decimal) -> Decimal {
    subtotal + vat_amount(subtotal)
}

/// The display-only money lines of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptTotals {
    /// Sum of line totals before tax.
    pub subtotal: Decimal,
    /// VAT at [`VAT_RATE`].
    pub vat: Decimal,
    /// Subtotal plus VAT.
    pub grand_total: Decimal,
}

/// Derives the receipt money lines for a subtotal.
#[must_use]
pub fn receipt_totals(subtotal: Decimal) -> ReceiptTotals {
    ReceiptTotals {
        subtotal,
        vat: vat_amount(subtotal),
        grand_total: grand_total(subtotal),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_two_full_nights() {
        let nights = nights_between(
            datetime!(2024-01-01 00:00:00 UTC),
            datetime!(2024-01-03 00:00:00 UTC),
        )
        .unwrap();
        assert_eq!(nights, 2);
    }

    #[test]
    fn test_partial_day_rounds_up_to_a_night() {
        let nights = nights_between(
            datetime!(2024-01-01 14:00:00 UTC),
            datetime!(2024-01-02 10:00:00 UTC),
        )
        .unwrap();
        assert_eq!(nights, 1);

        let nights = nights_between(
            datetime!(2024-01-01 10:00:00 UTC),
            datetime!(2024-01-03 11:00:00 UTC),
        )
        .unwrap();
        assert_eq!(nights, 3);
    }

    #[test]
    fn test_checkout_before_checkin_rejected() {
        let result = nights_between(
            datetime!(2024-01-03 00:00:00 UTC),
            datetime!(2024-01-01 00:00:00 UTC),
        );
        assert!(matches!(result, Err(DomainError::InvalidStayRange { .. })));
    }

    #[test]
    fn test_checkout_equal_to_checkin_rejected() {
        let at = datetime!(2024-01-01 00:00:00 UTC);
        assert!(nights_between(at, at).is_err());
    }

    #[test]
    fn test_booking_total_rate_times_nights() {
        // ₦20,000/night for 2 nights is ₦40,000.
        let total = booking_total(Decimal::from(20_000), 2).unwrap();
        assert_eq!(total, Decimal::from(40_000));
    }

    #[test]
    fn test_booking_total_rejects_negative_rate() {
        assert!(booking_total(Decimal::from(-1), 1).is_err());
    }

    #[test]
    fn test_order_total_unit_price_times_quantity() {
        let total = order_total(Decimal::from(1_500), 3).unwrap();
        assert_eq!(total, Decimal::from(4_500));
    }

    #[test]
    fn test_order_total_rejects_zero_quantity() {
        assert!(matches!(
            order_total(Decimal::from(1_500), 0),
            Err(DomainError::InvalidQuantity { quantity: 0 })
        ));
    }

    #[test]
    fn test_vat_rate_is_seven_and_a_half_percent() {
        assert_eq!(VAT_RATE.to_string(), "0.075");
    }

    #[test]
    fn test_receipt_totals_for_bar_order() {
        // ₦1,500 × 3 → subtotal ₦4,500, VAT ₦337.50, grand ₦4,837.50.
        let subtotal = order_total(Decimal::from(1_500), 3).unwrap();
        let totals = receipt_totals(subtotal);
        assert_eq!(totals.subtotal, Decimal::from(4_500));
        assert_eq!(totals.vat.to_string(), "337.500");
        assert_eq!(totals.grand_total.to_string(), "4837.500");
        assert_eq!(totals.grand_total, subtotal * Decimal::new(1_075, 3));
    }
}
