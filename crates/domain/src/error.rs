// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Room type string is not recognized.
    InvalidRoomType(String),
    /// Room status string is not recognized.
    InvalidRoomStatus(String),
    /// Booking status string is not recognized.
    InvalidBookingStatus(String),
    /// Payment status string is not recognized.
    InvalidPaymentStatus(String),
    /// Order status string is not recognized.
    InvalidOrderStatus(String),
    /// Billing type string is not recognized.
    InvalidBillingType(String),
    /// Guest kind string is not recognized.
    InvalidGuestKind(String),
    /// A required text field is empty or invalid.
    InvalidField {
        /// The field that failed validation.
        field: &'static str,
        /// A human-readable description of the problem.
        reason: String,
    },
    /// Check-out does not fall after check-in.
    InvalidStayRange {
        /// The check-in timestamp (ISO 8601).
        check_in: String,
        /// The check-out timestamp (ISO 8601).
        check_out: String,
    },
    /// Order quantity must be at least 1.
    InvalidQuantity {
        /// The rejected quantity.
        quantity: i32,
    },
    /// A currency amount is negative.
    NegativeAmount {
        /// The field carrying the amount.
        field: &'static str,
    },
    /// A booking status transition is not on the legal path.
    IllegalBookingTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// An order status transition is not on the legal path for its kind.
    IllegalOrderTransition {
        /// The order kind (kitchen or bar).
        kind: String,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// Failed to parse a date or timestamp from a string.
    DateParseError {
        /// The unparsable value.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to format a date or timestamp.
    DateFormatError {
        /// The formatting error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoomType(value) => write!(f, "Invalid room type: {value}"),
            Self::InvalidRoomStatus(value) => write!(f, "Invalid room status: {value}"),
            Self::InvalidBookingStatus(value) => write!(f, "Invalid booking status: {value}"),
            Self::InvalidPaymentStatus(value) => write!(f, "Invalid payment status: {value}"),
            Self::InvalidOrderStatus(value) => write!(f, "Invalid order status: {value}"),
            Self::InvalidBillingType(value) => write!(f, "Invalid billing type: {value}"),
            Self::InvalidGuestKind(value) => write!(f, "Invalid guest kind: {value}"),
            Self::InvalidField { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
            Self::InvalidStayRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out ({check_out}) must fall after check-in ({check_in})"
                )
            }
            Self::InvalidQuantity { quantity } => {
                write!(f, "Quantity must be at least 1, got {quantity}")
            }
            Self::NegativeAmount { field } => {
                write!(f, "Amount for {field} must not be negative")
            }
            Self::IllegalBookingTransition { from, to } => {
                write!(f, "Booking status cannot change from {from} to {to}")
            }
            Self::IllegalOrderTransition { kind, from, to } => {
                write!(f, "{kind} order status cannot change from {from} to {to}")
            }
            Self::DateParseError { value, error } => {
                write!(f, "Failed to parse date '{value}': {error}")
            }
            Self::DateFormatError { error } => {
                write!(f, "Failed to format date: {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
