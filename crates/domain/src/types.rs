// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Room type classification.
///
/// Room types are fixed domain constants; the nightly rate is carried by
/// the room itself, not the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    /// Standard room.
    Standard,
    /// Deluxe room.
    Deluxe,
    /// Suite.
    Suite,
    /// Executive suite.
    Executive,
}

impl RoomType {
    /// All room types in display order.
    pub const ALL: [Self; 4] = [Self::Standard, Self::Deluxe, Self::Suite, Self::Executive];

    /// Parses a room type from its storage string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid room type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            "executive" => Ok(Self::Executive),
            _ => Err(DomainError::InvalidRoomType(s.to_string())),
        }
    }

    /// Returns the storage string for this room type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
            Self::Suite => "suite",
            Self::Executive => "executive",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room availability status.
///
/// Mutated by the booking lifecycle (occupied on booking creation,
/// available on checkout) and by direct staff edits; never inferred
/// from bookings outside those transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Room can be booked.
    Available,
    /// Room has a lodged guest.
    Occupied,
    /// Room is out of service.
    Maintenance,
}

impl RoomStatus {
    /// Parses a room status from its storage string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid room status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(DomainError::InvalidRoomStatus(s.to_string())),
        }
    }

    /// Returns the storage string for this room status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Booking lifecycle status.
///
/// A booking starts active and ends completed (normal) or cancelled
/// (abnormal). Terminal states are final: no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Ongoing stay.
    #[default]
    Active,
    /// Stay ended normally (manual completion or the checkout sweep).
    Completed,
    /// Stay ended abnormally (manual cancellation).
    Cancelled,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl BookingStatus {
    /// Returns the storage string for this booking status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Active → Completed
    /// - Active → Cancelled
    ///
    /// Completed and Cancelled are terminal; a booking never reverts
    /// to active.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Active, Self::Completed) | (Self::Active, Self::Cancelled)
        )
    }

    /// Returns whether this status permits no further transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment status of a booking.
///
/// Orders placed against an unpaid booking are billed to the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Balance outstanding.
    #[default]
    Unpaid,
    /// Balance settled.
    Paid,
}

impl PaymentStatus {
    /// Parses a payment status from its storage string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid payment status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "unpaid" => Ok(Self::Unpaid),
            "paid" => Ok(Self::Paid),
            _ => Err(DomainError::InvalidPaymentStatus(s.to_string())),
        }
    }

    /// Returns the storage string for this payment status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two order pipelines.
///
/// Kitchen and bar orders share a status progression but name the
/// hand-off step differently: kitchen food is delivered, bar drinks
/// are served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    /// Food order prepared by the kitchen.
    Kitchen,
    /// Drink order prepared by the bar.
    Bar,
}

impl OrderKind {
    /// Returns the storage string for this order kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::Bar => "bar",
        }
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order preparation status.
///
/// Progresses strictly forward, one step at a time, by staff action:
/// pending → preparing → ready → (delivered | served) → completed.
/// Kitchen orders pass through `Delivered`, bar orders through
/// `Served`; the legality of each step is validated centrally by
/// [`OrderStatus::can_transition_to`] regardless of caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order taken, not yet started.
    #[default]
    Pending,
    /// Being prepared.
    Preparing,
    /// Ready for hand-off.
    Ready,
    /// Delivered to the guest (kitchen orders).
    Delivered,
    /// Served to the guest (bar orders).
    Served,
    /// Settled and closed out.
    Completed,
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "delivered" => Ok(Self::Delivered),
            "served" => Ok(Self::Served),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidOrderStatus(s.to_string())),
        }
    }
}

impl OrderStatus {
    /// Returns the storage string for this order status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Served => "served",
            Self::Completed => "completed",
        }
    }

    /// Returns the single legal next status for an order of the given
    /// kind, or `None` when the order is completed.
    #[must_use]
    pub const fn next_for(&self, kind: OrderKind) -> Option<Self> {
        match (self, kind) {
            (Self::Pending, _) => Some(Self::Preparing),
            (Self::Preparing, _) => Some(Self::Ready),
            (Self::Ready, OrderKind::Kitchen) => Some(Self::Delivered),
            (Self::Ready, OrderKind::Bar) => Some(Self::Served),
            (Self::Delivered | Self::Served, _) => Some(Self::Completed),
            (Self::Completed, _) => None,
        }
    }

    /// Checks whether advancing to `target` is the legal next step for
    /// an order of the given kind.
    #[must_use]
    pub fn can_transition_to(&self, kind: OrderKind, target: Self) -> bool {
        self.next_for(kind) == Some(target)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How an order is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingType {
    /// Charged to the guest's outstanding booking balance.
    RoomBill,
    /// Settled immediately, independent of any booking.
    Separate,
}

impl BillingType {
    /// Parses a billing type from its storage string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid billing type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "room_bill" => Ok(Self::RoomBill),
            "separate" => Ok(Self::Separate),
            _ => Err(DomainError::InvalidBillingType(s.to_string())),
        }
    }

    /// Returns the storage string for this billing type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoomBill => "room_bill",
            Self::Separate => "separate",
        }
    }

    /// Determines the billing type for an order.
    ///
    /// An order tied to a booking is billed to the room only while the
    /// booking's balance is unpaid; everything else settles separately.
    #[must_use]
    pub const fn for_order(booking_payment_status: Option<PaymentStatus>) -> Self {
        match booking_payment_status {
            Some(PaymentStatus::Unpaid) => Self::RoomBill,
            Some(PaymentStatus::Paid) | None => Self::Separate,
        }
    }
}

impl std::fmt::Display for BillingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an order's customer is lodged or walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestKind {
    /// Guest with an active booking.
    Lodged,
    /// Customer without a booking; always billed separately.
    WalkIn,
}

impl GuestKind {
    /// Parses a guest kind from its storage string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid guest kind.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "lodged" => Ok(Self::Lodged),
            "walk_in" => Ok(Self::WalkIn),
            _ => Err(DomainError::InvalidGuestKind(s.to_string())),
        }
    }

    /// Returns the storage string for this guest kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lodged => "lodged",
            Self::WalkIn => "walk_in",
        }
    }
}

impl std::fmt::Display for GuestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_parse_round_trip() {
        for room_type in RoomType::ALL {
            assert_eq!(RoomType::parse(room_type.as_str()).unwrap(), room_type);
        }
    }

    #[test]
    fn test_room_type_parse_rejects_unknown() {
        assert!(matches!(
            RoomType::parse("penthouse"),
            Err(DomainError::InvalidRoomType(_))
        ));
    }

    #[test]
    fn test_booking_status_transitions_from_active() {
        assert!(BookingStatus::Active.can_transition_to(BookingStatus::Completed));
        assert!(BookingStatus::Active.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Active.can_transition_to(BookingStatus::Active));
    }

    #[test]
    fn test_booking_status_terminal_states_are_final() {
        for terminal in [BookingStatus::Completed, BookingStatus::Cancelled] {
            assert!(terminal.is_terminal());
            for target in [
                BookingStatus::Active,
                BookingStatus::Completed,
                BookingStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn test_kitchen_order_path() {
        let kind = OrderKind::Kitchen;
        assert_eq!(
            OrderStatus::Pending.next_for(kind),
            Some(OrderStatus::Preparing)
        );
        assert_eq!(
            OrderStatus::Preparing.next_for(kind),
            Some(OrderStatus::Ready)
        );
        assert_eq!(
            OrderStatus::Ready.next_for(kind),
            Some(OrderStatus::Delivered)
        );
        assert_eq!(
            OrderStatus::Delivered.next_for(kind),
            Some(OrderStatus::Completed)
        );
        assert_eq!(OrderStatus::Completed.next_for(kind), None);
    }

    #[test]
    fn test_bar_order_path_serves_instead_of_delivers() {
        let kind = OrderKind::Bar;
        assert_eq!(OrderStatus::Ready.next_for(kind), Some(OrderStatus::Served));
        assert!(!OrderStatus::Ready.can_transition_to(kind, OrderStatus::Delivered));
    }

    #[test]
    fn test_order_status_rejects_skipped_steps() {
        assert!(!OrderStatus::Pending.can_transition_to(OrderKind::Kitchen, OrderStatus::Ready));
        assert!(!OrderStatus::Pending.can_transition_to(OrderKind::Bar, OrderStatus::Completed));
        assert!(
            !OrderStatus::Delivered.can_transition_to(OrderKind::Kitchen, OrderStatus::Pending)
        );
    }

    #[test]
    fn test_billing_type_follows_booking_payment_status() {
        assert_eq!(
            BillingType::for_order(Some(PaymentStatus::Unpaid)),
            BillingType::RoomBill
        );
        assert_eq!(
            BillingType::for_order(Some(PaymentStatus::Paid)),
            BillingType::Separate
        );
        assert_eq!(BillingType::for_order(None), BillingType::Separate);
    }

    #[test]
    fn test_status_storage_strings() {
        assert_eq!(BookingStatus::Active.as_str(), "active");
        assert_eq!(OrderStatus::Served.as_str(), "served");
        assert_eq!(BillingType::RoomBill.as_str(), "room_bill");
        assert_eq!(GuestKind::WalkIn.as_str(), "walk_in");
        assert_eq!(RoomStatus::Maintenance.as_str(), "maintenance");
        assert_eq!(PaymentStatus::Unpaid.as_str(), "unpaid");
    }
}
