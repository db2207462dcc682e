use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::customer::Customer;
use super::room::BookedRoom;
use super::serde_helpers;
use super::service_line::ServiceLine;

/// Canonical booking lifecycle states. The wire value is free-form text; every
/// UI decision goes through this enum, never through the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Unknown,
}

impl BookingStatus {
    /// Case-insensitive, tolerant of both `-` and `_` spellings and of the
    /// single-l `canceled` variant. Anything else lands on `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "checked-in" | "checked_in" => BookingStatus::CheckedIn,
            "checked-out" | "checked_out" => BookingStatus::CheckedOut,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(BookingStatus::parse(&raw))
    }
}

impl Serialize for BookingStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Promotion attached to a booking. At most one is effectively applied.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub discount_amount: BigDecimal,
}

#[derive(Debug, Error)]
#[error("dữ liệu đặt phòng không đầy đủ (thiếu {missing})")]
pub struct IncompleteBooking {
    pub missing: &'static str,
}

/// Booking snapshot as fetched per dialog open. Monetary fields arrive as
/// decimal strings; a missing field decodes to zero, a malformed one is a
/// decode error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Booking {
    pub id: i64,
    pub status: BookingStatus,
    #[serde(with = "serde_helpers::wire_datetime")]
    pub check_in_date: NaiveDateTime,
    #[serde(with = "serde_helpers::wire_datetime")]
    pub check_out_date: NaiveDateTime,
    #[serde(
        default,
        with = "serde_helpers::wire_datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_in_at: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "serde_helpers::wire_datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_out_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_hourly: bool,
    #[serde(default)]
    pub deposit_amount: BigDecimal,
    #[serde(default)]
    pub raw_total: BigDecimal,
    #[serde(default)]
    pub discount_amount: BigDecimal,
    #[serde(default)]
    pub total_amount: BigDecimal,
    #[serde(default)]
    pub rooms: Vec<BookedRoom>,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
    #[serde(default)]
    pub amenities: Vec<ServiceLine>,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
    pub customer: Option<Customer>,
}

impl Booking {
    /// A snapshot without its customer or rooms cannot be rendered; the
    /// consuming view shows an incomplete-data state instead of partial fields.
    pub fn require_complete(&self) -> Result<&Customer, IncompleteBooking> {
        let customer = self
            .customer
            .as_ref()
            .ok_or(IncompleteBooking { missing: "khách hàng" })?;
        if self.rooms.is_empty() {
            return Err(IncompleteBooking { missing: "phòng" });
        }
        Ok(customer)
    }

    pub fn effective_promotion(&self) -> Option<&Promotion> {
        self.promotions.first()
    }

    /// Whether any usage line exists at all; an empty booking renders a
    /// "no services" placeholder instead of a zero-row table.
    pub fn has_service_usage(&self) -> bool {
        !self.services.is_empty() || !self.amenities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_accepts_every_spelling() {
        assert_eq!(BookingStatus::parse("PENDING"), BookingStatus::Pending);
        assert_eq!(BookingStatus::parse("Confirmed"), BookingStatus::Confirmed);
        assert_eq!(BookingStatus::parse("checked-in"), BookingStatus::CheckedIn);
        assert_eq!(BookingStatus::parse("CHECKED_IN"), BookingStatus::CheckedIn);
        assert_eq!(BookingStatus::parse("checked_out"), BookingStatus::CheckedOut);
        assert_eq!(BookingStatus::parse("Checked-Out"), BookingStatus::CheckedOut);
        assert_eq!(BookingStatus::parse("cancelled"), BookingStatus::Cancelled);
        assert_eq!(BookingStatus::parse("canceled"), BookingStatus::Cancelled);
        assert_eq!(BookingStatus::parse("no-show"), BookingStatus::Unknown);
        assert_eq!(BookingStatus::parse(""), BookingStatus::Unknown);
    }

    #[test]
    fn status_decode_never_fails() {
        let status: BookingStatus = serde_json::from_str("\"garbage\"").unwrap();
        assert_eq!(status, BookingStatus::Unknown);
    }

    #[test]
    fn incomplete_snapshot_is_rejected() {
        let raw = r#"{
            "id": 7,
            "status": "pending",
            "check_in_date": "2026-08-10 14:00:00",
            "check_out_date": "2026-08-12 12:00:00",
            "customer": null
        }"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert!(booking.require_complete().is_err());
        assert!(!booking.has_service_usage());
    }
}
