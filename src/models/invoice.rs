use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::customer::Customer;
use super::serde_helpers;
use super::service_line::ServiceLine;

/// The invoice endpoint answers in one of two wire shapes: the structured
/// payload (`invoice` + `booking` + `meta` + `totals.saved` + split line
/// arrays) or the legacy flat payload. The presence of the `totals` and `meta`
/// keys selects the structured variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InvoicePayload {
    Structured(StructuredInvoice),
    Legacy(LegacyInvoice),
}

#[derive(Debug, Clone, Deserialize)]
pub struct StructuredInvoice {
    pub invoice: InvoiceHeader,
    pub booking: InvoiceBooking,
    pub meta: InvoiceMeta,
    pub totals: InvoiceTotals,
    #[serde(default)]
    pub service_lines: Vec<ServiceLine>,
    #[serde(default)]
    pub amenity_lines: Vec<ServiceLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceHeader {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceBooking {
    pub id: i64,
    pub customer: Customer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceMeta {
    #[serde(
        default,
        with = "serde_helpers::wire_datetime_opt"
    )]
    pub issued_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_hourly: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceTotals {
    pub saved: SavedTotals,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedTotals {
    #[serde(default)]
    pub room_amount: BigDecimal,
    #[serde(default)]
    pub service_amount: BigDecimal,
    #[serde(default)]
    pub amenity_amount: BigDecimal,
    #[serde(default)]
    pub discount_amount: BigDecimal,
    #[serde(default)]
    pub total_amount: BigDecimal,
}

/// Flat shape emitted by the older invoice endpoint. Amenities are folded into
/// the single service bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyInvoice {
    pub invoice_code: String,
    pub booking_id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub room_amount: BigDecimal,
    #[serde(default)]
    pub service_amount: BigDecimal,
    #[serde(default)]
    pub discount_amount: BigDecimal,
    #[serde(default)]
    pub total_amount: BigDecimal,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceAmounts {
    pub room: BigDecimal,
    pub service: BigDecimal,
    pub amenity: BigDecimal,
    pub discount: BigDecimal,
    pub total: BigDecimal,
}

/// The single internal shape every invoice render goes through, regardless of
/// which wire variant arrived.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceView {
    pub code: String,
    pub booking_id: i64,
    pub customer_name: String,
    pub amounts: InvoiceAmounts,
    pub service_lines: Vec<ServiceLine>,
    pub amenity_lines: Vec<ServiceLine>,
    pub issued_at: Option<NaiveDateTime>,
}

impl InvoiceView {
    pub fn from_payload(payload: InvoicePayload) -> Self {
        match payload {
            InvoicePayload::Structured(payload) => InvoiceView {
                code: payload.invoice.code,
                booking_id: payload.booking.id,
                customer_name: payload.booking.customer.full_name,
                amounts: InvoiceAmounts {
                    room: payload.totals.saved.room_amount,
                    service: payload.totals.saved.service_amount,
                    amenity: payload.totals.saved.amenity_amount,
                    discount: payload.totals.saved.discount_amount,
                    total: payload.totals.saved.total_amount,
                },
                service_lines: payload.service_lines,
                amenity_lines: payload.amenity_lines,
                issued_at: payload.meta.issued_at,
            },
            InvoicePayload::Legacy(payload) => InvoiceView {
                code: payload.invoice_code,
                booking_id: payload.booking_id,
                customer_name: payload.customer_name,
                amounts: InvoiceAmounts {
                    room: payload.room_amount,
                    service: payload.service_amount,
                    amenity: BigDecimal::from(0),
                    discount: payload.discount_amount,
                    total: payload.total_amount,
                },
                service_lines: payload.services,
                amenity_lines: Vec::new(),
                issued_at: None,
            },
        }
    }
}
