use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub customer_id: i64,
    #[serde(with = "serde_helpers::wire_datetime")]
    pub check_in_date: NaiveDateTime,
    #[serde(with = "serde_helpers::wire_datetime")]
    pub check_out_date: NaiveDateTime,
    pub is_hourly: bool,
    pub room_ids: Vec<i64>,
    pub deposit_amount: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    #[serde(with = "serde_helpers::wire_datetime")]
    pub check_in_date: NaiveDateTime,
    #[serde(with = "serde_helpers::wire_datetime")]
    pub check_out_date: NaiveDateTime,
    pub is_hourly: bool,
    pub room_ids: Vec<i64>,
    pub deposit_amount: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    #[serde(with = "serde_helpers::wire_datetime")]
    pub check_in_date: NaiveDateTime,
    #[serde(with = "serde_helpers::wire_datetime")]
    pub check_out_date: NaiveDateTime,
    pub is_hourly: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub service_id: i64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddServicesRequest {
    pub services: Vec<ServiceOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveServiceRequest {
    pub service_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
