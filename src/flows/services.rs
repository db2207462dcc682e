use bigdecimal::BigDecimal;

use crate::client::ApiClient;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::requests::{AddServicesRequest, RemoveServiceRequest, ServiceOrder};
use crate::models::service_line::ServiceLine;
use crate::services::billing_service::BillingService;

use super::{FetchGate, Notification};

/// View-model of the add-service dialog: lines are drafted locally, their
/// subtotal recomputed on every change, and submitted in one batch. The
/// booking snapshot that comes back replaces the local draft.
pub struct ServiceUsageFlow {
    client: ApiClient,
    gate: FetchGate,
    booking_id: i64,
    pub booking: Option<Booking>,
    pub pending: Vec<ServiceLine>,
    pub notification: Option<Notification>,
}

impl ServiceUsageFlow {
    pub fn open(client: ApiClient, booking_id: i64) -> Self {
        Self {
            client,
            gate: FetchGate::new(),
            booking_id,
            booking: None,
            pending: Vec::new(),
            notification: None,
        }
    }

    pub async fn load(&mut self) {
        let token = self.gate.begin();
        let result = self.client.fetch_booking(self.booking_id).await;
        if !self.gate.admits(token) {
            return;
        }

        match result {
            Ok(booking) => {
                if let Err(err) = booking.require_complete() {
                    self.notification = Some(Notification::error(err.to_string()));
                    return;
                }
                if matches!(
                    booking.status,
                    BookingStatus::CheckedOut | BookingStatus::Cancelled | BookingStatus::Unknown
                ) {
                    self.notification = Some(Notification::warning(
                        "không thể thêm dịch vụ cho đặt phòng đã kết thúc",
                    ));
                    return;
                }
                self.booking = Some(booking);
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
            }
        }
    }

    pub fn add_line(&mut self, line: ServiceLine) {
        self.pending.push(line);
    }

    pub fn remove_line(&mut self, index: usize) {
        if index < self.pending.len() {
            self.pending.remove(index);
        }
    }

    /// Subtotal of the drafted lines only.
    pub fn pending_subtotal(&self) -> BigDecimal {
        BillingService::service_subtotal(&self.pending)
    }

    /// What the booking's service subtotal will read once the draft lands.
    pub fn projected_subtotal(&self) -> BigDecimal {
        let saved = self
            .booking
            .as_ref()
            .map(|booking| BillingService::service_subtotal(&booking.services))
            .unwrap_or_else(|| BigDecimal::from(0));
        saved + self.pending_subtotal()
    }

    pub async fn submit(&mut self) -> Option<Booking> {
        if self.pending.is_empty() {
            self.notification = Some(Notification::warning("chưa có dịch vụ nào được chọn"));
            return None;
        }

        let request = AddServicesRequest {
            services: self
                .pending
                .iter()
                .map(|line| ServiceOrder {
                    service_id: line.service_id,
                    quantity: line.quantity,
                    room_number: line.room_number.clone(),
                })
                .collect(),
        };
        match self.client.add_services(self.booking_id, &request).await {
            Ok(updated) => {
                self.pending.clear();
                self.notification = Some(Notification::success("Đã thêm dịch vụ"));
                self.booking = Some(updated.clone());
                Some(updated)
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
                None
            }
        }
    }

    pub async fn remove_service(
        &mut self,
        service_id: i64,
        room_number: Option<String>,
    ) -> Option<Booking> {
        let request = RemoveServiceRequest {
            service_id,
            room_number,
        };
        match self.client.remove_service(self.booking_id, &request).await {
            Ok(updated) => {
                self.notification = Some(Notification::success("Đã xóa dịch vụ"));
                self.booking = Some(updated.clone());
                Some(updated)
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
                None
            }
        }
    }
}
