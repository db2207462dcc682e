use chrono::NaiveDateTime;
use futures::future::join_all;

use crate::client::ApiClient;
use crate::models::booking::{Booking, BookingStatus};
use crate::services::status_service::{BookingAction, StatusDisplay, StatusService};
use crate::services::transition_guards::TransitionGuards;

use super::{ConfirmState, FetchGate, Notification};

/// One rendered row: the snapshot plus everything the table derives from it.
#[derive(Debug, Clone)]
pub struct BookingRow {
    pub booking: Booking,
    /// Status after stale reclassification; drives display and actions.
    pub effective_status: BookingStatus,
    pub display: StatusDisplay,
    pub actions: &'static [BookingAction],
}

/// View-model of the bookings table: load, client-side search/status filter,
/// stale-row reclassification and the cancel confirmation.
pub struct ListingFlow {
    client: ApiClient,
    gate: FetchGate,
    pub rows: Vec<BookingRow>,
    pub search: String,
    pub status_filter: Option<BookingStatus>,
    pub cancel_confirm: ConfirmState<i64>,
    pub notification: Option<Notification>,
}

impl ListingFlow {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            gate: FetchGate::new(),
            rows: Vec::new(),
            search: String::new(),
            status_filter: None,
            cancel_confirm: ConfirmState::Idle,
            notification: None,
        }
    }

    pub async fn refresh(&mut self, now: NaiveDateTime) {
        let token = self.gate.begin();
        let result = self.client.list_bookings().await;
        if !self.gate.admits(token) {
            return;
        }

        match result {
            Ok(bookings) => {
                self.rows = Self::build_rows(&self.client, bookings, now);
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
            }
        }
    }

    fn build_rows(client: &ApiClient, bookings: Vec<Booking>, now: NaiveDateTime) -> Vec<BookingRow> {
        let mut stale_ids = Vec::new();
        let mut rows = Vec::with_capacity(bookings.len());

        for booking in bookings {
            let effective_status = if TransitionGuards::is_stale(&booking, now) {
                stale_ids.push(booking.id);
                BookingStatus::Cancelled
            } else {
                booking.status
            };

            rows.push(BookingRow {
                effective_status,
                display: StatusService::resolve(effective_status),
                actions: StatusService::allowed_actions(effective_status),
                booking,
            });
        }

        if !stale_ids.is_empty() {
            Self::sweep_stale(client.clone(), stale_ids);
        }

        rows
    }

    /// Best-effort server catch-up for rows already reclassified locally.
    /// Failures are logged and never surfaced; rendering has already happened.
    fn sweep_stale(client: ApiClient, ids: Vec<i64>) {
        tokio::spawn(async move {
            let results = join_all(ids.iter().map(|id| client.cancel_booking(*id))).await;
            for (id, result) in ids.iter().zip(results) {
                if let Err(err) = result {
                    log::warn!("auto-cancel of overdue booking {} failed: {}", id, err);
                }
            }
        });
    }

    /// Search matches customer name (case-insensitive) or the booking id;
    /// the status filter applies to the effective (post-reclassification)
    /// status.
    pub fn visible_rows(&self) -> Vec<&BookingRow> {
        let needle = self.search.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| {
                if let Some(filter) = self.status_filter {
                    if row.effective_status != filter {
                        return false;
                    }
                }
                if needle.is_empty() {
                    return true;
                }
                let matches_name = row
                    .booking
                    .customer
                    .as_ref()
                    .map(|customer| customer.full_name.to_lowercase().contains(&needle))
                    .unwrap_or(false);
                matches_name || row.booking.id.to_string() == needle
            })
            .collect()
    }

    /// First step of the cancel confirmation; refused outright when the row's
    /// action table does not offer cancellation.
    pub fn request_cancel(&mut self, booking_id: i64) {
        let eligible = self.rows.iter().any(|row| {
            row.booking.id == booking_id
                && StatusService::can(row.effective_status, BookingAction::Cancel)
        });
        if !eligible {
            self.notification = Some(Notification::warning(
                "đặt phòng này không thể hủy ở trạng thái hiện tại",
            ));
            return;
        }
        self.cancel_confirm = ConfirmState::Pending(booking_id);
    }

    pub fn dismiss_cancel(&mut self) {
        self.cancel_confirm = ConfirmState::Idle;
    }

    /// Second step: actually calls the backend, then reloads the table.
    pub async fn confirm_cancel(&mut self, now: NaiveDateTime) {
        let ConfirmState::Pending(booking_id) = self.cancel_confirm else {
            return;
        };
        self.cancel_confirm = ConfirmState::Idle;

        match self.client.cancel_booking(booking_id).await {
            Ok(_) => {
                self.notification = Some(Notification::success("Đã hủy đặt phòng"));
                self.refresh(now).await;
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
            }
        }
    }
}
