use chrono::NaiveDateTime;

use crate::client::ApiClient;
use crate::models::booking::Booking;
use crate::services::status_service::{BookingAction, StatusService};
use crate::services::transition_guards::{CheckinGate, RemainingTime, TransitionGuards};

use super::{ConfirmState, FetchGate, Notification};

#[derive(Debug)]
pub enum CheckinOutcome {
    /// The backend accepted the check-in; carries the updated snapshot.
    Committed(Booking),
    /// Still early: the operator must confirm checking in ahead of schedule.
    ConfirmationRequired(RemainingTime),
    /// Validation or request failure; details are in `notification`.
    Blocked,
}

/// View-model of the check-in dialog. A fresh snapshot is loaded per open and
/// dropped on close; early check-ins go through an explicit second
/// confirmation instead of a blocking prompt.
pub struct CheckinFlow {
    client: ApiClient,
    gate: FetchGate,
    booking_id: i64,
    pub booking: Option<Booking>,
    pub confirm: ConfirmState<RemainingTime>,
    pub notification: Option<Notification>,
}

impl CheckinFlow {
    pub fn open(client: ApiClient, booking_id: i64) -> Self {
        Self {
            client,
            gate: FetchGate::new(),
            booking_id,
            booking: None,
            confirm: ConfirmState::Idle,
            notification: None,
        }
    }

    pub async fn load(&mut self) {
        let token = self.gate.begin();
        let result = self.client.fetch_checkin_preview(self.booking_id).await;
        if !self.gate.admits(token) {
            return;
        }

        match result {
            Ok(booking) => {
                if let Err(err) = booking.require_complete() {
                    self.notification = Some(Notification::error(err.to_string()));
                    return;
                }
                if !StatusService::can(booking.status, BookingAction::CheckIn) {
                    self.notification = Some(Notification::warning(
                        "trạng thái hiện tại không cho phép nhận phòng",
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

    /// Gate first: on time commits immediately, early asks once and commits
    /// only after `confirm_early`.
    pub async fn submit(&mut self, now: NaiveDateTime) -> CheckinOutcome {
        let Some(booking) = &self.booking else {
            self.notification = Some(Notification::warning("dữ liệu đặt phòng chưa được tải"));
            return CheckinOutcome::Blocked;
        };

        match TransitionGuards::checkin_gate(booking.check_in_date, now) {
            CheckinGate::Ready => self.commit().await,
            CheckinGate::TooEarly(remaining) => {
                if self.confirm.is_confirmed() {
                    self.commit().await
                } else {
                    self.confirm = ConfirmState::Pending(remaining.clone());
                    self.notification = Some(Notification::warning(format!(
                        "chưa đến giờ nhận phòng, còn {}",
                        remaining.describe()
                    )));
                    CheckinOutcome::ConfirmationRequired(remaining)
                }
            }
        }
    }

    /// The operator's "check in early anyway".
    pub fn confirm_early(&mut self) {
        if self.confirm.is_pending() {
            self.confirm = ConfirmState::Confirmed;
        }
    }

    pub fn dismiss_confirmation(&mut self) {
        self.confirm = ConfirmState::Idle;
    }

    async fn commit(&mut self) -> CheckinOutcome {
        match self.client.commit_checkin(self.booking_id).await {
            Ok(updated) => {
                self.notification = Some(Notification::success("Nhận phòng thành công"));
                CheckinOutcome::Committed(updated)
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
                CheckinOutcome::Blocked
            }
        }
    }
}
