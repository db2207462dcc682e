use chrono::{NaiveDate, NaiveDateTime};

use crate::client::ApiClient;
use crate::models::booking::Booking;
use crate::models::requests::{AvailabilityRequest, CreateBookingRequest};
use crate::models::room::AvailableRoom;
use crate::services::transition_guards::{GuardError, TransitionGuards};

use super::Notification;

/// Draft of a booking being composed at the desk.
#[derive(Debug, Clone)]
pub struct NewBookingDraft {
    pub customer_id: i64,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub is_hourly: bool,
    pub room_ids: Vec<i64>,
    pub deposit_input: String,
}

/// View-model of booking creation: validate the window, offer available
/// rooms, create under the same guards as editing.
pub struct NewBookingFlow {
    client: ApiClient,
    pub available: Vec<AvailableRoom>,
    pub notification: Option<Notification>,
}

impl NewBookingFlow {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            available: Vec::new(),
            notification: None,
        }
    }

    fn validate_window(draft: &NewBookingDraft, today: NaiveDate) -> Result<(), GuardError> {
        if draft.is_hourly {
            TransitionGuards::validate_hourly(draft.check_in, draft.check_out)
        } else {
            TransitionGuards::validate_day(draft.check_in, draft.check_out, today)
        }
    }

    /// Availability query; refused locally when the window itself is invalid.
    pub async fn check_availability(&mut self, draft: &NewBookingDraft, today: NaiveDate) {
        if let Err(err) = Self::validate_window(draft, today) {
            self.notification = Some(Notification::error(err.to_string()));
            return;
        }

        let request = AvailabilityRequest {
            check_in_date: draft.check_in,
            check_out_date: draft.check_out,
            is_hourly: draft.is_hourly,
        };
        match self.client.available_rooms(&request).await {
            Ok(rooms) => {
                self.available = rooms;
                if self.available.is_empty() {
                    self.notification = Some(Notification::warning(
                        "không còn phòng trống trong khoảng thời gian này",
                    ));
                }
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
            }
        }
    }

    pub async fn create(&mut self, draft: &NewBookingDraft, today: NaiveDate) -> Option<Booking> {
        if let Err(err) = Self::validate_window(draft, today) {
            self.notification = Some(Notification::error(err.to_string()));
            return None;
        }
        if draft.room_ids.is_empty() {
            self.notification = Some(Notification::error(
                GuardError::NoRoomSelected.to_string(),
            ));
            return None;
        }
        let deposit = match TransitionGuards::validate_deposit(&draft.deposit_input) {
            Ok(deposit) => deposit,
            Err(err) => {
                self.notification = Some(Notification::error(err.to_string()));
                return None;
            }
        };

        let request = CreateBookingRequest {
            customer_id: draft.customer_id,
            check_in_date: draft.check_in,
            check_out_date: draft.check_out,
            is_hourly: draft.is_hourly,
            room_ids: draft.room_ids.clone(),
            deposit_amount: deposit,
        };
        match self.client.create_booking(&request).await {
            Ok(booking) => {
                self.notification = Some(Notification::success("Tạo đặt phòng thành công"));
                Some(booking)
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
                None
            }
        }
    }
}
