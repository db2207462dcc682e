use chrono::{NaiveDate, NaiveDateTime};

use crate::client::ApiClient;
use crate::models::booking::Booking;
use crate::models::requests::{AvailabilityRequest, UpdateBookingRequest};
use crate::models::room::AvailableRoom;
use crate::services::status_service::{BookingAction, StatusService};
use crate::services::transition_guards::{GuardError, TransitionGuards};

use super::{FetchGate, Notification};

/// Operator-editable draft. The deposit stays raw text until validation; the
/// field may hold anything while being typed.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub is_hourly: bool,
    pub room_ids: Vec<i64>,
    pub deposit_input: String,
}

/// Per-field inline errors, cleared on every validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub dates: Option<GuardError>,
    pub rooms: Option<GuardError>,
    pub deposit: Option<GuardError>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.dates.is_none() && self.rooms.is_none() && self.deposit.is_none()
    }

    fn first(&self) -> Option<&GuardError> {
        self.dates
            .as_ref()
            .or(self.rooms.as_ref())
            .or(self.deposit.as_ref())
    }
}

/// View-model of the edit dialog: draft dates/rooms/deposit validated by the
/// transition guards before a single PUT.
pub struct EditBookingFlow {
    client: ApiClient,
    gate: FetchGate,
    booking_id: i64,
    pub booking: Option<Booking>,
    pub draft: Option<EditDraft>,
    pub errors: FieldErrors,
    pub notification: Option<Notification>,
}

impl EditBookingFlow {
    pub fn open(client: ApiClient, booking_id: i64) -> Self {
        Self {
            client,
            gate: FetchGate::new(),
            booking_id,
            booking: None,
            draft: None,
            errors: FieldErrors::default(),
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
                if !StatusService::can(booking.status, BookingAction::Edit) {
                    self.notification = Some(Notification::warning(
                        "trạng thái hiện tại không cho phép chỉnh sửa",
                    ));
                    return;
                }
                self.draft = Some(EditDraft {
                    check_in: booking.check_in_date,
                    check_out: booking.check_out_date,
                    is_hourly: booking.is_hourly,
                    room_ids: booking.rooms.iter().map(|room| room.id).collect(),
                    deposit_input: booking.deposit_amount.to_string(),
                });
                self.booking = Some(booking);
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
            }
        }
    }

    /// Availability lookup for the room picker, driven by the draft's dates.
    pub async fn lookup_rooms(&self) -> Result<Vec<AvailableRoom>, Notification> {
        let Some(draft) = &self.draft else {
            return Err(Notification::warning("dữ liệu đặt phòng chưa được tải"));
        };
        self.client
            .available_rooms(&AvailabilityRequest {
                check_in_date: draft.check_in,
                check_out_date: draft.check_out,
                is_hourly: draft.is_hourly,
            })
            .await
            .map_err(|err| {
                Notification::from_api_error(&err)
                    .unwrap_or_else(|| Notification::error("không thể tải danh sách phòng trống"))
            })
    }

    /// Runs every guard, records inline errors, and yields the request body
    /// only when the draft is clean.
    pub fn validate(&mut self, today: NaiveDate) -> Option<UpdateBookingRequest> {
        let Some(draft) = &self.draft else {
            self.notification = Some(Notification::warning("dữ liệu đặt phòng chưa được tải"));
            return None;
        };

        self.errors = FieldErrors::default();

        self.errors.dates = if draft.is_hourly {
            TransitionGuards::validate_hourly(draft.check_in, draft.check_out).err()
        } else {
            TransitionGuards::validate_day(draft.check_in, draft.check_out, today).err()
        };

        if draft.room_ids.is_empty() {
            self.errors.rooms = Some(GuardError::NoRoomSelected);
        }

        let deposit = match TransitionGuards::validate_deposit(&draft.deposit_input) {
            Ok(deposit) => Some(deposit),
            Err(err) => {
                self.errors.deposit = Some(err);
                None
            }
        };

        if !self.errors.is_clean() {
            if let Some(first) = self.errors.first() {
                self.notification = Some(Notification::error(first.to_string()));
            }
            return None;
        }

        Some(UpdateBookingRequest {
            check_in_date: draft.check_in,
            check_out_date: draft.check_out,
            is_hourly: draft.is_hourly,
            room_ids: draft.room_ids.clone(),
            deposit_amount: deposit?,
        })
    }

    pub async fn submit(&mut self, today: NaiveDate) -> Option<Booking> {
        let request = self.validate(today)?;

        match self.client.update_booking(self.booking_id, &request).await {
            Ok(updated) => {
                self.notification = Some(Notification::success("Cập nhật đặt phòng thành công"));
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
