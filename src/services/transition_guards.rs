use bigdecimal::BigDecimal;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use std::str::FromStr;
use thiserror::Error;

use crate::models::booking::{Booking, BookingStatus};

/// Time left until the scheduled check-in, decomposed with floor division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl RemainingTime {
    pub fn describe(&self) -> String {
        format!("{} ngày {} giờ {} phút", self.days, self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinGate {
    /// Now is at or past the scheduled check-in; submit straight away.
    Ready,
    /// Still early; the flow must obtain an explicit confirmation first.
    TooEarly(RemainingTime),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("giờ trả phòng phải sau giờ nhận phòng ít nhất 1 giờ")]
    HourlyTooShort,
    #[error("đặt phòng theo giờ không thể bắt đầu sau 20:00")]
    HourlyStartsTooLate,
    #[error("ngày nhận phòng không được ở trong quá khứ")]
    CheckinInPast,
    #[error("ngày trả phòng phải sau ngày nhận phòng")]
    CheckoutNotAfterCheckin,
    #[error("vui lòng chọn ít nhất một phòng")]
    NoRoomSelected,
    #[error("tiền đặt cọc không hợp lệ")]
    InvalidDeposit,
}

/// Pure pre-submission checks for lifecycle transitions. "now" is always an
/// argument so callers own the clock.
pub struct TransitionGuards;

impl TransitionGuards {
    pub fn checkin_gate(check_in: NaiveDateTime, now: NaiveDateTime) -> CheckinGate {
        if now >= check_in {
            return CheckinGate::Ready;
        }
        let remaining = check_in - now;
        let days = remaining.num_days();
        let hours = remaining.num_hours() - days * 24;
        let minutes = remaining.num_minutes() - remaining.num_hours() * 60;
        CheckinGate::TooEarly(RemainingTime {
            days,
            hours,
            minutes,
        })
    }

    /// Hourly mode: start before 20:00 local, stay at least one hour.
    pub fn validate_hourly(
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    ) -> Result<(), GuardError> {
        if check_in.hour() >= 20 {
            return Err(GuardError::HourlyStartsTooLate);
        }
        if check_out - check_in < Duration::hours(1) {
            return Err(GuardError::HourlyTooShort);
        }
        Ok(())
    }

    /// Day mode: check-in no earlier than today (date-only), check-out strictly
    /// after check-in (date-only).
    pub fn validate_day(
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
        today: NaiveDate,
    ) -> Result<(), GuardError> {
        if check_in.date() < today {
            return Err(GuardError::CheckinInPast);
        }
        if check_out.date() <= check_in.date() {
            return Err(GuardError::CheckoutNotAfterCheckin);
        }
        Ok(())
    }

    /// Operator-typed deposit input: parseable and non-negative.
    pub fn validate_deposit(raw: &str) -> Result<BigDecimal, GuardError> {
        let value =
            BigDecimal::from_str(raw.trim()).map_err(|_| GuardError::InvalidDeposit)?;
        if value < BigDecimal::from(0) {
            return Err(GuardError::InvalidDeposit);
        }
        Ok(value)
    }

    /// A booking still awaiting its stay whose check-out is already past is
    /// dead on arrival; the listing shows it cancelled and asks the server to
    /// catch up in the background.
    pub fn is_stale(booking: &Booking, now: NaiveDateTime) -> bool {
        matches!(
            booking.status,
            BookingStatus::Pending | BookingStatus::Confirmed
        ) && booking.check_out_date < now
    }
}
