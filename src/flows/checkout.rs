use crate::client::ApiClient;
use crate::models::booking::Booking;
use crate::models::payment::{PaymentMethod, PaymentResult};
use crate::services::billing_service::{BillingService, TotalsBreakdown};
use crate::services::payment::interface::PaymentOperations;
use crate::services::status_service::{BookingAction, StatusService};
use crate::services::vnpay::VnpayProvider;

use super::{FetchGate, Notification};

#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Cash payment committed; carries the backend's result (invoice id).
    Paid(PaymentResult),
    /// VNPay chosen; the caller must redirect the browser to this URL.
    RedirectTo(String),
    Blocked,
}

/// View-model of the check-out/payment dialog: preview with locally recomputed
/// totals alongside the server figures, then one payment action.
pub struct CheckoutFlow {
    client: ApiClient,
    gate: FetchGate,
    booking_id: i64,
    pub booking: Option<Booking>,
    pub breakdown: Option<TotalsBreakdown>,
    pub method: Option<PaymentMethod>,
    pub notification: Option<Notification>,
}

impl CheckoutFlow {
    pub fn open(client: ApiClient, booking_id: i64) -> Self {
        Self {
            client,
            gate: FetchGate::new(),
            booking_id,
            booking: None,
            breakdown: None,
            method: None,
            notification: None,
        }
    }

    pub async fn load(&mut self) {
        let token = self.gate.begin();
        let result = self.client.fetch_checkout_preview(self.booking_id).await;
        if !self.gate.admits(token) {
            return;
        }

        match result {
            Ok(booking) => {
                if let Err(err) = booking.require_complete() {
                    self.notification = Some(Notification::error(err.to_string()));
                    return;
                }
                if !StatusService::can(booking.status, BookingAction::CheckOut) {
                    self.notification = Some(Notification::warning(
                        "chỉ có thể trả phòng khi khách đã nhận phòng",
                    ));
                    return;
                }
                self.breakdown = Some(BillingService::breakdown(&booking));
                self.booking = Some(booking);
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
            }
        }
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    /// Payment-method gating happens here, not at render time: no method, no
    /// submission.
    pub async fn submit(&mut self) -> CheckoutOutcome {
        if self.booking.is_none() {
            self.notification = Some(Notification::warning("dữ liệu đặt phòng chưa được tải"));
            return CheckoutOutcome::Blocked;
        }

        match self.method {
            None => {
                self.notification = Some(Notification::warning(
                    "vui lòng chọn phương thức thanh toán",
                ));
                CheckoutOutcome::Blocked
            }
            Some(PaymentMethod::Cash) => match self.client.pay_cash(self.booking_id).await {
                Ok(result) => {
                    self.notification = Some(Notification::success("Trả phòng thành công"));
                    CheckoutOutcome::Paid(result)
                }
                Err(err) => {
                    self.notification = Notification::from_api_error(&err);
                    CheckoutOutcome::Blocked
                }
            },
            Some(PaymentMethod::Vnpay) => {
                let provider = VnpayProvider::new(self.client.clone());
                match provider.create_payment(self.booking_id).await {
                    Ok(redirect) => CheckoutOutcome::RedirectTo(redirect.payment_url),
                    Err(err) => {
                        self.notification = Some(Notification::error(err.to_string()));
                        CheckoutOutcome::Blocked
                    }
                }
            }
        }
    }
}
