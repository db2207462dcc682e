use url::form_urlencoded;

use crate::client::ApiClient;
use crate::models::payment::{CreatePaymentRequest, PaymentOutcome, PaymentRedirect};
use crate::services::payment::interface::{PaymentError, PaymentOperations};

/// VNPay reached through the backend: the backend signs and builds the
/// redirect URL, and later verifies the gateway's return parameters. This
/// provider only ferries both legs.
pub struct VnpayProvider {
    client: ApiClient,
}

impl VnpayProvider {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl PaymentOperations for VnpayProvider {
    async fn create_payment(&self, booking_id: i64) -> Result<PaymentRedirect, PaymentError> {
        self.client
            .post_json("vnpay/create-payment", Some(&CreatePaymentRequest { booking_id }))
            .await
            .map_err(|err| PaymentError::CreateFailed(err.to_string()))
    }

    /// The raw query string from the gateway redirect is forwarded verbatim;
    /// the backend owns signature verification.
    async fn resolve_return(&self, raw_query: &str) -> Result<PaymentOutcome, PaymentError> {
        let params: Vec<(String, String)> = form_urlencoded::parse(raw_query.as_bytes())
            .into_owned()
            .collect();
        if params.is_empty() {
            return Err(PaymentError::ResolveFailed(
                "thiếu tham số trả về từ cổng thanh toán".to_string(),
            ));
        }

        self.client
            .get_json_with_query("vnpay/return", &params)
            .await
            .map_err(|err| PaymentError::ResolveFailed(err.to_string()))
    }
}
