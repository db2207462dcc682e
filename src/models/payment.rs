use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Vnpay,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub booking_id: i64,
}

/// Gateway redirect handed back by the backend; the URL itself is opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRedirect {
    pub payment_url: String,
}

/// Backend-resolved outcome of the gateway return callback.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentOutcome {
    pub response_code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub booking_id: Option<i64>,
}

impl PaymentOutcome {
    pub fn is_success(&self) -> bool {
        self.response_code == "00"
    }
}

/// Response of the cash checkout commit.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub invoice_id: Option<i64>,
}
