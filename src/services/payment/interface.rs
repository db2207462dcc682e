use thiserror::Error;

use crate::models::payment::{PaymentOutcome, PaymentRedirect};

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("không thể khởi tạo thanh toán: {0}")]
    CreateFailed(String),
    #[error("không thể xác nhận kết quả thanh toán: {0}")]
    ResolveFailed(String),
}

/// Seam between the checkout flow and whatever gateway sits behind the
/// backend. The gateway protocol itself stays opaque to this crate.
pub trait PaymentOperations {
    async fn create_payment(&self, booking_id: i64) -> Result<PaymentRedirect, PaymentError>;
    async fn resolve_return(&self, raw_query: &str) -> Result<PaymentOutcome, PaymentError>;
}
