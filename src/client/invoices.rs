use crate::models::invoice::InvoicePayload;
use crate::models::requests::MessageResponse;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Either wire shape; the caller normalizes through `InvoiceView`.
    pub async fn fetch_invoice(&self, id: i64) -> Result<InvoicePayload, ApiError> {
        self.get_json(&format!("invoices/{}", id)).await
    }

    /// Server-side print/email of the booking's invoice.
    pub async fn print_invoice(&self, booking_id: i64) -> Result<MessageResponse, ApiError> {
        self.get_json(&format!("invoices/booking/{}/print", booking_id))
            .await
    }
}
