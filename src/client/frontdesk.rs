use crate::models::booking::Booking;
use crate::models::payment::PaymentResult;

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn fetch_checkin_preview(&self, id: i64) -> Result<Booking, ApiError> {
        self.get_json(&format!("check-in/{}", id)).await
    }

    pub async fn commit_checkin(&self, id: i64) -> Result<Booking, ApiError> {
        self.post_json::<(), _>(&format!("check-in/{}", id), None)
            .await
    }

    pub async fn fetch_checkout_preview(&self, id: i64) -> Result<Booking, ApiError> {
        self.get_json(&format!("check-out/{}", id)).await
    }

    pub async fn pay_cash(&self, id: i64) -> Result<PaymentResult, ApiError> {
        self.post_json::<(), _>(&format!("pay-cash/{}", id), None)
            .await
    }
}
