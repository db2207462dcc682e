use crate::models::booking::Booking;
use crate::models::requests::{
    AddServicesRequest, CreateBookingRequest, MessageResponse, RemoveServiceRequest,
    UpdateBookingRequest,
};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Fresh snapshot; fetched per dialog open, never cached.
    pub async fn fetch_booking(&self, id: i64) -> Result<Booking, ApiError> {
        self.get_json(&format!("bookings/{}", id)).await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("bookings").await
    }

    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<Booking, ApiError> {
        self.post_json("bookings", Some(request)).await
    }

    pub async fn update_booking(
        &self,
        id: i64,
        request: &UpdateBookingRequest,
    ) -> Result<Booking, ApiError> {
        self.put_json(&format!("bookings/{}", id), request).await
    }

    pub async fn cancel_booking(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.post_json::<(), _>(&format!("bookings/{}/cancel", id), None)
            .await
    }

    pub async fn add_services(
        &self,
        id: i64,
        request: &AddServicesRequest,
    ) -> Result<Booking, ApiError> {
        self.post_json(&format!("bookings/{}/add-services", id), Some(request))
            .await
    }

    pub async fn remove_service(
        &self,
        id: i64,
        request: &RemoveServiceRequest,
    ) -> Result<Booking, ApiError> {
        self.post_json(&format!("bookings/{}/remove-service", id), Some(request))
            .await
    }
}
