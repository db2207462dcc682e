use crate::models::requests::AvailabilityRequest;
use crate::models::room::AvailableRoom;

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn available_rooms(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<Vec<AvailableRoom>, ApiError> {
        self.post_json("available-rooms", Some(request)).await
    }
}
