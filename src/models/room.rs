use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A room attached to a booking, with its pricing context.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookedRoom {
    pub id: i64,
    pub room_number: String,
    #[serde(default)]
    pub rate: BigDecimal,
    pub room_type: RoomType,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomType {
    pub name: String,
    pub max_occupancy: u32,
    #[serde(default)]
    pub base_rate: BigDecimal,
    #[serde(default)]
    pub amenities: Vec<RoomTypeAmenity>,
}

/// Amenity bundled with a room type, with its per-type default quantity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomTypeAmenity {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Row returned by the availability query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AvailableRoom {
    pub id: i64,
    pub room_number: String,
    #[serde(default)]
    pub rate: BigDecimal,
    pub room_type_name: String,
    pub max_occupancy: u32,
}
