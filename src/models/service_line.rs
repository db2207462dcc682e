use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A billable service or amenity usage line attached to a booking, optionally
/// attributed to a specific room.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceLine {
    pub service_id: i64,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub price: BigDecimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    /// Server-derived total. Accepted on the wire, never trusted: display and
    /// arithmetic use [`ServiceLine::line_total`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<BigDecimal>,
}

impl ServiceLine {
    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn line_total_ignores_wire_total() {
        let line = ServiceLine {
            service_id: 1,
            name: "Ăn sáng".to_string(),
            quantity: 2,
            price: BigDecimal::from_str("100000").unwrap(),
            room_number: None,
            total: Some(BigDecimal::from_str("999999").unwrap()),
        };
        assert_eq!(line.line_total(), BigDecimal::from_str("200000").unwrap());
    }
}
