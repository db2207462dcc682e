use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;

use crate::models::booking::Booking;
use crate::models::service_line::ServiceLine;

/// Display-side reconciliation of a booking's money. The server stays
/// authoritative; these figures are recomputed locally so drift is visible,
/// never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsBreakdown {
    /// `Σ rate × nights` for day bookings. `None` for hourly bookings, whose
    /// room cost is server-computed only.
    pub room_subtotal: Option<BigDecimal>,
    pub service_subtotal: BigDecimal,
    pub amenity_subtotal: BigDecimal,
    pub discount: BigDecimal,
    pub deposit: BigDecimal,
    /// Local recomputation `room + services + amenities − discount`; absent
    /// whenever the room subtotal is.
    pub grand_total: Option<BigDecimal>,
    pub server_raw_total: BigDecimal,
    pub server_total: BigDecimal,
    /// Set when `total_amount != raw_total − discount_amount` on the snapshot.
    pub drift: bool,
}

pub struct BillingService;

impl BillingService {
    /// Whole-day difference between the stay bounds; time of day is ignored.
    pub fn nights(check_in: NaiveDateTime, check_out: NaiveDateTime) -> i64 {
        (check_out.date() - check_in.date()).num_days()
    }

    pub fn room_subtotal(booking: &Booking) -> Option<BigDecimal> {
        if booking.is_hourly {
            return None;
        }
        let nights = BigDecimal::from(Self::nights(booking.check_in_date, booking.check_out_date));
        let subtotal = booking
            .rooms
            .iter()
            .fold(BigDecimal::from(0), |acc, room| acc + &room.rate * &nights);
        Some(subtotal)
    }

    /// `Σ price × quantity`, regardless of per-room attribution. Amenity lines
    /// use the same arithmetic.
    pub fn service_subtotal(lines: &[ServiceLine]) -> BigDecimal {
        lines
            .iter()
            .fold(BigDecimal::from(0), |acc, line| acc + line.line_total())
    }

    pub fn breakdown(booking: &Booking) -> TotalsBreakdown {
        let room_subtotal = Self::room_subtotal(booking);
        let service_subtotal = Self::service_subtotal(&booking.services);
        let amenity_subtotal = Self::service_subtotal(&booking.amenities);
        let grand_total = room_subtotal.as_ref().map(|room| {
            room + &service_subtotal + &amenity_subtotal - &booking.discount_amount
        });
        let drift =
            &booking.raw_total - &booking.discount_amount != booking.total_amount;

        TotalsBreakdown {
            room_subtotal,
            service_subtotal,
            amenity_subtotal,
            discount: booking.discount_amount.clone(),
            deposit: booking.deposit_amount.clone(),
            grand_total,
            server_raw_total: booking.raw_total.clone(),
            server_total: booking.total_amount.clone(),
            drift,
        }
    }
}
