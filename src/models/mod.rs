pub mod booking;
pub mod customer;
pub mod invoice;
pub mod payment;
pub mod requests;
pub mod room;
pub mod serde_helpers;
pub mod service_line;

pub use booking::{Booking, BookingStatus, IncompleteBooking, Promotion};
pub use customer::Customer;
pub use invoice::{InvoicePayload, InvoiceView};
pub use payment::{PaymentMethod, PaymentOutcome, PaymentRedirect, PaymentResult};
pub use room::{AvailableRoom, BookedRoom, RoomType, RoomTypeAmenity};
pub use service_line::ServiceLine;
