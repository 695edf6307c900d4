pub mod booking;
pub mod shoe;

pub use booking::{format_when, BookingRequest, BookingResponse, ConfirmationRecord, WHEN_FORMAT};
pub use shoe::{ShoeEntry, ShoeId, MAX_SIZE_LEN};
