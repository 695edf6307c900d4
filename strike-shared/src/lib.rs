pub mod models;

pub use models::{BookingRequest, BookingResponse, ConfirmationRecord, ShoeEntry, ShoeId};
