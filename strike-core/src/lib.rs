//! Lane booking client: shoe list, draft, validation, submission and
//! confirmation view.

pub mod client;
pub mod confirmation;
pub mod draft;
pub mod fields;
pub mod shoes;
pub mod submission;
pub mod validation;

pub use client::{ApiError, BookingApi, HttpBookingClient};
pub use confirmation::{resolve_confirmation, ConfirmationDetails, ConfirmationView, NO_BOOKING_MESSAGE};
pub use draft::BookingDraft;
pub use fields::FieldId;
pub use shoes::ShoeList;
pub use submission::{BookingForm, SubmissionState, SubmitError};
pub use validation::{validate, ValidationError};
