use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// The booking cannot be accepted as sent
    InvalidBooking(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidBooking(msg) => {
                tracing::debug!("Booking rejected: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

// Malformed bodies get the same `{ "error": ... }` shape as other rejections.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBooking(rejection.body_text())
    }
}
