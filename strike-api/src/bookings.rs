use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chrono::{NaiveDateTime, Utc};
use strike_shared::{BookingRequest, BookingResponse, ConfirmationRecord, models::WHEN_FORMAT};
use tracing::info;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/booking", post(create_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<BookingResponse>, AppError> {
    let Json(req) = payload?;

    if req.people == 0 || req.lanes == 0 {
        return Err(AppError::InvalidBooking("people and lanes must be at least 1".to_string()));
    }
    if NaiveDateTime::parse_from_str(&req.when, WHEN_FORMAT).is_err()
        && NaiveDateTime::parse_from_str(&req.when, "%Y-%m-%dT%H:%M:%S").is_err()
    {
        return Err(AppError::InvalidBooking(format!("invalid booking time: {}", req.when)));
    }

    // Shoes are bundled in the per-person rate unless configured otherwise.
    let quote = state.pricing.quote(req.people, req.lanes, req.shoes.len() as u32);
    let booking_id = format!("BK{}", Utc::now().timestamp_millis());

    info!(
        "Booking {} created: {} players, {} lanes at {} for {} kr",
        booking_id, req.people, req.lanes, req.when, quote.total
    );

    Ok(Json(BookingResponse {
        booking_details: ConfirmationRecord {
            booking_id,
            when: req.when,
            people: req.people,
            lanes: req.lanes,
            shoes: req.shoes,
            price: quote.total,
        },
    }))
}
