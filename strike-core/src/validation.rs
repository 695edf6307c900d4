use strike_catalog::PricingConfig;
use strike_shared::BookingRequest;
use crate::draft::BookingDraft;

/// Why a draft cannot be submitted. Only the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Alla fälten måste vara ifyllda")]
    AllFieldsRequired,
    #[error("Antalet skor måste stämma överens med antal spelare")]
    ShoeCountMismatch,
    #[error("Alla skor måste vara ifyllda")]
    ShoeSizeMissing,
    #[error("Det får max vara {0} spelare per bana")]
    TooManyPlayersPerLane(u32),
}

/// Check the draft in priority order and build the request it describes.
pub fn validate(draft: &BookingDraft, pricing: &PricingConfig) -> Result<BookingRequest, ValidationError> {
    let (date, time, people, lanes) = match (draft.date, draft.time, draft.people, draft.lanes) {
        (Some(date), Some(time), Some(people), Some(lanes)) => (date, time, people, lanes),
        _ => return Err(ValidationError::AllFieldsRequired),
    };

    if draft.shoes.len() != people as usize {
        return Err(ValidationError::ShoeCountMismatch);
    }

    if !draft.shoes.all_filled() {
        return Err(ValidationError::ShoeSizeMissing);
    }

    if people > lanes.saturating_mul(pricing.max_players_per_lane) {
        return Err(ValidationError::TooManyPlayersPerLane(pricing.max_players_per_lane));
    }

    Ok(BookingRequest::new(date, time, people, lanes, draft.shoes.sizes()))
}
