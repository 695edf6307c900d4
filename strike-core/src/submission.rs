use std::sync::Arc;
use strike_catalog::{PriceQuote, PricingConfig, PricingEngine};
use strike_shared::{ConfirmationRecord, ShoeId};
use strike_store::{SessionStore, SessionStoreExt, CONFIRMATION_KEY};
use tracing::{debug, info, warn};

use crate::client::{ApiError, BookingApi};
use crate::draft::BookingDraft;
use crate::validation::{validate, ValidationError};

/// Lifecycle of one press of "complete booking"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded(ConfirmationRecord),
    Failed(String),
}

impl SubmissionState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "IDLE",
            SubmissionState::Validating => "VALIDATING",
            SubmissionState::Submitting => "SUBMITTING",
            SubmissionState::Succeeded(_) => "SUCCEEDED",
            SubmissionState::Failed(_) => "FAILED",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Något gick fel, försök igen")]
    Api(#[from] ApiError),

    #[error("En bokning skickas redan")]
    InFlight,
}

/// Resets the state to `Idle` if the submission future is dropped mid-call,
/// so a late response is discarded without touching the form.
struct InFlight<'a> {
    state: &'a mut SubmissionState,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Submitting;
        Self { state, settled: false }
    }

    fn settle(mut self, next: SubmissionState) {
        debug!("Booking form SUBMITTING -> {}", next.label());
        *self.state = next;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Booking submission abandoned; response will be discarded");
            *self.state = SubmissionState::Idle;
        }
    }
}

/// Booking form state plus the submit pipeline:
/// validate → price preview → remote call → session store → hand-off.
pub struct BookingForm {
    draft: BookingDraft,
    state: SubmissionState,
    error: Option<String>,
    pricing: PricingEngine,
    api: Arc<dyn BookingApi>,
    store: Arc<dyn SessionStore>,
}

impl BookingForm {
    pub fn new(api: Arc<dyn BookingApi>, store: Arc<dyn SessionStore>, pricing: PricingConfig) -> Self {
        Self {
            draft: BookingDraft::new(),
            state: SubmissionState::Idle,
            error: None,
            pricing: PricingEngine::new(pricing),
            api,
            store,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BookingDraft {
        &mut self.draft
    }

    pub fn add_shoe(&mut self) -> ShoeId {
        self.draft.shoes.add()
    }

    pub fn remove_shoe(&mut self, id: &ShoeId) {
        self.draft.shoes.remove(id);
    }

    pub fn update_shoe_size(&mut self, id: &ShoeId, value: &str) -> bool {
        self.draft.shoes.update_size(id, value)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// The single user-visible error, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The submit control is inert while a booking is in flight.
    pub fn can_submit(&self) -> bool {
        !matches!(self.state, SubmissionState::Submitting)
    }

    /// Local price preview once people and lanes are filled in
    pub fn preview(&self) -> Option<PriceQuote> {
        let people = self.draft.people?;
        let lanes = self.draft.lanes?;
        Some(self.pricing.quote(people, lanes, self.draft.shoes.len() as u32))
    }

    /// Run the full submission.
    ///
    /// On success the returned record is the navigation hand-off to the
    /// confirmation view; it has also been written to session storage.
    pub async fn submit(&mut self) -> Result<ConfirmationRecord, SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::InFlight);
        }

        self.transition(SubmissionState::Validating);
        let request = match validate(&self.draft, self.pricing.config()) {
            Ok(request) => request,
            Err(e) => {
                info!("Booking rejected by validation: {}", e);
                self.error = Some(e.to_string());
                self.transition(SubmissionState::Idle);
                return Err(e.into());
            }
        };
        self.error = None;

        let quote = self.pricing.quote(request.people, request.lanes, request.shoes.len() as u32);
        info!(
            "Submitting booking for {} ({} players, {} lanes, preview {} kr)",
            request.when, request.people, request.lanes, quote.total
        );

        debug!("Booking form {} -> SUBMITTING", self.state.label());
        let in_flight = InFlight::start(&mut self.state);
        let result = self.api.create_booking(&request).await;

        match result {
            Ok(record) => {
                if record.price != quote.total {
                    warn!(
                        "Server price {} differs from local preview {} for {}",
                        record.price, quote.total, record.booking_id
                    );
                }
                if let Err(e) = self.store.set_json(CONFIRMATION_KEY, &record) {
                    warn!("Failed to store confirmation {}: {}", record.booking_id, e);
                }
                info!("Booking confirmed: {} ({} kr)", record.booking_id, record.price);
                in_flight.settle(SubmissionState::Succeeded(record.clone()));
                Ok(record)
            }
            Err(e) => {
                warn!("Booking request failed: {}", e);
                let err = SubmitError::from(e);
                let message = err.to_string();
                self.error = Some(message.clone());
                in_flight.settle(SubmissionState::Failed(message));
                Err(err)
            }
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!("Booking form {} -> {}", self.state.label(), next.label());
        self.state = next;
    }
}
