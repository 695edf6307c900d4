use std::sync::Arc;
use strike_catalog::PricingEngine;

#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingEngine>,
}

impl AppState {
    pub fn new(pricing: PricingEngine) -> Self {
        Self {
            pricing: Arc::new(pricing),
        }
    }
}
