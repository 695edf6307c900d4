use serde::{Deserialize, Serialize};

/// Unit rates, in whole kronor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    /// Price per player (shoe rental is bundled in here)
    #[serde(default = "default_per_person")]
    pub per_person: u32,

    /// Price per reserved lane
    #[serde(default = "default_per_lane")]
    pub per_lane: u32,

    /// Additional price per pair of shoes
    #[serde(default)]
    pub per_shoe: u32,

    /// Players one lane can hold
    #[serde(default = "default_max_players_per_lane")]
    pub max_players_per_lane: u32,
}

fn default_per_person() -> u32 { 120 }
fn default_per_lane() -> u32 { 100 }
fn default_max_players_per_lane() -> u32 { 4 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            per_person: default_per_person(),
            per_lane: default_per_lane(),
            per_shoe: 0,
            max_players_per_lane: default_max_players_per_lane(),
        }
    }
}

/// Price breakdown between players, lanes and shoes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceQuote {
    pub players: u32,
    pub lanes: u32,
    pub shoes: u32,
    pub total: u32,
}

pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Quote a booking. Deterministic; the server-side price uses the same rates.
    pub fn quote(&self, people: u32, lanes: u32, shoes: u32) -> PriceQuote {
        let players = people.saturating_mul(self.config.per_person);
        let lanes = lanes.saturating_mul(self.config.per_lane);
        let shoes = shoes.saturating_mul(self.config.per_shoe);

        PriceQuote {
            players,
            lanes,
            shoes,
            total: players.saturating_add(lanes).saturating_add(shoes),
        }
    }

    /// Whether `people` fit on `lanes` lanes.
    pub fn fits_on_lanes(&self, people: u32, lanes: u32) -> bool {
        people <= lanes.saturating_mul(self.config.max_players_per_lane)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

/// Total price at the standard rates: `people * 120 + lanes * 100`.
pub fn price(people: u32, lanes: u32) -> u32 {
    PricingEngine::default().quote(people, lanes, people).total
}
