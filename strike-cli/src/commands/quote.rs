use std::process::ExitCode;
use strike_catalog::{PriceQuote, PricingEngine};
use strike_core::ValidationError;
use strike_store::app_config::Config;

pub fn run(config: &Config, people: u32, lanes: u32) -> anyhow::Result<ExitCode> {
    let engine = PricingEngine::new(config.pricing.clone());
    let quote = engine.quote(people, lanes, people);
    println!("{}", format_quote(&quote, people, lanes));

    match capacity_error(&engine, people, lanes) {
        Some(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

/// The party would not be bookable as quoted.
fn capacity_error(engine: &PricingEngine, people: u32, lanes: u32) -> Option<ValidationError> {
    (!engine.fits_on_lanes(people, lanes))
        .then(|| ValidationError::TooManyPlayersPerLane(engine.config().max_players_per_lane))
}

pub fn format_quote(quote: &PriceQuote, people: u32, lanes: u32) -> String {
    let mut out = format!(
        "{} players: {} kr\n{} lanes: {} kr",
        people, quote.players, lanes, quote.lanes
    );
    if quote.shoes > 0 {
        out.push_str(&format!("\nshoes: {} kr", quote.shoes));
    }
    out.push_str(&format!("\nTotal: {} sek", quote.total));
    out
}
