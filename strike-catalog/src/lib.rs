pub mod pricing;

pub use pricing::{price, PriceQuote, PricingConfig, PricingEngine};
