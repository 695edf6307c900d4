use std::net::SocketAddr;
use strike_api::{serve, AppState};
use strike_catalog::PricingEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strike_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = strike_store::app_config::Config::load()?;
    let state = AppState::new(PricingEngine::new(config.pricing.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Booking API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve(listener, state).await?;
    Ok(())
}
