use std::net::SocketAddr;
use std::process::ExitCode;
use strike_api::AppState;
use strike_catalog::PricingEngine;
use strike_store::app_config::Config;

pub async fn run(config: &Config, port: Option<u16>) -> anyhow::Result<ExitCode> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port.unwrap_or(config.server.port)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Booking API listening on {}", addr);

    strike_api::serve(listener, AppState::new(PricingEngine::new(config.pricing.clone()))).await?;
    Ok(ExitCode::SUCCESS)
}
