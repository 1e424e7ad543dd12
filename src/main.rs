mod api;
mod application;
mod domain;
mod infrastructure;
mod ports;
#[cfg(test)]
mod test_support;

use api::AppState;
use application::PaymentService;
use infrastructure::{AppConfig, ShopifyAdapter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    info!("Starting payment relay...");

    let config = AppConfig::from_env();
    info!(store = %config.shopify.store, "configuration loaded");

    let shopify = Arc::new(ShopifyAdapter::new(config.shopify.clone()));
    let payment_service = Arc::new(PaymentService::new(config.abaka.clone(), shopify));

    let app_state = AppState { payment_service };
    let app = api::create_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("Available endpoints:");
    info!("  GET  /health - Health check");
    info!("  GET  /process-payment - Checkout hand-off to the gateway");
    info!("  POST /payment-webhook - Gateway payment notification");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
