use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dayahead_price_api::{
    create_router, init_metrics, AppConfig, EntsoeClient, FrankfurterClient, PriceService,
    PriceSettings,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environments set variables directly.
    let _ = dotenvy::dotenv();

    let metrics_handle = init_metrics()?;

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dayahead_price_api=debug,tower_http=debug".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = AppConfig::load()?;
    info!("Configuration loaded successfully");

    let entsoe = Arc::new(EntsoeClient::new(&config.entsoe)?);
    let rates = Arc::new(FrankfurterClient::new(&config.currency)?);
    info!(
        currency = %rates.target_currency(),
        default_zone = %config.resolver.default_zone,
        "Upstream clients initialized"
    );

    let settings = PriceSettings::from_config(&config).map_err(|e| anyhow!(e))?;
    let prices = Arc::new(PriceService::new(entsoe, rates, settings));

    let router = create_router(prices, metrics_handle);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(host = %config.server.host, port = %config.server.port, "API server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Application stopped");
    Ok(())
}
