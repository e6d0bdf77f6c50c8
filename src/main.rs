//! HTTP server for the taxi fare engine.

use tracing::info;
use tracing_subscriber::EnvFilter;

use taxi_fare::api::{AppState, create_router};
use taxi_fare::config::{ServerConfig, TariffLoader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let loader = TariffLoader::load(&config.config_dir)?;
    let router = create_router(AppState::new(loader));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Taxi fare server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
