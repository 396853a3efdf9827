//! # Freight RFQ Engine
//!
//! Main entry point for the freight quote-request service.

use freight_rfq::config::{AppConfig, LogFormat};
use freight_rfq::infrastructure::persistence::postgres::PostgresQuoteRequestRepository;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.level.clone()));
    match config.log.format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init(),
    }

    info!(
        service = %config.service_name,
        "Starting Freight RFQ Engine v{}",
        env!("CARGO_PKG_VERSION")
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .connect_lazy(&config.database.url)?;
    let _repository = PostgresQuoteRequestRepository::new(pool);
    info!(topic = %config.messaging.topic, "workflow core ready");

    // The HTTP/gRPC surface and the bus consumer loop are hosted by the
    // gateway processes; this binary owns the workflow core wiring.
    #[cfg(feature = "nats")]
    {
        use freight_rfq::infrastructure::messaging::NatsEventPublisher;
        let _publisher = NatsEventPublisher::connect(&config.messaging.url).await?;
        info!(url = %config.messaging.url, "event bus connected");
    }

    tokio::signal::ctrl_c().await?;
    info!("Shutting down Freight RFQ Engine");

    Ok(())
}
