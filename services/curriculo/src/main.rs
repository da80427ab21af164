use std::sync::Arc;

use anyhow::Result;
use common::database::{Database, DatabaseConfig, health_check};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use curriculo::{AppConfig, AppState, create_router, openai::OpenAiClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting currículo service v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env()?;

    // Initialize the shared database handle
    let db_config = DatabaseConfig::from_env()?;
    let pool = Database::instance(&db_config).await?;

    // Check database connectivity
    health_check(pool).await?;
    info!("Database connection successful");

    let cookie_key = config.cookie_key()?;
    let objective_generator = Arc::new(OpenAiClient::new(&config)?);
    let bind_address = config.bind_address();

    let app_state = AppState::new(pool.clone(), config, cookie_key, objective_generator);
    let app = create_router(app_state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_address).await?;
    info!("Currículo service listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Currículo service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
