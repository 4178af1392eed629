use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

use inventory_api::{config::Config, state::AppState};

/// Deadline for the startup connectivity check
const STARTUP_PING_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Optional .env file for local development
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting inventory API"
    );

    let db = database::postgres::connect_from_config(&config.database)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let state = AppState::new(config, db);

    state
        .items
        .ping(STARTUP_PING_TIMEOUT)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL ping failed: {}", e))?;

    let app = inventory_api::app(&state);

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing database connections");
    state.db.close().await;

    info!("Inventory API shutdown complete");
    Ok(())
}
