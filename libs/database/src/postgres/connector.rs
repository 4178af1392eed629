use sqlx::PgPool;
use tracing::info;

use super::PostgresConfig;
use crate::common::DatabaseResult;

/// Connect using a PostgresConfig
///
/// Opens one connection eagerly so a bad URL or unreachable server fails here
/// rather than on the first request.
///
/// ```ignore
/// use database::postgres::connect_from_config;
/// use core_config::FromEnv;
///
/// let config = PostgresConfig::from_env()?;
/// let pool = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &PostgresConfig) -> DatabaseResult<PgPool> {
    let pool = config.pool_options().connect(config.url()).await?;

    info!(
        max_connections = config.max_connections,
        "Successfully connected to PostgreSQL database"
    );

    Ok(pool)
}

/// Build a pool without opening any connection
///
/// Connections are established on first use. The URL is still parsed up front.
pub fn connect_lazy(config: &PostgresConfig) -> DatabaseResult<PgPool> {
    Ok(config.pool_options().connect_lazy(config.url())?)
}
