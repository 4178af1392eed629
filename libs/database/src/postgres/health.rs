use sqlx::PgPool;
use std::time::Duration;
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Check PostgreSQL database health
///
/// Executes `SELECT 1` on a pooled connection. The whole probe, including
/// acquiring the connection, must finish within `timeout`.
///
/// # Example
/// ```ignore
/// use database::postgres::check_health;
///
/// match check_health(&pool, Duration::from_secs(2)).await {
///     Ok(()) => (StatusCode::OK, "up"),
///     Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "down"),
/// }
/// ```
pub async fn check_health(pool: &PgPool, timeout: Duration) -> DatabaseResult<()> {
    debug!("Running PostgreSQL health check");

    match tokio::time::timeout(timeout, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(Ok(_)) => {
            debug!("PostgreSQL health check passed");
            Ok(())
        }
        Ok(Err(e)) => Err(DatabaseError::HealthCheckFailed(format!(
            "PostgreSQL health check failed: {}",
            e
        ))),
        Err(_) => Err(DatabaseError::HealthCheckTimedOut(timeout)),
    }
}
