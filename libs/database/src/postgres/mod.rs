//! PostgreSQL pool construction and liveness probes

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{connect_from_config, connect_lazy};
pub use health::check_health;

// Re-export sqlx pool types for convenience
pub use sqlx::postgres::{PgPool, PgPoolOptions};
