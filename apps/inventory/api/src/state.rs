//! Application state management.

use domain_items::{ItemService, PgItemRepository};
use sqlx::PgPool;

/// Shared application state.
///
/// Cloning is cheap: the pool and the service are both reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: PgPool,
    /// Item service over the PostgreSQL repository
    pub items: ItemService<PgItemRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config, db: PgPool) -> Self {
        let items = ItemService::new(PgItemRepository::new(db.clone()));
        Self { config, db, items }
    }
}
