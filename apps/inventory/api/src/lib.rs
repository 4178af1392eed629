//! Inventory HTTP service: item listing, lookup, and creation over PostgreSQL.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;

/// Builds the full application router: item and health routes, the OpenAPI
/// document, the JSON 404 fallback, and request tracing.
pub fn app(state: &state::AppState) -> Router {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state))
}
