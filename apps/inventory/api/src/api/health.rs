//! Liveness endpoint backed by a bounded store probe.

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_check};
use domain_items::{ItemRepository, ItemService};
use std::time::Duration;
use utoipa::OpenApi;

/// OpenAPI documentation for the health endpoint
#[derive(OpenApi)]
#[openapi(
    paths(health),
    tags(
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct HealthApiDoc;

struct HealthState<R: ItemRepository> {
    service: ItemService<R>,
    timeout: Duration,
}

impl<R: ItemRepository> Clone for HealthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            timeout: self.timeout,
        }
    }
}

/// Creates a router with the /health endpoint.
///
/// Each request pings the store with `timeout` as its deadline.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>, timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health::<R>))
        .with_state(HealthState { service, timeout })
}

/// Report whether the store answers
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable"),
        (status = 500, description = "Store unreachable")
    )
)]
async fn health<R: ItemRepository>(State(state): State<HealthState<R>>) -> impl IntoResponse {
    let check: HealthCheckFuture<'_> = Box::pin(async {
        state
            .service
            .ping(state.timeout)
            .await
            .map_err(|e| format!("Database ping failed: {}", e))
    });

    run_health_check(check).await
}
