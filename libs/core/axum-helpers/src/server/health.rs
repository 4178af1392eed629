use axum::{Json, http::StatusCode};
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// Body of the `/health` endpoint.
///
/// Healthy: `{"status":"ok","db":"up"}`. Unhealthy: `{"db":"down"}`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    pub db: &'static str,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: Some("ok"),
            db: "up",
        }
    }

    pub fn down() -> Self {
        Self {
            status: None,
            db: "down",
        }
    }
}

/// A boxed future for health checks with a string error
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Awaits a store probe and renders the health response.
///
/// The probe is expected to carry its own deadline. A failure is logged and
/// reported as 500 with `{"db":"down"}`.
///
/// # Example
/// ```ignore
/// let check: HealthCheckFuture<'_> = Box::pin(async {
///     check_health(&pool, timeout).await.map_err(|e| e.to_string())
/// });
/// run_health_check(check).await
/// ```
pub async fn run_health_check(check: HealthCheckFuture<'_>) -> (StatusCode, Json<HealthResponse>) {
    match check.await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::up())),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(HealthResponse::down()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_healthy_probe() {
        let (status, Json(body)) = run_health_check(Box::pin(async { Ok(()) })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"status": "ok", "db": "up"})
        );
    }

    #[tokio::test]
    async fn test_failed_probe_omits_status() {
        let (status, Json(body)) =
            run_health_check(Box::pin(async { Err("timed out".to_string()) })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"db": "down"})
        );
    }
}
