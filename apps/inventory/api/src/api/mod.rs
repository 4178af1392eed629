use axum::Router;

pub mod health;
pub mod items;

/// Creates all application routes.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(health::router(
            state.items.clone(),
            state.config.database.health_timeout(),
        ))
}
