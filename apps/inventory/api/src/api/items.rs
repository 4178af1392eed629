use axum::Router;
use domain_items::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.items.clone())
}
