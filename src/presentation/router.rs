// Route table for the dashboard service
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, list_quick_actions, stream_dashboard};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/dashboard/actions", get(list_quick_actions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
