// HTTP request handlers
use crate::application::teardown::teardown_pair;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::ndjson_stream::stream_from_receiver;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Activate the dashboard once and return the loaded view.
pub async fn get_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    // Dropped with this future if the client goes away.
    let (_teardown, signal) = teardown_pair();
    let view = state.dashboard_service.load_dashboard(signal).await;

    match json_response(&view, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Stream the dashboard: a `loading` line first, the loaded view second.
pub async fn stream_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rx = state.dashboard_service.stream_dashboard();
    stream_from_receiver(rx)
}

/// The static navigation shortcuts.
pub async fn list_quick_actions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dashboard_service.quick_actions())
}
