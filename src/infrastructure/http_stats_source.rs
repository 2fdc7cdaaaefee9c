// HTTP statistics source backed by the parking API
use crate::application::statistics_source::{FetchError, StatisticsSource};
use crate::domain::statistics::StatisticsSnapshot;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};

// Stands in for an absent token.
const MISSING_TOKEN: &str = "null";

#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpStatsSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl StatisticsSource for HttpStatsSource {
    async fn fetch_statistics(&self, token: Option<&str>) -> Result<StatisticsSnapshot, FetchError> {
        tracing::debug!("Fetching dashboard statistics from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", token.unwrap_or(MISSING_TOKEN)))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/dashboard/stats", addr)
    }

    fn recording_router(seen: Arc<Mutex<Option<String>>>) -> Router {
        Router::new().route(
            "/api/dashboard/stats",
            get(move |headers: HeaderMap| {
                let seen = seen.clone();
                async move {
                    *seen.lock().unwrap() = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    Json(serde_json::json!({
                        "totalSlots": 100,
                        "availableSlots": 40,
                        "totalCars": 250,
                        "activeParking": 60,
                        "totalRevenue": 1234567,
                        "averageDuration": 125
                    }))
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_fetch_sends_bearer_token() {
        let seen = Arc::new(Mutex::new(None));
        let endpoint = serve(recording_router(seen.clone())).await;

        let snapshot = HttpStatsSource::new(endpoint)
            .fetch_statistics(Some("secret-token"))
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap().as_deref(), Some("Bearer secret-token"));
        assert_eq!(snapshot.total_slots, 100);
        assert_eq!(snapshot.average_duration, 125);
        assert_eq!(snapshot.total_revenue, 1234567.0);
    }

    #[tokio::test]
    async fn test_fetch_without_token_still_authorizes() {
        let seen = Arc::new(Mutex::new(None));
        let endpoint = serve(recording_router(seen.clone())).await;

        let result = HttpStatsSource::new(endpoint).fetch_statistics(None).await;

        assert!(result.is_ok());
        assert_eq!(seen.lock().unwrap().as_deref(), Some("Bearer null"));
    }

    #[tokio::test]
    async fn test_server_error_is_status_failure() {
        let router = Router::new().route(
            "/api/dashboard/stats",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
        );
        let endpoint = serve(router).await;

        let result = HttpStatsSource::new(endpoint).fetch_statistics(Some("t")).await;

        match result {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "database unavailable");
            }
            other => panic!("expected status failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_failure() {
        let router = Router::new().route(
            "/api/dashboard/stats",
            get(|| async { "<html>not json</html>" }),
        );
        let endpoint = serve(router).await;

        let result = HttpStatsSource::new(endpoint).fetch_statistics(Some("t")).await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = HttpStatsSource::new(format!("http://{}/api/dashboard/stats", addr))
            .fetch_statistics(Some("t"))
            .await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
