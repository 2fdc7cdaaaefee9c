// Ports for the statistics backend and the operator's stored credential
use crate::domain::statistics::StatisticsSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Why a statistics fetch failed. The dashboard treats every variant the same
/// way; the distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("statistics endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed statistics body: {0}")]
    Decode(String),
}

#[async_trait]
pub trait StatisticsSource: Send + Sync {
    /// Fetch one pre-aggregated snapshot, authenticating with `token`.
    /// A missing token is still sent, as the bearer credential `null`.
    async fn fetch_statistics(&self, token: Option<&str>) -> Result<StatisticsSnapshot, FetchError>;
}

/// Read-only access to the operator's bearer token.
pub trait CredentialProvider: Send + Sync {
    /// Read the current token. Called immediately before each request.
    fn token(&self) -> Option<String>;
}
