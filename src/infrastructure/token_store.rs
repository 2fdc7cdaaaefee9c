// File-backed key-value store holding the operator's session token
use crate::application::statistics_source::CredentialProvider;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("failed to read token store: {0}")]
    Io(#[from] std::io::Error),

    #[error("token store is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// A JSON object of string keys to string values. The file is re-read on
/// every lookup and never written.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Look up `key`. A missing file or missing key yields `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entries: Map<String, Value> = serde_json::from_str(&contents)?;
        Ok(entries.get(key).and_then(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }))
    }
}

impl CredentialProvider for FileTokenStore {
    fn token(&self) -> Option<String> {
        match self.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Unable to read token store");
                None
            }
        }
    }
}
