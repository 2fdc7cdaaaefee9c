// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_response;
pub mod http_stats_source;
pub mod ndjson_stream;
pub mod token_store;
