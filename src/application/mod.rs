// Application layer - Use cases and ports
pub mod dashboard_service;
pub mod dashboard_state;
pub mod statistics_source;
pub mod stats_fetcher;
pub mod stats_presenter;
pub mod teardown;
