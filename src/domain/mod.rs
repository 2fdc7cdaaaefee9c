// Domain layer - Statistics snapshot and the dashboard view derived from it
pub mod dashboard;
pub mod formatting;
pub mod statistics;
