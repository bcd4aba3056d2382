pub mod config;
pub mod error;
pub mod listings;
pub mod outreach;
pub mod telemetry;
