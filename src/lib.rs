//! MarketPulse - terminal dashboard for a job-market analytics API
//!
//! Three panels (market overview, salary predictor, skill optimizer) talk to
//! an external prediction service over HTTP. This crate holds the client side:
//! typed API access, per-panel request lifecycles and the ratatui views.

pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod panels;
pub mod ui;

// Re-exports
pub use api::{ApiClient, ApiError};
pub use app::App;
pub use catalog::OptionCatalog;
pub use config::Config;
pub use core::{ApiEvent, ApiRequest, Fetcher, Lifecycle, MarketSnapshot, RequestStatus};
pub use panels::Panel;

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
