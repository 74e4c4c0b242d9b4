//! Core plumbing - request lifecycles and the background fetcher

mod fetcher;
mod lifecycle;

pub use fetcher::{ApiEvent, ApiRequest, Fetcher, MarketSnapshot};
pub use lifecycle::{Completion, Lifecycle, RequestStatus, Ticket};
