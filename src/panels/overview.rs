//! Market overview state

use crate::api::ApiError;
use crate::core::{ApiRequest, Completion, Lifecycle, MarketSnapshot, Ticket};

#[derive(Debug, Default)]
pub struct OverviewPanel {
    pub market: Lifecycle<MarketSnapshot>,
}

impl OverviewPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounting the panel (or pressing refresh) fetches a fresh snapshot
    pub fn mount(&mut self) -> ApiRequest {
        ApiRequest::MarketData {
            ticket: self.market.begin(),
        }
    }

    pub fn apply(&mut self, ticket: Ticket, result: Result<MarketSnapshot, ApiError>) -> Completion {
        self.market.complete(ticket, result)
    }

    pub fn snapshot(&self) -> Option<&MarketSnapshot> {
        self.market.value()
    }
}
