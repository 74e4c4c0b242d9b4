//! Fetcher - issues API requests off the UI loop
//!
//! Each request runs on its own tokio task and reports back through an
//! unbounded channel, so the draw loop never waits on the network.

use super::lifecycle::Ticket;
use crate::api::{
    ApiClient, ApiError, MarketData, PredictionRequest, SkillQuery, SkillRecommendation,
};
use chrono::{DateTime, Local};
use tokio::sync::mpsc;

/// A market snapshot and when it arrived
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub data: MarketData,
    pub fetched_at: DateTime<Local>,
}

impl MarketSnapshot {
    pub fn new(data: MarketData) -> Self {
        Self {
            data,
            fetched_at: Local::now(),
        }
    }
}

/// A request the UI wants issued
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    MarketData { ticket: Ticket },
    PredictSalary { ticket: Ticket, body: PredictionRequest },
    RecommendSkills { ticket: Ticket, body: SkillQuery },
}

/// Completion of an [`ApiRequest`]
#[derive(Debug, Clone)]
pub enum ApiEvent {
    MarketData {
        ticket: Ticket,
        result: Result<MarketSnapshot, ApiError>,
    },
    Prediction {
        ticket: Ticket,
        result: Result<f64, ApiError>,
    },
    Recommendation {
        ticket: Ticket,
        result: Result<SkillRecommendation, ApiError>,
    },
}

/// Spawns API calls and forwards their results
pub struct Fetcher {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<ApiEvent>,
}

impl Fetcher {
    /// Create a new fetcher
    pub fn new(client: ApiClient) -> (Self, mpsc::UnboundedReceiver<ApiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                client,
                event_tx: tx,
            },
            rx,
        )
    }

    /// Issue a request. Must be called from within a tokio runtime.
    pub fn dispatch(&self, request: ApiRequest) {
        let client = self.client.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match request {
                ApiRequest::MarketData { ticket } => {
                    log::info!("Fetching market data (#{})", ticket.generation());
                    let result = client.market_data().await.map(MarketSnapshot::new);
                    ApiEvent::MarketData { ticket, result }
                }
                ApiRequest::PredictSalary { ticket, body } => {
                    log::info!(
                        "Predicting salary for {} / {} / {} (#{})",
                        body.job_title,
                        body.location,
                        body.experience_level,
                        ticket.generation()
                    );
                    let result = client.predict_salary(&body).await;
                    ApiEvent::Prediction { ticket, result }
                }
                ApiRequest::RecommendSkills { ticket, body } => {
                    log::info!(
                        "Requesting skill recommendations for {} (#{})",
                        body.target_job,
                        ticket.generation()
                    );
                    let result = client.recommend_skills(&body).await;
                    ApiEvent::Recommendation { ticket, result }
                }
            };

            // Receiver gone means the UI has shut down
            let _ = event_tx.send(event);
        });
    }
}
