//! HTTP client for the analytics API

use super::error::ApiError;
use super::types::{
    ErrorDetail, MarketData, PredictionRequest, PredictionResponse, SkillQuery,
    SkillRecommendation, Welcome,
};
use crate::config::ApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Thin typed wrapper over `reqwest::Client`. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from API settings
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /`
    pub async fn welcome(&self) -> Result<Welcome, ApiError> {
        self.get_json("/").await
    }

    /// `GET /market_data`
    pub async fn market_data(&self) -> Result<MarketData, ApiError> {
        let body: Value = self.get_json("/market_data").await?;
        market_body(body)
    }

    /// `POST /predict_salary`
    pub async fn predict_salary(&self, request: &PredictionRequest) -> Result<f64, ApiError> {
        let response: PredictionResponse = self.post_json("/predict_salary", request).await?;
        Ok(response.predicted_salary)
    }

    /// `POST /recommend_skills`
    pub async fn recommend_skills(&self, query: &SkillQuery) -> Result<SkillRecommendation, ApiError> {
        self.post_json("/recommend_skills", query).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail: error_detail(&text),
        });
    }

    Ok(serde_json::from_str(&text)?)
}

/// The market endpoint answers 200 with `{"error": ...}` when its dataset is missing
fn market_body(body: Value) -> Result<MarketData, ApiError> {
    if let Some(error) = body.get("error") {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(ApiError::Backend(message));
    }
    Ok(serde_json::from_value(body)?)
}

/// Pull `detail` out of a FastAPI error body, falling back to the raw text
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(ErrorDetail {
            detail: Value::String(s),
        }) => s,
        Ok(ErrorDetail { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "(empty body)".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
