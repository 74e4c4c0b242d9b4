//! Analytics API - wire types, error contract, HTTP client

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, ErrorKind};
pub use types::{
    ExperienceSalary, JobSalary, MarketData, PredictionRequest, PredictionResponse, SkillDemand,
    SkillQuery, SkillRecommendation, Welcome,
};
