//! Wire types for the analytics API

use serde::{Deserialize, Serialize};

/// One row of the skill-demand series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDemand {
    pub skill: String,
    pub count: u64,
}

/// Average salary for a job title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSalary {
    pub title: String,
    pub salary: f64,
}

/// Average salary for an experience level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSalary {
    pub level: String,
    pub salary: f64,
}

/// Body of `GET /market_data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub skill_demand: Vec<SkillDemand>,
    pub job_salary: Vec<JobSalary>,
    pub exp_salary: Vec<ExperienceSalary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_postings: Option<u64>,
}

/// Body of `POST /predict_salary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub job_title: String,
    pub location: String,
    pub experience_level: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_salary: f64,
}

/// Body of `POST /recommend_skills`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillQuery {
    pub target_job: String,
    pub current_skills: Vec<String>,
}

/// Recommendation payload. An unknown title yields an empty list and a `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub recommended_skills: Vec<String>,
    #[serde(default)]
    pub top_market_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

/// FastAPI error body (`HTTPException(detail=...)`)
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub detail: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_without_market_skills() {
        let json = r#"{"recommended_skills": [], "message": "Job title not found in training data"}"#;
        let rec: SkillRecommendation = serde_json::from_str(json).unwrap();
        assert!(rec.top_market_skills.is_empty());
        assert_eq!(rec.message.as_deref(), Some("Job title not found in training data"));
    }

    #[test]
    fn test_prediction_request_field_names() {
        let req = PredictionRequest {
            job_title: "Data Scientist".to_string(),
            location: "Remote".to_string(),
            experience_level: "Mid-level".to_string(),
            skills: vec![],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "job_title": "Data Scientist",
                "location": "Remote",
                "experience_level": "Mid-level",
                "skills": []
            })
        );
    }
}
