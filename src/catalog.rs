//! Option catalog - the enumerated values each form field accepts
//!
//! The backend label-encodes these strings, so the lists must match what it
//! was trained on. They are declared here once and validated at load.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_JOB_TITLE: &str = "Data Scientist";
pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "Mid-level";

/// A form field backed by a catalog list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    JobTitle,
    Location,
    ExperienceLevel,
    PredictorSkill,
    OptimizerSkill,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::JobTitle => "job title",
            Self::Location => "location",
            Self::ExperienceLevel => "experience level",
            Self::PredictorSkill => "skill",
            Self::OptimizerSkill => "skill",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{} list is empty", .0.label())]
    Empty(Field),
    #[error("duplicate {} '{}' in catalog", .0.label(), .1)]
    Duplicate(Field, String),
    #[error("{} list must contain the default '{}'", .0.label(), .1)]
    MissingDefault(Field, &'static str),
    #[error("unknown {} '{}' (expected one of: {})", .field.label(), .value, .allowed.join(", "))]
    Unknown {
        field: Field,
        value: String,
        allowed: Vec<String>,
    },
}

/// Valid values per field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionCatalog {
    pub job_titles: Vec<String>,
    pub locations: Vec<String>,
    pub experience_levels: Vec<String>,
    /// Skills offered on the salary form
    pub predictor_skills: Vec<String>,
    /// Skills offered on the skill-gap form
    pub optimizer_skills: Vec<String>,
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self {
            job_titles: strings(&[
                "Data Scientist",
                "Machine Learning Engineer",
                "Software Engineer",
                "Data Analyst",
                "Data Engineer",
                "AI Researcher",
                "MLOps Engineer",
                "Backend Developer",
                "Frontend Developer",
                "Full Stack Developer",
            ]),
            locations: strings(&[
                "Remote",
                "New York, NY",
                "San Francisco, CA",
                "Austin, TX",
                "London, UK",
                "Berlin, Germany",
                "Bangalore, India",
                "Toronto, Canada",
                "Sydney, Australia",
                "Singapore",
            ]),
            experience_levels: strings(&["Entry-level", "Mid-level", "Senior-level", "Executive"]),
            predictor_skills: strings(&[
                "Python",
                "SQL",
                "Deep Learning",
                "Docker",
                "Kubernetes",
                "AWS",
                "React",
                "PyTorch",
            ]),
            optimizer_skills: strings(&[
                "Python",
                "SQL",
                "Machine Learning",
                "Deep Learning",
                "React",
                "Node.js",
                "Docker",
                "Kubernetes",
                "AWS",
                "Azure",
                "Spark",
                "PyTorch",
                "TensorFlow",
                "Pandas",
                "Tableau",
                "Power BI",
            ]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl OptionCatalog {
    pub fn options(&self, field: Field) -> &[String] {
        match field {
            Field::JobTitle => &self.job_titles,
            Field::Location => &self.locations,
            Field::ExperienceLevel => &self.experience_levels,
            Field::PredictorSkill => &self.predictor_skills,
            Field::OptimizerSkill => &self.optimizer_skills,
        }
    }

    /// Check that every list is non-empty, free of duplicates, and carries its form default
    pub fn validate(&self) -> Result<(), CatalogError> {
        for field in [
            Field::JobTitle,
            Field::Location,
            Field::ExperienceLevel,
            Field::PredictorSkill,
            Field::OptimizerSkill,
        ] {
            let options = self.options(field);
            if options.is_empty() {
                return Err(CatalogError::Empty(field));
            }
            let mut seen = HashSet::new();
            for option in options {
                if !seen.insert(option.as_str()) {
                    return Err(CatalogError::Duplicate(field, option.clone()));
                }
            }
            if let Some(default) = Self::preferred(field) {
                if !seen.contains(default) {
                    return Err(CatalogError::MissingDefault(field, default));
                }
            }
        }
        Ok(())
    }

    /// Position of `value` in the field's list, or an error naming the allowed values
    pub fn position(&self, field: Field, value: &str) -> Result<usize, CatalogError> {
        let options = self.options(field);
        options
            .iter()
            .position(|o| o == value)
            .ok_or_else(|| CatalogError::Unknown {
                field,
                value: value.to_string(),
                allowed: options.to_vec(),
            })
    }

    fn preferred(field: Field) -> Option<&'static str> {
        match field {
            Field::JobTitle => Some(DEFAULT_JOB_TITLE),
            Field::Location => Some(DEFAULT_LOCATION),
            Field::ExperienceLevel => Some(DEFAULT_EXPERIENCE_LEVEL),
            Field::PredictorSkill | Field::OptimizerSkill => None,
        }
    }

    /// Index of the field's form default. Skill cursors start at the first option.
    pub fn default_index(&self, field: Field) -> usize {
        Self::preferred(field)
            .and_then(|value| self.position(field, value).ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = OptionCatalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.job_titles.len(), 10);
        assert_eq!(catalog.experience_levels.len(), 4);
        assert_eq!(catalog.optimizer_skills.len(), 16);
    }

    #[test]
    fn test_defaults_point_at_preferred_values() {
        let catalog = OptionCatalog::default();
        let title = catalog.default_index(Field::JobTitle);
        let exp = catalog.default_index(Field::ExperienceLevel);
        assert_eq!(catalog.job_titles[title], "Data Scientist");
        assert_eq!(catalog.experience_levels[exp], "Mid-level");
    }

    #[test]
    fn test_missing_default_rejected() {
        let catalog = OptionCatalog {
            job_titles: vec!["Astronaut".to_string()],
            ..OptionCatalog::default()
        };
        let err = catalog.validate().unwrap_err();
        assert_eq!(err, CatalogError::MissingDefault(Field::JobTitle, "Data Scientist"));
        assert_eq!(
            err.to_string(),
            "job title list must contain the default 'Data Scientist'"
        );
    }

    #[test]
    fn test_custom_list_keeps_default_position() {
        let catalog = OptionCatalog {
            locations: vec!["Paris, France".to_string(), "Remote".to_string()],
            ..OptionCatalog::default()
        };
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.default_index(Field::Location), 1);
    }

    #[test]
    fn test_duplicate_rejected() {
        let catalog = OptionCatalog {
            locations: vec!["Remote".to_string(), "Remote".to_string()],
            ..OptionCatalog::default()
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::Duplicate(Field::Location, "Remote".to_string()))
        );
    }

    #[test]
    fn test_empty_rejected() {
        let catalog = OptionCatalog {
            experience_levels: vec![],
            ..OptionCatalog::default()
        };
        assert_eq!(catalog.validate(), Err(CatalogError::Empty(Field::ExperienceLevel)));
    }

    #[test]
    fn test_unknown_value_message() {
        let catalog = OptionCatalog::default();
        let err = catalog.position(Field::ExperienceLevel, "Intern").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("unknown experience level 'Intern'"));
        assert!(msg.contains("Entry-level, Mid-level, Senior-level, Executive"));
    }
}
