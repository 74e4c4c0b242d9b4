//! Salary predictor form state

use super::selection::{Choice, SkillSet};
use crate::api::{ApiError, PredictionRequest};
use crate::catalog::{Field, OptionCatalog};
use crate::core::{ApiRequest, Completion, Lifecycle, Ticket};

/// Focusable rows of the salary form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryField {
    JobTitle,
    Location,
    ExperienceLevel,
    Skills,
}

impl SalaryField {
    pub const ALL: [SalaryField; 4] = [
        SalaryField::JobTitle,
        SalaryField::Location,
        SalaryField::ExperienceLevel,
        SalaryField::Skills,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::JobTitle => "Job Title",
            Self::Location => "Location",
            Self::ExperienceLevel => "Experience Level",
            Self::Skills => "Skills",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

#[derive(Debug)]
pub struct SalaryPanel {
    pub job_title: Choice,
    pub location: Choice,
    pub experience_level: Choice,
    pub skills: SkillSet,
    pub skill_cursor: Choice,
    pub focus: SalaryField,
    pub prediction: Lifecycle<f64>,
}

impl SalaryPanel {
    pub fn new(catalog: &OptionCatalog) -> Self {
        let choice = |field: Field| Choice::new(catalog.default_index(field), catalog.options(field).len());
        Self {
            job_title: choice(Field::JobTitle),
            location: choice(Field::Location),
            experience_level: choice(Field::ExperienceLevel),
            skills: SkillSet::new(),
            skill_cursor: choice(Field::PredictorSkill),
            focus: SalaryField::JobTitle,
            prediction: Lifecycle::new(),
        }
    }

    pub fn focus_next(&mut self) {
        let i = self.focus.position();
        self.focus = SalaryField::ALL[(i + 1) % SalaryField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let i = self.focus.position();
        self.focus = SalaryField::ALL[(i + SalaryField::ALL.len() - 1) % SalaryField::ALL.len()];
    }

    /// Right arrow: next option, or next skill on the skills row
    pub fn cycle_next(&mut self) {
        self.focused_choice().next();
    }

    /// Left arrow
    pub fn cycle_prev(&mut self) {
        self.focused_choice().prev();
    }

    fn focused_choice(&mut self) -> &mut Choice {
        match self.focus {
            SalaryField::JobTitle => &mut self.job_title,
            SalaryField::Location => &mut self.location,
            SalaryField::ExperienceLevel => &mut self.experience_level,
            SalaryField::Skills => &mut self.skill_cursor,
        }
    }

    /// Toggle the skill under the cursor
    pub fn toggle_skill(&mut self, catalog: &OptionCatalog) {
        let skill = self.skill_cursor.value(&catalog.predictor_skills);
        if !skill.is_empty() {
            self.skills.toggle(skill);
        }
    }

    /// The request body for the current selections
    pub fn request(&self, catalog: &OptionCatalog) -> PredictionRequest {
        PredictionRequest {
            job_title: self.job_title.value(&catalog.job_titles).to_string(),
            location: self.location.value(&catalog.locations).to_string(),
            experience_level: self
                .experience_level
                .value(&catalog.experience_levels)
                .to_string(),
            skills: self.skills.to_vec(),
        }
    }

    pub fn submit(&mut self, catalog: &OptionCatalog) -> ApiRequest {
        ApiRequest::PredictSalary {
            ticket: self.prediction.begin(),
            body: self.request(catalog),
        }
    }

    pub fn apply(&mut self, ticket: Ticket, result: Result<f64, ApiError>) -> Completion {
        self.prediction.complete(ticket, result)
    }

    pub fn predicted_salary(&self) -> Option<f64> {
        self.prediction.value().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let catalog = OptionCatalog::default();
        let panel = SalaryPanel::new(&catalog);
        let req = panel.request(&catalog);
        assert_eq!(req.job_title, "Data Scientist");
        assert_eq!(req.location, "Remote");
        assert_eq!(req.experience_level, "Mid-level");
        assert!(req.skills.is_empty());
    }

    #[test]
    fn test_submit_sends_current_selection() {
        let catalog = OptionCatalog::default();
        let mut panel = SalaryPanel::new(&catalog);

        panel.cycle_next(); // Machine Learning Engineer
        panel.focus_next();
        panel.cycle_prev(); // Singapore
        panel.focus_next();
        panel.cycle_next(); // Senior-level
        panel.focus_next();
        panel.cycle_next(); // cursor on SQL
        panel.toggle_skill(&catalog);

        let ApiRequest::PredictSalary { body, .. } = panel.submit(&catalog) else {
            panic!("expected a prediction request");
        };
        assert_eq!(
            body,
            PredictionRequest {
                job_title: "Machine Learning Engineer".to_string(),
                location: "Singapore".to_string(),
                experience_level: "Senior-level".to_string(),
                skills: vec!["SQL".to_string()],
            }
        );
        assert!(panel.prediction.is_pending());
    }

    #[test]
    fn test_focus_wraps() {
        let catalog = OptionCatalog::default();
        let mut panel = SalaryPanel::new(&catalog);
        panel.focus_prev();
        assert_eq!(panel.focus, SalaryField::Skills);
        panel.focus_next();
        assert_eq!(panel.focus, SalaryField::JobTitle);
    }

    #[test]
    fn test_failure_keeps_prior_prediction() {
        let catalog = OptionCatalog::default();
        let mut panel = SalaryPanel::new(&catalog);

        let ApiRequest::PredictSalary { ticket, .. } = panel.submit(&catalog) else {
            unreachable!()
        };
        panel.apply(ticket, Ok(120000.0));

        let ApiRequest::PredictSalary { ticket, .. } = panel.submit(&catalog) else {
            unreachable!()
        };
        panel.apply(ticket, Err(ApiError::Transport("connection refused".to_string())));

        assert_eq!(panel.predicted_salary(), Some(120000.0));
        assert!(panel.prediction.error().is_some());
    }
}
