//! Skill optimizer state and skill-gap analysis

use super::selection::{Choice, SkillSet};
use crate::api::{ApiError, SkillQuery, SkillRecommendation};
use crate::catalog::{Field, OptionCatalog};
use crate::core::{ApiRequest, Completion, Lifecycle, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsField {
    TargetRole,
    Skills,
}

/// How the held skills line up against the market standard for a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGap {
    /// Market skills already held, in market order
    pub overlap: Vec<String>,
    /// Market skills still missing, in market order
    pub missing: Vec<String>,
    pub market_total: usize,
}

impl SkillGap {
    pub fn compute(market: &[String], current: &[String]) -> Self {
        let (overlap, missing): (Vec<String>, Vec<String>) = market
            .iter()
            .cloned()
            .partition(|skill| current.contains(skill));
        Self {
            overlap,
            missing,
            market_total: market.len(),
        }
    }

    /// Fraction of market skills covered, 0.0 when the market list is empty
    pub fn coverage(&self) -> f64 {
        if self.market_total == 0 {
            0.0
        } else {
            self.overlap.len() as f64 / self.market_total as f64
        }
    }
}

/// A recommendation together with the query that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillAnalysis {
    pub query: SkillQuery,
    pub recommendation: SkillRecommendation,
}

impl SkillAnalysis {
    pub fn gap(&self) -> SkillGap {
        SkillGap::compute(
            &self.recommendation.top_market_skills,
            &self.query.current_skills,
        )
    }
}

#[derive(Debug)]
pub struct SkillsPanel {
    pub target: Choice,
    pub skills: SkillSet,
    pub skill_cursor: Choice,
    pub focus: SkillsField,
    pub analysis: Lifecycle<SkillAnalysis>,
    in_flight: SkillQuery,
}

impl SkillsPanel {
    pub fn new(catalog: &OptionCatalog) -> Self {
        Self {
            target: Choice::new(
                catalog.default_index(Field::JobTitle),
                catalog.job_titles.len(),
            ),
            skills: SkillSet::new(),
            skill_cursor: Choice::new(0, catalog.optimizer_skills.len()),
            focus: SkillsField::TargetRole,
            analysis: Lifecycle::new(),
            in_flight: SkillQuery::default(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SkillsField::TargetRole => SkillsField::Skills,
            SkillsField::Skills => SkillsField::TargetRole,
        };
    }

    pub fn cycle_next(&mut self) {
        match self.focus {
            SkillsField::TargetRole => self.target.next(),
            SkillsField::Skills => self.skill_cursor.next(),
        }
    }

    pub fn cycle_prev(&mut self) {
        match self.focus {
            SkillsField::TargetRole => self.target.prev(),
            SkillsField::Skills => self.skill_cursor.prev(),
        }
    }

    pub fn toggle_skill(&mut self, catalog: &OptionCatalog) {
        let skill = self.skill_cursor.value(&catalog.optimizer_skills);
        if !skill.is_empty() {
            self.skills.toggle(skill);
        }
    }

    pub fn query(&self, catalog: &OptionCatalog) -> SkillQuery {
        SkillQuery {
            target_job: self.target.value(&catalog.job_titles).to_string(),
            current_skills: self.skills.to_vec(),
        }
    }

    /// Start an analysis for the current selection
    pub fn analyze(&mut self, catalog: &OptionCatalog) -> ApiRequest {
        let body = self.query(catalog);
        self.in_flight = body.clone();
        ApiRequest::RecommendSkills {
            ticket: self.analysis.begin(),
            body,
        }
    }

    pub fn apply(
        &mut self,
        ticket: Ticket,
        result: Result<SkillRecommendation, ApiError>,
    ) -> Completion {
        // Only the latest ticket can apply, and in_flight is the query it was issued with
        let query = self.in_flight.clone();
        let result = result.map(|recommendation| SkillAnalysis {
            query,
            recommendation,
        });
        self.analysis.complete(ticket, result)
    }

    pub fn current(&self) -> Option<&SkillAnalysis> {
        self.analysis.value()
    }
}
