//! Panel state containers - one per dashboard view, owned by the shell

mod overview;
mod salary;
mod selection;
mod skills;

pub use overview::OverviewPanel;
pub use salary::{SalaryField, SalaryPanel};
pub use selection::{Choice, SkillSet};
pub use skills::{SkillAnalysis, SkillGap, SkillsField, SkillsPanel};

/// The three mutually exclusive views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Salary,
    Skills,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Overview, Panel::Salary, Panel::Skills];

    /// Sidebar label
    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::Overview => "Market Overview",
            Self::Salary => "Salary Predictor",
            Self::Skills => "Skill Optimizer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Global Market Intelligence",
            Self::Salary => "AI Salary Projection",
            Self::Skills => "Career Path Optimizer",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Overview => "Real-time insights from across the tech landscape.",
            Self::Salary => "Estimate your market value using our ML engine.",
            Self::Skills => "Identify skill gaps and bridge your way to your dream role.",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Salary => 1,
            Self::Skills => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
