//! UI Views - Market Overview, Salary Predictor, Skill Optimizer

pub mod overview;
pub mod salary;
pub mod skills;

pub use overview::render_overview;
pub use salary::render_salary;
pub use skills::render_skills;
