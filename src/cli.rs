//! Command-line interface - argument parsing and the non-interactive commands

use crate::api::{ApiClient, MarketData, PredictionRequest, SkillQuery, SkillRecommendation};
use crate::catalog::{CatalogError, Field, OptionCatalog};
use crate::panels::SkillGap;
use crate::ui::format;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "marketpulse",
    version,
    about = "Job-market dashboard: market overview, salary prediction, skill-gap analysis"
)]
pub struct Cli {
    /// Config file (defaults to ./marketpulse.yml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend origin, overrides the config file
    #[arg(long, global = true, env = "MARKETPULSE_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds, overrides the config file
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Where the dashboard writes its log
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive dashboard (default)
    Dashboard,
    /// Print the market snapshot
    Market,
    /// Predict a salary
    Predict(PredictArgs),
    /// Recommend skills for a target role
    Recommend(RecommendArgs),
    /// Check the backend is reachable
    Ping,
    /// Print the accepted values for every field
    Options,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[arg(long, default_value = crate::catalog::DEFAULT_JOB_TITLE)]
    pub job_title: String,
    #[arg(long, default_value = crate::catalog::DEFAULT_LOCATION)]
    pub location: String,
    #[arg(long, default_value = crate::catalog::DEFAULT_EXPERIENCE_LEVEL)]
    pub experience_level: String,
    /// Held skill, repeatable
    #[arg(long = "skill")]
    pub skills: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[arg(long, default_value = crate::catalog::DEFAULT_JOB_TITLE)]
    pub target_job: String,
    /// Held skill, repeatable
    #[arg(long = "skill")]
    pub skills: Vec<String>,
}

/// Deduplicate skills in first-seen order
fn unique(skills: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        if !out.contains(skill) {
            out.push(skill.clone());
        }
    }
    out
}

impl PredictArgs {
    /// Validate against the catalog and build the request body
    pub fn to_request(&self, catalog: &OptionCatalog) -> Result<PredictionRequest, CatalogError> {
        catalog.position(Field::JobTitle, &self.job_title)?;
        catalog.position(Field::Location, &self.location)?;
        catalog.position(Field::ExperienceLevel, &self.experience_level)?;
        for skill in &self.skills {
            catalog.position(Field::PredictorSkill, skill)?;
        }
        Ok(PredictionRequest {
            job_title: self.job_title.clone(),
            location: self.location.clone(),
            experience_level: self.experience_level.clone(),
            skills: unique(&self.skills),
        })
    }
}

impl RecommendArgs {
    pub fn to_query(&self, catalog: &OptionCatalog) -> Result<SkillQuery, CatalogError> {
        catalog.position(Field::JobTitle, &self.target_job)?;
        for skill in &self.skills {
            catalog.position(Field::OptimizerSkill, skill)?;
        }
        Ok(SkillQuery {
            target_job: self.target_job.clone(),
            current_skills: unique(&self.skills),
        })
    }
}

pub fn market_report(data: &MarketData) -> String {
    let mut out = String::new();
    if let Some(total) = data.total_postings {
        let _ = writeln!(out, "Postings analysed: {}\n", format::group_number(total as f64));
    }

    let _ = writeln!(out, "Top Demanded Skills");
    let width = data.skill_demand.iter().map(|e| e.skill.len()).max().unwrap_or(0);
    for entry in &data.skill_demand {
        let _ = writeln!(out, "  {:<width$}  {}", entry.skill, entry.count, width = width);
    }

    let _ = writeln!(out, "\nAverage Salary by Role");
    let width = data.job_salary.iter().map(|e| e.title.len()).max().unwrap_or(0);
    for entry in &data.job_salary {
        let _ = writeln!(
            out,
            "  {:<width$}  {}",
            entry.title,
            format::currency_whole(entry.salary),
            width = width
        );
    }

    let _ = writeln!(out, "\nExperience vs Compensation");
    let width = data.exp_salary.iter().map(|e| e.level.len()).max().unwrap_or(0);
    for entry in &data.exp_salary {
        let _ = writeln!(
            out,
            "  {:<width$}  {}",
            entry.level,
            format::currency_whole(entry.salary),
            width = width
        );
    }
    out
}

pub fn prediction_report(request: &PredictionRequest, salary: f64) -> String {
    let skills = if request.skills.is_empty() {
        "none".to_string()
    } else {
        request.skills.join(", ")
    };
    format!(
        "{} in {} ({}), skills: {}\nEstimated Annual Salary: {}\n",
        request.job_title,
        request.location,
        request.experience_level,
        skills,
        format::currency(salary)
    )
}

pub fn recommendation_report(query: &SkillQuery, rec: &SkillRecommendation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Top Recommendations for {}", query.target_job);
    for skill in &rec.recommended_skills {
        let _ = writeln!(out, "  • {}", skill);
    }
    if let Some(message) = &rec.message {
        let _ = writeln!(out, "  ({})", message);
    }

    let _ = writeln!(out, "\nMarket Standard for {}", query.target_job);
    let _ = writeln!(out, "  {}", rec.top_market_skills.join(", "));

    let gap = SkillGap::compute(&rec.top_market_skills, &query.current_skills);
    let _ = writeln!(
        out,
        "\nYou have {} out of {} core skills for this role.",
        gap.overlap.len(),
        gap.market_total
    );
    if !gap.missing.is_empty() {
        let _ = writeln!(out, "Missing: {}", gap.missing.join(", "));
    }
    out
}

pub fn catalog_report(catalog: &OptionCatalog) -> String {
    let mut out = String::new();
    for (heading, values) in [
        ("Job titles", &catalog.job_titles),
        ("Locations", &catalog.locations),
        ("Experience levels", &catalog.experience_levels),
        ("Salary form skills", &catalog.predictor_skills),
        ("Skill optimizer skills", &catalog.optimizer_skills),
    ] {
        let _ = writeln!(out, "{}:", heading);
        for value in values {
            let _ = writeln!(out, "  {}", value);
        }
    }
    out
}

/// Run one of the non-interactive commands, writing its report to `out`
pub async fn run_command(
    command: &Command,
    client: &ApiClient,
    catalog: &OptionCatalog,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Dashboard => anyhow::bail!("the dashboard is not a one-shot command"),
        Command::Options => {
            write!(out, "{}", catalog_report(catalog))?;
        }
        Command::Ping => {
            let welcome = client.welcome().await?;
            writeln!(out, "{} ({})", welcome.message, client.base_url())?;
        }
        Command::Market => {
            let data = client.market_data().await?;
            write!(out, "{}", market_report(&data))?;
        }
        Command::Predict(args) => {
            let request = args.to_request(catalog)?;
            let salary = client.predict_salary(&request).await?;
            write!(out, "{}", prediction_report(&request, salary))?;
        }
        Command::Recommend(args) => {
            let query = args.to_query(catalog)?;
            let rec = client.recommend_skills(&query).await?;
            write!(out, "{}", recommendation_report(&query, &rec))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{JobSalary, SkillDemand};

    #[test]
    fn test_cli_parses_predict() {
        let cli = Cli::parse_from([
            "marketpulse",
            "predict",
            "--job-title",
            "Data Analyst",
            "--skill",
            "SQL",
            "--skill",
            "Python",
        ]);
        let Some(Command::Predict(args)) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.job_title, "Data Analyst");
        assert_eq!(args.location, "Remote");
        assert_eq!(args.skills, ["SQL", "Python"]);
    }

    #[test]
    fn test_cli_defaults_to_dashboard() {
        let cli = Cli::parse_from(["marketpulse"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_predict_args_validation() {
        let catalog = OptionCatalog::default();
        let args = PredictArgs {
            job_title: "Astronaut".to_string(),
            location: "Remote".to_string(),
            experience_level: "Mid-level".to_string(),
            skills: vec![],
        };
        let err = args.to_request(&catalog).unwrap_err();
        assert!(matches!(err, CatalogError::Unknown { field: Field::JobTitle, .. }));
    }

    #[test]
    fn test_predict_args_dedupes_skills() {
        let catalog = OptionCatalog::default();
        let args = PredictArgs {
            job_title: "Data Scientist".to_string(),
            location: "Remote".to_string(),
            experience_level: "Mid-level".to_string(),
            skills: vec!["SQL".to_string(), "SQL".to_string(), "AWS".to_string()],
        };
        assert_eq!(args.to_request(&catalog).unwrap().skills, ["SQL", "AWS"]);
    }

    #[test]
    fn test_recommend_rejects_unknown_skill() {
        let catalog = OptionCatalog::default();
        let args = RecommendArgs {
            target_job: "Data Engineer".to_string(),
            skills: vec!["Spark".to_string(), "Cobol".to_string()],
        };
        let err = args.to_query(&catalog).unwrap_err();
        assert!(err.to_string().starts_with("unknown skill 'Cobol'"));
    }

    #[test]
    fn test_prediction_report_currency() {
        let request = PredictionRequest {
            job_title: "Data Scientist".to_string(),
            location: "Remote".to_string(),
            experience_level: "Mid-level".to_string(),
            skills: vec![],
        };
        let report = prediction_report(&request, 120000.0);
        assert!(report.contains("Estimated Annual Salary: $120,000\n"));
        assert!(report.contains("skills: none"));
    }

    #[test]
    fn test_recommendation_report_gap() {
        let query = SkillQuery {
            target_job: "Software Engineer".to_string(),
            current_skills: vec!["Python".to_string()],
        };
        let rec = SkillRecommendation {
            recommended_skills: vec!["Docker".to_string()],
            top_market_skills: vec!["Python".to_string(), "SQL".to_string()],
            target_job: None,
            message: None,
        };
        let report = recommendation_report(&query, &rec);
        assert!(report.contains("  • Docker\n"));
        assert!(report.contains("Python, SQL"));
        assert!(report.contains("You have 1 out of 2 core skills"));
        assert!(report.contains("Missing: SQL"));
    }

    #[test]
    fn test_run_command_options_needs_no_backend() {
        let client = ApiClient::new(&crate::config::ApiConfig::default()).unwrap();
        let catalog = OptionCatalog::default();
        let mut out = Vec::new();

        tokio_test::block_on(run_command(&Command::Options, &client, &catalog, &mut out)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Job titles:\n  Data Scientist\n"));
        assert!(text.contains("Experience levels:\n  Entry-level\n"));
    }

    #[test]
    fn test_run_command_rejects_dashboard() {
        let client = ApiClient::new(&crate::config::ApiConfig::default()).unwrap();
        let mut out = Vec::new();
        let result = tokio_test::block_on(run_command(
            &Command::Dashboard,
            &client,
            &OptionCatalog::default(),
            &mut out,
        ));
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_market_report_sections() {
        let data = MarketData {
            skill_demand: vec![SkillDemand { skill: "Python".into(), count: 42 }],
            job_salary: vec![JobSalary { title: "Data Analyst".into(), salary: 85000.4 }],
            exp_salary: vec![],
            total_postings: Some(1200),
        };
        let report = market_report(&data);
        assert!(report.starts_with("Postings analysed: 1,200"));
        assert!(report.contains("  Python  42"));
        assert!(report.contains("  Data Analyst  $85,000"));
    }
}
