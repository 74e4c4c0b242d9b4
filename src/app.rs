//! Application state and input handling

use crate::catalog::OptionCatalog;
use crate::core::{ApiEvent, ApiRequest, Completion};
use crate::panels::{OverviewPanel, Panel, SalaryField, SalaryPanel, SkillsField, SkillsPanel};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Navigation shell. Owns every panel's state; render code only borrows it.
pub struct App {
    pub catalog: OptionCatalog,
    pub active: Panel,
    pub overview: OverviewPanel,
    pub salary: SalaryPanel,
    pub skills: SkillsPanel,
    pub event_rx: mpsc::UnboundedReceiver<ApiEvent>,
    pub should_quit: bool,
    outbox: Vec<ApiRequest>,
}

impl App {
    /// Create the shell. The overview is mounted right away.
    pub fn new(catalog: OptionCatalog, event_rx: mpsc::UnboundedReceiver<ApiEvent>) -> Self {
        let salary = SalaryPanel::new(&catalog);
        let skills = SkillsPanel::new(&catalog);

        let mut app = Self {
            catalog,
            active: Panel::Overview,
            overview: OverviewPanel::new(),
            salary,
            skills,
            event_rx,
            should_quit: false,
            outbox: Vec::new(),
        };
        let request = app.overview.mount();
        app.outbox.push(request);
        app
    }

    /// Switch panels. Entering the overview refetches market data.
    pub fn navigate(&mut self, panel: Panel) {
        if panel == self.active {
            return;
        }
        log::debug!("Navigating to {:?}", panel);
        self.active = panel;
        if panel == Panel::Overview {
            let request = self.overview.mount();
            self.outbox.push(request);
        }
    }

    /// Requests queued since the last call, for the fetcher
    pub fn drain_requests(&mut self) -> Vec<ApiRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Apply all completed API calls (non-blocking)
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub fn apply_event(&mut self, event: ApiEvent) {
        let (what, completion) = match event {
            ApiEvent::MarketData { ticket, result } => {
                if let Err(e) = &result {
                    log::error!("Market data request failed: {}", e);
                }
                ("market data", self.overview.apply(ticket, result))
            }
            ApiEvent::Prediction { ticket, result } => {
                match &result {
                    Ok(salary) => log::info!("Predicted salary: {}", salary),
                    Err(e) => log::error!("Salary prediction failed: {}", e),
                }
                ("salary prediction", self.salary.apply(ticket, result))
            }
            ApiEvent::Recommendation { ticket, result } => {
                if let Err(e) = &result {
                    log::error!("Skill recommendation failed: {}", e);
                }
                ("skill recommendation", self.skills.apply(ticket, result))
            }
        };

        if completion == Completion::Stale {
            log::debug!("Discarded stale {} response", what);
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.navigate(self.active.next());
                return;
            }
            KeyCode::BackTab => {
                self.navigate(self.active.prev());
                return;
            }
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                self.navigate(Panel::ALL[idx]);
                return;
            }
            _ => {}
        }

        match self.active {
            Panel::Overview => self.handle_overview_key(key.code),
            Panel::Salary => self.handle_salary_key(key.code),
            Panel::Skills => self.handle_skills_key(key.code),
        }
    }

    fn handle_overview_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('r') {
            log::info!("Manual refresh requested");
            let request = self.overview.mount();
            self.outbox.push(request);
        }
    }

    fn handle_salary_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.salary.focus_prev(),
            KeyCode::Down => self.salary.focus_next(),
            KeyCode::Left => self.salary.cycle_prev(),
            KeyCode::Right => self.salary.cycle_next(),
            KeyCode::Char(' ') if self.salary.focus == SalaryField::Skills => {
                self.salary.toggle_skill(&self.catalog);
            }
            KeyCode::Enter => {
                let request = self.salary.submit(&self.catalog);
                self.outbox.push(request);
            }
            _ => {}
        }
    }

    fn handle_skills_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down => self.skills.toggle_focus(),
            KeyCode::Left => self.skills.cycle_prev(),
            KeyCode::Right => self.skills.cycle_next(),
            KeyCode::Char(' ') if self.skills.focus == SkillsField::Skills => {
                self.skills.toggle_skill(&self.catalog);
            }
            KeyCode::Enter => {
                let request = self.skills.analyze(&self.catalog);
                self.outbox.push(request);
            }
            _ => {}
        }
    }

    /// Check if we should poll for input
    pub fn should_poll_input() -> Result<bool> {
        Ok(event::poll(Duration::from_millis(100))?)
    }

    /// Get keyboard event
    pub fn read_event() -> Result<Event> {
        Ok(event::read()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MarketData, SkillDemand};
    use crate::core::MarketSnapshot;

    fn new_app() -> (App, mpsc::UnboundedSender<ApiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(OptionCatalog::default(), rx), tx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn snapshot(skills: &[(&str, u64)]) -> MarketSnapshot {
        MarketSnapshot::new(MarketData {
            skill_demand: skills
                .iter()
                .map(|(s, c)| SkillDemand {
                    skill: s.to_string(),
                    count: *c,
                })
                .collect(),
            job_salary: vec![],
            exp_salary: vec![],
            total_postings: None,
        })
    }

    #[test]
    fn test_starts_on_overview_with_fetch_queued() {
        let (mut app, _tx) = new_app();
        assert_eq!(app.active, Panel::Overview);
        let requests = app.drain_requests();
        assert!(matches!(requests.as_slice(), [ApiRequest::MarketData { .. }]));
        assert!(app.drain_requests().is_empty());
    }

    #[test]
    fn test_navigation_keys() {
        let (mut app, _tx) = new_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active, Panel::Salary);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active, Panel::Skills);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active, Panel::Salary);
    }

    #[test]
    fn test_returning_to_overview_remounts() {
        let (mut app, _tx) = new_app();
        app.drain_requests();
        press(&mut app, KeyCode::Char('2'));
        assert!(app.drain_requests().is_empty());
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.drain_requests().len(), 1);
        assert_eq!(app.overview.market.generation(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _tx) = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_events_applied_through_channel() {
        let (mut app, tx) = new_app();
        let Some(ApiRequest::MarketData { ticket }) = app.drain_requests().pop() else {
            panic!("expected market request");
        };

        tx.send(ApiEvent::MarketData {
            ticket,
            result: Ok(snapshot(&[("Python", 10)])),
        })
        .unwrap();
        app.process_events();

        let snap = app.overview.snapshot().unwrap();
        assert_eq!(snap.data.skill_demand[0].skill, "Python");
    }

    #[test]
    fn test_stale_market_response_discarded() {
        let (mut app, _tx) = new_app();
        let Some(ApiRequest::MarketData { ticket: first }) = app.drain_requests().pop() else {
            panic!("expected market request");
        };
        press(&mut app, KeyCode::Char('r'));
        let Some(ApiRequest::MarketData { ticket: second }) = app.drain_requests().pop() else {
            panic!("expected market request");
        };

        app.apply_event(ApiEvent::MarketData {
            ticket: second,
            result: Ok(snapshot(&[("Rust", 3)])),
        });
        app.apply_event(ApiEvent::MarketData {
            ticket: first,
            result: Ok(snapshot(&[("COBOL", 1)])),
        });

        assert_eq!(app.overview.snapshot().unwrap().data.skill_demand[0].skill, "Rust");
    }

    #[test]
    fn test_overview_failure_without_snapshot() {
        let (mut app, _tx) = new_app();
        let Some(ApiRequest::MarketData { ticket }) = app.drain_requests().pop() else {
            panic!("expected market request");
        };
        app.apply_event(ApiEvent::MarketData {
            ticket,
            result: Err(ApiError::Transport("connection refused".to_string())),
        });
        assert!(app.overview.snapshot().is_none());
        assert!(app.overview.market.error().is_some());
    }

    #[test]
    fn test_space_only_toggles_on_skill_row() {
        let (mut app, _tx) = new_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.salary.skills.is_empty());

        press(&mut app, KeyCode::Up); // wraps to Skills
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.salary.skills.as_slice(), ["Python"]);
    }

    #[test]
    fn test_enter_on_skills_panel_queues_analysis() {
        let (mut app, _tx) = new_app();
        app.drain_requests();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        let requests = app.drain_requests();
        assert!(matches!(
            requests.as_slice(),
            [ApiRequest::RecommendSkills { body, .. }] if body.target_job == "Data Scientist"
        ));
    }
}
