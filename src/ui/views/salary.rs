//! Salary predictor view

use crate::catalog::OptionCatalog;
use crate::core::RequestStatus;
use crate::panels::{SalaryField, SalaryPanel};
use crate::ui::format;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the salary form and its latest estimate
pub fn render_salary(f: &mut Frame, panel: &SalaryPanel, catalog: &OptionCatalog, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Form
            Constraint::Length(1), // Status
            Constraint::Min(5),    // Estimate
        ])
        .split(area);

    render_form(f, panel, catalog, chunks[0]);
    render_status(f, panel, chunks[1]);
    render_estimate(f, panel, chunks[2]);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("‹ {} ›", value), value_style),
    ])
}

/// One chip per skill option; held skills are checked, the cursor is underlined
pub(crate) fn skill_chips(
    options: &[String],
    held: impl Fn(&str) -> bool,
    cursor: Option<usize>,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (i, skill) in options.iter().enumerate() {
        let checked = held(skill);
        let mut style = if checked {
            Style::default().fg(Color::Black).bg(Color::Magenta)
        } else {
            Style::default().fg(Color::Gray)
        };
        if cursor == Some(i) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        let mark = if checked { "x" } else { " " };
        spans.push(Span::styled(format!("[{}] {}", mark, skill), style));
        spans.push(Span::raw("  "));
    }
    spans
}

fn render_form(f: &mut Frame, panel: &SalaryPanel, catalog: &OptionCatalog, area: Rect) {
    let skills_focused = panel.focus == SalaryField::Skills;

    let mut skills_line = vec![
        Span::styled(
            (if skills_focused { "▶ " } else { "  " }).to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!("{:<18}", SalaryField::Skills.label()), Style::default().fg(Color::Gray)),
    ];
    skills_line.extend(skill_chips(
        &catalog.predictor_skills,
        |s| panel.skills.contains(s),
        skills_focused.then(|| panel.skill_cursor.index()),
    ));

    let lines = vec![
        field_line(
            SalaryField::JobTitle.label(),
            panel.job_title.value(&catalog.job_titles),
            panel.focus == SalaryField::JobTitle,
        ),
        field_line(
            SalaryField::Location.label(),
            panel.location.value(&catalog.locations),
            panel.focus == SalaryField::Location,
        ),
        field_line(
            SalaryField::ExperienceLevel.label(),
            panel.experience_level.value(&catalog.experience_levels),
            panel.focus == SalaryField::ExperienceLevel,
        ),
        Line::from(skills_line),
        Line::from(""),
        Line::from(Span::styled(
            "  [ Enter: Predict Market Value ]",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Profile"))
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

fn render_status(f: &mut Frame, panel: &SalaryPanel, area: Rect) {
    let status = match panel.prediction.status() {
        RequestStatus::Pending => Span::styled("Predicting...", Style::default().fg(Color::Yellow)),
        RequestStatus::Failed(e) => Span::styled(
            format!("Prediction failed: {}", e),
            Style::default().fg(Color::Red),
        ),
        _ => Span::raw(""),
    };
    f.render_widget(Paragraph::new(Line::from(status)), area);
}

fn render_estimate(f: &mut Frame, panel: &SalaryPanel, area: Rect) {
    let Some(salary) = panel.predicted_salary() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            "Estimated Annual Salary",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format::currency(salary),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let estimate = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(estimate, area);
}
