//! Skill optimizer view - role picker, held skills, recommendations, gap

use super::salary::skill_chips;
use crate::catalog::OptionCatalog;
use crate::core::RequestStatus;
use crate::panels::{SkillAnalysis, SkillsField, SkillsPanel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the skill optimizer panel
pub fn render_skills(f: &mut Frame, panel: &SkillsPanel, catalog: &OptionCatalog, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Form
            Constraint::Length(1), // Status
            Constraint::Min(8),    // Results
        ])
        .split(area);

    render_form(f, panel, catalog, chunks[0]);
    render_status(f, panel, chunks[1]);

    if let Some(analysis) = panel.current() {
        render_results(f, analysis, chunks[2]);
    }
}

fn render_form(f: &mut Frame, panel: &SkillsPanel, catalog: &OptionCatalog, area: Rect) {
    let role_focused = panel.focus == SkillsField::TargetRole;
    let skills_focused = panel.focus == SkillsField::Skills;
    let marker = |focused: bool| if focused { "▶ " } else { "  " };

    let role_line = Line::from(vec![
        Span::styled(marker(role_focused), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:<14}", "Target Role"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("‹ {} ›", panel.target.value(&catalog.job_titles)),
            if role_focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            },
        ),
    ]);

    let mut skills_line = vec![
        Span::styled(marker(skills_focused), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:<14}", "Your Skills"), Style::default().fg(Color::Gray)),
    ];
    skills_line.extend(skill_chips(
        &catalog.optimizer_skills,
        |s| panel.skills.contains(s),
        skills_focused.then(|| panel.skill_cursor.index()),
    ));

    let lines = vec![
        role_line,
        Line::from(skills_line),
        Line::from(""),
        Line::from(Span::styled(
            "  [ Enter: Analyze Skill Gap ]",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Select Your Current Skills"))
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

fn render_status(f: &mut Frame, panel: &SkillsPanel, area: Rect) {
    let status = match panel.analysis.status() {
        RequestStatus::Pending => Span::styled("Analyzing...", Style::default().fg(Color::Yellow)),
        RequestStatus::Failed(e) => Span::styled(
            format!("Analysis failed: {}", e),
            Style::default().fg(Color::Red),
        ),
        _ => Span::raw(""),
    };
    f.render_widget(Paragraph::new(Line::from(status)), area);
}

/// Items of the "Top Recommendations" list
pub fn recommendation_items(analysis: &SkillAnalysis) -> Vec<String> {
    analysis
        .recommendation
        .recommended_skills
        .iter()
        .map(|s| format!("• {}", s))
        .collect()
}

/// Badges of the market-standard row
pub fn market_badges(analysis: &SkillAnalysis) -> Vec<String> {
    analysis
        .recommendation
        .top_market_skills
        .iter()
        .map(|s| format!("[{}]", s))
        .collect()
}

fn render_results(f: &mut Frame, analysis: &SkillAnalysis, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let mut items: Vec<ListItem> = recommendation_items(analysis)
        .into_iter()
        .map(|line| ListItem::new(Line::from(Span::styled(line, Style::default().fg(Color::Green)))))
        .collect();
    if let Some(message) = &analysis.recommendation.message {
        items.push(ListItem::new(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::DarkGray),
        ))));
    }
    let recommendations = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Top Recommendations"),
    );
    f.render_widget(recommendations, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(4)])
        .split(columns[1]);

    let badges: Vec<Span> = market_badges(analysis)
        .into_iter()
        .flat_map(|badge| {
            [
                Span::styled(badge, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
            ]
        })
        .collect();
    let market = Paragraph::new(vec![
        Line::from(Span::styled(
            "Core skills found in 80%+ of top-tier postings",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(badges),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Market Standard for {}", analysis.query.target_job)),
    )
    .wrap(Wrap { trim: false });
    f.render_widget(market, right[0]);

    let gap = analysis.gap();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Skill Gap Analysis"))
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(gap.coverage())
        .label(format!(
            "You have {} out of {} core skills for this role.",
            gap.overlap.len(),
            gap.market_total
        ));
    f.render_widget(gauge, right[1]);
}
