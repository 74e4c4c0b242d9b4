//! Dashboard shell - sidebar navigation, panel header, active panel, key help

use super::views::{render_overview, render_salary, render_skills};
use crate::app::App;
use crate::panels::Panel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the whole dashboard
pub fn render_dashboard(f: &mut Frame, app: &App, api_url: &str) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(40)])
        .split(f.area());

    render_sidebar(f, app.active, api_url, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Panel
            Constraint::Length(3), // Footer
        ])
        .split(columns[1]);

    render_header(f, app.active, rows[0]);

    match app.active {
        Panel::Overview => render_overview(f, &app.overview, rows[1]),
        Panel::Salary => render_salary(f, &app.salary, &app.catalog, rows[1]),
        Panel::Skills => render_skills(f, &app.skills, &app.catalog, rows[1]),
    }

    render_footer(f, app.active, rows[2]);
}

fn render_sidebar(f: &mut Frame, active: Panel, api_url: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let mut items = vec![
        ListItem::new(Line::from(Span::styled(
            " MarketPulse",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))),
        ListItem::new(Line::from("")),
    ];

    for panel in Panel::ALL {
        let selected = panel == active;
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", if selected { "▶" } else { " " }),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("{} ", panel.index() + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                panel.menu_label(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(if selected { Modifier::BOLD } else { Modifier::empty() }),
            ),
        ]);
        let style = if selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        items.push(ListItem::new(line).style(style));
    }

    let menu = List::new(items).block(Block::default().borders(Borders::ALL));
    f.render_widget(menu, chunks[0]);

    let backend = Paragraph::new(Span::styled(
        api_url.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .block(Block::default().borders(Borders::ALL).title("API"));
    f.render_widget(backend, chunks[1]);
}

fn render_header(f: &mut Frame, active: Panel, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            active.title(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            active.subtitle(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, active: Panel, area: Rect) {
    let help = match active {
        Panel::Overview => "Tab/1-3: Switch │ r: Refresh │ q: Quit",
        Panel::Salary => "Tab/1-3: Switch │ ↑↓: Field │ ←→: Change │ Space: Toggle skill │ Enter: Predict │ q: Quit",
        Panel::Skills => "Tab/1-3: Switch │ ↑↓: Field │ ←→: Change │ Space: Toggle skill │ Enter: Analyze │ q: Quit",
    };

    let footer = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));

    f.render_widget(footer, area);
}
