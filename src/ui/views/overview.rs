//! Market overview view - skill demand, salary by role, salary by experience

use crate::core::{MarketSnapshot, RequestStatus};
use crate::panels::OverviewPanel;
use crate::ui::charts::{self, BarSpec, Segment};
use crate::ui::format;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const LOADING_TEXT: &str = "Loading market insights...";

/// Render the overview panel
pub fn render_overview(f: &mut Frame, panel: &OverviewPanel, area: Rect) {
    let Some(snapshot) = panel.snapshot() else {
        render_placeholder(f, panel, area);
        return;
    };

    let skill_rows = u16::try_from(snapshot.data.skill_demand.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Status
            Constraint::Length(skill_rows), // Skill demand
            Constraint::Min(0),             // Role donut + experience bars
        ])
        .split(area);

    render_status(f, panel, snapshot, chunks[0]);
    render_skill_demand(f, snapshot, chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_role_donut(f, snapshot, bottom[0]);
    render_experience(f, snapshot, bottom[1]);
}

fn render_placeholder(f: &mut Frame, panel: &OverviewPanel, area: Rect) {
    let lines = match panel.market.status() {
        RequestStatus::Failed(e) => vec![
            Line::from(Span::styled(
                format!("Could not load market data: {}", e),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "Press r to retry.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        _ => vec![Line::from(LOADING_TEXT)],
    };

    let placeholder = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(placeholder, area);
}

fn render_status(f: &mut Frame, panel: &OverviewPanel, snapshot: &MarketSnapshot, area: Rect) {
    let mut spans = vec![Span::styled(
        format!("Updated {}", snapshot.fetched_at.format("%H:%M:%S")),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(total) = snapshot.data.total_postings {
        spans.push(Span::styled(
            format!(" │ {} postings", format::group_number(total as f64)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    match panel.market.status() {
        RequestStatus::Pending => spans.push(Span::styled(
            " │ refreshing...",
            Style::default().fg(Color::Yellow),
        )),
        RequestStatus::Failed(e) => spans.push(Span::styled(
            format!(" │ refresh failed: {}", e),
            Style::default().fg(Color::Red),
        )),
        _ => {}
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn to_bars(specs: &[BarSpec]) -> Vec<Bar<'static>> {
    specs
        .iter()
        .map(|spec| {
            Bar::default()
                .value(spec.value)
                .label(Line::from(spec.label.clone()))
                .text_value(spec.text.clone())
                .style(Style::default().fg(spec.color))
                .value_style(Style::default().fg(Color::Black).bg(spec.color))
        })
        .collect()
}

fn render_skill_demand(f: &mut Frame, snapshot: &MarketSnapshot, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Top Demanded Skills");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut bars = to_bars(&charts::skill_demand_bars(&snapshot.data));
    let (shown, hidden) = charts::visible_bars(bars.len(), usize::from(inner.height));
    bars.truncate(shown);

    if shown > 0 {
        let chart_area = Rect {
            height: shown as u16,
            ..inner
        };
        let chart = BarChart::default()
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars));
        f.render_widget(chart, chart_area);
    }

    if hidden > 0 {
        let more_area = Rect {
            y: inner.y + shown as u16,
            height: 1,
            ..inner
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("+{} more", hidden),
                Style::default().fg(Color::DarkGray),
            )),
            more_area,
        );
    }
}

fn render_role_donut(f: &mut Frame, snapshot: &MarketSnapshot, area: Rect) {
    let segments = charts::role_segments(&snapshot.data);
    let inner_width = area.width.saturating_sub(2);

    let mut lines = vec![ring_line(&segments, inner_width), Line::from("")];
    for segment in &segments {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(segment.color)),
            Span::styled(
                segment.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", format::currency_whole(segment.value))),
            Span::styled(
                format!(" ({:.1}%)", segment.share * 100.0),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let donut = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Average Salary by Role"),
    );
    f.render_widget(donut, area);
}

/// The donut flattened into a single stacked line
fn ring_line(segments: &[Segment], width: u16) -> Line<'static> {
    let shares: Vec<f64> = segments.iter().map(|s| s.share).collect();
    let spans: Vec<Span<'static>> = charts::apportion(&shares, width)
        .into_iter()
        .zip(segments)
        .filter(|(cells, _)| *cells > 0)
        .map(|(cells, segment)| {
            Span::styled(
                "█".repeat(usize::from(cells)),
                Style::default().fg(segment.color),
            )
        })
        .collect();
    Line::from(spans)
}

fn render_experience(f: &mut Frame, snapshot: &MarketSnapshot, area: Rect) {
    let bars = to_bars(&charts::experience_bars(&snapshot.data));
    let inner_width = area.width.saturating_sub(2);
    let count = bars.len().max(1) as u16;
    let bar_width = (inner_width / count).saturating_sub(1).max(1);

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Experience vs Compensation"),
        )
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}
