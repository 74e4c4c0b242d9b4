//! Chart models - what each overview chart draws, independent of widgets

use crate::api::MarketData;
use ratatui::style::Color;

/// One bar of a bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub label: String,
    pub value: u64,
    /// Text drawn on the bar
    pub text: String,
    pub color: Color,
}

/// One slice of the salary-by-role donut
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    /// Fraction of the whole, 0.0..=1.0
    pub share: f64,
    pub color: Color,
}

/// HSL (degrees, percent, percent) to an RGB terminal colour
pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f64| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round() as u8
    };

    Color::Rgb(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

/// "Top Demanded Skills" - one bar per entry, in received order
pub fn skill_demand_bars(data: &MarketData) -> Vec<BarSpec> {
    data.skill_demand
        .iter()
        .enumerate()
        .map(|(i, entry)| BarSpec {
            label: entry.skill.clone(),
            value: entry.count,
            text: entry.count.to_string(),
            color: hsl(260.0 + i as f64 * 10.0, 70.0, 60.0),
        })
        .collect()
}

/// How many of `total` one-row bars fit in `rows`, and how many are left over.
/// When some are left over, the last row is reserved for a "+k more" line.
pub fn visible_bars(total: usize, rows: usize) -> (usize, usize) {
    if total <= rows {
        (total, 0)
    } else {
        let shown = rows.saturating_sub(1);
        (shown, total - shown)
    }
}

/// "Experience vs Compensation"
pub fn experience_bars(data: &MarketData) -> Vec<BarSpec> {
    data.exp_salary
        .iter()
        .map(|entry| BarSpec {
            label: entry.level.clone(),
            value: entry.salary.max(0.0).round() as u64,
            text: super::format::currency_whole(entry.salary),
            color: Color::Rgb(139, 92, 246),
        })
        .collect()
}

/// "Average Salary by Role" - shares of the summed salaries
pub fn role_segments(data: &MarketData) -> Vec<Segment> {
    let total: f64 = data.job_salary.iter().map(|e| e.salary.max(0.0)).sum();
    data.job_salary
        .iter()
        .enumerate()
        .map(|(i, entry)| Segment {
            label: entry.title.clone(),
            value: entry.salary,
            share: if total > 0.0 {
                entry.salary.max(0.0) / total
            } else {
                0.0
            },
            color: hsl(180.0 + i as f64 * 15.0, 70.0, 50.0),
        })
        .collect()
}

/// Split `width` cells across `shares` by largest remainder, so the widths sum to `width`
/// whenever any share is positive.
pub fn apportion(shares: &[f64], width: u16) -> Vec<u16> {
    let total: f64 = shares.iter().filter(|s| **s > 0.0).sum();
    if total <= 0.0 || width == 0 {
        return vec![0; shares.len()];
    }

    let exact: Vec<f64> = shares
        .iter()
        .map(|s| s.max(0.0) / total * f64::from(width))
        .collect();
    let mut cells: Vec<u16> = exact.iter().map(|e| e.floor() as u16).collect();
    let assigned: u16 = cells.iter().sum();

    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|a, b| {
        let ra = exact[*a] - exact[*a].floor();
        let rb = exact[*b] - exact[*b].floor();
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal).then(a.cmp(b))
    });
    for idx in order.into_iter().take(usize::from(width.saturating_sub(assigned))) {
        cells[idx] += 1;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ExperienceSalary, JobSalary, SkillDemand};

    fn market() -> MarketData {
        MarketData {
            skill_demand: vec![
                SkillDemand { skill: "Python".into(), count: 40 },
                SkillDemand { skill: "SQL".into(), count: 31 },
                SkillDemand { skill: "AWS".into(), count: 12 },
            ],
            job_salary: vec![
                JobSalary { title: "Data Scientist".into(), salary: 150000.0 },
                JobSalary { title: "Data Analyst".into(), salary: 50000.0 },
            ],
            exp_salary: vec![ExperienceSalary { level: "Executive".into(), salary: 201234.6 }],
            total_postings: Some(500),
        }
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl(0.0, 100.0, 50.0), Color::Rgb(255, 0, 0));
        assert_eq!(hsl(120.0, 100.0, 50.0), Color::Rgb(0, 255, 0));
        assert_eq!(hsl(240.0, 100.0, 50.0), Color::Rgb(0, 0, 255));
        assert_eq!(hsl(0.0, 0.0, 100.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_skill_bars_keep_order_and_count() {
        let bars = skill_demand_bars(&market());
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Python", "SQL", "AWS"]);
        assert_eq!(bars[1].value, 31);
        assert_eq!(bars[0].color, hsl(260.0, 70.0, 60.0));
        assert_eq!(bars[2].color, hsl(280.0, 70.0, 60.0));
    }

    #[test]
    fn test_experience_bar_text() {
        let bars = experience_bars(&market());
        assert_eq!(bars[0].value, 201235);
        assert_eq!(bars[0].text, "$201,235");
    }

    #[test]
    fn test_role_shares() {
        let segments = role_segments(&market());
        assert_eq!(segments[0].share, 0.75);
        assert_eq!(segments[1].share, 0.25);
    }

    #[test]
    fn test_apportion_sums_to_width() {
        let cells = apportion(&[1.0, 1.0, 1.0], 10);
        assert_eq!(cells.iter().sum::<u16>(), 10);
        assert_eq!(cells, [4, 3, 3]);
    }

    #[test]
    fn test_visible_bars() {
        assert_eq!(visible_bars(12, 12), (12, 0));
        assert_eq!(visible_bars(3, 10), (3, 0));
        assert_eq!(visible_bars(12, 10), (9, 3));
        assert_eq!(visible_bars(2, 0), (0, 2));
    }

    #[test]
    fn test_apportion_degenerate() {
        assert_eq!(apportion(&[0.0, 0.0], 10), [0, 0]);
        assert_eq!(apportion(&[0.5, 0.5], 0), [0, 0]);
        assert!(apportion(&[], 10).is_empty());
    }
}
