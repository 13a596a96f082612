//! Review summary shown above the payment fields

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::models::ReviewSummary;

/// Lines for every summary section, with a blank line after each
pub fn summary_lines(summary: &ReviewSummary<'_>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in summary.sections() {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for line in section.lines {
            lines.push(Line::from(Span::styled(
                format!("  {}", line),
                Style::default().fg(Color::White),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}
