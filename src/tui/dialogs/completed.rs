//! Registration complete dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::submission::SubmissionReceipt;
use crate::tui::layout::centered_rect;

/// Render the receipt of a finished registration
pub fn render(frame: &mut Frame, receipt: &SubmissionReceipt) {
    let area = centered_rect(60, 50, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Registration complete ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::Yellow)),
            Span::raw(receipt.id.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Submitted: ", Style::default().fg(Color::Yellow)),
            Span::raw(receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]),
        Line::from(""),
    ];

    if receipt.saved_to.is_empty() {
        lines.push(Line::from(Span::styled(
            "Not saved to disk",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Saved to:",
            Style::default().fg(Color::Yellow),
        )));
        for path in &receipt.saved_to {
            lines.push(Line::from(format!("  {}", path.display())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: start over  Esc: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
