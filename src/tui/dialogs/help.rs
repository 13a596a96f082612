//! Help dialog
//!
//! Lists the keys of the wizard

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Fields"),
        Line::from(""),
        key_line("Tab/S-Tab", "Next/previous field"),
        key_line("↑/↓", "Move between fields, or change a choice"),
        key_line("←/→", "Move the cursor, or change a choice"),
        key_line("Home/End", "Start/end of the field"),
        Line::from(""),
        section("Steps"),
        Line::from(""),
        key_line("Enter", "Check this step and continue"),
        key_line("PgUp/C-b", "Back one step"),
        key_line("PgDn/C-n", "Forward one step without checking"),
        key_line("Alt+1-4", "Jump to a step"),
        key_line("Click", "Steps, fields, and buttons"),
        Line::from(""),
        key_line("F1", "Show this help"),
        key_line("Esc/C-c", "Quit without submitting"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
