//! Status bar view
//!
//! Shows the step counter, the status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::Step;

const HINTS: &str = " Tab:Field  Enter:Next  PgUp:Back  Alt+1-4:Step  F1:Help  Esc:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let page = app.session.page();
    let mut spans = vec![Span::styled(
        format!(" Step {} of {} ", page.number(), Step::ALL.len()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = HINTS.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints_len);
    if padding_len > 0 {
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
