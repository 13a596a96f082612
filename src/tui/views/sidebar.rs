//! Sidebar view
//!
//! Shows the four steps with their status; clicking a step jumps to it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::{Step, StepStatus};

/// Rows taken by one step entry
const STEP_HEIGHT: u16 = 3;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Registration ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = app.session.page();
    app.hit_areas.steps.clear();

    for step in Step::ALL {
        let y = inner.y + step.index() as u16 * STEP_HEIGHT;
        if y + 2 > inner.y + inner.height {
            break;
        }
        let entry = Rect::new(inner.x, y, inner.width, 2);
        frame.render_widget(Paragraph::new(step_lines(step, step.status(current))), entry);
        app.hit_areas.steps.push((step, entry));
    }
}

fn step_lines(step: Step, status: StepStatus) -> Vec<Line<'static>> {
    let (marker, marker_style, title_style) = match status {
        StepStatus::Completed => (
            " ✓ ".to_string(),
            Style::default().fg(Color::Green),
            Style::default().fg(Color::Green),
        ),
        StepStatus::Active => (
            " ▶ ".to_string(),
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        StepStatus::Pending => (
            format!(" {} ", step.number()),
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ),
    };

    vec![
        Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(step.title(), title_style),
        ]),
        Line::from(Span::styled(
            format!("   {}", step.description()),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
