//! Back/next buttons under the step form

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::nav_buttons;

const BACK_LABEL: &str = "← Back";

/// Render the buttons and record their areas for clicks
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let buttons = nav_buttons(app.session.page());

    let back_width = (BACK_LABEL.chars().count() as u16 + 4).min(area.width);
    let next_width = (buttons.next_label.chars().count() as u16 + 6).min(area.width);

    let back_area = Rect::new(area.x, area.y, back_width, area.height);
    let next_area = Rect::new(
        area.x + area.width.saturating_sub(next_width),
        area.y,
        next_width,
        area.height,
    );

    let back_style = if buttons.back_enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    frame.render_widget(button(BACK_LABEL, back_style), back_area);
    frame.render_widget(
        button(
            &format!("{} →", buttons.next_label),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        next_area,
    );

    app.hit_areas.back = buttons.back_enabled.then_some(back_area);
    app.hit_areas.next = Some(next_area);
}

fn button<'a>(label: &str, style: Style) -> Paragraph<'a> {
    Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}
