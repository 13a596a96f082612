//! Step panel
//!
//! Header, the form of the current step with inline errors, and the
//! back/next buttons. The review page draws the summary of the earlier
//! steps above the payment fields.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::forms::FieldInput;
use crate::tui::app::App;
use crate::tui::layout::StepPanelLayout;
use crate::wizard::{Direction, StepView};

use super::{nav_buttons, summary};

/// Render the step panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let page = app.session.page();
    let block = Block::default()
        .title(format!(" {} ", page.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = StepPanelLayout::new(inner);
    render_header(frame, app, layout.header);

    app.hit_areas.fields.clear();
    let review_lines = match app.session.body() {
        StepView::Empty => None,
        StepView::ReviewPayment(review) => Some(summary::summary_lines(&review)),
        StepView::SignUp | StepView::CompanyInfo | StepView::Address => Some(Vec::new()),
    };

    match review_lines {
        None => {
            let text = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Please complete the earlier steps first.",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    "Use Alt+1-3 or click a step on the left.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .wrap(Wrap { trim: false });
            frame.render_widget(text, layout.body);
        }
        Some(lines) => {
            let body = layout.body;
            let summary_height =
                (lines.len() as u16).min(body.height.saturating_sub(field_rows(app)));
            frame.render_widget(
                Paragraph::new(lines),
                Rect::new(body.x, body.y, body.width, summary_height),
            );
            let fields_area = Rect::new(
                body.x,
                body.y + summary_height,
                body.width,
                body.height - summary_height,
            );
            render_fields(frame, app, fields_area);
        }
    }

    nav_buttons::render(frame, app, layout.buttons);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let page = app.session.page();
    let marker = match app.transition.map(|t| t.direction) {
        Some(Direction::Forward) => " ▼",
        Some(Direction::Backward) => " ▲",
        Some(Direction::None) | None => "",
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Step {} of 4: {}", page.number(), page.title()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(marker, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            page.description(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Rows the visible fields of the current form need
fn field_rows(app: &App) -> u16 {
    let form = app.session.current_form().form();
    form.visible_indices()
        .into_iter()
        .map(|i| if form.error(form.fields()[i].key).is_some() { 3 } else { 2 })
        .sum()
}

/// Draw each shown field, with its error on the line below
fn render_fields(frame: &mut Frame, app: &mut App, area: Rect) {
    let form = app.session.current_form().form();
    let bottom = area.y + area.height;
    let mut y = area.y;
    let mut field_areas = Vec::new();

    for index in form.visible_indices() {
        if y >= bottom {
            break;
        }
        let field = &form.fields()[index];
        let row = Rect::new(area.x, y, area.width, 1);
        match &field.input {
            FieldInput::Text(input) => frame.render_widget(input.clone(), row),
            FieldInput::Select(select) => frame.render_widget(select.clone(), row),
        }
        field_areas.push((field.key, row));
        y += 1;

        if let Some(message) = form.error(field.key) {
            if y < bottom {
                let error = Paragraph::new(Span::styled(
                    format!("  ✗ {}", message),
                    Style::default().fg(Color::Red),
                ));
                frame.render_widget(error, Rect::new(area.x, y, area.width, 1));
                y += 1;
            }
        }
        y += 1;
    }

    app.hit_areas.fields = field_areas;
}
