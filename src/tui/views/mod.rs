//! TUI Views module
//!
//! The step list, the step panel, and the status bar, with the toast and
//! any open dialog drawn on top.

pub mod nav_buttons;
pub mod sidebar;
pub mod status_bar;
pub mod step_form;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);
    step_form::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let widget = NotificationWidget::new(notification);
        let area = widget.area(frame.area());
        frame.render_widget(widget, area);
    }

    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Completed(receipt) => dialogs::completed::render(frame, receipt),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::wizard::Step;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_first_page_renders_fields_and_records_hit_areas() {
        let mut app = App::new(Settings::default(), Vec::new());
        let screen = draw(&mut app);
        assert!(screen.contains("Step 1 of 4: Sign Up"));
        assert!(screen.contains("Sign Up for Free"));
        assert_eq!(app.hit_areas.steps.len(), 4);
        assert_eq!(app.hit_areas.fields.len(), 3);
        assert!(app.hit_areas.back.is_none());
        assert!(app.hit_areas.next.is_some());
    }

    #[test]
    fn test_errors_render_inline() {
        let mut app = App::new(Settings::default(), Vec::new());
        app.submit();
        let screen = draw(&mut app);
        assert!(screen.contains("✗ Email is required"));
    }

    #[test]
    fn test_empty_review_page_explains() {
        let mut app = App::new(Settings::default(), Vec::new());
        app.jump_to(Step::ReviewPayment);
        let screen = draw(&mut app);
        assert!(screen.contains("Please complete the earlier steps first."));
        assert!(app.hit_areas.fields.is_empty());
        assert!(app.hit_areas.back.is_some());
    }
}
