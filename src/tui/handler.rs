//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the open dialog or to the focused
//! field of the current step.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::forms::{FormField, FormState};
use crate::wizard::Step;

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::layout::hit;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Global keys (work on every step)
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Enter => {
            app.submit();
            return Ok(());
        }
        KeyCode::PageDown => {
            app.next_page();
            return Ok(());
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.next_page();
            return Ok(());
        }
        KeyCode::PageUp => {
            app.back();
            return Ok(());
        }
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.back();
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='4') if key.modifiers.contains(KeyModifiers::ALT) => {
            if let Some(step) = c.to_digit(10).and_then(|d| Step::from_index(d as usize - 1)) {
                app.jump_to(step);
            }
            return Ok(());
        }
        KeyCode::Tab => {
            app.session.current_form_mut().form_mut().next_field();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.session.current_form_mut().form_mut().prev_field();
            return Ok(());
        }
        _ => {}
    }

    handle_field_key(app, key);
    Ok(())
}

/// Handle keys aimed at the focused field
fn handle_field_key(app: &mut App, key: KeyEvent) {
    let form = app.session.current_form_mut().form_mut();
    let is_select = match form.focused_field() {
        Some(field) => field.is_select(),
        None => return,
    };

    if is_select {
        match key.code {
            KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') => form.edit_focused(|f| {
                if let Some(select) = f.select_mut() {
                    select.next();
                }
            }),
            KeyCode::Up | KeyCode::Left => form.edit_focused(|f| {
                if let Some(select) = f.select_mut() {
                    select.prev();
                }
            }),
            _ => {}
        }
        return;
    }

    let typed = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Down => form.next_field(),
        KeyCode::Up => form.prev_field(),
        KeyCode::Char(c) if typed => form.edit_focused(|f| edit_text(f, |input| input.insert(c))),
        KeyCode::Backspace => form.edit_focused(|f| edit_text(f, TextInput::backspace)),
        KeyCode::Delete => form.edit_focused(|f| edit_text(f, TextInput::delete)),
        KeyCode::Left => move_cursor(form, TextInput::move_left),
        KeyCode::Right => move_cursor(form, TextInput::move_right),
        KeyCode::Home => move_cursor(form, TextInput::move_start),
        KeyCode::End => move_cursor(form, TextInput::move_end),
        _ => {}
    }
}

fn edit_text(field: &mut FormField, edit: impl FnOnce(&mut TextInput)) {
    if let Some(input) = field.text_input_mut() {
        edit(input);
    }
}

/// Cursor movement leaves the field's error in place
fn move_cursor(form: &mut FormState, movement: fn(&mut TextInput)) {
    if let Some(field) = form.focused_field_mut() {
        edit_text(field, movement);
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Completed(_) => match key.code {
            KeyCode::Enter => app.start_over(),
            KeyCode::Esc | KeyCode::Char('q') => app.quit(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle a mouse event using the areas drawn in the last frame
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.has_dialog() {
        return Ok(());
    }
    let (column, row) = (mouse.column, mouse.row);
    let areas = &app.hit_areas;

    if let Some(&(step, _)) = areas.steps.iter().find(|(_, area)| hit(*area, column, row)) {
        app.jump_to(step);
    } else if areas.back.map_or(false, |area| hit(area, column, row)) {
        app.back();
    } else if areas.next.map_or(false, |area| hit(area, column, row)) {
        app.submit();
    } else if let Some(&(key, _)) = areas.fields.iter().find(|(_, area)| hit(*area, column, row)) {
        app.session.current_form_mut().form_mut().set_focus(key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::schema::company::COMPANY_TYPE;
    use crate::schema::signup::{CONFIRM_PASSWORD, EMAIL, PASSWORD};
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(Settings::default(), Vec::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_event(app, Event::Key(KeyEvent::new(code, modifiers))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        handle_event(
            app,
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }),
        )
        .unwrap();
    }

    #[test]
    fn test_typing_and_submitting_sign_up() {
        let mut app = app();
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Secret123");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Secret123");

        let form = app.session.current_form().form();
        assert_eq!(form.value(EMAIL), "a@b.com");
        assert_eq!(form.value(PASSWORD), "Secret123");
        assert_eq!(form.value(CONFIRM_PASSWORD), "Secret123");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.page(), Step::CompanyInfo);
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.session.current_form().form().error(EMAIL).is_some());
        type_text(&mut app, "a");
        assert!(app.session.current_form().form().error(EMAIL).is_none());
    }

    #[test]
    fn test_select_cycles_with_arrows() {
        let mut app = app();
        press_with(&mut app, KeyCode::Char('2'), KeyModifiers::ALT);
        assert_eq!(app.session.page(), Step::CompanyInfo);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(
            app.session.current_form().form().value(COMPANY_TYPE),
            "partnership"
        );
        press(&mut app, KeyCode::Up);
        assert_eq!(
            app.session.current_form().form().value(COMPANY_TYPE),
            "sole_proprietorship"
        );
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = app();
        press_with(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(app.session.page(), Step::CompanyInfo);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.session.page(), Step::SignUp);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.session.page(), Step::SignUp);
        press_with(&mut app, KeyCode::Char('4'), KeyModifiers::ALT);
        assert_eq!(app.session.page(), Step::ReviewPayment);
    }

    #[test]
    fn test_control_keys_do_not_type() {
        let mut app = app();
        press_with(&mut app, KeyCode::Char('b'), KeyModifiers::CONTROL);
        assert_eq!(app.session.current_form().form().value(EMAIL), "");
    }

    #[test]
    fn test_help_dialog_closes_on_any_key() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
        assert_eq!(app.session.current_form().form().value(EMAIL), "");
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_clicks_use_hit_areas() {
        let mut app = app();
        app.hit_areas.steps = vec![(Step::Address, Rect::new(0, 5, 30, 2))];
        app.hit_areas.back = Some(Rect::new(40, 20, 10, 3));

        click(&mut app, 3, 6);
        assert_eq!(app.session.page(), Step::Address);
        click(&mut app, 45, 21);
        assert_eq!(app.session.page(), Step::CompanyInfo);
        click(&mut app, 90, 1);
        assert_eq!(app.session.page(), Step::CompanyInfo);
    }
}
