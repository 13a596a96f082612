//! Select input widget
//!
//! A single-choice field over a fixed `(value, label)` table, cycled with
//! the arrow keys.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A single-choice input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectInput {
    /// `(value, label)` pairs in display order
    pub options: &'static [(&'static str, &'static str)],
    /// Index of the selected option
    pub selected: Option<usize>,
    /// Whether the input is focused
    pub focused: bool,
    /// Shown when nothing is selected
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl SelectInput {
    /// Create a select over an option table
    pub fn new(options: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            options,
            selected: None,
            focused: false,
            placeholder: String::new(),
            label: String::new(),
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Select the next option, wrapping around
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % self.options.len(),
        });
    }

    /// Select the previous option, wrapping around
    pub fn prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = Some(match self.selected {
            None | Some(0) => last,
            Some(i) => i - 1,
        });
    }

    /// Selected option value, or "" when nothing is selected
    pub fn value(&self) -> &'static str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|(value, _)| *value)
            .unwrap_or("")
    }

    /// Selected option label
    pub fn selected_label(&self) -> Option<&'static str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|(_, label)| *label)
    }

    /// Select by option value; returns false if no option has that value
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|(v, _)| *v == value) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Select from free-form input: a 1-based number, a value, or a label
    pub fn select_input(&mut self, input: &str) -> bool {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            if (1..=self.options.len()).contains(&n) {
                self.selected = Some(n - 1);
                return true;
            }
        }
        let found = self.options.iter().position(|(value, label)| {
            value.eq_ignore_ascii_case(input) || label.eq_ignore_ascii_case(input)
        });
        match found {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

impl Widget for SelectInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = vec![
            Span::styled(self.label.clone(), label_style),
            Span::raw(": "),
        ];

        match self.selected_label() {
            Some(label) if self.focused => {
                spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(
                    label,
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ));
                spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
            }
            Some(label) => {
                spans.push(Span::styled(label, Style::default().fg(Color::White)));
            }
            None => {
                let style = if self.focused {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(self.placeholder.clone(), style));
                if self.focused {
                    spans.push(Span::styled(
                        "  (↑/↓ to choose)",
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
