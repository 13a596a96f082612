//! Form fields
//!
//! A field pairs a schema key with the input widget that edits it.

use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::select::SelectInput;

/// Mask drawn over secret input
pub const SECRET_MASK: char = '•';

/// The editable part of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(TextInput),
    Select(SelectInput),
}

/// One labelled field of a step form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Schema key this field feeds
    pub key: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    pub input: FieldInput,
}

impl FormField {
    /// Free text field
    pub fn text(key: &'static str, label: &'static str, placeholder: &str) -> Self {
        Self {
            key,
            label,
            input: FieldInput::Text(TextInput::new().label(label).placeholder(placeholder)),
        }
    }

    /// Text field whose content is never drawn
    pub fn secret(key: &'static str, label: &'static str, placeholder: &str) -> Self {
        Self {
            key,
            label,
            input: FieldInput::Text(
                TextInput::new()
                    .label(label)
                    .placeholder(placeholder)
                    .masked(SECRET_MASK),
            ),
        }
    }

    /// Single choice over a fixed option table
    pub fn select(
        key: &'static str,
        label: &'static str,
        placeholder: &str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            key,
            label,
            input: FieldInput::Select(SelectInput::new(options).label(label).placeholder(placeholder)),
        }
    }

    /// Current raw value
    pub fn value(&self) -> &str {
        match &self.input {
            FieldInput::Text(input) => input.value(),
            FieldInput::Select(select) => select.value(),
        }
    }

    /// Replace the value
    ///
    /// Select fields accept an option value, a label, or a 1-based number and
    /// return false when nothing matches. Text fields always accept.
    pub fn set_value(&mut self, value: &str) -> bool {
        match &mut self.input {
            FieldInput::Text(input) => {
                input.set_value(value);
                true
            }
            FieldInput::Select(select) => {
                if value.is_empty() {
                    select.clear();
                    true
                } else {
                    select.select_value(value) || select.select_input(value)
                }
            }
        }
    }

    /// Empty the field
    pub fn clear(&mut self) {
        match &mut self.input {
            FieldInput::Text(input) => input.clear(),
            FieldInput::Select(select) => select.clear(),
        }
    }

    /// Whether typed content must be hidden
    pub fn is_secret(&self) -> bool {
        matches!(&self.input, FieldInput::Text(input) if input.mask.is_some())
    }

    pub fn is_select(&self) -> bool {
        matches!(self.input, FieldInput::Select(_))
    }

    /// Option table of a select field
    pub fn options(&self) -> Option<&'static [(&'static str, &'static str)]> {
        match &self.input {
            FieldInput::Select(select) => Some(select.options),
            FieldInput::Text(_) => None,
        }
    }

    pub fn text_input_mut(&mut self) -> Option<&mut TextInput> {
        match &mut self.input {
            FieldInput::Text(input) => Some(input),
            FieldInput::Select(_) => None,
        }
    }

    pub fn select_mut(&mut self) -> Option<&mut SelectInput> {
        match &mut self.input {
            FieldInput::Select(select) => Some(select),
            FieldInput::Text(_) => None,
        }
    }

    /// Set the focus flag on the inner widget
    pub fn set_focused(&mut self, focused: bool) {
        match &mut self.input {
            FieldInput::Text(input) => input.focused = focused,
            FieldInput::Select(select) => select.focused = focused,
        }
    }
}
