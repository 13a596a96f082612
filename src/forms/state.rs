//! Shared form state
//!
//! Holds the fields of one step, which of them has focus, and the messages
//! from the last failed validation. Fields can be shown conditionally on the
//! live value of another field; hidden fields are skipped by focus movement
//! and left out of the raw values handed to the schema.

use crate::schema::{FieldErrors, RawFields, Schema};

use super::field::FormField;

/// Show `field` only while `depends_on` holds `equals`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowWhen {
    pub field: &'static str,
    pub depends_on: &'static str,
    pub equals: &'static str,
}

/// Fields, focus, and inline errors of one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
    focus: usize,
    errors: FieldErrors,
    conditions: Vec<ShowWhen>,
}

impl FormState {
    /// Create form state; the first field takes focus
    pub fn new(fields: Vec<FormField>) -> Self {
        let mut state = Self {
            fields,
            focus: 0,
            errors: FieldErrors::new(),
            conditions: Vec::new(),
        };
        state.sync_focus_flags();
        state
    }

    /// Add a visibility condition
    pub fn with_condition(mut self, condition: ShowWhen) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Field by schema key
    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.key == key)
    }

    /// Current value of a field; unknown keys read as empty
    pub fn value(&self, key: &str) -> &str {
        self.field(key).map(FormField::value).unwrap_or("")
    }

    /// Set a field value and clear its error
    pub fn set_value(&mut self, key: &str, value: &str) -> bool {
        let accepted = match self.field_mut(key) {
            Some(field) => field.set_value(value),
            None => false,
        };
        if accepted {
            self.errors.remove(key);
            self.normalize_focus();
        }
        accepted
    }

    /// Edit the focused field in place and clear its error
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut FormField)) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            edit(field);
            let key = field.key;
            self.errors.remove(key);
        }
        self.normalize_focus();
    }

    /// Whether a field is currently shown
    pub fn is_visible(&self, key: &str) -> bool {
        self.conditions
            .iter()
            .filter(|c| c.field == key)
            .all(|c| self.value(c.depends_on) == c.equals)
    }

    /// Indices of the shown fields, in order
    pub fn visible_indices(&self) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| self.is_visible(f.key))
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the focused field
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focus)
    }

    /// Focus a field by key if it is shown
    pub fn set_focus(&mut self, key: &str) -> bool {
        let target = self
            .visible_indices()
            .into_iter()
            .find(|&i| self.fields[i].key == key);
        match target {
            Some(i) => {
                self.focus = i;
                self.sync_focus_flags();
                true
            }
            None => false,
        }
    }

    /// Move focus to the next shown field, wrapping
    pub fn next_field(&mut self) {
        let visible = self.visible_indices();
        if let Some(pos) = visible.iter().position(|&i| i == self.focus) {
            self.focus = visible[(pos + 1) % visible.len()];
        } else if let Some(&first) = visible.first() {
            self.focus = first;
        }
        self.sync_focus_flags();
    }

    /// Move focus to the previous shown field, wrapping
    pub fn prev_field(&mut self) {
        let visible = self.visible_indices();
        if let Some(pos) = visible.iter().position(|&i| i == self.focus) {
            self.focus = visible[(pos + visible.len() - 1) % visible.len()];
        } else if let Some(&last) = visible.last() {
            self.focus = last;
        }
        self.sync_focus_flags();
    }

    /// Move focus off a field that just became hidden
    pub fn normalize_focus(&mut self) {
        let visible = self.visible_indices();
        if !visible.contains(&self.focus) {
            self.focus = visible
                .iter()
                .copied()
                .find(|&i| i > self.focus)
                .or_else(|| visible.last().copied())
                .unwrap_or(0);
        }
        self.sync_focus_flags();
    }

    /// Messages from the last failed validation
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error shown under a field
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key)
    }

    /// Raw values of the shown fields
    pub fn raw(&self) -> RawFields {
        let mut raw = RawFields::new();
        for field in self.fields.iter().filter(|f| self.is_visible(f.key)) {
            raw.set(field.key, field.value());
        }
        raw
    }

    /// Validate the shown fields against a schema
    ///
    /// On failure the messages are kept for inline display and focus moves
    /// to the first invalid field. On success the errors are cleared.
    pub fn validate<S: Schema>(&mut self, schema: &S) -> Result<S::Output, FieldErrors> {
        match schema.validate(&self.raw()) {
            Ok(output) => {
                self.errors.clear();
                Ok(output)
            }
            Err(errors) => {
                tracing::debug!(invalid = errors.len(), "form validation failed");
                self.errors = errors.clone();
                let first_invalid = self
                    .visible_indices()
                    .into_iter()
                    .find(|&i| self.errors.has(self.fields[i].key));
                if let Some(i) = first_invalid {
                    self.focus = i;
                    self.sync_focus_flags();
                }
                Err(errors)
            }
        }
    }

    /// Seed several values at once, ignoring unknown keys
    pub fn apply<'a>(&mut self, values: impl IntoIterator<Item = (&'static str, &'a str)>) {
        for (key, value) in values {
            if let Some(field) = self.field_mut(key) {
                field.set_value(value);
            }
        }
        self.normalize_focus();
    }

    /// Clear every value and error and focus the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.errors.clear();
        self.focus = 0;
        self.normalize_focus();
    }

    fn sync_focus_flags(&mut self) {
        let focus = self.focus;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == focus);
        }
    }
}
