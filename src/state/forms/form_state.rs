//! Contact form state: field values, per-field errors and submission status

use super::field::Field;
use super::validation::validate;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// Focus positions: the four fields plus the Send button row
const FOCUS_COUNT: usize = 5;

/// Focus index of the Send button row
pub const SEND_ROW: usize = 4;

/// Current values of the four contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Field name to error message. A missing key means no known error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Outcome of the last submission, kept for display until the next submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Result of asking the form to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A relay call is already in flight; nothing changed
    AlreadySubmitting,
    /// Validation failed; errors are now stored on the form
    Invalid,
    /// Form is now submitting; carries the snapshot to relay
    Ready(FormFields),
}

/// State of one contact form instance
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: FieldErrors,
    status: SubmissionStatus,
    is_submitting: bool,
    /// When the last submission finished
    last_finished_at: Option<DateTime<Local>>,
    /// Focused position (0-3 fields, 4 = Send row)
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_finished_at(&self) -> Option<DateTime<Local>> {
        self.last_finished_at
    }

    /// Replace a field value, hiding any stale error for that field
    ///
    /// The field is not re-validated here.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot_mut(field) = value.into();
        self.errors.remove(field);
    }

    /// Clear all four fields
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
    }

    /// Field under focus, or `None` when the Send row is focused
    pub fn active_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn is_send_row_active(&self) -> bool {
        self.active_field_index == SEND_ROW
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FOCUS_COUNT;
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FOCUS_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        self.edit_active(|value| value.push(c));
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        self.edit_active(|value| {
            value.pop();
        });
    }

    /// Append a line break; only the message field accepts one
    pub fn insert_newline(&mut self) {
        if self.active_field() == Some(Field::Message) {
            self.edit_active(|value| value.push('\n'));
        }
    }

    /// Append pasted text to the focused field
    ///
    /// Line breaks are flattened to spaces for single-line fields.
    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.active_field() else {
            return;
        };
        let text = if field.is_multiline() {
            text.replace("\r\n", "\n")
        } else {
            text.replace("\r\n", " ").replace(['\r', '\n'], " ")
        };
        self.edit_active(|value| value.push_str(&text));
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.active_field() else {
            return;
        };
        let mut value = self.fields.get(field).to_string();
        edit(&mut value);
        self.set_field(field, value);
    }

    /// Validate and, if valid, enter the submitting state
    ///
    /// A no-op while a submission is already in flight.
    pub fn try_begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting {
            return SubmitAttempt::AlreadySubmitting;
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return SubmitAttempt::Invalid;
        }

        self.is_submitting = true;
        self.status = SubmissionStatus::Idle;
        SubmitAttempt::Ready(self.fields.clone())
    }

    /// Leave the submitting state with the relay outcome
    ///
    /// Fields are cleared on success and kept on failure.
    pub fn finish_submit(&mut self, delivered: bool) -> SubmissionStatus {
        if delivered {
            self.status = SubmissionStatus::Success;
            self.reset();
        } else {
            self.status = SubmissionStatus::Error;
        }
        self.is_submitting = false;
        self.last_finished_at = Some(Local::now());
        self.status
    }
}
