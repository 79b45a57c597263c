//! Event edit-form value object

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::event::EventCategory;

/// In-progress values of the create/edit event form.
///
/// `date` and `time` are kept as calendar-local components; the form
/// controller combines them into the event's `start` on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: i64,
    /// Free-text scheduling preferences; not stored with the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    pub category: EventCategory,
}

/// One violated form field with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Join violations into the single combined message the dashboard shows.
pub fn combined_message(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_messages_with_comma() {
        let errors = vec![
            FieldError::new("title", "Title is required."),
            FieldError::new("duration", "Duration must be a positive number."),
        ];

        assert_eq!(
            combined_message(&errors),
            "Title is required., Duration must be a positive number."
        );
    }

    #[test]
    fn empty_violations_combine_to_empty_string() {
        assert_eq!(combined_message(&[]), "");
    }
}
