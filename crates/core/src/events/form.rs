//! Form defaults, prefill, and per-field validation

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use timeflow_domain::{Event, EventCategory, EventForm, FieldError};

/// Fresh form for creating a new event: today, the current time, 30 minutes,
/// category "meeting".
pub fn default_form(now: DateTime<Utc>) -> EventForm {
    EventForm {
        id: None,
        title: String::new(),
        description: None,
        date: now.date_naive(),
        time: truncate_to_minute(now.time()),
        duration_minutes: 30,
        preferences: None,
        category: EventCategory::Meeting,
    }
}

/// Prefill the form from an existing event for editing.
///
/// Duration is recomputed from the stored interval. Preferences are always
/// reset; they are never stored with the event.
pub fn prefill_form(event: &Event) -> EventForm {
    EventForm {
        id: Some(event.id.clone()),
        title: event.title.clone(),
        description: event.description.clone(),
        date: event.start.date_naive(),
        time: truncate_to_minute(event.start.time()),
        duration_minutes: event.duration_minutes(),
        preferences: None,
        category: event.category,
    }
}

/// Per-field validation; submission is blocked while this is non-empty.
///
/// Date and time presence is enforced by the types; the remaining checks
/// mirror the dashboard form: non-empty title and a positive duration.
pub fn validate_form(form: &EventForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required."));
    }
    if form.duration_minutes <= 0 {
        errors.push(FieldError::new("duration", "Duration must be a positive number."));
    }

    errors
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
