//! Event form controller - create-or-update into the store

use chrono::Duration;
use timeflow_domain::{combined_message, Event, EventForm, Result, TimeFlowError};
use tracing::info;
use uuid::Uuid;

use super::form::validate_form;
use super::store::EventStore;

/// Turns submitted form values into an event and writes it into the store.
pub struct EventFormController;

impl EventFormController {
    /// Create or update an event from the submitted form.
    ///
    /// `start` is the selected date combined with the selected time-of-day;
    /// `end` is `start` plus the duration. Editing preserves the original
    /// id; creating generates a fresh one. Fields the form cannot express
    /// (reminder, notification channels) are carried over from the stored
    /// event on edit.
    ///
    /// # Errors
    /// Returns `TimeFlowError::InvalidInput` with the combined field
    /// messages if the form fails validation, or if the duration pushes the
    /// end past the representable time range; no write happens then.
    pub fn save(store: &mut EventStore, form: &EventForm) -> Result<Event> {
        let errors = validate_form(form);
        if !errors.is_empty() {
            return Err(TimeFlowError::InvalidInput(combined_message(&errors)));
        }

        let start = form.date.and_time(form.time).and_utc();
        // The wire format admits any i64 minutes; checked arithmetic keeps an
        // absurd duration from panicking past the validator.
        let end = Duration::try_minutes(form.duration_minutes)
            .and_then(|duration| start.checked_add_signed(duration))
            .ok_or_else(|| {
                TimeFlowError::InvalidInput("Duration is out of range.".to_string())
            })?;

        let existing = form.id.as_deref().and_then(|id| store.get(id));
        let is_editing = existing.is_some();
        let id = match &existing {
            Some(event) => event.id.clone(),
            None => Uuid::new_v4().to_string(),
        };

        let event = Event {
            id,
            title: form.title.clone(),
            description: form.description.clone().filter(|d| !d.is_empty()),
            start,
            end,
            category: form.category,
            reminder: existing.as_ref().and_then(|e| e.reminder),
            notifications: existing.as_ref().and_then(|e| e.notifications),
        };

        info!(
            event_id = %event.id,
            title = %event.title,
            editing = is_editing,
            "Saving event"
        );

        store.put(event.clone());
        Ok(event)
    }
}
