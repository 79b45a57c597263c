//! Domain types and models

pub mod event;
pub mod form;
pub mod suggestion;

pub use event::{Event, EventCategory, NotificationChannels, ReminderLead};
pub use form::{combined_message, EventForm, FieldError};
pub use suggestion::{SchedulingInput, SuggestionOutcome, TimeSuggestion};
