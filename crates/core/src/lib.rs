//! # TimeFlow Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The in-memory event store and the event form controller
//! - The edit-sheet state machine
//! - The suggestion pipeline: validator, serializer, service, applier
//! - The suggestion task handle (pending/stale-result guard)
//! - Reminder derivation
//!
//! ## Architecture Principles
//! - Only depends on `timeflow-domain`
//! - No HTTP or platform code; the external model call is a trait
//! - Pure, testable business logic

pub mod events;
pub mod reminders;
pub mod scheduling;

// Re-export specific items to avoid ambiguity
pub use events::controller::EventFormController;
pub use events::form::validate_form;
pub use events::sheet::{EditSheet, SheetState};
pub use events::store::EventStore;
pub use reminders::{upcoming_reminders, Reminder};
pub use scheduling::applier::apply_suggestion;
pub use scheduling::ports::{ProviderError, SuggestionProvider};
pub use scheduling::serializer::serialize_request;
pub use scheduling::service::SchedulingService;
pub use scheduling::task::{AlreadyPending, Completion, SuggestionTask, TaskState};
pub use scheduling::validator::{validate_request, ValidatedRequest};
