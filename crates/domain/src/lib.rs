//! # TimeFlow Domain
//!
//! Business domain types and models for TimeFlow.
//!
//! This crate contains:
//! - Calendar event records and the edit-form value object
//! - Scheduling-suggestion exchange types
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other TimeFlow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{AssistantConfig, AuthConfig, Config, ServerConfig};
pub use errors::{Result, TimeFlowError};
pub use types::event::{Event, EventCategory, NotificationChannels, ReminderLead};
pub use types::form::{combined_message, EventForm, FieldError};
pub use types::suggestion::{SchedulingInput, SuggestionOutcome, TimeSuggestion};
