//! Scheduling-suggestion exchange types
//!
//! `SchedulingInput` is the external model's input contract; `TimeSuggestion`
//! is its required output shape. Both are ephemeral and never persisted.

use serde::{Deserialize, Serialize};

/// Input contract for the external suggestion call.
///
/// The serializer produces this verbatim: the full event snapshot as JSON
/// text, the validated duration as its decimal string, and the preferences
/// passed through unchanged (or omitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingInput {
    /// The user's existing events in a string format
    pub existing_events: String,
    /// The duration of the new event in minutes
    pub new_event_duration: String,
    /// The user's preferences for scheduling events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_preferences: Option<String>,
}

/// Output contract of the external suggestion call.
///
/// `suggested_time` must parse as an RFC 3339 timestamp; a response that
/// fails this check is a schema violation, never a partial suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSuggestion {
    /// The suggested optimal time for the new event
    pub suggested_time: String,
    /// The reasoning behind the suggested time
    pub reasoning: String,
}

/// Uniform wire result of one suggestion attempt.
///
/// Every failure in the pipeline — validation, transport, schema — collapses
/// into the `Failure` arm; no error crosses this boundary as an exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionOutcome {
    Success { success: bool, data: TimeSuggestion },
    Failure { success: bool, error: String },
}

impl SuggestionOutcome {
    pub fn success(data: TimeSuggestion) -> Self {
        Self::Success { success: true, data }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure { success: false, error: error.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
