//! Suggestion request serialization
//!
//! Builds the external model's exact input contract from the validated
//! fragment and the full event snapshot. No filtering, deduplication, or
//! conflict precomputation happens here - slot-finding is the service's job.

use timeflow_domain::{Event, Result, SchedulingInput, TimeFlowError};

use super::validator::ValidatedRequest;

/// Serialize the event snapshot and validated input into [`SchedulingInput`].
///
/// Events become the JSON text of the full list, the duration its decimal
/// string, and preferences pass through unchanged (or stay omitted).
pub fn serialize_request(events: &[Event], request: &ValidatedRequest) -> Result<SchedulingInput> {
    let existing_events = serde_json::to_string(events)
        .map_err(|e| TimeFlowError::Internal(format!("failed to serialize events: {e}")))?;

    Ok(SchedulingInput {
        existing_events,
        new_event_duration: request.duration_minutes.to_string(),
        user_preferences: request.preferences.clone(),
    })
}
