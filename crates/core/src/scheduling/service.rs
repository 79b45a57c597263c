//! Scheduling service - suggestion pipeline orchestration

use std::sync::Arc;

use chrono::DateTime;
use timeflow_domain::{combined_message, Event, SuggestionOutcome};
use tracing::{info, warn};

use super::ports::SuggestionProvider;
use super::serializer::serialize_request;
use super::validator::validate_request;

/// Generic message for any failure past validation; the specific cause is
/// logged, not shown.
const GENERIC_FAILURE: &str = "An unexpected error occurred.";

/// Orchestrates validate -> serialize -> external call -> output check.
///
/// Every failure is folded into a uniform [`SuggestionOutcome`]; no error
/// escapes this boundary.
pub struct SchedulingService {
    provider: Arc<dyn SuggestionProvider>,
}

impl SchedulingService {
    pub fn new(provider: Arc<dyn SuggestionProvider>) -> Self {
        Self { provider }
    }

    /// Run one suggestion attempt against the given event snapshot.
    ///
    /// Validation failures report every violated field in one combined
    /// message and never reach the provider. Provider and schema failures
    /// surface the generic message.
    pub async fn suggest_optimal_time(
        &self,
        events: &[Event],
        duration: &str,
        preferences: Option<&str>,
    ) -> SuggestionOutcome {
        let validated = match validate_request(duration, preferences) {
            Ok(validated) => validated,
            Err(errors) => return SuggestionOutcome::failure(combined_message(&errors)),
        };

        let input = match serialize_request(events, &validated) {
            Ok(input) => input,
            Err(err) => {
                warn!(error = %err, "Failed to serialize suggestion request");
                return SuggestionOutcome::failure(GENERIC_FAILURE);
            }
        };

        info!(
            event_count = events.len(),
            duration_minutes = validated.duration_minutes,
            has_preferences = validated.preferences.is_some(),
            "Requesting scheduling suggestion"
        );

        match self.provider.suggest(input).await {
            Ok(suggestion) => {
                // The provider validates shape; re-check the timestamp so a
                // shape-valid but non-parseable value never reaches the form.
                if DateTime::parse_from_rfc3339(&suggestion.suggested_time).is_err() {
                    warn!(
                        suggested_time = %suggestion.suggested_time,
                        "Suggestion carried a non-parseable timestamp"
                    );
                    return SuggestionOutcome::failure(GENERIC_FAILURE);
                }
                info!(suggested_time = %suggestion.suggested_time, "Suggestion received");
                SuggestionOutcome::success(suggestion)
            }
            Err(err) => {
                warn!(error = %err, "Suggestion call failed");
                SuggestionOutcome::failure(GENERIC_FAILURE)
            }
        }
    }
}
