//! Suggestion applier
//!
//! Writes an accepted suggestion's timestamp back into the in-progress form.

use chrono::{DateTime, NaiveTime, Timelike};
use timeflow_domain::{EventForm, FieldError, Result, TimeFlowError, TimeSuggestion};

use crate::events::form::validate_form;

/// Apply a suggestion to the form's date and time fields.
///
/// The suggested timestamp is parsed as RFC 3339; its calendar date and
/// time-of-day (minute precision) replace any prior values. The duration is
/// untouched. The form is re-validated and the outstanding field errors are
/// returned. Applying the same suggestion twice is a no-op the second time.
///
/// # Errors
/// Returns `TimeFlowError::InvalidInput` if `suggested_time` does not parse;
/// the form is left unchanged then.
pub fn apply_suggestion(
    form: &mut EventForm,
    suggestion: &TimeSuggestion,
) -> Result<Vec<FieldError>> {
    let parsed = DateTime::parse_from_rfc3339(&suggestion.suggested_time).map_err(|e| {
        TimeFlowError::InvalidInput(format!(
            "suggested time {:?} is not a valid timestamp: {e}",
            suggestion.suggested_time
        ))
    })?;

    form.date = parsed.date_naive();
    form.time = NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0)
        .unwrap_or_else(|| parsed.time());

    Ok(validate_form(form))
}
