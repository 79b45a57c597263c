//! Suggestion request validation
//!
//! Pure validation of the raw "suggest a time" input, before any
//! serialization or external call. Every violated field is reported.

use timeflow_domain::FieldError;

/// Validated fragment of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Positive whole minutes
    pub duration_minutes: i64,
    /// Trimmed preferences; empty input is treated as omitted
    pub preferences: Option<String>,
}

/// Validate raw duration text and optional preferences.
///
/// Rejects non-numeric and non-positive durations. Missing or blank
/// preferences are accepted as omitted. Returns every violation so the
/// caller can present one combined message.
pub fn validate_request(
    duration: &str,
    preferences: Option<&str>,
) -> Result<ValidatedRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    // Non-numeric and non-positive input share one message, as the dashboard
    // coerces the field to a number before the positivity check.
    let duration_minutes = match duration.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => {
            errors.push(FieldError::new("duration", "Duration must be a positive number."));
            None
        }
    };

    let preferences =
        preferences.map(str::trim).filter(|p| !p.is_empty()).map(ToString::to_string);

    match duration_minutes {
        Some(duration_minutes) if errors.is_empty() => {
            Ok(ValidatedRequest { duration_minutes, preferences })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_duration() {
        let validated = validate_request("45", Some("mornings")).expect("should validate");
        assert_eq!(validated.duration_minutes, 45);
        assert_eq!(validated.preferences.as_deref(), Some("mornings"));
    }

    #[test]
    fn accepts_missing_preferences() {
        let validated = validate_request("30", None).expect("should validate");
        assert_eq!(validated.preferences, None);
    }

    #[test]
    fn blank_preferences_are_treated_as_omitted() {
        let validated = validate_request("30", Some("   ")).expect("should validate");
        assert_eq!(validated.preferences, None);
    }

    #[test]
    fn rejects_zero_duration() {
        let errors = validate_request("0", None).expect_err("should reject");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "duration");
        assert_eq!(errors[0].message, "Duration must be a positive number.");
    }

    #[test]
    fn rejects_negative_duration() {
        let errors = validate_request("-15", None).expect_err("should reject");
        assert_eq!(errors[0].message, "Duration must be a positive number.");
    }

    #[test]
    fn rejects_non_numeric_duration_with_the_same_message() {
        for raw in ["", "abc", "12.5", "30 minutes"] {
            let errors = validate_request(raw, None).expect_err("should reject");
            assert_eq!(errors[0].message, "Duration must be a positive number.", "input: {raw:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let validated = validate_request("  60 ", None).expect("should validate");
        assert_eq!(validated.duration_minutes, 60);
    }
}
