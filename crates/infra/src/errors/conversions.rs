//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use timeflow_domain::TimeFlowError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TimeFlowError);

impl From<InfraError> for TimeFlowError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TimeFlowError> for InfraError {
    fn from(value: TimeFlowError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        let error = if value.is_timeout() {
            TimeFlowError::Network("HTTP request timed out".into())
        } else if value.is_connect() {
            TimeFlowError::Network(format!("HTTP connection failed: {value}"))
        } else if value.is_decode() {
            TimeFlowError::Internal(format!("failed to decode HTTP response: {value}"))
        } else if value.is_builder() || value.is_request() {
            TimeFlowError::Internal(format!("invalid HTTP request: {value}"))
        } else {
            TimeFlowError::Network(format!("HTTP error: {value}"))
        };
        InfraError(error)
    }
}
