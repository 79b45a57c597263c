/// Identity-provider error codes and their user-facing presentation
use serde::{Deserialize, Serialize};

/// Closed set of provider error codes the dashboard presents specially.
/// Anything else falls back to [`IdentityErrorCode::Unknown`] with the
/// provider's raw message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityErrorCode {
    EmailAlreadyInUse,
    InvalidEmail,
    WeakPassword,
    Unknown,
}

impl IdentityErrorCode {
    /// Map a raw provider code to the closed set.
    pub fn from_provider(code: &str) -> Self {
        match code {
            "EMAIL_EXISTS" => Self::EmailAlreadyInUse,
            "INVALID_EMAIL" => Self::InvalidEmail,
            "WEAK_PASSWORD" => Self::WeakPassword,
            _ => Self::Unknown,
        }
    }
}

/// Errors surfaced by the identity client.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider rejected the request. Title and description are the
    /// user-facing strings shown in the dashboard toast.
    #[error("{title}: {description}")]
    Provider { code: IdentityErrorCode, title: String, description: String },

    /// The provider could not be reached.
    #[error("Network error: {0}")]
    Network(String),
}

impl IdentityError {
    /// Build a provider error from a raw code, applying the centralized
    /// message table. Unknown codes keep the provider's message as the
    /// description under a generic title.
    pub fn from_provider_code(raw_code: &str, provider_message: &str) -> Self {
        let code = IdentityErrorCode::from_provider(raw_code);
        let (title, description) = match code {
            IdentityErrorCode::EmailAlreadyInUse => (
                "Email Already in Use",
                "This email is already associated with an account. Please sign in.".to_string(),
            ),
            IdentityErrorCode::InvalidEmail => {
                ("Invalid Email", "Please enter a valid email address.".to_string())
            }
            IdentityErrorCode::WeakPassword => {
                ("Weak Password", "Your password should be at least 6 characters long.".to_string())
            }
            IdentityErrorCode::Unknown => ("Sign-Up Error", provider_message.to_string()),
        };
        Self::Provider { code, title: title.to_string(), description }
    }
}
