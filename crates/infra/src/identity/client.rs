/// REST client for the email/password identity provider
use reqwest::Method;
use serde::{Deserialize, Serialize};
use timeflow_domain::TimeFlowError;
use tracing::{debug, info};

use crate::http::HttpClient;

use super::codes::IdentityError;

const MIN_LOGIN_PASSWORD_LEN: usize = 6;
const MIN_SIGNUP_PASSWORD_LEN: usize = 8;

/// An authenticated session returned by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    pub token: String,
}

/// Client for the identity provider's email/password endpoints.
///
/// Requests are validated locally first so obviously malformed credentials
/// never leave the process.
pub struct IdentityClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct SessionResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "idToken")]
    id_token: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl IdentityClient {
    pub fn new(base_url: String, api_key: String, http_client: HttpClient) -> Self {
        Self { http_client, base_url: base_url.trim_end_matches('/').to_string(), api_key }
    }

    /// Create a new account with an email and password.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        validate_email(email)?;
        validate_password(password, MIN_SIGNUP_PASSWORD_LEN)?;

        info!("signing up new account");
        self.call(":signUp", email, password).await
    }

    /// Sign in with an existing email and password.
    pub async fn log_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        validate_email(email)?;
        validate_password(password, MIN_LOGIN_PASSWORD_LEN)?;

        info!("logging in");
        self.call(":signInWithPassword", email, password).await
    }

    async fn call(
        &self,
        action: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, IdentityError> {
        let url = format!("{}/v1/accounts{}?key={}", self.base_url, action, self.api_key);
        let body = CredentialsRequest { email, password, return_secure_token: true };

        let request_builder = self.http_client.request(Method::POST, &url).json(&body);

        let response = self.http_client.send(request_builder).await.map_err(|err| match err {
            TimeFlowError::Network(msg) => IdentityError::Network(msg),
            other => IdentityError::Network(format!("HTTP error: {}", other)),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), action, "received identity provider response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(IdentityError::from_provider_code(&message, &message));
        }

        let session: SessionResponse = response.json().await.map_err(|e| {
            IdentityError::Network(format!("failed to decode identity response: {}", e))
        })?;

        Ok(AuthSession {
            user_id: session.local_id,
            email: session.email,
            token: session.id_token,
        })
    }
}

fn validate_email(email: &str) -> Result<(), IdentityError> {
    let looks_valid = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'))
        .unwrap_or(false);

    if looks_valid {
        Ok(())
    } else {
        Err(IdentityError::from_provider_code("INVALID_EMAIL", "INVALID_EMAIL"))
    }
}

fn validate_password(password: &str, min_len: usize) -> Result<(), IdentityError> {
    if password.chars().count() >= min_len {
        Ok(())
    } else {
        Err(IdentityError::from_provider_code("WEAK_PASSWORD", "WEAK_PASSWORD"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{body_json_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::codes::IdentityErrorCode;
    use super::*;

    fn test_client(base_url: String) -> IdentityClient {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(5))
            .max_attempts(1)
            .build()
            .expect("http client");

        IdentityClient::new(base_url, "test-key".to_string(), http_client)
    }

    #[tokio::test]
    async fn sign_up_returns_session() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .and(query_param("key", "test-key"))
            .and(body_json_string(
                r#"{"email":"user@example.com","password":"correct-horse","returnSecureToken":true}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "localId": "uid-123",
                "email": "user@example.com",
                "idToken": "token-abc"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let session =
            client.sign_up("user@example.com", "correct-horse").await.expect("should sign up");

        assert_eq!(session.user_id, "uid-123");
        assert_eq!(session.email, "user@example.com");
        assert_eq!(session.token, "token-abc");
    }

    #[tokio::test]
    async fn log_in_hits_password_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "localId": "uid-9",
                "email": "user@example.com",
                "idToken": "token-9"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let session = client.log_in("user@example.com", "hunter22").await.expect("should log in");

        assert_eq!(session.user_id, "uid-9");
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_email_already_in_use() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "message": "EMAIL_EXISTS" }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client.sign_up("user@example.com", "correct-horse").await;

        match result {
            Err(IdentityError::Provider { code, description, .. }) => {
                assert_eq!(code, IdentityErrorCode::EmailAlreadyInUse);
                assert_eq!(
                    description,
                    "This email is already associated with an account. Please sign in."
                );
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_without_a_request() {
        let mock_server = MockServer::start().await;
        // No mock mounted: a request would 404 and surface as Unknown.

        let client = test_client(mock_server.uri());
        let result = client.sign_up("not-an-email", "correct-horse").await;

        match result {
            Err(IdentityError::Provider { code, .. }) => {
                assert_eq!(code, IdentityErrorCode::InvalidEmail);
            }
            other => panic!("expected invalid email, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn short_signup_password_is_rejected_locally() {
        let mock_server = MockServer::start().await;

        let client = test_client(mock_server.uri());
        let result = client.sign_up("user@example.com", "short7c").await;

        match result {
            Err(IdentityError::Provider { code, .. }) => {
                assert_eq!(code, IdentityErrorCode::WeakPassword);
            }
            other => panic!("expected weak password, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_allows_six_character_password() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "localId": "uid-6",
                "email": "user@example.com",
                "idToken": "token-6"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client.log_in("user@example.com", "sixsix").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_provider_error_keeps_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "message": "TOO_MANY_ATTEMPTS_TRY_LATER" }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client.log_in("user@example.com", "hunter22").await;

        match result {
            Err(IdentityError::Provider { code, description, .. }) => {
                assert_eq!(code, IdentityErrorCode::Unknown);
                assert_eq!(description, "TOO_MANY_ATTEMPTS_TRY_LATER");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }
}
