//! Identity boundary tests against a mocked provider

mod support;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{request_json, test_app_with_identity};

#[tokio::test]
async fn signup_returns_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-42",
            "email": "new@example.com",
            "idToken": "token-42"
        })))
        .mount(&server)
        .await;

    let app = test_app_with_identity(&server.uri());
    let (status, body) = request_json(
        &app,
        "POST",
        "/api/auth/signup",
        Some(json!({ "email": "new@example.com", "password": "long-enough" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "uid-42");
    assert_eq!(body["email"], "new@example.com");
}

#[tokio::test]
async fn duplicate_email_answers_the_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "EMAIL_EXISTS" }
        })))
        .mount(&server)
        .await;

    let app = test_app_with_identity(&server.uri());
    let (status, body) = request_json(
        &app,
        "POST",
        "/api/auth/signup",
        Some(json!({ "email": "taken@example.com", "password": "long-enough" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EmailAlreadyInUse");
    assert_eq!(body["title"], "Email Already in Use");
    assert_eq!(body["description"], "This email is already associated with an account. Please sign in.");
}

#[tokio::test]
async fn short_signup_password_never_reaches_the_provider() {
    // No mock server: a request would fail with a network error instead.
    let app = test_app_with_identity("http://127.0.0.1:9");

    let (status, body) = request_json(
        &app,
        "POST",
        "/api/auth/signup",
        Some(json!({ "email": "new@example.com", "password": "short7c" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "WeakPassword");
    assert_eq!(body["title"], "Weak Password");
}

#[tokio::test]
async fn login_accepts_six_character_passwords() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-6",
            "email": "user@example.com",
            "idToken": "token-6"
        })))
        .mount(&server)
        .await;

    let app = test_app_with_identity(&server.uri());
    let (status, body) = request_json(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "user@example.com", "password": "sixsix" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "uid-6");
}

#[tokio::test]
async fn unreachable_provider_answers_bad_gateway() {
    let app = test_app_with_identity("http://127.0.0.1:9");

    let (status, body) = request_json(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "user@example.com", "password": "hunter22" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
}
