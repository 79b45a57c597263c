//! Shared helpers for API integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use timeflow_api::{router, AppContext};
use timeflow_core::{EventStore, ProviderError, SuggestionProvider};
use timeflow_domain::{
    AssistantConfig, AuthConfig, Config, Event, SchedulingInput, ServerConfig, TimeSuggestion,
};
use timeflow_infra::{HttpClient, IdentityClient};
use tokio::sync::Notify;
use tower::util::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 0 },
        assistant: AssistantConfig {
            api_key: "test-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_url: None,
            timeout_seconds: 5,
        },
        auth: AuthConfig {
            provider_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-auth-key".to_string(),
        },
    }
}

pub fn identity_client(base_url: &str) -> IdentityClient {
    let http = HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .max_attempts(1)
        .build()
        .expect("http client");
    IdentityClient::new(base_url.to_string(), "test-auth-key".to_string(), http)
}

/// Build an app over the given provider and event snapshot. The identity
/// client points at an unroutable address unless a base URL is supplied.
pub fn test_app(provider: Arc<dyn SuggestionProvider>, events: Vec<Event>) -> Router {
    let ctx = AppContext::with_services(
        test_config(),
        EventStore::with_events(events),
        provider,
        identity_client("http://127.0.0.1:9"),
    );
    router(ctx)
}

pub fn test_app_with_identity(identity_base_url: &str) -> Router {
    let ctx = AppContext::with_services(
        test_config(),
        EventStore::new(),
        StubProvider::succeeding("2025-06-02T09:00:00Z"),
        identity_client(identity_base_url),
    );
    router(ctx)
}

/// Immediate provider with a call counter.
pub struct StubProvider {
    pub calls: AtomicUsize,
    response: Box<dyn Fn() -> Result<TimeSuggestion, ProviderError> + Send + Sync>,
}

impl StubProvider {
    pub fn succeeding(suggested_time: &str) -> Arc<Self> {
        let time = suggested_time.to_string();
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Box::new(move || {
                Ok(TimeSuggestion {
                    suggested_time: time.clone(),
                    reasoning: "The slot is free.".to_string(),
                })
            }),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Box::new(|| Err(ProviderError::Network("connection refused".to_string()))),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionProvider for StubProvider {
    async fn suggest(&self, _input: SchedulingInput) -> Result<TimeSuggestion, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.response)()
    }
}

/// Provider that blocks until notified, for exercising in-flight states.
pub struct GatedProvider {
    pub gate: Notify,
    suggested_time: String,
}

impl GatedProvider {
    pub fn new(suggested_time: &str) -> Arc<Self> {
        Arc::new(Self { gate: Notify::new(), suggested_time: suggested_time.to_string() })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl SuggestionProvider for GatedProvider {
    async fn suggest(&self, _input: SchedulingInput) -> Result<TimeSuggestion, ProviderError> {
        self.gate.notified().await;
        Ok(TimeSuggestion {
            suggested_time: self.suggested_time.clone(),
            reasoning: "Eventually free.".to_string(),
        })
    }
}

/// Issue one request against the router and decode the JSON body.
pub async fn request_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

/// Poll `GET /api/sheet` until the suggestion task reports the given state.
pub async fn wait_for_task_state(app: &Router, state: &str) {
    for _ in 0..200 {
        let (_, body) = request_json(app, "GET", "/api/sheet", None).await;
        if body["suggestion"]["state"] == state {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("suggestion task never reached state {state:?}");
}
