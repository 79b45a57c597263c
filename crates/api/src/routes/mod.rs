//! HTTP routes
//!
//! One module per resource; all handlers share the `Arc<AppContext>` state
//! and surface failures as JSON error bodies, never panics.

pub mod auth;
pub mod events;
pub mod health;
pub mod reminders;
pub mod sheet;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use timeflow_domain::TimeFlowError;

use crate::context::AppContext;

/// Build the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/events", get(events::list_events))
        .route("/api/reminders", get(reminders::list_reminders))
        .route("/api/sheet", get(sheet::sheet_state))
        .route("/api/sheet/open", post(sheet::open_sheet))
        .route("/api/sheet/close", post(sheet::close_sheet))
        .route("/api/sheet/suggest", post(sheet::suggest))
        .route("/api/sheet/apply", post(sheet::apply))
        .route("/api/sheet/submit", post(sheet::submit))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .with_state(ctx)
}

/// Handler error carrying the response status and a JSON `error` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self { status: StatusCode::CONFLICT, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into() }
    }
}

impl From<TimeFlowError> for ApiError {
    fn from(err: TimeFlowError) -> Self {
        let status = match &err {
            TimeFlowError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TimeFlowError::NotFound(_) => StatusCode::NOT_FOUND,
            TimeFlowError::Auth(_) => StatusCode::UNAUTHORIZED,
            TimeFlowError::Network(_) => StatusCode::BAD_GATEWAY,
            TimeFlowError::Config(_) | TimeFlowError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match err {
            TimeFlowError::Config(m)
            | TimeFlowError::Network(m)
            | TimeFlowError::Auth(m)
            | TimeFlowError::NotFound(m)
            | TimeFlowError::InvalidInput(m)
            | TimeFlowError::Internal(m) => m,
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
