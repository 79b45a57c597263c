//! Identity boundary endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use timeflow_infra::{AuthSession, IdentityError};
use tracing::warn;

use crate::context::AppContext;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/signup`
pub async fn signup(
    State(ctx): State<Arc<AppContext>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    let result = ctx.identity.sign_up(&credentials.email, &credentials.password).await;
    respond(result)
}

/// `POST /api/auth/login`
pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    let result = ctx.identity.log_in(&credentials.email, &credentials.password).await;
    respond(result)
}

fn respond(result: Result<AuthSession, IdentityError>) -> Response {
    match result {
        Ok(session) => Json(session).into_response(),
        Err(IdentityError::Provider { code, title, description }) => {
            let body = json!({
                "code": code,
                "title": title,
                "description": description,
            });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Err(IdentityError::Network(message)) => {
            warn!(error = %message, "identity provider unreachable");
            let body = json!({ "error": "The sign-in service is unavailable. Please try again later." });
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}
