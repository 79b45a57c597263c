//! Create/edit sheet endpoints
//!
//! The sheet session is the single owner of the in-progress form and the
//! suggestion task. The suggest handler releases the session lock while the
//! provider call is in flight; the generation counter discards results that
//! arrive after the sheet changed underneath them.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use timeflow_core::{validate_form, EventFormController};
use timeflow_domain::{Event, EventForm, FieldError, SuggestionOutcome};

use super::ApiError;
use crate::context::AppContext;
use crate::session::SheetView;

#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum OpenRequest {
    Create,
    Edit { id: String },
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Raw duration text as typed by the user
    pub duration: String,
    #[serde(default)]
    pub preferences: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub form: EventForm,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct SubmitRejection {
    pub errors: Vec<FieldError>,
}

/// `GET /api/sheet` — current sheet and suggestion-task state.
pub async fn sheet_state(State(ctx): State<Arc<AppContext>>) -> Json<SheetView> {
    let session = ctx.session.lock().await;
    Json(session.view())
}

/// `POST /api/sheet/open` — open for creating, or for editing an existing
/// event (prefilled from it).
pub async fn open_sheet(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<OpenRequest>,
) -> Result<Json<SheetView>, ApiError> {
    match request {
        OpenRequest::Create => {
            let mut session = ctx.session.lock().await;
            session.open_create(Utc::now());
            Ok(Json(session.view()))
        }
        OpenRequest::Edit { id } => {
            let event = ctx
                .store
                .read()
                .await
                .get(&id)
                .ok_or_else(|| ApiError::not_found(format!("No event with id {id}")))?;
            let mut session = ctx.session.lock().await;
            session.open_edit(&event);
            Ok(Json(session.view()))
        }
    }
}

/// `POST /api/sheet/close` — cancel. The draft is dropped and any in-flight
/// suggestion result is discarded.
pub async fn close_sheet(State(ctx): State<Arc<AppContext>>) -> Json<SheetView> {
    let mut session = ctx.session.lock().await;
    session.close();
    Json(session.view())
}

/// `POST /api/sheet/suggest` — run the suggestion pipeline for the open
/// sheet. Answers 409 while a request is already pending.
pub async fn suggest(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestionOutcome>, ApiError> {
    let generation = {
        let mut session = ctx.session.lock().await;
        match session.begin_suggestion()? {
            Ok(generation) => generation,
            Err(pending) => return Err(ApiError::conflict(pending.to_string())),
        }
    };

    // Lock released during the provider call; only the snapshot travels.
    let events = ctx.store.read().await.list();
    let outcome = ctx
        .scheduling
        .suggest_optimal_time(&events, &request.duration, request.preferences.as_deref())
        .await;

    let mut session = ctx.session.lock().await;
    session.complete_suggestion(generation, outcome.clone());
    Ok(Json(outcome))
}

/// `POST /api/sheet/apply` — write the held suggestion's date and time into
/// the form. Single-use.
pub async fn apply(State(ctx): State<Arc<AppContext>>) -> Result<Json<ApplyResponse>, ApiError> {
    let mut session = ctx.session.lock().await;
    let errors = session.apply_held_suggestion()?;
    let form = session
        .form()
        .cloned()
        .ok_or_else(|| ApiError::from(timeflow_domain::TimeFlowError::Internal(
            "open sheet without a form".to_string(),
        )))?;
    Ok(Json(ApplyResponse { form, errors }))
}

/// `POST /api/sheet/submit` — validate the submitted form, create-or-update
/// the event, close the sheet. Field violations answer 422 without writing.
pub async fn submit(
    State(ctx): State<Arc<AppContext>>,
    Json(form): Json<EventForm>,
) -> Result<Response, ApiError> {
    let mut session = ctx.session.lock().await;
    let staged = session.stage_form(form)?;

    let errors = validate_form(&staged);
    if !errors.is_empty() {
        let body = Json(SubmitRejection { errors });
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response());
    }

    let event: Event = {
        let mut store = ctx.store.write().await;
        EventFormController::save(&mut store, &staged)?
    };
    session.close();
    Ok(Json(event).into_response())
}
