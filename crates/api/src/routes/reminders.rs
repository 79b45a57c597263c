//! Upcoming reminders endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use timeflow_core::{upcoming_reminders, Reminder};

use crate::context::AppContext;

/// `GET /api/reminders` — reminders derived from events with a configured
/// lead time, future only, ascending by fire time.
pub async fn list_reminders(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Reminder>> {
    let events = ctx.store.read().await.list();
    Json(upcoming_reminders(&events, Utc::now()))
}
