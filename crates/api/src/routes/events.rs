//! Event list endpoint

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use timeflow_domain::Event;

use crate::context::AppContext;

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// Optional day filter, `YYYY-MM-DD`
    pub day: Option<NaiveDate>,
}

/// `GET /api/events[?day=YYYY-MM-DD]` — snapshot of the store, sorted by
/// start, optionally restricted to one day.
pub async fn list_events(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<EventsQuery>,
) -> Json<Vec<Event>> {
    let store = ctx.store.read().await;
    let events = match query.day {
        Some(day) => store.events_on(day),
        None => store.list(),
    };
    Json(events)
}
