//! Edit-sheet state machine
//!
//! `Closed -> Open(creating)` or `Closed -> Open(editing)`, back to `Closed`
//! on submit or cancel. No draft survives a close.

use chrono::{DateTime, Utc};
use serde::Serialize;
use timeflow_domain::{Event, EventForm};

use super::form::{default_form, prefill_form};

/// Current sheet state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SheetState {
    Closed,
    #[serde(rename_all = "camelCase")]
    Open {
        form: EventForm,
        /// Id of the event being edited, absent when creating
        #[serde(skip_serializing_if = "Option::is_none")]
        editing: Option<String>,
    },
}

/// The create/edit sheet holding the in-progress form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditSheet {
    state: SheetState,
}

impl Default for EditSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSheet {
    pub fn new() -> Self {
        Self { state: SheetState::Closed }
    }

    /// Open for creating a new event with the default form.
    pub fn open_create(&mut self, now: DateTime<Utc>) {
        self.state = SheetState::Open { form: default_form(now), editing: None };
    }

    /// Open for editing an existing event, prefilled from it.
    pub fn open_edit(&mut self, event: &Event) {
        self.state =
            SheetState::Open { form: prefill_form(event), editing: Some(event.id.clone()) };
    }

    /// Close on submit or cancel; the draft is discarded.
    pub fn close(&mut self) {
        self.state = SheetState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SheetState::Open { .. })
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    pub fn form(&self) -> Option<&EventForm> {
        match &self.state {
            SheetState::Open { form, .. } => Some(form),
            SheetState::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        match &mut self.state {
            SheetState::Open { form, .. } => Some(form),
            SheetState::Closed => None,
        }
    }
}
