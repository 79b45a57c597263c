//! Edit-sheet session
//!
//! One sheet per server instance: the in-progress form plus the suggestion
//! task handle, mutated together under the caller's lock. Closing the sheet
//! cancels the task, which makes any in-flight suggestion result stale.

use chrono::{DateTime, Utc};
use serde::Serialize;
use timeflow_core::{
    apply_suggestion, AlreadyPending, Completion, EditSheet, SheetState, SuggestionTask, TaskState,
};
use timeflow_domain::{Event, EventForm, FieldError, Result, SuggestionOutcome, TimeFlowError};
use tracing::debug;

/// Snapshot of the sheet for `GET /api/sheet`.
#[derive(Debug, Serialize)]
pub struct SheetView {
    pub sheet: SheetState,
    pub suggestion: TaskState,
}

/// The sheet and its suggestion task, guarded by one lock in `AppContext`.
#[derive(Debug, Default)]
pub struct SheetSession {
    sheet: EditSheet,
    task: SuggestionTask,
}

impl SheetSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.sheet.is_open()
    }

    pub fn view(&self) -> SheetView {
        SheetView { sheet: self.sheet.state().clone(), suggestion: self.task.state().clone() }
    }

    /// Open for creating; an in-flight suggestion from a previous sheet is
    /// cancelled.
    pub fn open_create(&mut self, now: DateTime<Utc>) {
        self.task.cancel();
        self.sheet.open_create(now);
    }

    /// Open for editing an existing event.
    pub fn open_edit(&mut self, event: &Event) {
        self.task.cancel();
        self.sheet.open_edit(event);
    }

    /// Close on submit or cancel. The draft is dropped and any in-flight
    /// suggestion result becomes stale.
    pub fn close(&mut self) {
        self.task.cancel();
        self.sheet.close();
    }

    /// Start a suggestion request for the open sheet.
    ///
    /// # Errors
    /// `InvalidInput` when the sheet is closed; [`AlreadyPending`] is passed
    /// through so the handler can answer 409.
    pub fn begin_suggestion(&mut self) -> Result<std::result::Result<u64, AlreadyPending>> {
        if !self.sheet.is_open() {
            return Err(TimeFlowError::InvalidInput("The event sheet is not open.".to_string()));
        }
        Ok(self.task.begin())
    }

    /// Record the outcome of the request started with `generation`.
    pub fn complete_suggestion(
        &mut self,
        generation: u64,
        outcome: SuggestionOutcome,
    ) -> Completion {
        let completion = self.task.complete(generation, outcome);
        if completion == Completion::DiscardedStale {
            debug!(generation, "Suggestion completed after the sheet changed; discarded");
        }
        completion
    }

    /// Apply the held suggestion into the form. Single-use: the task returns
    /// to idle afterwards.
    ///
    /// # Errors
    /// `InvalidInput` when the sheet is closed, no suggestion is held, or the
    /// held timestamp does not parse.
    pub fn apply_held_suggestion(&mut self) -> Result<Vec<FieldError>> {
        if !self.sheet.is_open() {
            return Err(TimeFlowError::InvalidInput("The event sheet is not open.".to_string()));
        }
        let suggestion = self.task.take_suggestion().ok_or_else(|| {
            TimeFlowError::InvalidInput("There is no suggestion to apply.".to_string())
        })?;
        let form = self
            .sheet
            .form_mut()
            .ok_or_else(|| TimeFlowError::Internal("open sheet without a form".to_string()))?;
        apply_suggestion(form, &suggestion)
    }

    /// Replace the draft with the submitted form values, keeping the id of
    /// the event being edited.
    ///
    /// # Errors
    /// `InvalidInput` when the sheet is closed.
    pub fn stage_form(&mut self, mut form: EventForm) -> Result<EventForm> {
        let editing = match self.sheet.state() {
            SheetState::Open { editing, .. } => editing.clone(),
            SheetState::Closed => {
                return Err(TimeFlowError::InvalidInput(
                    "The event sheet is not open.".to_string(),
                ))
            }
        };
        form.id = editing;
        if let Some(draft) = self.sheet.form_mut() {
            *draft = form.clone();
        }
        Ok(form)
    }

    pub fn form(&self) -> Option<&EventForm> {
        self.sheet.form()
    }
}
