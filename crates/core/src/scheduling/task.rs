//! Suggestion task handle
//!
//! Explicit {idle, pending, succeeded, failed} state for the one suspendable
//! operation in the system. A generation counter ties each completion to the
//! request that started it, so a result arriving after the sheet was closed
//! (or the task cancelled) is discarded rather than applied to a form that no
//! longer exists.

use serde::Serialize;
use timeflow_domain::{SuggestionOutcome, TimeSuggestion};
use tracing::debug;

/// Observable task state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum TaskState {
    Idle,
    Pending,
    Succeeded { suggestion: TimeSuggestion },
    Failed { error: String },
}

/// Returned by [`SuggestionTask::begin`] while a request is already in
/// flight; the trigger must stay disabled until it completes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("a suggestion request is already pending")]
pub struct AlreadyPending;

/// What happened to a completion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was recorded
    Applied,
    /// The generation was stale; the result was dropped
    DiscardedStale,
}

/// Single-owner handle for the in-flight suggestion request.
#[derive(Debug, Default)]
pub struct SuggestionTask {
    state: TaskState,
    generation: u64,
}

impl Default for TaskState {
    fn default() -> Self {
        Self::Idle
    }
}

impl SuggestionTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TaskState::Pending)
    }

    /// Start a request. At most one may be in flight; a second `begin` while
    /// pending is refused. Returns the generation to pass to [`complete`].
    ///
    /// [`complete`]: Self::complete
    pub fn begin(&mut self) -> Result<u64, AlreadyPending> {
        if self.is_pending() {
            return Err(AlreadyPending);
        }
        self.generation += 1;
        self.state = TaskState::Pending;
        Ok(self.generation)
    }

    /// Record the outcome of the request started with `generation`.
    ///
    /// A stale generation means the task was cancelled (sheet closed) while
    /// the call was in flight; the result is discarded.
    pub fn complete(&mut self, generation: u64, outcome: SuggestionOutcome) -> Completion {
        if generation != self.generation || !self.is_pending() {
            debug!(generation, current = self.generation, "Discarding stale suggestion result");
            return Completion::DiscardedStale;
        }
        self.state = match outcome {
            SuggestionOutcome::Success { data, .. } => TaskState::Succeeded { suggestion: data },
            SuggestionOutcome::Failure { error, .. } => TaskState::Failed { error },
        };
        Completion::Applied
    }

    /// Cancel on teardown: any in-flight result becomes stale and the task
    /// returns to idle.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = TaskState::Idle;
    }

    /// Take the held suggestion for applying. Single-use: the task returns
    /// to idle, so a new value must be explicitly re-requested.
    pub fn take_suggestion(&mut self) -> Option<TimeSuggestion> {
        match std::mem::replace(&mut self.state, TaskState::Idle) {
            TaskState::Succeeded { suggestion } => Some(suggestion),
            other => {
                self.state = other;
                None
            }
        }
    }
}
