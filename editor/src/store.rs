//! Store for the editing session.

use crate::actions::EditorAction;
use crate::environment::ProductionEditorEnvironment;
use crate::reducer::EditorReducer;
use crate::state::{EditorState, SessionPhase};
use crate::submit::{GENERIC_SUBMIT_FAILURE, SubmitOutcome};
use boxoffice_core::ids::EventId;
use boxoffice_core::validate::ValidationReport;
use boxoffice_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Result of asking the store to submit
#[derive(Debug, Clone)]
pub enum SubmitAttempt {
    /// The batch was submitted and settled with this aggregated outcome
    Submitted(SubmitOutcome),
    /// Submission was blocked before any remote call was made.
    ///
    /// Carries the validation findings; an empty report here means the
    /// session was not in an editable phase at all.
    Blocked(ValidationReport),
}

/// Owns one editing session: the state, the reducer, and the environment.
///
/// Actions are processed through a feedback loop: the reducer mutates
/// state and describes effects, the store executes each effect outside
/// the state lock, and any action an effect produces is fed back in.
/// `dispatch` returns only once that loop has drained, so a completed
/// `dispatch(Submit)` has already applied the submission outcome.
pub struct EditorStore {
    state: Arc<RwLock<EditorState>>,
    reducer: EditorReducer,
    env: ProductionEditorEnvironment,
}

impl EditorStore {
    /// Creates an idle session store for an event
    #[must_use]
    pub fn new(event_id: EventId, env: ProductionEditorEnvironment) -> Self {
        Self {
            state: Arc::new(RwLock::new(EditorState::new(event_id))),
            reducer: EditorReducer::new(),
            env,
        }
    }

    /// Dispatches an action and runs the effect feedback loop to
    /// completion.
    pub async fn dispatch(&self, action: EditorAction) {
        let mut queue = VecDeque::from([action]);

        while let Some(action) = queue.pop_front() {
            let effects = {
                let mut state = self.state.write().await;
                self.reducer.reduce(&mut state, action, &self.env)
            };

            for effect in effects {
                match effect {
                    Effect::None => {}
                    Effect::Future(future) => {
                        if let Some(next) = future.await {
                            queue.push_back(next);
                        }
                    }
                }
            }
        }
    }

    /// Fetches the remote listing and populates the edit buffer
    pub async fn load(&self) {
        self.dispatch(EditorAction::Load).await;
    }

    /// Validates the buffer and, if clean, submits the batch.
    ///
    /// Returns [`SubmitAttempt::Blocked`] when validation findings (or a
    /// non-editable phase) stopped the submission before any remote call,
    /// otherwise the aggregated [`SubmitOutcome`].
    pub async fn submit(&self) -> SubmitAttempt {
        self.dispatch(EditorAction::Submit).await;

        let state = self.state.read().await;
        match state.phase {
            SessionPhase::SubmitSucceeded => SubmitAttempt::Submitted(SubmitOutcome::Saved),
            SessionPhase::SubmitFailed => SubmitAttempt::Submitted(SubmitOutcome::Failed {
                message: state
                    .last_error
                    .clone()
                    .unwrap_or_else(|| GENERIC_SUBMIT_FAILURE.to_string()),
            }),
            _ => SubmitAttempt::Blocked(state.report.clone()),
        }
    }

    /// Snapshot of the current session state
    pub async fn state(&self) -> EditorState {
        self.state.read().await.clone()
    }
}
