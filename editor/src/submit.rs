//! Concurrent batch submission of a reconciliation plan.

use crate::service::{ServiceError, TicketTypeService};
use boxoffice_core::ids::EventId;
use boxoffice_core::plan::{OperationKind, SubmissionPlan};
use futures::future::join_all;
use std::sync::Arc;

/// Fallback message when no failed operation carried human-readable detail
pub const GENERIC_SUBMIT_FAILURE: &str = "Adding tickets failed.";

/// Aggregated result of one batch submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every operation succeeded
    Saved,
    /// At least one operation failed
    Failed {
        /// Message for user display: the first failed operation's
        /// human-readable detail, or [`GENERIC_SUBMIT_FAILURE`]
        message: String,
    },
}

impl SubmitOutcome {
    /// True when every operation succeeded
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Executes a [`SubmissionPlan`] against the storage collaborator.
///
/// All operations run concurrently and every one of them settles before
/// any outcome is reported: no early exit on first failure, no rollback
/// of operations that already succeeded. After a failure the local edit
/// buffer is left untouched and the caller may retry, which re-submits
/// the whole plan.
///
/// # Known limitation
///
/// Updates are idempotent by id, creates are not: a retry after a
/// partial failure will duplicate every create that already succeeded.
/// Fixing this needs an idempotency key honored by the storage service,
/// which its contract does not offer today.
pub struct BatchSubmitter {
    service: Arc<dyn TicketTypeService>,
    event_id: EventId,
}

impl BatchSubmitter {
    /// Creates a submitter for one event
    #[must_use]
    pub fn new(service: Arc<dyn TicketTypeService>, event_id: EventId) -> Self {
        Self { service, event_id }
    }

    /// Runs every planned operation and aggregates the results.
    ///
    /// The failure message is taken from the first failed operation in
    /// plan order; later failures are logged but not surfaced.
    pub async fn execute(&self, plan: SubmissionPlan) -> SubmitOutcome {
        let calls = plan.operations.iter().map(|operation| match &operation.kind {
            OperationKind::Create { payload } => {
                self.service.create(&self.event_id, payload.clone())
            }
            OperationKind::Update { id, payload } => {
                self.service.update(&self.event_id, id, payload.clone())
            }
        });

        let results = join_all(calls).await;

        let mut first_failure: Option<ServiceError> = None;
        let mut failed = 0usize;
        for (operation, result) in plan.operations.iter().zip(results) {
            match result {
                Ok(saved) => {
                    tracing::debug!(
                        ticket = %operation.ticket,
                        id = %saved.id,
                        "ticket type saved"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        ticket = %operation.ticket,
                        %error,
                        "ticket type operation failed"
                    );
                    failed += 1;
                    if first_failure.is_none() {
                        first_failure = Some(error);
                    }
                }
            }
        }

        if failed == 0 {
            tracing::info!(operations = plan.len(), "event tickets updated");
            return SubmitOutcome::Saved;
        }

        let message = first_failure
            .as_ref()
            .and_then(ServiceError::user_message)
            .unwrap_or(GENERIC_SUBMIT_FAILURE)
            .to_string();
        tracing::warn!(
            operations = plan.len(),
            failed,
            message = %message,
            "batch submission failed"
        );
        SubmitOutcome::Failed { message }
    }
}
