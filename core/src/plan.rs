//! Reconciliation planning: diffing the edit buffer into remote operations.
//!
//! [`plan`] is a pure transform. It performs no I/O and never fails: a
//! draft with unset endpoints still plans (the endpoints serialize as
//! `null`), because validation - not planning - is the submission gate.

use crate::draft::TicketTypeDraft;
use crate::ids::{TicketKey, TicketTypeId};
use crate::wire::{PricePointPayload, TicketTypePayload};

/// What to do with one ticket type
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// The draft has never been persisted; ask the service to create it
    Create {
        /// Denormalized wire body
        payload: TicketTypePayload,
    },
    /// The draft is already persisted; update it in place
    Update {
        /// Remote id of the persisted ticket type
        id: TicketTypeId,
        /// Denormalized wire body
        payload: TicketTypePayload,
    },
}

/// One planned remote operation, tagged with its originating draft so a
/// failure can be reported back against the right ticket
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedOperation {
    /// Surrogate key of the draft this operation came from
    pub ticket: TicketKey,
    /// The operation itself
    pub kind: OperationKind,
}

impl PlannedOperation {
    /// True for [`OperationKind::Create`]
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self.kind, OperationKind::Create { .. })
    }

    /// The payload this operation carries
    #[must_use]
    pub const fn payload(&self) -> &TicketTypePayload {
        match &self.kind {
            OperationKind::Create { payload } | OperationKind::Update { payload, .. } => payload,
        }
    }
}

/// An ordered batch of remote operations, one per draft
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionPlan {
    /// Operations in draft order
    pub operations: Vec<PlannedOperation>,
}

impl SubmissionPlan {
    /// Number of planned operations
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// True when there is nothing to submit
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Plans one operation per draft, in draft order: an update when the draft
/// carries a remote id, a create when it does not.
///
/// Calling this twice on the same input yields structurally identical
/// plans.
#[must_use]
pub fn plan(drafts: &[TicketTypeDraft]) -> SubmissionPlan {
    let operations = drafts
        .iter()
        .map(|draft| {
            let payload = payload_for(draft);
            let kind = match &draft.id {
                Some(id) => OperationKind::Update {
                    id: id.clone(),
                    payload,
                },
                None => OperationKind::Create { payload },
            };
            PlannedOperation {
                ticket: draft.key,
                kind,
            }
        })
        .collect();

    SubmissionPlan { operations }
}

fn payload_for(draft: &TicketTypeDraft) -> TicketTypePayload {
    TicketTypePayload {
        name: draft.name.clone(),
        capacity: draft.capacity,
        increment: draft.increment,
        start_date: draft.window.start,
        end_date: draft.window.end,
        ticket_pricing: draft
            .tiers
            .iter()
            .map(|tier| PricePointPayload {
                id: tier.id.clone(),
                name: tier.name.clone(),
                price_in_cents: tier.price,
                start_date: tier.window.start,
                end_date: tier.window.end,
            })
            .collect(),
    }
}
