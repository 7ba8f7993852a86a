//! Reducer for the editing session.

use crate::actions::{EditorAction, TicketEdit, TierEdit};
use crate::environment::{EditorEnvironment, ProductionEditorEnvironment};
use crate::state::{EditorState, SessionPhase};
use crate::submit::BatchSubmitter;
use boxoffice_core::draft::{PriceTierDraft, TicketTypeDraft};
use boxoffice_core::error::PolicyError;
use boxoffice_core::validate::validate;
use boxoffice_core::{SmallVec, effect::Effect, plan::plan, reducer::Reducer, smallvec};

/// Default message when a failed listing carried no human-readable detail
const GENERIC_LOAD_FAILURE: &str = "Loading event tickets failed.";

/// Reducer driving the editing-session state machine.
///
/// All transitions are synchronous state mutations; only `Load` and a
/// clean `Submit` return effects (the listing fetch and the batch
/// submission). Actions that do not apply to the current phase, or that
/// address a draft the buffer no longer holds, are ignored rather than
/// treated as errors.
#[derive(Clone, Debug, Default)]
pub struct EditorReducer;

impl EditorReducer {
    /// Creates a new editor reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Common prologue for buffer edits: clear the previous policy
    /// rejection and drop back from `SubmitFailed` to `Editing`.
    fn begin_edit(state: &mut EditorState) {
        state.last_rejection = None;
        if state.phase == SessionPhase::SubmitFailed {
            state.phase = SessionPhase::Editing;
        }
    }

    /// Re-run whole-set validation once a submit has been attempted, so
    /// the report tracks the buffer on every subsequent change.
    fn revalidate(state: &mut EditorState) {
        if state.submit_attempted {
            state.report = validate(&state.tickets);
        }
    }

    fn apply_ticket_edit(draft: &mut TicketTypeDraft, edit: TicketEdit) {
        match edit {
            TicketEdit::Name(name) => draft.name = name,
            TicketEdit::Capacity(capacity) => draft.capacity = capacity,
            TicketEdit::Increment(increment) => draft.increment = increment,
            TicketEdit::StartDate(start) => draft.window.start = start,
            TicketEdit::EndDate(end) => draft.window.end = end,
        }
    }

    fn apply_tier_edit(tier: &mut PriceTierDraft, edit: TierEdit) {
        match edit {
            TierEdit::Name(name) => tier.name = name,
            TierEdit::Price(price) => tier.price = price,
            TierEdit::StartDate(start) => tier.window.start = start,
            TierEdit::EndDate(end) => tier.window.end = end,
        }
    }
}

impl Reducer for EditorReducer {
    type State = EditorState;
    type Action = EditorAction;
    type Environment = ProductionEditorEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            EditorAction::Load => {
                if state.phase != SessionPhase::Idle {
                    return smallvec![];
                }
                state.phase = SessionPhase::Loading;
                state.last_error = None;

                tracing::info!(event_id = %state.event_id, "loading ticket types");

                let service = env.ticket_types();
                let event_id = state.event_id.clone();
                smallvec![Effect::future(async move {
                    match service.list(&event_id).await {
                        Ok(ticket_types) => Some(EditorAction::Loaded { ticket_types }),
                        Err(error) => {
                            let message = error
                                .user_message()
                                .unwrap_or(GENERIC_LOAD_FAILURE)
                                .to_string();
                            Some(EditorAction::LoadFailed { message })
                        }
                    }
                })]
            }

            EditorAction::Loaded { ticket_types } => {
                if state.phase != SessionPhase::Loading {
                    return smallvec![];
                }

                state.tickets = ticket_types
                    .into_iter()
                    .map(TicketTypeDraft::from_remote)
                    .collect();

                // An event without ticket types starts from one blank row
                if state.tickets.is_empty() {
                    state.tickets.push(TicketTypeDraft::blank());
                }

                state.phase = SessionPhase::Editing;
                state.loaded_at = Some(env.clock().now());

                tracing::info!(
                    event_id = %state.event_id,
                    count = state.tickets.len(),
                    "ticket types loaded"
                );
                smallvec![]
            }

            EditorAction::LoadFailed { message } => {
                if state.phase != SessionPhase::Loading {
                    return smallvec![];
                }
                tracing::warn!(event_id = %state.event_id, message = %message, "load failed");
                state.phase = SessionPhase::Idle;
                state.last_error = Some(message);
                smallvec![]
            }

            EditorAction::AddTicket => {
                if !state.phase.accepts_edits() {
                    return smallvec![];
                }
                Self::begin_edit(state);
                state.tickets.push(TicketTypeDraft::blank());
                Self::revalidate(state);
                smallvec![]
            }

            EditorAction::RemoveTicket { ticket } => {
                if !state.phase.accepts_edits() {
                    return smallvec![];
                }
                Self::begin_edit(state);

                let Some(index) = state.tickets.iter().position(|draft| draft.key == ticket)
                else {
                    return smallvec![];
                };

                if state.tickets[index].is_persisted() {
                    // No remote-delete path yet; reject rather than
                    // silently dropping a persisted record.
                    tracing::warn!(%ticket, "refused to remove persisted ticket type");
                    state.last_rejection = Some(PolicyError::PersistedTicketRemoval);
                    return smallvec![];
                }

                state.tickets.remove(index);
                if state.tickets.is_empty() {
                    state.tickets.push(TicketTypeDraft::blank());
                }
                Self::revalidate(state);
                smallvec![]
            }

            EditorAction::EditTicket { ticket, edit } => {
                if !state.phase.accepts_edits() {
                    return smallvec![];
                }
                Self::begin_edit(state);
                if let Some(draft) = state.ticket_mut(ticket) {
                    Self::apply_ticket_edit(draft, edit);
                    Self::revalidate(state);
                }
                smallvec![]
            }

            EditorAction::AddTier { ticket } => {
                if !state.phase.accepts_edits() {
                    return smallvec![];
                }
                Self::begin_edit(state);
                if let Some(draft) = state.ticket_mut(ticket) {
                    draft.tiers.push(PriceTierDraft::blank());
                    Self::revalidate(state);
                }
                smallvec![]
            }

            EditorAction::RemoveTier { ticket, tier } => {
                if !state.phase.accepts_edits() {
                    return smallvec![];
                }
                Self::begin_edit(state);
                if let Some(draft) = state.ticket_mut(ticket) {
                    draft.tiers.retain(|existing| existing.key != tier);
                    Self::revalidate(state);
                }
                smallvec![]
            }

            EditorAction::EditTier { ticket, tier, edit } => {
                if !state.phase.accepts_edits() {
                    return smallvec![];
                }
                Self::begin_edit(state);
                if let Some(tier) = state
                    .ticket_mut(ticket)
                    .and_then(|draft| draft.tier_mut(tier))
                {
                    Self::apply_tier_edit(tier, edit);
                    Self::revalidate(state);
                }
                smallvec![]
            }

            EditorAction::Submit => {
                if !state.phase.accepts_edits() {
                    return smallvec![];
                }

                state.submit_attempted = true;
                state.report = validate(&state.tickets);

                if !state.report.is_empty() {
                    tracing::debug!(
                        tickets_with_errors = state.report.len(),
                        "submission blocked by validation"
                    );
                    state.phase = SessionPhase::Editing;
                    return smallvec![];
                }

                let plan = plan(&state.tickets);
                state.phase = SessionPhase::Submitting;
                state.last_error = None;

                tracing::info!(
                    event_id = %state.event_id,
                    operations = plan.len(),
                    "submitting ticket types"
                );

                let submitter = BatchSubmitter::new(env.ticket_types(), state.event_id.clone());
                smallvec![Effect::future(async move {
                    let outcome = submitter.execute(plan).await;
                    Some(EditorAction::SubmitFinished { outcome })
                })]
            }

            EditorAction::SubmitFinished { outcome } => {
                if state.phase != SessionPhase::Submitting {
                    return smallvec![];
                }
                match outcome {
                    crate::submit::SubmitOutcome::Saved => {
                        state.phase = SessionPhase::SubmitSucceeded;
                        state.last_error = None;
                    }
                    crate::submit::SubmitOutcome::Failed { message } => {
                        state.phase = SessionPhase::SubmitFailed;
                        state.last_error = Some(message);
                    }
                }
                smallvec![]
            }
        }
    }
}
