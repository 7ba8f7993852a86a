//! End-to-end editing-session tests against the in-memory service.
//!
//! These drive the real `EditorStore` through load, editing, and
//! submission, asserting both on session state and on exactly what the
//! storage collaborator received.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use boxoffice_core::environment::Clock;
use boxoffice_core::ids::{EventId, TicketTypeId};
use boxoffice_core::money::Money;
use boxoffice_core::plan::{OperationKind, plan};
use boxoffice_core::validate::validate;
use boxoffice_editor::{
    EditorAction, EditorStore, ProductionEditorEnvironment, ServiceError, SessionPhase,
    SubmitAttempt, SubmitOutcome, TicketEdit, TicketTypeService, TierEdit,
};
use boxoffice_testing::builders::{at, remote_ticket, valid_ticket};
use boxoffice_testing::{InMemoryTicketTypes, RecordedCall, test_clock};
use std::sync::Arc;

fn store_with(service: &Arc<InMemoryTicketTypes>) -> EditorStore {
    let env = ProductionEditorEnvironment::new(
        Arc::new(test_clock()),
        Arc::clone(service) as Arc<dyn TicketTypeService>,
    );
    EditorStore::new(EventId::new("evt-1"), env)
}

/// Fills the one blank draft the store seeds into a fully valid ticket
/// with a single $10.00 tier.
async fn fill_first_draft(store: &EditorStore) {
    let state = store.state().await;
    let ticket = state.tickets[0].key;

    store
        .dispatch(EditorAction::EditTicket {
            ticket,
            edit: TicketEdit::Name("General Admission".to_string()),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket,
            edit: TicketEdit::Capacity(100),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket,
            edit: TicketEdit::Increment(1),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket,
            edit: TicketEdit::StartDate(Some(at(1, 9))),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket,
            edit: TicketEdit::EndDate(Some(at(4, 17))),
        })
        .await;

    store.dispatch(EditorAction::AddTier { ticket }).await;
    let state = store.state().await;
    let tier = state.tickets[0].tiers[0].key;

    store
        .dispatch(EditorAction::EditTier {
            ticket,
            tier,
            edit: TierEdit::Name("Early Bird".to_string()),
        })
        .await;
    store
        .dispatch(EditorAction::EditTier {
            ticket,
            tier,
            edit: TierEdit::Price(Money::parse("10.00").unwrap()),
        })
        .await;
    store
        .dispatch(EditorAction::EditTier {
            ticket,
            tier,
            edit: TierEdit::StartDate(Some(at(1, 9))),
        })
        .await;
    store
        .dispatch(EditorAction::EditTier {
            ticket,
            tier,
            edit: TierEdit::EndDate(Some(at(2, 9))),
        })
        .await;
}

// ============================================================================
// Scenario A: empty listing, submit without filling anything in
// ============================================================================

#[tokio::test]
async fn empty_event_seeds_one_blank_draft_and_blocks_submission() {
    let service = InMemoryTicketTypes::empty().shared();
    let store = store_with(&service);

    store.load().await;

    let state = store.state().await;
    assert_eq!(state.phase, SessionPhase::Editing);
    assert_eq!(state.len(), 1);
    assert!(state.tickets[0].window.start.is_none());
    assert!(state.tickets[0].tiers.is_empty());

    let attempt = store.submit().await;
    let SubmitAttempt::Blocked(report) = attempt else {
        panic!("expected submission to be blocked");
    };
    assert!(report.ticket(state.tickets[0].key).is_some());

    // The collaborator saw the listing and nothing else
    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], RecordedCall::List { .. }));
}

// ============================================================================
// Scenario B: one valid ticket priced $10.00
// ============================================================================

#[test]
fn valid_single_ticket_validates_clean_and_plans_one_create() {
    let drafts = vec![valid_ticket("General Admission")];

    assert!(validate(&drafts).is_empty());

    let plan = plan(&drafts);
    assert_eq!(plan.len(), 1);
    match &plan.operations[0].kind {
        OperationKind::Create { payload } => {
            assert_eq!(payload.capacity, 100);
            assert_eq!(payload.increment, 1);
            assert_eq!(
                payload.ticket_pricing[0].price_in_cents,
                Money::from_cents(1000)
            );
        }
        OperationKind::Update { .. } => panic!("expected a create"),
    }
}

#[tokio::test]
async fn filling_in_the_blank_draft_and_submitting_creates_it_remotely() {
    let service = InMemoryTicketTypes::empty().shared();
    let store = store_with(&service);

    store.load().await;
    fill_first_draft(&store).await;

    let attempt = store.submit().await;
    assert!(matches!(
        attempt,
        SubmitAttempt::Submitted(SubmitOutcome::Saved)
    ));

    let state = store.state().await;
    assert_eq!(state.phase, SessionPhase::SubmitSucceeded);

    let calls = service.calls();
    let RecordedCall::Create { payload, .. } = &calls[1] else {
        panic!("expected a create after the listing");
    };
    assert_eq!(payload.name, "General Admission");
    assert_eq!(
        payload.ticket_pricing[0].price_in_cents,
        Money::from_cents(1000)
    );
    assert_eq!(payload.start_date, Some(at(1, 9)));

    // The payload crosses the wire in the offset-less UTC format
    let body = serde_json::to_value(payload).unwrap();
    assert_eq!(body["start_date"], "2026-07-01T09:00:00.000");

    assert_eq!(service.stored().len(), 1);
}

// ============================================================================
// Scenario C: mixed update/create batch with a partial failure
// ============================================================================

#[test]
fn mixed_buffer_plans_update_then_create_in_order() {
    let mut persisted = valid_ticket("General Admission");
    persisted.id = Some(TicketTypeId::new("t1"));
    let fresh = valid_ticket("VIP");

    let plan = plan(&[persisted, fresh]);
    assert_eq!(plan.len(), 2);
    match &plan.operations[0].kind {
        OperationKind::Update { id, .. } => assert_eq!(id.as_str(), "t1"),
        OperationKind::Create { .. } => panic!("first operation should be the update"),
    }
    assert!(plan.operations[1].is_create());
}

#[tokio::test]
async fn partial_failure_reports_the_create_error_and_leaves_the_buffer_alone() {
    let service = InMemoryTicketTypes::seeded(vec![remote_ticket("t1", "General Admission")])
        .shared();
    service.fail_creates_with(ServiceError::Rejected {
        message: "No more ticket types allowed for this event.".to_string(),
    });
    let store = store_with(&service);

    store.load().await;

    // Add a second, not-yet-persisted ticket
    store.dispatch(EditorAction::AddTicket).await;
    let state = store.state().await;
    let fresh = state.tickets[1].key;
    store
        .dispatch(EditorAction::EditTicket {
            ticket: fresh,
            edit: TicketEdit::Name("VIP".to_string()),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket: fresh,
            edit: TicketEdit::Capacity(20),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket: fresh,
            edit: TicketEdit::StartDate(Some(at(1, 9))),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket: fresh,
            edit: TicketEdit::EndDate(Some(at(4, 17))),
        })
        .await;
    store.dispatch(EditorAction::AddTier { ticket: fresh }).await;
    let state = store.state().await;
    let tier = state.tickets[1].tiers[0].key;
    store
        .dispatch(EditorAction::EditTier {
            ticket: fresh,
            tier,
            edit: TierEdit::Name("Door".to_string()),
        })
        .await;
    store
        .dispatch(EditorAction::EditTier {
            ticket: fresh,
            tier,
            edit: TierEdit::StartDate(Some(at(1, 9))),
        })
        .await;
    store
        .dispatch(EditorAction::EditTier {
            ticket: fresh,
            tier,
            edit: TierEdit::EndDate(Some(at(2, 9))),
        })
        .await;

    let attempt = store.submit().await;
    let SubmitAttempt::Submitted(SubmitOutcome::Failed { message }) = attempt else {
        panic!("expected an aggregated failure");
    };
    assert_eq!(message, "No more ticket types allowed for this event.");

    // Both operations ran: the update settled even though the create failed
    let calls = service.calls();
    assert!(matches!(calls[1], RecordedCall::Update { .. }));
    assert!(matches!(calls[2], RecordedCall::Create { .. }));

    // Local buffer untouched: t1 keeps its id, the fresh draft keeps none
    let state = store.state().await;
    assert_eq!(state.phase, SessionPhase::SubmitFailed);
    assert_eq!(state.len(), 2);
    assert_eq!(
        state.tickets[0].id,
        Some(TicketTypeId::new("t1"))
    );
    assert_eq!(state.tickets[1].id, None);
}

#[tokio::test]
async fn failure_without_remote_detail_falls_back_to_the_generic_message() {
    let service = InMemoryTicketTypes::empty().shared();
    service.fail_creates_with(ServiceError::Unreachable);
    let store = store_with(&service);

    store.load().await;
    fill_first_draft(&store).await;

    let attempt = store.submit().await;
    let SubmitAttempt::Submitted(SubmitOutcome::Failed { message }) = attempt else {
        panic!("expected an aggregated failure");
    };
    assert_eq!(message, "Adding tickets failed.");
}

// ============================================================================
// Retry and load-failure behavior
// ============================================================================

#[tokio::test]
async fn retrying_after_partial_failure_duplicates_successful_creates() {
    // Known limitation: creates carry no idempotency key, so a retry
    // re-runs every operation, including creates that already succeeded.
    let service = InMemoryTicketTypes::seeded(vec![remote_ticket("t1", "General Admission")])
        .shared();
    service.fail_updates_with(ServiceError::Unreachable);
    let store = store_with(&service);

    store.load().await;
    store.dispatch(EditorAction::AddTicket).await;
    let state = store.state().await;
    let fresh = state.tickets[1].key;
    store
        .dispatch(EditorAction::EditTicket {
            ticket: fresh,
            edit: TicketEdit::Name("VIP".to_string()),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket: fresh,
            edit: TicketEdit::Capacity(20),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket: fresh,
            edit: TicketEdit::StartDate(Some(at(1, 9))),
        })
        .await;
    store
        .dispatch(EditorAction::EditTicket {
            ticket: fresh,
            edit: TicketEdit::EndDate(Some(at(4, 17))),
        })
        .await;
    store.dispatch(EditorAction::AddTier { ticket: fresh }).await;
    let state = store.state().await;
    let tier = state.tickets[1].tiers[0].key;
    store
        .dispatch(EditorAction::EditTier {
            ticket: fresh,
            tier,
            edit: TierEdit::Name("Door".to_string()),
        })
        .await;
    store
        .dispatch(EditorAction::EditTier {
            ticket: fresh,
            tier,
            edit: TierEdit::StartDate(Some(at(1, 9))),
        })
        .await;
    store
        .dispatch(EditorAction::EditTier {
            ticket: fresh,
            tier,
            edit: TierEdit::EndDate(Some(at(2, 9))),
        })
        .await;

    assert!(matches!(
        store.submit().await,
        SubmitAttempt::Submitted(SubmitOutcome::Failed { .. })
    ));
    assert!(matches!(
        store.submit().await,
        SubmitAttempt::Submitted(SubmitOutcome::Failed { .. })
    ));

    // t1 plus two copies of the VIP ticket the retries created
    let stored = service.stored();
    assert_eq!(stored.len(), 3);
    assert_eq!(
        stored
            .iter()
            .filter(|ticket| ticket.name == "VIP")
            .count(),
        2
    );
}

#[tokio::test]
async fn load_failure_surfaces_the_default_message_and_allows_retry() {
    let service = InMemoryTicketTypes::empty().shared();
    service.fail_list_with(ServiceError::Unreachable);
    let store = store_with(&service);

    store.load().await;

    let state = store.state().await;
    assert_eq!(state.phase, SessionPhase::Idle);
    assert_eq!(
        state.last_error.as_deref(),
        Some("Loading event tickets failed.")
    );

    // The listing is retryable once the service recovers
    // (scripted failures stay until cleared, so verify the retry happened)
    store.load().await;
    assert_eq!(service.calls().len(), 2);
}

#[tokio::test]
async fn loading_a_populated_event_reconstructs_persisted_drafts() {
    let service = InMemoryTicketTypes::seeded(vec![
        remote_ticket("t1", "General Admission"),
        remote_ticket("t2", "VIP"),
    ])
    .shared();
    let store = store_with(&service);

    store.load().await;

    let state = store.state().await;
    assert_eq!(state.len(), 2);
    assert!(state.tickets.iter().all(boxoffice_core::draft::TicketTypeDraft::is_persisted));
    assert_eq!(state.loaded_at, Some(test_clock().now()));

    // Submitting the untouched buffer updates both in place
    let attempt = store.submit().await;
    assert!(matches!(
        attempt,
        SubmitAttempt::Submitted(SubmitOutcome::Saved)
    ));
    let calls = service.calls();
    assert!(matches!(calls[1], RecordedCall::Update { .. }));
    assert!(matches!(calls[2], RecordedCall::Update { .. }));
}
