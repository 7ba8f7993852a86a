//! Ticket-Type Editor Demo
//!
//! Interactive demonstration of the pricing editor showing:
//! - Session load against an empty event (seeds one blank ticket)
//! - A premature submit blocked by whole-set validation
//! - Filling in the ticket and its price tiers
//! - Concurrent batch submission and the aggregated outcome
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pricing-demo
//! ```

use boxoffice_core::environment::SystemClock;
use boxoffice_core::ids::EventId;
use boxoffice_core::money::Money;
use boxoffice_editor::{
    EditorAction, EditorStore, ProductionEditorEnvironment, SubmitAttempt, SubmitOutcome,
    TicketEdit, TicketTypeService, TierEdit,
};
use boxoffice_testing::InMemoryTicketTypes;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,boxoffice_editor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("\n🎫 ============================================");
    println!("   Ticket-Type Editor - Live Demo");
    println!("============================================\n");

    let service = InMemoryTicketTypes::empty().shared();
    let env = ProductionEditorEnvironment::new(
        Arc::new(SystemClock::new()),
        Arc::clone(&service) as Arc<dyn TicketTypeService>,
    );
    let store = EditorStore::new(EventId::new("summer-festival-2026"), env);

    // Step 1: load the (empty) remote collection
    println!("1️⃣  Loading ticket types...");
    store.load().await;
    let state = store.state().await;
    println!(
        "   ✓ Loaded; editor seeded {} blank ticket type\n",
        state.tickets.len()
    );

    // Step 2: submit before filling anything in
    println!("2️⃣  Submitting the untouched form...");
    match store.submit().await {
        SubmitAttempt::Blocked(report) => {
            println!("   ✗ Blocked by validation:");
            for (_, errors) in report.iter() {
                for (field, message) in &errors.fields {
                    println!("     - {}: {message}", field.as_str());
                }
            }
            println!();
        }
        SubmitAttempt::Submitted(_) => println!("   (unexpectedly submitted)\n"),
    }

    // Step 3: fill in the ticket and two price tiers
    println!("3️⃣  Filling in \"General Admission\" with two tiers...");
    let ticket = store.state().await.tickets[0].key;
    let on_sale = Utc::now() + Duration::days(7);
    let off_sale = on_sale + Duration::days(30);

    for edit in [
        TicketEdit::Name("General Admission".to_string()),
        TicketEdit::Capacity(500),
        TicketEdit::Increment(2),
        TicketEdit::StartDate(Some(on_sale)),
        TicketEdit::EndDate(Some(off_sale)),
    ] {
        store.dispatch(EditorAction::EditTicket { ticket, edit }).await;
    }

    let tier_specs = [
        ("Early Bird", "25.00", on_sale, on_sale + Duration::days(10)),
        ("Regular", "40.00", on_sale + Duration::days(10), off_sale),
    ];
    for (name, price, start, end) in tier_specs {
        store.dispatch(EditorAction::AddTier { ticket }).await;
        let state = store.state().await;
        let tier = state.tickets[0]
            .tiers
            .last()
            .map(|tier| tier.key)
            .unwrap_or_default();
        for edit in [
            TierEdit::Name(name.to_string()),
            TierEdit::Price(Money::parse(price).unwrap_or(Money::ZERO)),
            TierEdit::StartDate(Some(start)),
            TierEdit::EndDate(Some(end)),
        ] {
            store
                .dispatch(EditorAction::EditTier { ticket, tier, edit })
                .await;
        }
    }
    println!("   ✓ Ticket filled in\n");

    // Step 4: submit for real
    println!("4️⃣  Submitting...");
    match store.submit().await {
        SubmitAttempt::Submitted(SubmitOutcome::Saved) => {
            println!("   ✓ Event tickets updated\n");
        }
        SubmitAttempt::Submitted(SubmitOutcome::Failed { message }) => {
            println!("   ✗ {message}\n");
        }
        SubmitAttempt::Blocked(report) => {
            println!("   ✗ Blocked: {} ticket(s) with findings\n", report.len());
        }
    }

    println!("📦 Stored remotely:");
    for ticket_type in service.stored() {
        println!(
            "   {} \"{}\" capacity={} tiers={}",
            ticket_type.id,
            ticket_type.name,
            ticket_type.capacity.unwrap_or(0),
            ticket_type.ticket_pricing.len()
        );
        for tier in ticket_type.ticket_pricing {
            println!("     · {} at {}", tier.name, tier.price_in_cents);
        }
    }
    println!("\n✨ Done");
}
