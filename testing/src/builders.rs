//! Ready-made domain values for tests.
//!
//! Everything here is valid by construction, so a test mutates only the
//! field it is exercising. All dates live in July 2026.

use boxoffice_core::draft::{PriceTierDraft, TicketTypeDraft};
use boxoffice_core::ids::{PriceTierId, TicketTypeId};
use boxoffice_core::interval::Interval;
use boxoffice_core::money::Money;
use boxoffice_core::wire::{PricePointPayload, RemotePricePoint, RemoteTicketType, TicketTypePayload};
use chrono::{DateTime, TimeZone, Utc};

/// A July 2026 instant at the given day and hour
#[must_use]
#[allow(clippy::unwrap_used)] // fixed calendar dates always resolve
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, day, hour, 0, 0).unwrap()
}

/// A price-tier draft with the given window and price in cents
#[must_use]
pub fn tier(name: &str, start: DateTime<Utc>, end: DateTime<Utc>, cents: u64) -> PriceTierDraft {
    PriceTierDraft {
        name: name.to_string(),
        window: Interval::between(start, end),
        price: Money::from_cents(cents),
        ..PriceTierDraft::blank()
    }
}

/// A fully valid un-persisted ticket-type draft: capacity 100,
/// increment 1, on sale July 1-4, one "Early Bird" tier at $10.00
#[must_use]
pub fn valid_ticket(name: &str) -> TicketTypeDraft {
    TicketTypeDraft {
        name: name.to_string(),
        capacity: 100,
        increment: 1,
        window: Interval::between(at(1, 9), at(4, 17)),
        tiers: vec![tier("Early Bird", at(1, 9), at(2, 9), 1000)],
        ..TicketTypeDraft::blank()
    }
}

/// A create/update payload matching [`valid_ticket`]
#[must_use]
pub fn payload(name: &str) -> TicketTypePayload {
    TicketTypePayload {
        name: name.to_string(),
        capacity: 100,
        increment: 1,
        start_date: Some(at(1, 9)),
        end_date: Some(at(4, 17)),
        ticket_pricing: vec![PricePointPayload {
            id: None,
            name: "Early Bird".to_string(),
            price_in_cents: Money::from_cents(1000),
            start_date: Some(at(1, 9)),
            end_date: Some(at(2, 9)),
        }],
    }
}

/// A persisted remote ticket type as a listing would return it, with one
/// persisted tier
#[must_use]
pub fn remote_ticket(id: &str, name: &str) -> RemoteTicketType {
    RemoteTicketType {
        id: TicketTypeId::new(id),
        name: name.to_string(),
        capacity: Some(100),
        increment: Some(1),
        start_date: Some(at(1, 9)),
        end_date: Some(at(4, 17)),
        ticket_pricing: vec![RemotePricePoint {
            id: PriceTierId::new(format!("{id}-tp-1")),
            name: "Early Bird".to_string(),
            price_in_cents: Money::from_cents(1000),
            start_date: Some(at(1, 9)),
            end_date: Some(at(2, 9)),
        }],
    }
}
