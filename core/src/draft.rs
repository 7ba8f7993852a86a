//! Edit-buffer entities for the ticket-type editor.
//!
//! Drafts are the session's single mutable copy of the remote collection:
//! reconstructed from the listing at load time, edited in place, and turned
//! back into wire payloads by the planner at submission.

use crate::ids::{PriceTierId, TicketKey, TicketTypeId, TierKey};
use crate::interval::Interval;
use crate::money::Money;
use crate::wire::{RemotePricePoint, RemoteTicketType};
use serde::{Deserialize, Serialize};

/// One priced sub-window of a ticket type's sale window
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTierDraft {
    /// Remote id; present iff this tier already exists remotely
    pub id: Option<PriceTierId>,
    /// Session-local surrogate key, stable across list edits
    pub key: TierKey,
    /// Tier display name
    pub name: String,
    /// Tier sale window
    pub window: Interval,
    /// Tier price; blank entry is zero cents
    pub price: Money,
}

impl PriceTierDraft {
    /// A fresh, completely unfilled tier
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: None,
            key: TierKey::new(),
            name: String::new(),
            window: Interval::unset(),
            price: Money::ZERO,
        }
    }

    /// Reconstructs a tier draft from the remote listing
    #[must_use]
    pub fn from_remote(remote: RemotePricePoint) -> Self {
        Self {
            id: Some(remote.id),
            key: TierKey::new(),
            name: remote.name,
            window: Interval {
                start: remote.start_date,
                end: remote.end_date,
            },
            price: remote.price_in_cents,
        }
    }

    /// Whether this tier has been persisted remotely
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A category of ticket for an event, with its own capacity, purchase
/// increment, sale window, and ordered price tiers.
///
/// Tier index order is the intended chronological sale order; the
/// validator's overlap check runs against the previous tier *by index*,
/// not against whichever tier happens to start earlier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeDraft {
    /// Remote id; present iff this ticket type already exists remotely
    pub id: Option<TicketTypeId>,
    /// Session-local surrogate key, stable across list edits
    pub key: TicketKey,
    /// Ticket-type display name
    pub name: String,
    /// Total sellable quantity; zero means "not filled in yet"
    pub capacity: u32,
    /// Purchase increment, at least 1
    pub increment: u32,
    /// Ticket-type sale window
    pub window: Interval,
    /// Ordered price tiers
    pub tiers: Vec<PriceTierDraft>,
}

impl TicketTypeDraft {
    /// A fresh, completely unfilled ticket type.
    ///
    /// Matches the blank row the editor seeds when the remote listing is
    /// empty: no name, no dates, capacity unset, increment 1, no tiers.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: None,
            key: TicketKey::new(),
            name: String::new(),
            capacity: 0,
            increment: 1,
            window: Interval::unset(),
            tiers: Vec::new(),
        }
    }

    /// Reconstructs a draft from the remote listing.
    ///
    /// A null remote capacity loads as 0 and a null increment as 1, the
    /// same defaults the original editor applied.
    #[must_use]
    pub fn from_remote(remote: RemoteTicketType) -> Self {
        Self {
            id: Some(remote.id),
            key: TicketKey::new(),
            name: remote.name,
            capacity: remote.capacity.unwrap_or(0),
            increment: remote.increment.unwrap_or(1),
            window: Interval {
                start: remote.start_date,
                end: remote.end_date,
            },
            tiers: remote
                .ticket_pricing
                .into_iter()
                .map(PriceTierDraft::from_remote)
                .collect(),
        }
    }

    /// Whether this ticket type has been persisted remotely
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Looks up a tier by surrogate key
    #[must_use]
    pub fn tier(&self, key: TierKey) -> Option<&PriceTierDraft> {
        self.tiers.iter().find(|tier| tier.key == key)
    }

    /// Looks up a tier by surrogate key, mutably
    pub fn tier_mut(&mut self, key: TierKey) -> Option<&mut PriceTierDraft> {
        self.tiers.iter_mut().find(|tier| tier.key == key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ids::TicketTypeId;
    use chrono::{TimeZone, Utc};

    #[test]
    fn blank_draft_is_unfilled() {
        let draft = TicketTypeDraft::blank();
        assert!(!draft.is_persisted());
        assert_eq!(draft.capacity, 0);
        assert_eq!(draft.increment, 1);
        assert_eq!(draft.window, Interval::unset());
        assert!(draft.tiers.is_empty());
    }

    #[test]
    fn from_remote_applies_load_defaults() {
        let remote = RemoteTicketType {
            id: TicketTypeId::new("tt-1"),
            name: "General Admission".to_string(),
            capacity: None,
            increment: None,
            start_date: Some(Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap()),
            end_date: None,
            ticket_pricing: vec![],
        };

        let draft = TicketTypeDraft::from_remote(remote);
        assert_eq!(draft.id, Some(TicketTypeId::new("tt-1")));
        assert_eq!(draft.capacity, 0);
        assert_eq!(draft.increment, 1);
        assert!(draft.window.start.is_some());
        assert!(draft.window.end.is_none());
    }

    #[test]
    fn tier_lookup_uses_surrogate_keys() {
        let mut draft = TicketTypeDraft::blank();
        draft.tiers.push(PriceTierDraft::blank());
        draft.tiers.push(PriceTierDraft::blank());

        let key = draft.tiers[1].key;
        draft.tier_mut(key).unwrap().name = "Early Bird".to_string();

        assert_eq!(draft.tiers[1].name, "Early Bird");
        assert_eq!(draft.tier(key).unwrap().name, "Early Bird");
        assert!(draft.tier(TierKey::new()).is_none());
    }
}
