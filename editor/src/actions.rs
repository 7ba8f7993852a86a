//! Actions processed by the editor reducer.

use crate::submit::SubmitOutcome;
use boxoffice_core::ids::{TicketKey, TierKey};
use boxoffice_core::money::Money;
use boxoffice_core::wire::RemoteTicketType;
use chrono::{DateTime, Utc};

/// Everything that can happen to an editing session.
///
/// The first group is driven by the caller (user interaction); `Loaded`,
/// `LoadFailed`, and `SubmitFinished` are feedback actions produced by
/// the load and submit effects.
#[derive(Debug, Clone)]
pub enum EditorAction {
    /// Fetch the remote listing and populate the edit buffer.
    ///
    /// Only meaningful from `Idle`; dispatching it again later is ignored.
    Load,

    /// The remote listing arrived.
    Loaded {
        /// Every ticket type the service returned
        ticket_types: Vec<RemoteTicketType>,
    },

    /// The remote listing could not be fetched.
    LoadFailed {
        /// Message for user display
        message: String,
    },

    /// Append a blank ticket-type draft to the edit buffer.
    AddTicket,

    /// Remove a draft from the edit buffer.
    ///
    /// Rejected with a policy error when the draft is already persisted;
    /// there is no remote-delete path yet.
    RemoveTicket {
        /// Draft to remove
        ticket: TicketKey,
    },

    /// Change one field of a ticket-type draft.
    EditTicket {
        /// Draft to change
        ticket: TicketKey,
        /// The field change
        edit: TicketEdit,
    },

    /// Append a blank price tier to a draft.
    AddTier {
        /// Parent draft
        ticket: TicketKey,
    },

    /// Remove a price tier from a draft.
    RemoveTier {
        /// Parent draft
        ticket: TicketKey,
        /// Tier to remove
        tier: TierKey,
    },

    /// Change one field of a price tier.
    EditTier {
        /// Parent draft
        ticket: TicketKey,
        /// Tier to change
        tier: TierKey,
        /// The field change
        edit: TierEdit,
    },

    /// Validate the whole buffer and, if clean, submit the batch.
    ///
    /// The first dispatch flips `submit_attempted`; from then on every
    /// edit re-validates so the report tracks the buffer.
    Submit,

    /// The batch submission settled.
    SubmitFinished {
        /// Aggregated result across all operations
        outcome: SubmitOutcome,
    },
}

/// A single-field change to a ticket-type draft
#[derive(Debug, Clone)]
pub enum TicketEdit {
    /// Set the display name
    Name(String),
    /// Set the sellable quantity
    Capacity(u32),
    /// Set the purchase increment
    Increment(u32),
    /// Set or clear the on-sale instant
    StartDate(Option<DateTime<Utc>>),
    /// Set or clear the off-sale instant
    EndDate(Option<DateTime<Utc>>),
}

/// A single-field change to a price tier
#[derive(Debug, Clone)]
pub enum TierEdit {
    /// Set the display name
    Name(String),
    /// Set the price
    Price(Money),
    /// Set or clear the on-sale instant
    StartDate(Option<DateTime<Utc>>),
    /// Set or clear the off-sale instant
    EndDate(Option<DateTime<Utc>>),
}
