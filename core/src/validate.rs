//! Whole-set validation for the ticket-type edit buffer.
//!
//! [`validate`] walks the ordered drafts and produces a sparse
//! [`ValidationReport`]: tickets and tiers with no findings are absent
//! entirely, so an empty report is the "safe to submit" signal.
//!
//! Tier overlap is checked against the immediately preceding tier only
//! (by index), not pairwise across the whole list. A tier can therefore
//! still overlap an earlier, non-adjacent tier without being reported.
//! This weak-ordering contract is deliberate and kept as observed.

use crate::draft::{PriceTierDraft, TicketTypeDraft};
use crate::ids::{TicketKey, TierKey};
use std::collections::BTreeMap;

/// Ticket-level fields the validator can report on
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TicketField {
    /// Display name
    Name,
    /// Sale-window start
    StartDate,
    /// Sale-window end
    EndDate,
    /// Sellable quantity
    Capacity,
    /// Purchase increment
    Increment,
    /// The tier list as a whole
    Pricing,
}

impl TicketField {
    /// Stable lowercase label, e.g. for logging
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Capacity => "capacity",
            Self::Increment => "increment",
            Self::Pricing => "pricing",
        }
    }
}

/// Tier-level fields the validator can report on
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TierField {
    /// Display name
    Name,
    /// Tier-window start
    StartDate,
    /// Tier-window end
    EndDate,
}

impl TierField {
    /// Stable lowercase label, e.g. for logging
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
        }
    }
}

/// Findings for a single ticket-type draft
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketErrors {
    /// Ticket-level field findings
    pub fields: BTreeMap<TicketField, String>,
    /// Per-tier findings, keyed by tier surrogate key
    pub tiers: BTreeMap<TierKey, BTreeMap<TierField, String>>,
}

impl TicketErrors {
    /// True when this ticket has no findings at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.tiers.is_empty()
    }
}

/// Sparse validation findings for a whole edit buffer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    tickets: BTreeMap<TicketKey, TicketErrors>,
}

impl ValidationReport {
    /// A report with no findings
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tickets: BTreeMap::new(),
        }
    }

    /// True when the whole edit buffer validated clean
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Number of tickets with findings
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Findings for one ticket, if any
    #[must_use]
    pub fn ticket(&self, key: TicketKey) -> Option<&TicketErrors> {
        self.tickets.get(&key)
    }

    /// Iterates tickets with findings
    pub fn iter(&self) -> impl Iterator<Item = (&TicketKey, &TicketErrors)> {
        self.tickets.iter()
    }
}

/// Validates the full ordered edit buffer.
///
/// Pure and reentrant: safe to call on every field blur as well as at
/// submission time. Submission must be blocked whenever the returned
/// report is non-empty.
#[must_use]
pub fn validate(drafts: &[TicketTypeDraft]) -> ValidationReport {
    let mut report = ValidationReport::empty();

    for draft in drafts {
        let errors = validate_ticket(draft);
        if !errors.is_empty() {
            report.tickets.insert(draft.key, errors);
        }
    }

    report
}

fn validate_ticket(draft: &TicketTypeDraft) -> TicketErrors {
    let mut errors = TicketErrors::default();

    if draft.name.is_empty() {
        errors
            .fields
            .insert(TicketField::Name, "Missing ticket name.".to_string());
    }

    if draft.window.start.is_none() {
        errors.fields.insert(
            TicketField::StartDate,
            "Specify the ticket start time.".to_string(),
        );
    }

    match draft.window.end {
        None => {
            errors.fields.insert(
                TicketField::EndDate,
                "Specify the ticket end time.".to_string(),
            );
        }
        // Off sale strictly after on sale
        Some(end) => {
            if draft.window.start.is_some_and(|start| end <= start) {
                errors.fields.insert(
                    TicketField::EndDate,
                    "Off sale time must be after on sale time".to_string(),
                );
            }
        }
    }

    if draft.capacity == 0 {
        errors.fields.insert(
            TicketField::Capacity,
            "Specify a valid capacity.".to_string(),
        );
    }

    if draft.increment < 1 {
        errors.fields.insert(
            TicketField::Increment,
            "Increment must be more than 1".to_string(),
        );
    }

    if draft.tiers.is_empty() {
        errors
            .fields
            .insert(TicketField::Pricing, "Add pricing for ticket.".to_string());
    }

    let mut previous: Option<&PriceTierDraft> = None;
    for tier in &draft.tiers {
        let tier_errors = validate_tier(draft, tier, previous);
        if !tier_errors.is_empty() {
            errors.tiers.insert(tier.key, tier_errors);
        }
        previous = Some(tier);
    }

    errors
}

fn validate_tier(
    ticket: &TicketTypeDraft,
    tier: &PriceTierDraft,
    previous: Option<&PriceTierDraft>,
) -> BTreeMap<TierField, String> {
    let mut errors = BTreeMap::new();

    if tier.name.is_empty() {
        errors.insert(TierField::Name, "Missing pricing name.".to_string());
    }

    match tier.window.start {
        None => {
            errors.insert(
                TierField::StartDate,
                "Specify the pricing start time.".to_string(),
            );
        }
        Some(start) => {
            // A tier cannot go on sale before the ticket itself does, nor
            // before the previous tier (by index) has gone off sale.
            if ticket.window.start.is_some_and(|ticket_start| start < ticket_start) {
                errors.insert(
                    TierField::StartDate,
                    "Time must be after ticket on sale time.".to_string(),
                );
            } else if previous
                .and_then(|previous| previous.window.end)
                .is_some_and(|previous_end| start < previous_end)
            {
                errors.insert(
                    TierField::StartDate,
                    "Time must be after previous pricing off sale time.".to_string(),
                );
            }
        }
    }

    match tier.window.end {
        None => {
            errors.insert(
                TierField::EndDate,
                "Specify the pricing end time.".to_string(),
            );
        }
        Some(end) => {
            if tier.window.start.is_some_and(|start| end <= start) {
                errors.insert(
                    TierField::EndDate,
                    "Off sale time must be after pricing on sale time.".to_string(),
                );
            }
        }
    }

    errors
}
