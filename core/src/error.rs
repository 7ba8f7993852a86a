//! Policy errors: edits the session always rejects.

use thiserror::Error;

/// An edit that is rejected by policy rather than by field validation.
///
/// Policy errors are surfaced to the user and never applied; they are not
/// part of the [`ValidationReport`](crate::validate::ValidationReport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Removing a persisted ticket type locally would silently orphan the
    /// remote record; a dedicated remote-delete path does not exist yet.
    #[error("Can't yet delete a ticket type that's been saved.")]
    PersistedTicketRemoval,
}
