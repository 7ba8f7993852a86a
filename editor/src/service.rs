//! The ticket-type storage collaborator, abstracted over transport.
//!
//! The editor never talks to a concrete backend; everything it needs from
//! remote storage is behind [`TicketTypeService`]. Production wires an
//! HTTP client here, tests wire the in-memory implementation from
//! `boxoffice-testing`.

use boxoffice_core::ids::{EventId, TicketTypeId};
use boxoffice_core::wire::{RemoteTicketType, TicketTypePayload};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Result alias for service calls
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Boxed future returned by service calls
pub type ServiceFuture<T> = Pin<Box<dyn Future<Output = ServiceResult<T>> + Send>>;

/// A failed call against the ticket-type storage service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service rejected the call and supplied a human-readable reason
    #[error("{message}")]
    Rejected {
        /// Reason text as the service returned it
        message: String,
    },
    /// The service could not be reached at all
    #[error("ticket type service unreachable")]
    Unreachable,
    /// Any other failure, with whatever detail the transport had
    #[error("ticket type service error: {message}")]
    Other {
        /// Transport-level detail, not meant for end users
        message: String,
    },
}

impl ServiceError {
    /// The human-readable message this error carries, if any.
    ///
    /// Only [`ServiceError::Rejected`] text is fit for user display;
    /// everything else falls back to a generic message at aggregation.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            Self::Unreachable | Self::Other { .. } => None,
        }
    }
}

/// Remote ticket-type storage operations.
///
/// Abstraction over the platform API's ticket-type collection. All calls
/// take owned payloads and return `'static` futures so implementations
/// can move the work onto any executor.
pub trait TicketTypeService: Send + Sync {
    /// Lists every ticket type of an event.
    ///
    /// Called once at session start; the caller is responsible for having
    /// fetched a full (unpaginated) set.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the listing fails.
    fn list(&self, event_id: &EventId) -> ServiceFuture<Vec<RemoteTicketType>>;

    /// Creates a new ticket type.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service rejects the payload or
    /// cannot be reached.
    fn create(
        &self,
        event_id: &EventId,
        payload: TicketTypePayload,
    ) -> ServiceFuture<RemoteTicketType>;

    /// Updates a persisted ticket type in place.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service rejects the payload or
    /// cannot be reached.
    fn update(
        &self,
        event_id: &EventId,
        id: &TicketTypeId,
        payload: TicketTypePayload,
    ) -> ServiceFuture<RemoteTicketType>;
}
