//! Mock implementations of the editor's environment dependencies.

use boxoffice_core::environment::Clock;
use boxoffice_core::ids::{EventId, PriceTierId, TicketTypeId};
use boxoffice_core::wire::{RemotePricePoint, RemoteTicketType, TicketTypePayload};
use boxoffice_editor::service::{ServiceError, ServiceFuture, TicketTypeService};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};

/// Fixed clock for deterministic tests
///
/// Always returns the same time, making tests reproducible.
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a default fixed clock for tests (2026-06-01 00:00:00 UTC)
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2026-06-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}

/// One call a test observed against [`InMemoryTicketTypes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// A listing request
    List {
        /// Event whose collection was listed
        event_id: EventId,
    },
    /// A create request
    Create {
        /// Target event
        event_id: EventId,
        /// Submitted body
        payload: TicketTypePayload,
    },
    /// An update request
    Update {
        /// Target event
        event_id: EventId,
        /// Persisted ticket type addressed
        id: TicketTypeId,
        /// Submitted body
        payload: TicketTypePayload,
    },
}

#[derive(Debug, Default)]
struct Inner {
    stored: Vec<RemoteTicketType>,
    next_id: u64,
    calls: Vec<RecordedCall>,
    fail_list: Option<ServiceError>,
    fail_creates: Option<ServiceError>,
    fail_updates: Option<ServiceError>,
}

/// In-memory ticket-type storage for tests.
///
/// Succeeds by default: creates mint sequential `tt-N` / `tp-N` ids and
/// land in the stored collection, updates replace in place. Each method
/// can be scripted to fail, and every call is recorded so tests can
/// assert exactly what the editor sent, in what order.
#[derive(Debug, Default)]
pub struct InMemoryTicketTypes {
    inner: Mutex<Inner>,
}

impl InMemoryTicketTypes {
    /// A service with an empty collection
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A service whose listing returns the given ticket types
    #[must_use]
    pub fn seeded(ticket_types: Vec<RemoteTicketType>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                stored: ticket_types,
                ..Inner::default()
            }),
        }
    }

    /// Wraps the service in an `Arc` so a test can keep a handle for
    /// assertions while the editor holds it as a `dyn` collaborator
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Scripts the next and all following listing calls to fail
    pub fn fail_list_with(&self, error: ServiceError) {
        self.lock().fail_list = Some(error);
    }

    /// Scripts the next and all following create calls to fail
    pub fn fail_creates_with(&self, error: ServiceError) {
        self.lock().fail_creates = Some(error);
    }

    /// Scripts the next and all following update calls to fail
    pub fn fail_updates_with(&self, error: ServiceError) {
        self.lock().fail_updates = Some(error);
    }

    /// Every call observed so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// The stored collection as it stands
    #[must_use]
    pub fn stored(&self) -> Vec<RemoteTicketType> {
        self.lock().stored.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another test thread panicked; the
        // data is still usable for assertions.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn mint(inner: &mut Inner, prefix: &str) -> String {
        inner.next_id += 1;
        format!("{prefix}-{}", inner.next_id)
    }

    fn materialize(inner: &mut Inner, id: TicketTypeId, payload: TicketTypePayload) -> RemoteTicketType {
        let ticket_pricing = payload
            .ticket_pricing
            .into_iter()
            .map(|tier| RemotePricePoint {
                id: tier
                    .id
                    .unwrap_or_else(|| PriceTierId::new(Self::mint(inner, "tp"))),
                name: tier.name,
                price_in_cents: tier.price_in_cents,
                start_date: tier.start_date,
                end_date: tier.end_date,
            })
            .collect();

        RemoteTicketType {
            id,
            name: payload.name,
            capacity: Some(payload.capacity),
            increment: Some(payload.increment),
            start_date: payload.start_date,
            end_date: payload.end_date,
            ticket_pricing,
        }
    }
}

impl TicketTypeService for InMemoryTicketTypes {
    fn list(&self, event_id: &EventId) -> ServiceFuture<Vec<RemoteTicketType>> {
        let result = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::List {
                event_id: event_id.clone(),
            });
            match &inner.fail_list {
                Some(error) => Err(error.clone()),
                None => Ok(inner.stored.clone()),
            }
        };
        Box::pin(async move { result })
    }

    fn create(
        &self,
        event_id: &EventId,
        payload: TicketTypePayload,
    ) -> ServiceFuture<RemoteTicketType> {
        let result = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::Create {
                event_id: event_id.clone(),
                payload: payload.clone(),
            });
            match &inner.fail_creates {
                Some(error) => Err(error.clone()),
                None => {
                    let id = TicketTypeId::new(Self::mint(&mut inner, "tt"));
                    let saved = Self::materialize(&mut inner, id, payload);
                    inner.stored.push(saved.clone());
                    tracing::debug!(id = %saved.id, "in-memory create");
                    Ok(saved)
                }
            }
        };
        Box::pin(async move { result })
    }

    fn update(
        &self,
        event_id: &EventId,
        id: &TicketTypeId,
        payload: TicketTypePayload,
    ) -> ServiceFuture<RemoteTicketType> {
        let result = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::Update {
                event_id: event_id.clone(),
                id: id.clone(),
                payload: payload.clone(),
            });
            match &inner.fail_updates {
                Some(error) => Err(error.clone()),
                None => {
                    let saved = Self::materialize(&mut inner, id.clone(), payload);
                    match inner.stored.iter_mut().find(|existing| existing.id == *id) {
                        Some(existing) => {
                            *existing = saved.clone();
                            tracing::debug!(id = %saved.id, "in-memory update");
                            Ok(saved)
                        }
                        None => Err(ServiceError::Rejected {
                            message: "Ticket type not found.".to_string(),
                        }),
                    }
                }
            }
        };
        Box::pin(async move { result })
    }
}
