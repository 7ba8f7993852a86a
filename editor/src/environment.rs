//! Environment for the editor reducer.

use crate::service::TicketTypeService;
use boxoffice_core::environment::Clock;
use std::sync::Arc;

/// Dependencies injected into the editing session.
///
/// Dependency injection via traits: different implementations can be
/// provided for production and tests without touching the reducer.
pub trait EditorEnvironment: Send + Sync {
    /// Clock for state timestamps.
    ///
    /// Production uses `SystemClock`, tests use `FixedClock`.
    fn clock(&self) -> &dyn Clock;

    /// The ticket-type storage collaborator.
    ///
    /// Returned as an owned handle because load and submit effects move
    /// it into `'static` futures.
    fn ticket_types(&self) -> Arc<dyn TicketTypeService>;
}

/// Production environment for the editing session
#[derive(Clone)]
pub struct ProductionEditorEnvironment {
    clock: Arc<dyn Clock>,
    ticket_types: Arc<dyn TicketTypeService>,
}

impl ProductionEditorEnvironment {
    /// Creates a new production environment
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ticket_types: Arc<dyn TicketTypeService>) -> Self {
        Self {
            clock,
            ticket_types,
        }
    }
}

impl EditorEnvironment for ProductionEditorEnvironment {
    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn ticket_types(&self) -> Arc<dyn TicketTypeService> {
        Arc::clone(&self.ticket_types)
    }
}
