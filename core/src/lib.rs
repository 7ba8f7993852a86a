//! # Boxoffice Core
//!
//! Domain model and pure logic for the ticket-type & pricing editor.
//!
//! This crate contains everything that can be computed without I/O:
//!
//! - **Data model**: [`Interval`](interval::Interval) sale windows,
//!   [`PriceTierDraft`](draft::PriceTierDraft) and
//!   [`TicketTypeDraft`](draft::TicketTypeDraft) edit-buffer entities,
//!   [`Money`](money::Money) in integer minor units, and the identifier
//!   newtypes in [`ids`].
//! - **Validation**: [`validate`](validate::validate) produces a sparse
//!   [`ValidationReport`](validate::ValidationReport) keyed by stable
//!   surrogate keys.
//! - **Planning**: [`plan`](plan::plan) diffs the edit buffer into an
//!   ordered list of create/update operations with fully denormalized wire
//!   payloads.
//! - **Wire types**: [`wire`] holds the serde shapes exchanged with the
//!   remote ticket-type storage service.
//!
//! The editing-session runtime lives in `boxoffice-editor` and is built on
//! the small [`reducer`] / [`effect`] / [`environment`] abstractions below:
//! a reducer is a pure function `(State, Action, Environment) → Effects`,
//! and effects are *descriptions* of side effects executed by the session
//! store, never performed inline.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub mod draft;
pub mod error;
pub mod ids;
pub mod interval;
pub mod money;
pub mod plan;
pub mod validate;
pub mod wire;

/// Reducer module - the core trait for session logic.
///
/// Reducers are pure functions: `(State, Action, Environment) → Effects`.
/// They contain all state-transition logic and are deterministic and
/// testable without any I/O.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for session logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the store
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions.
///
/// Effects describe side effects to be performed by the session store.
/// They are values (not execution): a reducer returning an effect has not
/// done anything yet.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the store.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Wrap a future producing an optional feedback action
        pub fn future<F>(future: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(future))
        }

        /// Whether this effect does nothing
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - dependency injection traits.
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter of a reducer.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// Production uses [`SystemClock`]; tests use a fixed clock so state
    /// timestamps are deterministic.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// System clock backed by [`Utc::now`]
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl SystemClock {
        /// Creates a new system clock
        #[must_use]
        pub const fn new() -> Self {
            Self
        }
    }

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
