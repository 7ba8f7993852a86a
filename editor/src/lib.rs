//! Editing-session runtime for the ticket-type & pricing editor.
//!
//! This crate owns the mutable edit buffer for one event's ticket types
//! and drives it through the session state machine:
//!
//! ```text
//! Idle → Loading → Editing ⇄ SubmitFailed
//!                     ↓
//!                 Submitting → SubmitSucceeded (terminal)
//!                     ↓
//!                 SubmitFailed
//! ```
//!
//! # Architecture
//!
//! ```text
//! caller → EditorStore::dispatch(EditorAction)
//!            ↓
//!          EditorReducer (pure): mutate EditorState, describe effects
//!            ↓
//!          EditorStore executes Effect::Future outside the state lock
//!            ↓
//!          resulting actions feed back into the reducer
//! ```
//!
//! Loading and submission are the only asynchronous steps. Submission
//! fans out every planned create/update against the
//! [`TicketTypeService`] collaborator concurrently, waits for all of
//! them to settle, and reports one aggregated [`SubmitOutcome`].
//!
//! # Known limitation
//!
//! Create operations carry no idempotency key: retrying after a partial
//! failure re-submits the whole plan, and already-succeeded creates will
//! be duplicated by the service. See [`BatchSubmitter`].

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod service;
pub mod state;
pub mod store;
pub mod submit;

pub use actions::{EditorAction, TicketEdit, TierEdit};
pub use environment::{EditorEnvironment, ProductionEditorEnvironment};
pub use reducer::EditorReducer;
pub use service::{ServiceError, ServiceFuture, ServiceResult, TicketTypeService};
pub use state::{EditorState, SessionPhase};
pub use store::{EditorStore, SubmitAttempt};
pub use submit::{BatchSubmitter, SubmitOutcome};
