//! # Boxoffice Testing
//!
//! Test doubles and builders for the ticket-type editor.
//!
//! This crate provides:
//! - [`FixedClock`]: deterministic time for state-timestamp assertions
//! - [`InMemoryTicketTypes`]: a scriptable in-memory stand-in for the
//!   ticket-type storage service that records every call
//! - [`builders`]: ready-made valid drafts so tests only spell out what
//!   they are actually about
//!
//! ## Example
//!
//! ```ignore
//! use boxoffice_testing::{InMemoryTicketTypes, test_clock};
//!
//! #[tokio::test]
//! async fn submits_one_create() {
//!     let service = InMemoryTicketTypes::empty().shared();
//!     let env = ProductionEditorEnvironment::new(
//!         Arc::new(test_clock()),
//!         service.clone(),
//!     );
//!     let store = EditorStore::new(EventId::new("evt-1"), env);
//!     store.load().await;
//!     // ... edit, submit, then assert on service.calls()
//! }
//! ```

pub mod builders;
pub mod mocks;

pub use mocks::{FixedClock, InMemoryTicketTypes, RecordedCall, test_clock};
