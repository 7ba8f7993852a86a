//! Session state for the ticket-type editor.

use boxoffice_core::draft::TicketTypeDraft;
use boxoffice_core::error::PolicyError;
use boxoffice_core::ids::{EventId, TicketKey};
use boxoffice_core::validate::ValidationReport;
use chrono::{DateTime, Utc};

/// Where the editing session currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Session created, remote listing not requested yet
    Idle,

    /// Waiting for the remote listing
    Loading,

    /// Edit buffer populated, user is editing
    Editing,

    /// Batch submission in flight; the caller should disable resubmission
    Submitting,

    /// Every operation succeeded; terminal for this session
    SubmitSucceeded,

    /// At least one operation failed; editing and resubmission allowed
    SubmitFailed,
}

impl SessionPhase {
    /// True in the phases where the edit buffer accepts changes
    #[must_use]
    pub const fn accepts_edits(self) -> bool {
        matches!(self, Self::Editing | Self::SubmitFailed)
    }
}

/// The owned, explicit state of one editing session.
///
/// One instance per edit form; the session owns the single mutable copy
/// of the ticket-type collection between load and successful submit.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The event whose ticket types are being edited
    pub event_id: EventId,

    /// Current lifecycle phase
    pub phase: SessionPhase,

    /// The ordered edit buffer
    pub tickets: Vec<TicketTypeDraft>,

    /// Flips on the first submit action and never resets; whole-set
    /// validation is suppressed until then
    pub submit_attempted: bool,

    /// Latest validation findings (empty until a submit attempt)
    pub report: ValidationReport,

    /// Latest policy rejection, e.g. removing a persisted ticket type
    pub last_rejection: Option<PolicyError>,

    /// Latest load/submit failure message for user display
    pub last_error: Option<String>,

    /// When the edit buffer was populated from the remote listing
    pub loaded_at: Option<DateTime<Utc>>,
}

impl EditorState {
    /// Creates a fresh idle session for an event
    #[must_use]
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            phase: SessionPhase::Idle,
            tickets: Vec::new(),
            submit_attempted: false,
            report: ValidationReport::empty(),
            last_rejection: None,
            last_error: None,
            loaded_at: None,
        }
    }

    /// Looks up a draft by surrogate key
    #[must_use]
    pub fn ticket(&self, key: TicketKey) -> Option<&TicketTypeDraft> {
        self.tickets.iter().find(|draft| draft.key == key)
    }

    /// Looks up a draft by surrogate key, mutably
    pub fn ticket_mut(&mut self, key: TicketKey) -> Option<&mut TicketTypeDraft> {
        self.tickets.iter_mut().find(|draft| draft.key == key)
    }

    /// Number of drafts in the edit buffer
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// True when the edit buffer holds no drafts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
