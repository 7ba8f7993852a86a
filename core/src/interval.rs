//! Half-open time windows with validation predicates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sale window: an optional start and an optional end instant.
///
/// An unset endpoint means "not filled in yet", never "unbounded" - by
/// submission time both endpoints must be present and ordered, and the
/// validator reports anything else as an input error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// When the window opens (on-sale instant)
    pub start: Option<DateTime<Utc>>,
    /// When the window closes (off-sale instant)
    pub end: Option<DateTime<Utc>>,
}

impl Interval {
    /// An interval with neither endpoint set
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// An interval with both endpoints set
    #[must_use]
    pub const fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True iff both endpoints are set
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// True iff the interval is complete and `start < end` (strict)
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start < end,
            _ => false,
        }
    }

    /// True iff this window ends at or before `other` begins.
    ///
    /// Used for tier-ordering checks; endpoints that are unset make the
    /// question unanswerable and yield `false`.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        match (self.end, other.start) {
            (Some(end), Some(start)) => end <= start,
            _ => false,
        }
    }
}
