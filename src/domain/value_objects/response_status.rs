//! # Response Status
//!
//! Lifecycle state machine for one responder's assignment.
//!
//! # State Machine
//!
//! ```text
//! Pending → Submitted → Accepted
//!    │          ├─────→ Rejected
//!    └──────────┴─────→ Cancelled
//! ```
//!
//! `Accepted`, `Rejected` and `Cancelled` are terminal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a responder assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    /// Invited, no response yet.
    #[default]
    Pending,

    /// Priced response submitted, awaiting the requester's decision.
    Submitted,

    /// Response chosen by the requester (terminal).
    Accepted,

    /// Response passed over when another won (terminal).
    Rejected,

    /// Assignment cancelled with the quote request (terminal).
    Cancelled,
}

impl ResponseStatus {
    /// Returns true if this is a terminal status.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected | Self::Cancelled)
    }

    /// Returns true if this status can transition to the target status.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Submitted)
                | (Self::Pending, Self::Cancelled)
                | (Self::Submitted, Self::Accepted)
                | (Self::Submitted, Self::Rejected)
                | (Self::Submitted, Self::Cancelled)
        )
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Submitted => "SUBMITTED",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        };
        write!(f, "{}", s)
    }
}
