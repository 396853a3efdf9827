//! # Quote Request Status
//!
//! Top-level lifecycle state machine for a quote request.
//!
//! # State Machine
//!
//! ```text
//! Pending → InProgress ─┬→ Accepted
//!     │        │        ├→ Cancelled
//!     │        │        └→ Completed
//!     └────────┴→ Accepted/Cancelled/Completed
//! ```
//!
//! `Accepted`, `Cancelled` and `Completed` are terminal: a quote request in
//! one of those states is *finalized* and accepts no further mutation.
//!
//! # Examples
//!
//! ```
//! use freight_rfq::domain::value_objects::quote_request_status::QuoteRequestStatus;
//!
//! let status = QuoteRequestStatus::Pending;
//! assert!(status.can_transition_to(QuoteRequestStatus::Accepted));
//! assert!(!status.is_finalized());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a quote request aggregate.
///
/// In the canonical flow the top-level status changes only on accept or
/// cancel; responder submissions mutate the assignments without moving the
/// aggregate out of `Pending`. `InProgress` and `Completed` are part of the
/// status lattice and storage format but are not produced by any canonical
/// workflow operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteRequestStatus {
    /// Created, awaiting responder submissions.
    #[default]
    Pending,

    /// Responses are being worked; not yet finalized.
    InProgress,

    /// One response was accepted (terminal).
    Accepted,

    /// Withdrawn by the requester (terminal).
    Cancelled,

    /// Workflow closed out (terminal).
    Completed,
}

impl QuoteRequestStatus {
    /// Returns true if this status finalizes the aggregate.
    ///
    /// A finalized quote request permits reads only; every mutating
    /// operation fails with `AlreadyFinalized`.
    #[inline]
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        matches!(self, Self::Accepted | Self::Cancelled | Self::Completed)
    }

    /// Returns true if this status can transition to the target status.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InProgress)
                | (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Cancelled)
                | (Self::Pending, Self::Completed)
                | (Self::InProgress, Self::Accepted)
                | (Self::InProgress, Self::Cancelled)
                | (Self::InProgress, Self::Completed)
        )
    }

    /// Returns the valid next statuses from this status.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::Pending => vec![
                Self::InProgress,
                Self::Accepted,
                Self::Cancelled,
                Self::Completed,
            ],
            Self::InProgress => vec![Self::Accepted, Self::Cancelled, Self::Completed],
            Self::Accepted | Self::Cancelled | Self::Completed => vec![],
        }
    }
}

impl fmt::Display for QuoteRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Accepted => "ACCEPTED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ALL: [QuoteRequestStatus; 5] = [
        QuoteRequestStatus::Pending,
        QuoteRequestStatus::InProgress,
        QuoteRequestStatus::Accepted,
        QuoteRequestStatus::Cancelled,
        QuoteRequestStatus::Completed,
    ];

    mod finalized {
        use super::*;

        #[test]
        fn terminal_statuses_are_finalized() {
            assert!(QuoteRequestStatus::Accepted.is_finalized());
            assert!(QuoteRequestStatus::Cancelled.is_finalized());
            assert!(QuoteRequestStatus::Completed.is_finalized());
        }

        #[test]
        fn open_statuses_are_not_finalized() {
            assert!(!QuoteRequestStatus::Pending.is_finalized());
            assert!(!QuoteRequestStatus::InProgress.is_finalized());
        }
    }

    mod transitions {
        use super::*;

        #[test]
        fn pending_transitions() {
            let status = QuoteRequestStatus::Pending;
            assert!(status.can_transition_to(QuoteRequestStatus::InProgress));
            assert!(status.can_transition_to(QuoteRequestStatus::Accepted));
            assert!(status.can_transition_to(QuoteRequestStatus::Cancelled));
            assert!(!status.can_transition_to(QuoteRequestStatus::Pending));
        }

        #[test]
        fn in_progress_transitions() {
            let status = QuoteRequestStatus::InProgress;
            assert!(status.can_transition_to(QuoteRequestStatus::Accepted));
            assert!(status.can_transition_to(QuoteRequestStatus::Cancelled));
            assert!(!status.can_transition_to(QuoteRequestStatus::Pending));
        }

        #[test]
        fn finalized_statuses_cannot_transition() {
            for terminal in [
                QuoteRequestStatus::Accepted,
                QuoteRequestStatus::Cancelled,
                QuoteRequestStatus::Completed,
            ] {
                for target in ALL {
                    assert!(
                        !terminal.can_transition_to(target),
                        "{:?} should not transition to {:?}",
                        terminal,
                        target
                    );
                }
            }
        }

        #[test]
        fn valid_transitions_match_can_transition_to() {
            for status in ALL {
                for target in ALL {
                    assert_eq!(
                        status.valid_transitions().contains(&target),
                        status.can_transition_to(target)
                    );
                }
            }
        }
    }

    mod display_and_serde {
        use super::*;

        #[test]
        fn display_format() {
            assert_eq!(QuoteRequestStatus::Pending.to_string(), "PENDING");
            assert_eq!(QuoteRequestStatus::InProgress.to_string(), "IN_PROGRESS");
            assert_eq!(QuoteRequestStatus::Accepted.to_string(), "ACCEPTED");
            assert_eq!(QuoteRequestStatus::Cancelled.to_string(), "CANCELLED");
            assert_eq!(QuoteRequestStatus::Completed.to_string(), "COMPLETED");
        }

        #[test]
        fn serde_roundtrip() {
            for status in ALL {
                let json = serde_json::to_string(&status).unwrap();
                let deserialized: QuoteRequestStatus = serde_json::from_str(&json).unwrap();
                assert_eq!(status, deserialized);
            }
        }

        #[test]
        fn default_is_pending() {
            assert_eq!(QuoteRequestStatus::default(), QuoteRequestStatus::Pending);
        }
    }
}
