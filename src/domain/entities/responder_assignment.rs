//! # Responder Assignment
//!
//! Per-responder sub-entity of a quote request.
//!
//! An assignment tracks one invited responder's response lifecycle:
//! `Pending → Submitted → {Accepted | Rejected}`, with cancellation
//! possible from `Pending` or `Submitted`. Assignments are exclusively
//! owned by their parent [`QuoteRequest`](crate::domain::entities::quote_request::QuoteRequest);
//! they are never persisted or mutated standalone, and the parent ID they
//! carry exists only for persistence joins.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{AssignmentId, Price, QuoteRequestId, ResponseStatus, TenantId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One responder's assignment within a quote request.
///
/// # Invariants
///
/// - `price` and `comments` are present once the status reaches `Submitted`.
/// - Terminal statuses (`Accepted`, `Rejected`, `Cancelled`) are never
///   overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderAssignment {
    id: AssignmentId,
    quote_request_id: QuoteRequestId,
    responder_id: TenantId,
    status: ResponseStatus,
    price: Option<Price>,
    comments: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ResponderAssignment {
    /// Creates a pending assignment for an invited responder.
    #[must_use]
    pub fn new(quote_request_id: QuoteRequestId, responder_id: TenantId) -> Self {
        let now = Timestamp::now();
        Self {
            id: AssignmentId::new_v4(),
            quote_request_id,
            responder_id,
            status: ResponseStatus::Pending,
            price: None,
            comments: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs an assignment from stored parts.
    ///
    /// Bypasses validation; use only when loading from trusted storage.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: AssignmentId,
        quote_request_id: QuoteRequestId,
        responder_id: TenantId,
        status: ResponseStatus,
        price: Option<Price>,
        comments: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            quote_request_id,
            responder_id,
            status,
            price,
            comments,
            created_at,
            updated_at,
        }
    }

    // ========== Accessors ==========

    /// Returns the assignment ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the parent quote request ID.
    #[inline]
    #[must_use]
    pub fn quote_request_id(&self) -> QuoteRequestId {
        self.quote_request_id
    }

    /// Returns the responder's tenant ID.
    #[inline]
    #[must_use]
    pub fn responder_id(&self) -> &TenantId {
        &self.responder_id
    }

    /// Returns the current status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Returns the quoted price, if a response was submitted.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price
    }

    /// Returns the response comments, if a response was submitted.
    #[inline]
    #[must_use]
    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    /// Returns when this assignment was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when this assignment was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns true iff a response has been submitted and is still awaiting
    /// the requester's decision.
    #[inline]
    #[must_use]
    pub fn has_submitted_response(&self) -> bool {
        self.status == ResponseStatus::Submitted
    }

    // ========== State Transitions ==========

    fn require(&self, required: ResponseStatus) -> DomainResult<()> {
        if self.status != required {
            return Err(DomainError::InvalidResponderState {
                responder_id: self.responder_id.clone(),
                current: self.status,
                required,
            });
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    /// Records the responder's priced response.
    ///
    /// Transitions: Pending → Submitted. Persistence is the owning
    /// aggregate's responsibility.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidResponderState` unless currently Pending.
    pub fn submit_response(
        &mut self,
        price: Price,
        comments: impl Into<String>,
    ) -> DomainResult<()> {
        self.require(ResponseStatus::Pending)?;
        self.price = Some(price);
        self.comments = Some(comments.into());
        self.status = ResponseStatus::Submitted;
        self.touch();
        Ok(())
    }

    /// Marks this response as the winner.
    ///
    /// Transitions: Submitted → Accepted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidResponderState` unless currently Submitted.
    pub fn accept(&mut self) -> DomainResult<()> {
        self.require(ResponseStatus::Submitted)?;
        self.status = ResponseStatus::Accepted;
        self.touch();
        Ok(())
    }

    /// Marks this response as passed over.
    ///
    /// Transitions: Submitted → Rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidResponderState` unless currently Submitted.
    pub fn reject(&mut self) -> DomainResult<()> {
        self.require(ResponseStatus::Submitted)?;
        self.status = ResponseStatus::Rejected;
        self.touch();
        Ok(())
    }

    /// Cancels this assignment.
    ///
    /// Transitions: Pending/Submitted → Cancelled. Terminal statuses are
    /// never overwritten.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidResponderState` if already Accepted,
    /// Rejected or Cancelled.
    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidResponderState {
                responder_id: self.responder_id.clone(),
                current: self.status,
                required: ResponseStatus::Pending,
            });
        }
        self.status = ResponseStatus::Cancelled;
        self.touch();
        Ok(())
    }
}

impl fmt::Display for ResponderAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assignment({} responder={} [{}])",
            self.id, self.responder_id, self.status
        )
    }
}
