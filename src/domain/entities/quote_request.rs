//! # Quote Request Aggregate Root
//!
//! The quote request aggregate manages the multi-party quoting workflow.
//!
//! A requester tenant opens a quote request for a voyage and invites a set
//! of responder tenants; each invitation is tracked by an owned
//! [`ResponderAssignment`]. Responders submit priced responses, the
//! requester accepts exactly one (rejecting the other submitted ones), or
//! cancels the whole request. The aggregate is the consistency boundary:
//! assignments are only ever mutated through its methods.
//!
//! # State Machine
//!
//! ```text
//! Pending ──accept_response──→ Accepted
//!    │
//!    └────────cancel─────────→ Cancelled
//! ```
//!
//! Responder submissions do not move the top-level status; they live on the
//! assignments.
//!
//! # Invariants
//!
//! - Responder IDs are unique within one quote request.
//! - At most one assignment is ever `Accepted`.
//! - A finalized quote request (`Accepted`/`Cancelled`/`Completed`) accepts
//!   no further mutation.
//! - An assignment is only accepted from `Submitted` while the aggregate is
//!   not finalized.
//!
//! # Examples
//!
//! ```
//! use freight_rfq::domain::entities::quote_request::QuoteRequest;
//! use freight_rfq::domain::value_objects::{
//!     CargoType, Port, Price, TenantId, Timestamp, VesselType, VoyageData,
//! };
//!
//! let voyage = VoyageData::new(
//!     Port::new("NLRTM", "Rotterdam").unwrap(),
//!     Port::new("SGSIN", "Singapore").unwrap(),
//!     CargoType::Container,
//!     18_500.0,
//!     VesselType::ContainerShip,
//!     Timestamp::now().add_secs(86_400),
//! )
//! .unwrap();
//!
//! let mut request = QuoteRequest::new(
//!     TenantId::new("shipper-atlantic"),
//!     voyage,
//!     &[TenantId::new("carrier-a"), TenantId::new("carrier-b")],
//! )
//! .unwrap();
//!
//! request
//!     .submit_response(&TenantId::new("carrier-a"), Price::from_major_units(1000).unwrap(), "ok")
//!     .unwrap();
//! request.accept_response(&TenantId::new("carrier-a")).unwrap();
//! assert!(request.is_finalized());
//! ```

use crate::domain::entities::responder_assignment::ResponderAssignment;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{
    Price, QuoteRequestId, QuoteRequestStatus, ResponseStatus, TenantId, VoyageData,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quote request aggregate root.
///
/// Owns an ordered collection of [`ResponderAssignment`]s, one per invited
/// responder, keyed by responder tenant ID. All workflow rules are enforced
/// here; callers never mutate assignments directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    id: QuoteRequestId,
    requester_id: TenantId,
    voyage_data: VoyageData,
    status: QuoteRequestStatus,
    responder_assignments: Vec<ResponderAssignment>,
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl QuoteRequest {
    /// Creates a pending quote request together with its full set of
    /// responder assignments, as one atomic operation.
    ///
    /// Responders are never added one-by-one later; the set supplied here
    /// is the complete invitation list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if `responder_ids` is empty,
    /// or `DomainError::DuplicateResponder` if an ID repeats.
    pub fn new(
        requester_id: TenantId,
        voyage_data: VoyageData,
        responder_ids: &[TenantId],
    ) -> DomainResult<Self> {
        if responder_ids.is_empty() {
            return Err(DomainError::ValidationError(
                "at least one responder must be invited".to_string(),
            ));
        }

        let now = Timestamp::now();
        let mut request = Self {
            id: QuoteRequestId::new_v4(),
            requester_id,
            voyage_data,
            status: QuoteRequestStatus::Pending,
            responder_assignments: Vec::with_capacity(responder_ids.len()),
            version: 1,
            created_at: now,
            updated_at: now,
        };
        request.add_responders(responder_ids)?;
        Ok(request)
    }

    /// Reconstructs a quote request from stored parts.
    ///
    /// Bypasses validation; use only when loading from trusted storage.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: QuoteRequestId,
        requester_id: TenantId,
        voyage_data: VoyageData,
        status: QuoteRequestStatus,
        responder_assignments: Vec<ResponderAssignment>,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            requester_id,
            voyage_data,
            status,
            responder_assignments,
            version,
            created_at,
            updated_at,
        }
    }

    fn transition_to(&mut self, target: QuoteRequestStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
        self.version = self.version.saturating_add(1);
    }

    fn ensure_open(&self) -> DomainResult<()> {
        if self.is_finalized() {
            return Err(DomainError::AlreadyFinalized {
                quote_request_id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    // ========== Accessors ==========

    /// Returns the quote request ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> QuoteRequestId {
        self.id
    }

    /// Returns the requester's tenant ID.
    #[inline]
    #[must_use]
    pub fn requester_id(&self) -> &TenantId {
        &self.requester_id
    }

    /// Returns the voyage description.
    #[inline]
    #[must_use]
    pub fn voyage_data(&self) -> &VoyageData {
        &self.voyage_data
    }

    /// Returns the current status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> QuoteRequestStatus {
        self.status
    }

    /// Returns the responder assignments in insertion order.
    #[inline]
    #[must_use]
    pub fn responder_assignments(&self) -> &[ResponderAssignment] {
        &self.responder_assignments
    }

    /// Returns all invited responder IDs in insertion order.
    #[must_use]
    pub fn responder_ids(&self) -> Vec<TenantId> {
        self.responder_assignments
            .iter()
            .map(|a| a.responder_id().clone())
            .collect()
    }

    /// Returns the version for optimistic locking.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns when this quote request was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when this quote request was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ========== Queries ==========

    /// Returns true iff the status is terminal (`Accepted`, `Cancelled` or
    /// `Completed`); a finalized quote request permits reads only.
    #[inline]
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.status.is_finalized()
    }

    /// Looks up the assignment for a responder, if one exists.
    #[must_use]
    pub fn find_responder(&self, responder_id: &TenantId) -> Option<&ResponderAssignment> {
        self.responder_assignments
            .iter()
            .find(|a| a.responder_id() == responder_id)
    }

    /// Returns the winning assignment, if one response was accepted.
    #[must_use]
    pub fn accepted_assignment(&self) -> Option<&ResponderAssignment> {
        self.responder_assignments
            .iter()
            .find(|a| a.status() == ResponseStatus::Accepted)
    }

    /// Returns the responder IDs whose submitted responses were rejected.
    #[must_use]
    pub fn rejected_responder_ids(&self) -> Vec<TenantId> {
        self.responder_assignments
            .iter()
            .filter(|a| a.status() == ResponseStatus::Rejected)
            .map(|a| a.responder_id().clone())
            .collect()
    }

    // ========== Mutations ==========

    /// Builds one pending assignment per responder ID.
    ///
    /// Only meaningful at creation time; [`QuoteRequest::new`] calls this
    /// with the full invitation set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateResponder` if an ID repeats within
    /// the call or already exists on the aggregate.
    pub fn add_responders(&mut self, responder_ids: &[TenantId]) -> DomainResult<()> {
        for responder_id in responder_ids {
            if self.find_responder(responder_id).is_some() {
                return Err(DomainError::DuplicateResponder {
                    responder_id: responder_id.clone(),
                });
            }
            self.responder_assignments
                .push(ResponderAssignment::new(self.id, responder_id.clone()));
        }
        Ok(())
    }

    /// Records a responder's priced response.
    ///
    /// The top-level status is untouched; only the matching assignment
    /// moves to `Submitted`.
    ///
    /// # Errors
    ///
    /// - `DomainError::AlreadyFinalized` if the quote request is finalized.
    /// - `DomainError::ResponderNotFound` if no assignment matches.
    /// - `DomainError::AlreadySubmitted` if the responder already submitted.
    /// - `DomainError::InvalidResponderState` if the assignment was cancelled.
    pub fn submit_response(
        &mut self,
        responder_id: &TenantId,
        price: Price,
        comments: impl Into<String>,
    ) -> DomainResult<()> {
        self.ensure_open()?;

        let id = self.id;
        let assignment = self
            .responder_assignments
            .iter_mut()
            .find(|a| a.responder_id() == responder_id)
            .ok_or_else(|| DomainError::ResponderNotFound {
                quote_request_id: id,
                responder_id: responder_id.clone(),
            })?;

        match assignment.status() {
            ResponseStatus::Submitted | ResponseStatus::Accepted | ResponseStatus::Rejected => {
                return Err(DomainError::AlreadySubmitted {
                    quote_request_id: id,
                    responder_id: responder_id.clone(),
                });
            }
            _ => assignment.submit_response(price, comments)?,
        }

        self.touch();
        Ok(())
    }

    /// Accepts one responder's submitted response, rejecting every other
    /// submitted response in the same atomic transition.
    ///
    /// Exactly one responder wins. Assignments still `Pending` are left
    /// untouched; the rejection fan-out walks the remaining assignments in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// - `DomainError::AlreadyFinalized` if the quote request is finalized.
    /// - `DomainError::ResponderNotFound` if no assignment matches.
    /// - `DomainError::InvalidResponderState` if the matching assignment has
    ///   not reached `Submitted`.
    pub fn accept_response(&mut self, responder_id: &TenantId) -> DomainResult<()> {
        self.ensure_open()?;

        let (winner, winner_status) = self
            .responder_assignments
            .iter()
            .enumerate()
            .find(|(_, a)| a.responder_id() == responder_id)
            .map(|(index, a)| (index, a.status()))
            .ok_or_else(|| DomainError::ResponderNotFound {
                quote_request_id: self.id,
                responder_id: responder_id.clone(),
            })?;

        // Validate before mutating anything so the transition is all-or-nothing.
        if winner_status != ResponseStatus::Submitted {
            return Err(DomainError::InvalidResponderState {
                responder_id: responder_id.clone(),
                current: winner_status,
                required: ResponseStatus::Submitted,
            });
        }

        self.transition_to(QuoteRequestStatus::Accepted)?;
        for (index, assignment) in self.responder_assignments.iter_mut().enumerate() {
            if index == winner {
                assignment.accept()?;
            } else if assignment.has_submitted_response() {
                assignment.reject()?;
            }
        }
        Ok(())
    }

    /// Cancels the quote request and every assignment that is not already
    /// in a terminal state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyFinalized` if already finalized.
    pub fn cancel(&mut self) -> DomainResult<()> {
        self.ensure_open()?;

        self.transition_to(QuoteRequestStatus::Cancelled)?;
        for assignment in &mut self.responder_assignments {
            if !assignment.status().is_terminal() {
                assignment.cancel()?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for QuoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuoteRequest({} requester={} {} responders={} [{}])",
            self.id,
            self.requester_id,
            self.voyage_data,
            self.responder_assignments.len(),
            self.status
        )
    }
}
