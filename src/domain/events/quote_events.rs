//! # Quote Request Events
//!
//! Workflow events published to the `quote_events` topic.
//!
//! | Routing key | Emitted when |
//! |---|---|
//! | `quote_request.created` | A quote request and its assignments were persisted |
//! | `quote_request.response_submitted` | A responder's priced response was saved |
//! | `quote_request.response_accepted` | One response won, the rest were rejected |
//! | `quote_request.cancelled` | The requester withdrew the quote request |
//!
//! Delivery is at-least-once; consumers de-duplicate per event ID or per
//! (quote request, routing key).

use crate::domain::events::domain_event::{DomainEvent, EventMetadata};
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{EventId, Price, QuoteRequestId, TenantId, VoyageData};
use serde::{Deserialize, Serialize};

/// Routing key for [`QuoteRequestCreated`].
pub const QUOTE_REQUEST_CREATED: &str = "quote_request.created";
/// Routing key for [`ResponseSubmitted`].
pub const RESPONSE_SUBMITTED: &str = "quote_request.response_submitted";
/// Routing key for [`ResponseAccepted`].
pub const RESPONSE_ACCEPTED: &str = "quote_request.response_accepted";
/// Routing key for [`QuoteRequestCancelled`].
pub const QUOTE_REQUEST_CANCELLED: &str = "quote_request.cancelled";

/// Event emitted when a new quote request is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequestCreated {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// The tenant that opened the quote request.
    pub requester_id: TenantId,
    /// Every invited responder.
    pub responder_ids: Vec<TenantId>,
    /// The voyage to be quoted.
    pub voyage_data: VoyageData,
}

impl QuoteRequestCreated {
    /// Creates a new QuoteRequestCreated event.
    #[must_use]
    pub fn new(
        quote_request_id: QuoteRequestId,
        requester_id: TenantId,
        responder_ids: Vec<TenantId>,
        voyage_data: VoyageData,
    ) -> Self {
        Self {
            metadata: EventMetadata::new(quote_request_id),
            requester_id,
            responder_ids,
            voyage_data,
        }
    }
}

impl DomainEvent for QuoteRequestCreated {
    fn event_id(&self) -> EventId {
        self.metadata.event_id
    }

    fn quote_request_id(&self) -> QuoteRequestId {
        self.metadata.quote_request_id
    }

    fn timestamp(&self) -> Timestamp {
        self.metadata.timestamp
    }

    fn routing_key(&self) -> &'static str {
        QUOTE_REQUEST_CREATED
    }
}

/// Event emitted when a responder submits a priced response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSubmitted {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// The responder that submitted.
    pub responder_id: TenantId,
    /// The quoted price.
    pub price: Price,
    /// Free-text comments accompanying the quote.
    pub comments: String,
}

impl ResponseSubmitted {
    /// Creates a new ResponseSubmitted event.
    #[must_use]
    pub fn new(
        quote_request_id: QuoteRequestId,
        responder_id: TenantId,
        price: Price,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            metadata: EventMetadata::new(quote_request_id),
            responder_id,
            price,
            comments: comments.into(),
        }
    }
}

impl DomainEvent for ResponseSubmitted {
    fn event_id(&self) -> EventId {
        self.metadata.event_id
    }

    fn quote_request_id(&self) -> QuoteRequestId {
        self.metadata.quote_request_id
    }

    fn timestamp(&self) -> Timestamp {
        self.metadata.timestamp
    }

    fn routing_key(&self) -> &'static str {
        RESPONSE_SUBMITTED
    }
}

/// Event emitted when the requester accepts one response.
///
/// Carries the full outcome of the atomic transition: the winner plus every
/// responder whose submitted response was rejected in the same commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseAccepted {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// The responder whose response won.
    pub responder_id: TenantId,
    /// Responders whose submitted responses were rejected.
    pub rejected_responder_ids: Vec<TenantId>,
}

impl ResponseAccepted {
    /// Creates a new ResponseAccepted event.
    #[must_use]
    pub fn new(
        quote_request_id: QuoteRequestId,
        responder_id: TenantId,
        rejected_responder_ids: Vec<TenantId>,
    ) -> Self {
        Self {
            metadata: EventMetadata::new(quote_request_id),
            responder_id,
            rejected_responder_ids,
        }
    }
}

impl DomainEvent for ResponseAccepted {
    fn event_id(&self) -> EventId {
        self.metadata.event_id
    }

    fn quote_request_id(&self) -> QuoteRequestId {
        self.metadata.quote_request_id
    }

    fn timestamp(&self) -> Timestamp {
        self.metadata.timestamp
    }

    fn routing_key(&self) -> &'static str {
        RESPONSE_ACCEPTED
    }
}

/// Event emitted when the requester cancels a quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequestCancelled {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Every responder that was assigned to the request.
    pub responder_ids: Vec<TenantId>,
}

impl QuoteRequestCancelled {
    /// Creates a new QuoteRequestCancelled event.
    #[must_use]
    pub fn new(quote_request_id: QuoteRequestId, responder_ids: Vec<TenantId>) -> Self {
        Self {
            metadata: EventMetadata::new(quote_request_id),
            responder_ids,
        }
    }
}

impl DomainEvent for QuoteRequestCancelled {
    fn event_id(&self) -> EventId {
        self.metadata.event_id
    }

    fn quote_request_id(&self) -> QuoteRequestId {
        self.metadata.quote_request_id
    }

    fn timestamp(&self) -> Timestamp {
        self.metadata.timestamp
    }

    fn routing_key(&self) -> &'static str {
        QUOTE_REQUEST_CANCELLED
    }
}

/// Closed set of workflow events, one variant per routing key.
///
/// The publisher serializes the variant payload as the message body and
/// uses [`QuoteEvent::routing_key`] as the bus subject suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuoteEvent {
    /// A quote request was created.
    Created(QuoteRequestCreated),
    /// A responder submitted a response.
    ResponseSubmitted(ResponseSubmitted),
    /// A response was accepted.
    ResponseAccepted(ResponseAccepted),
    /// A quote request was cancelled.
    Cancelled(QuoteRequestCancelled),
}

impl QuoteEvent {
    /// Returns the routing key for this event.
    #[must_use]
    pub fn routing_key(&self) -> &'static str {
        match self {
            Self::Created(e) => e.routing_key(),
            Self::ResponseSubmitted(e) => e.routing_key(),
            Self::ResponseAccepted(e) => e.routing_key(),
            Self::Cancelled(e) => e.routing_key(),
        }
    }

    /// Returns the unique event ID.
    #[must_use]
    pub fn event_id(&self) -> EventId {
        match self {
            Self::Created(e) => e.event_id(),
            Self::ResponseSubmitted(e) => e.event_id(),
            Self::ResponseAccepted(e) => e.event_id(),
            Self::Cancelled(e) => e.event_id(),
        }
    }

    /// Returns the quote request this event relates to.
    #[must_use]
    pub fn quote_request_id(&self) -> QuoteRequestId {
        match self {
            Self::Created(e) => e.quote_request_id(),
            Self::ResponseSubmitted(e) => e.quote_request_id(),
            Self::ResponseAccepted(e) => e.quote_request_id(),
            Self::Cancelled(e) => e.quote_request_id(),
        }
    }

    /// Returns when this event was created.
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Created(e) => e.timestamp(),
            Self::ResponseSubmitted(e) => e.timestamp(),
            Self::ResponseAccepted(e) => e.timestamp(),
            Self::Cancelled(e) => e.timestamp(),
        }
    }
}
