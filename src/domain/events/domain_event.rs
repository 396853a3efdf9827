//! # Domain Event Trait
//!
//! Base trait and shared metadata for workflow events.
//!
//! Every event carries an [`EventId`] and a creation timestamp so that
//! consumers on an at-least-once bus can de-duplicate redeliveries, plus
//! the ID of the quote request it belongs to.

use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{EventId, QuoteRequestId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for all workflow events.
///
/// Events are immutable records of a committed state transition; they are
/// published only after the aggregate's new state has been persisted.
pub trait DomainEvent: Send + Sync + fmt::Debug {
    /// Returns the unique identifier for this event.
    fn event_id(&self) -> EventId;

    /// Returns the quote request this event relates to.
    fn quote_request_id(&self) -> QuoteRequestId;

    /// Returns when this event was created.
    fn timestamp(&self) -> Timestamp;

    /// Returns the routing key this event is published under.
    fn routing_key(&self) -> &'static str;
}

/// Common metadata embedded in every concrete event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique identifier for this event.
    pub event_id: EventId,
    /// The quote request this event relates to.
    pub quote_request_id: QuoteRequestId,
    /// When this event was created.
    pub timestamp: Timestamp,
}

impl EventMetadata {
    /// Creates metadata for a quote request with a generated event ID.
    #[must_use]
    pub fn new(quote_request_id: QuoteRequestId) -> Self {
        Self {
            event_id: EventId::new_v4(),
            quote_request_id,
            timestamp: Timestamp::now(),
        }
    }

    /// Creates metadata with specific values (for reconstruction).
    #[must_use]
    pub fn from_parts(
        event_id: EventId,
        quote_request_id: QuoteRequestId,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            event_id,
            quote_request_id,
            timestamp,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn metadata_new_generates_event_id() {
        let quote_request_id = QuoteRequestId::new_v4();
        let a = EventMetadata::new(quote_request_id);
        let b = EventMetadata::new(quote_request_id);
        assert_ne!(a.event_id, b.event_id);
        assert_eq!(a.quote_request_id, quote_request_id);
    }

    #[test]
    fn metadata_serde_roundtrip() {
        let metadata = EventMetadata::new(QuoteRequestId::new_v4());
        let json = serde_json::to_string(&metadata).unwrap();
        let deserialized: EventMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, deserialized);
    }
}
