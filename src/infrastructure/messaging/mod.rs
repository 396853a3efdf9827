//! # Messaging
//!
//! Event-publisher port and bus adapters.
//!
//! Workflow events go out on the `quote_events` topic with the event's
//! routing key as the subject suffix, wrapped in an [`EventEnvelope`] that
//! carries the message ID and publish timestamp consumers de-duplicate on.
//! Delivery is at-least-once; a publish failure after a successful save is
//! surfaced to the caller as partial success, never retried blindly here.

pub mod in_memory;
#[cfg(feature = "nats")]
pub mod nats;

pub use in_memory::InMemoryEventPublisher;
#[cfg(feature = "nats")]
pub use nats::NatsEventPublisher;

use crate::domain::events::quote_events::QuoteEvent;
use crate::domain::value_objects::{EventId, Timestamp};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Topic all workflow events are published under.
pub const QUOTE_EVENTS_TOPIC: &str = "quote_events";

/// Error type for event publishing.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The bus connection is unavailable.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The event could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The bus rejected or dropped the message.
    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl PublishError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a delivery error.
    #[must_use]
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery(msg.into())
    }
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Message envelope published as the bus message body.
///
/// Mirrors the event's identity so consumers can de-duplicate without
/// parsing the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique message ID (the event's ID).
    pub id: EventId,
    /// Routing key the message was published under.
    pub routing_key: String,
    /// When the message was published.
    pub published_at: Timestamp,
    /// The event payload.
    pub payload: QuoteEvent,
}

impl EventEnvelope {
    /// Wraps an event for publication, stamping the publish time.
    #[must_use]
    pub fn new(event: &QuoteEvent) -> Self {
        Self {
            id: event.event_id(),
            routing_key: event.routing_key().to_string(),
            published_at: Timestamp::now(),
            payload: event.clone(),
        }
    }
}

/// Port for publishing workflow events to the topic-based bus.
///
/// Implementations provide at-least-once delivery; the orchestration layer
/// calls [`publish`](EventPublisher::publish) only after a successful save.
#[async_trait]
pub trait EventPublisher: Send + Sync + fmt::Debug {
    /// Publishes one event under its routing key.
    ///
    /// # Errors
    ///
    /// Returns a [`PublishError`] if serialization or delivery fails.
    async fn publish(&self, event: &QuoteEvent) -> PublishResult<()>;
}
