//! # NATS Event Publisher
//!
//! NATS implementation of [`EventPublisher`], enabled by the `nats` feature.
//!
//! Subjects follow `quote_events.<routing key>`, giving subscribers the
//! same pattern-matching semantics a topic exchange provides (e.g.
//! subscribe to `quote_events.quote_request.*`).

use crate::domain::events::quote_events::QuoteEvent;
use crate::infrastructure::messaging::{
    EventEnvelope, EventPublisher, PublishError, PublishResult, QUOTE_EVENTS_TOPIC,
};
use async_trait::async_trait;
use tracing::debug;

/// NATS implementation of [`EventPublisher`].
#[derive(Debug, Clone)]
pub struct NatsEventPublisher {
    client: async_nats::Client,
    subject_prefix: String,
}

impl NatsEventPublisher {
    /// Creates a publisher over an existing NATS client using the default
    /// `quote_events` subject prefix.
    #[must_use]
    pub fn new(client: async_nats::Client) -> Self {
        Self::with_prefix(client, QUOTE_EVENTS_TOPIC)
    }

    /// Creates a publisher with a custom subject prefix.
    #[must_use]
    pub fn with_prefix(client: async_nats::Client, subject_prefix: impl Into<String>) -> Self {
        Self {
            client,
            subject_prefix: subject_prefix.into(),
        }
    }

    /// Connects to a NATS server and wraps the client.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::Connection` if the server is unreachable.
    pub async fn connect(url: &str) -> PublishResult<Self> {
        let client = async_nats::connect(url)
            .await
            .map_err(|e| PublishError::connection(e.to_string()))?;
        Ok(Self::new(client))
    }

    fn subject_for(&self, event: &QuoteEvent) -> String {
        format!("{}.{}", self.subject_prefix, event.routing_key())
    }
}

#[async_trait]
impl EventPublisher for NatsEventPublisher {
    async fn publish(&self, event: &QuoteEvent) -> PublishResult<()> {
        let envelope = EventEnvelope::new(event);
        let body = serde_json::to_vec(&envelope)
            .map_err(|e| PublishError::serialization(e.to_string()))?;
        let subject = self.subject_for(event);

        self.client
            .publish(subject.clone(), body.into())
            .await
            .map_err(|e| PublishError::delivery(e.to_string()))?;

        debug!(subject = %subject, event_id = %envelope.id, "published workflow event");
        Ok(())
    }
}
