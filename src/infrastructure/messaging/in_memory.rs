//! # In-Memory Event Publisher
//!
//! Records published envelopes instead of hitting a bus; drives the
//! projection directly in tests and examples.

use crate::domain::events::quote_events::QuoteEvent;
use crate::infrastructure::messaging::{EventEnvelope, EventPublisher, PublishResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`EventPublisher`].
///
/// Clones share the same buffer, so a test can hand the publisher to the
/// orchestration service and later inspect what was published.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventPublisher {
    published: Arc<RwLock<Vec<EventEnvelope>>>,
}

impl InMemoryEventPublisher {
    /// Creates a new publisher with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every envelope published so far, in order.
    pub async fn published(&self) -> Vec<EventEnvelope> {
        self.published.read().await.clone()
    }

    /// Returns the routing keys published so far, in order.
    pub async fn routing_keys(&self) -> Vec<String> {
        self.published
            .read()
            .await
            .iter()
            .map(|e| e.routing_key.clone())
            .collect()
    }

    /// Returns the number of published envelopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.published
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every recorded envelope.
    pub async fn clear(&self) {
        self.published.write().await.clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: &QuoteEvent) -> PublishResult<()> {
        let envelope = EventEnvelope::new(event);
        self.published.write().await.push(envelope);
        Ok(())
    }
}
