//! # Notification Projection
//!
//! Consumer side of the `quote_events` topic: reacts to workflow events by
//! materializing per-tenant notification records.
//!
//! The bus delivers at-least-once and may reorder across requests, so every
//! handler is an idempotent upsert keyed by (kind, quote request, tenant);
//! a redelivered event changes nothing. In production this runs in its own
//! deployable subscribed to `quote_events.quote_request.*`.

use crate::application::error::ApplicationResult;
use crate::domain::entities::notification::{Notification, NotificationKind};
use crate::domain::events::quote_events::{
    QuoteEvent, QuoteRequestCancelled, QuoteRequestCreated, ResponseAccepted, ResponseSubmitted,
};
use crate::domain::value_objects::TenantId;
use crate::infrastructure::persistence::traits::NotificationRepository;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Projects workflow events into notification records.
#[derive(Debug)]
pub struct NotificationProjection {
    repository: Arc<dyn NotificationRepository>,
}

impl NotificationProjection {
    /// Creates the projection over its notification store.
    #[must_use]
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    /// Handles one delivered event.
    ///
    /// # Errors
    ///
    /// Returns a `Repository` error if the store is unavailable; the caller
    /// (the bus consumer loop) decides whether to redeliver.
    pub async fn handle(&self, event: &QuoteEvent) -> ApplicationResult<()> {
        match event {
            QuoteEvent::Created(e) => self.on_created(e).await,
            QuoteEvent::ResponseSubmitted(e) => self.on_response_submitted(e).await,
            QuoteEvent::ResponseAccepted(e) => self.on_response_accepted(e).await,
            QuoteEvent::Cancelled(e) => self.on_cancelled(e).await,
        }
    }

    /// One notification per invited responder. The requester ID rides along
    /// in the metadata so later events can be attributed without calling
    /// back into the quote service.
    async fn on_created(&self, event: &QuoteRequestCreated) -> ApplicationResult<()> {
        info!(quote_request_id = %event.metadata.quote_request_id, "handling quote request created");

        let body = format!(
            "You have received a new quote request for a voyage from {} to {}",
            event.voyage_data.departure_port().name(),
            event.voyage_data.destination_port().name(),
        );
        for responder_id in &event.responder_ids {
            let notification = Notification::new(
                responder_id.clone(),
                NotificationKind::QuoteRequestCreated,
                "New Quote Request",
                body.clone(),
                event.metadata.quote_request_id,
            )
            .with_metadata(serde_json::json!({
                "requesterId": event.requester_id.as_str(),
            }));
            self.upsert(notification).await?;
        }
        Ok(())
    }

    /// One notification for the requester, resolved from the metadata left
    /// on the responder's invitation record.
    async fn on_response_submitted(&self, event: &ResponseSubmitted) -> ApplicationResult<()> {
        info!(
            quote_request_id = %event.metadata.quote_request_id,
            responder_id = %event.responder_id,
            "handling quote response submitted"
        );

        let invitations = self
            .repository
            .find_by_tenant(&event.responder_id, Some(1), None)
            .await?;
        let requester_id = invitations
            .first()
            .and_then(|n| n.metadata())
            .and_then(|m| m.get("requesterId"))
            .and_then(|v| v.as_str())
            .map(TenantId::new);

        let Some(requester_id) = requester_id else {
            error!(
                quote_request_id = %event.metadata.quote_request_id,
                "could not resolve requester for submitted response"
            );
            return Ok(());
        };

        let notification = Notification::new(
            requester_id,
            NotificationKind::ResponseSubmitted,
            "Quote Response Received",
            format!(
                "A responder has submitted a quote of ${} for your request",
                event.price
            ),
            event.metadata.quote_request_id,
        )
        .with_metadata(serde_json::json!({
            "responderId": event.responder_id.as_str(),
            "price": event.price.to_string(),
            "comments": event.comments,
        }));
        self.upsert(notification).await
    }

    /// One notification for the winner, one per rejected responder.
    async fn on_response_accepted(&self, event: &ResponseAccepted) -> ApplicationResult<()> {
        info!(
            quote_request_id = %event.metadata.quote_request_id,
            responder_id = %event.responder_id,
            "handling quote response accepted"
        );

        let accepted = Notification::new(
            event.responder_id.clone(),
            NotificationKind::ResponseAccepted,
            "Quote Response Accepted",
            "Your quote response has been accepted",
            event.metadata.quote_request_id,
        );
        self.upsert(accepted).await?;

        for rejected_id in &event.rejected_responder_ids {
            let rejected = Notification::new(
                rejected_id.clone(),
                NotificationKind::ResponseRejected,
                "Quote Response Rejected",
                "Your quote response has been rejected",
                event.metadata.quote_request_id,
            );
            self.upsert(rejected).await?;
        }
        Ok(())
    }

    /// One notification per assigned responder.
    async fn on_cancelled(&self, event: &QuoteRequestCancelled) -> ApplicationResult<()> {
        info!(quote_request_id = %event.metadata.quote_request_id, "handling quote request cancelled");

        for responder_id in &event.responder_ids {
            let notification = Notification::new(
                responder_id.clone(),
                NotificationKind::QuoteRequestCancelled,
                "Quote Request Cancelled",
                "A quote request you were assigned to has been cancelled",
                event.metadata.quote_request_id,
            );
            self.upsert(notification).await?;
        }
        Ok(())
    }

    async fn upsert(&self, notification: Notification) -> ApplicationResult<()> {
        let inserted = self.repository.upsert(&notification).await?;
        if !inserted {
            debug!(
                tenant_id = %notification.tenant_id(),
                kind = %notification.kind(),
                "duplicate delivery ignored"
            );
        }
        Ok(())
    }
}
