//! # Notification
//!
//! Per-tenant notification record materialized from workflow events.
//!
//! Notifications are the read-side product of the event stream: each
//! workflow event fans out into one record per affected tenant. Because the
//! bus delivers at-least-once, records are keyed by
//! (kind, quote request, tenant) so a redelivered event upserts instead of
//! duplicating.

use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{NotificationId, QuoteRequestId, TenantId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// A responder was invited to a new quote request.
    QuoteRequestCreated,
    /// A responder submitted a priced response.
    ResponseSubmitted,
    /// The tenant's response was accepted.
    ResponseAccepted,
    /// The tenant's response was rejected.
    ResponseRejected,
    /// A quote request the tenant was assigned to was cancelled.
    QuoteRequestCancelled,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::QuoteRequestCreated => "QUOTE_REQUEST_CREATED",
            Self::ResponseSubmitted => "RESPONSE_SUBMITTED",
            Self::ResponseAccepted => "RESPONSE_ACCEPTED",
            Self::ResponseRejected => "RESPONSE_REJECTED",
            Self::QuoteRequestCancelled => "QUOTE_REQUEST_CANCELLED",
        };
        write!(f, "{}", s)
    }
}

/// Identity under which redelivered events collapse into one record.
pub type NotificationKey = (NotificationKind, QuoteRequestId, TenantId);

/// A notification record for one tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    tenant_id: TenantId,
    kind: NotificationKind,
    title: String,
    body: String,
    quote_request_id: QuoteRequestId,
    metadata: Option<serde_json::Value>,
    read: bool,
    created_at: Timestamp,
}

impl Notification {
    /// Creates an unread notification.
    #[must_use]
    pub fn new(
        tenant_id: TenantId,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        quote_request_id: QuoteRequestId,
    ) -> Self {
        Self {
            id: NotificationId::new_v4(),
            tenant_id,
            kind,
            title: title.into(),
            body: body.into(),
            quote_request_id,
            metadata: None,
            read: false,
            created_at: Timestamp::now(),
        }
    }

    /// Attaches free-form metadata (event context consumers may need later).
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns the notification ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the tenant this notification targets.
    #[inline]
    #[must_use]
    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Returns what this notification is about.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the short title.
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the quote request this notification refers to.
    #[inline]
    #[must_use]
    pub fn quote_request_id(&self) -> QuoteRequestId {
        self.quote_request_id
    }

    /// Returns the attached metadata, if any.
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    /// Returns true if the tenant has read this notification.
    #[inline]
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Returns when this notification was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the idempotency key redelivered events collapse under.
    #[must_use]
    pub fn key(&self) -> NotificationKey {
        (self.kind, self.quote_request_id, self.tenant_id.clone())
    }

    /// Marks this notification as read.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
