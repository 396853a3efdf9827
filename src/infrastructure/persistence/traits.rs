//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! This module defines the repository traits (ports) the orchestration and
//! projection layers depend on. Implementations can use different backends;
//! the crate ships PostgreSQL and in-memory ones. The aggregate is always
//! persisted as a unit: the quote request row and all of its responder
//! assignments load and save together.
//!
//! # Examples
//!
//! ```ignore
//! use freight_rfq::infrastructure::persistence::traits::QuoteRequestRepository;
//!
//! async fn open_requests(repo: &impl QuoteRequestRepository, requester: &TenantId) {
//!     let requests = repo.find_by_requester(requester).await.unwrap();
//!     println!("{} quote requests", requests.len());
//! }
//! ```

use crate::domain::entities::notification::Notification;
use crate::domain::entities::quote_request::QuoteRequest;
use crate::domain::value_objects::{NotificationId, QuoteRequestId, TenantId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
///
/// The orchestration layer never interprets storage-engine specifics; it
/// only distinguishes not-found, duplicate and version-conflict outcomes
/// from generic I/O failure.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Optimistic locking conflict.
    #[error("Version conflict: {entity_type} with id {id} has been modified")]
    VersionConflict {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
        /// Expected version.
        expected: u64,
        /// Actual version.
        actual: u64,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a version conflict error.
    #[must_use]
    pub fn version_conflict(
        entity_type: &'static str,
        id: impl Into<String>,
        expected: u64,
        actual: u64,
    ) -> Self {
        Self::VersionConflict {
            entity_type,
            id: id.into(),
            expected,
            actual,
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Returns true if this is a version conflict error.
    #[must_use]
    pub fn is_version_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for quote request aggregates.
///
/// Every operation treats the aggregate (quote request plus all responder
/// assignments) as one unit; sub-entities are never persisted standalone.
#[async_trait]
pub trait QuoteRequestRepository: Send + Sync + fmt::Debug {
    /// Persists a freshly constructed aggregate with all of its
    /// assignments as one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the ID already exists.
    async fn create(&self, quote_request: &QuoteRequest) -> RepositoryResult<QuoteRequest>;

    /// Gets a quote request by ID, including all of its assignments.
    ///
    /// Returns `None` if the quote request does not exist.
    async fn get(&self, id: &QuoteRequestId) -> RepositoryResult<Option<QuoteRequest>>;

    /// Finds quote requests created by a requester, newest first.
    async fn find_by_requester(&self, requester_id: &TenantId)
    -> RepositoryResult<Vec<QuoteRequest>>;

    /// Finds quote requests whose assignment for `responder_id` is still
    /// pending a response.
    async fn find_pending_by_responder(
        &self,
        responder_id: &TenantId,
    ) -> RepositoryResult<Vec<QuoteRequest>>;

    /// Saves a mutated aggregate as a full upsert, all assignments included,
    /// in one transaction.
    ///
    /// Uses optimistic locking via the version field: a writer that lost a
    /// race observes a conflict instead of silently overwriting.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::VersionConflict` if the stored aggregate
    /// has moved past the loaded version.
    async fn save(&self, quote_request: &QuoteRequest) -> RepositoryResult<QuoteRequest>;

    /// Deletes a quote request and its assignments.
    ///
    /// Returns `Ok(true)` if something was deleted, `Ok(false)` if the ID
    /// did not exist. Rare; not part of the primary workflow.
    async fn delete(&self, id: &QuoteRequestId) -> RepositoryResult<bool>;
}

/// Repository for notification records.
///
/// The write path is the projection's idempotent upsert; the read side is
/// the minimal per-tenant listing the notification API needs.
#[async_trait]
pub trait NotificationRepository: Send + Sync + fmt::Debug {
    /// Inserts a notification unless one with the same
    /// (kind, quote request, tenant) key already exists.
    ///
    /// Returns `Ok(true)` if the record was inserted, `Ok(false)` if an
    /// equivalent record was already present (redelivered event).
    async fn upsert(&self, notification: &Notification) -> RepositoryResult<bool>;

    /// Finds a tenant's notifications, newest first.
    async fn find_by_tenant(
        &self,
        tenant_id: &TenantId,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> RepositoryResult<Vec<Notification>>;

    /// Marks a notification as read.
    ///
    /// Returns `Ok(true)` if the record existed.
    async fn mark_as_read(&self, id: &NotificationId) -> RepositoryResult<bool>;

    /// Counts a tenant's unread notifications.
    async fn count_unread(&self, tenant_id: &TenantId) -> RepositoryResult<u64>;
}
