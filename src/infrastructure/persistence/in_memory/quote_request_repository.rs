//! # In-Memory Quote Request Repository
//!
//! In-memory implementation of [`QuoteRequestRepository`] for testing.
//!
//! Uses a thread-safe `HashMap` for storage, making it suitable for unit
//! and integration tests without database dependencies, while still
//! enforcing the optimistic-locking contract a real backend provides.

use crate::domain::entities::quote_request::QuoteRequest;
use crate::domain::value_objects::{QuoteRequestId, ResponseStatus, TenantId};
use crate::infrastructure::persistence::traits::{
    QuoteRequestRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`QuoteRequestRepository`].
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<HashMap>>` for thread-safe access; clones share the
/// same storage.
///
/// # Examples
///
/// ```
/// use freight_rfq::infrastructure::persistence::in_memory::InMemoryQuoteRequestRepository;
///
/// let repo = InMemoryQuoteRequestRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteRequestRepository {
    storage: Arc<RwLock<HashMap<QuoteRequestId, QuoteRequest>>>,
}

impl InMemoryQuoteRequestRepository {
    /// Creates a new empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of stored quote requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all stored quote requests.
    pub async fn clear(&self) {
        self.storage.write().await.clear();
    }
}

#[async_trait]
impl QuoteRequestRepository for InMemoryQuoteRequestRepository {
    async fn create(&self, quote_request: &QuoteRequest) -> RepositoryResult<QuoteRequest> {
        let mut storage = self.storage.write().await;
        if storage.contains_key(&quote_request.id()) {
            return Err(RepositoryError::duplicate(
                "QuoteRequest",
                quote_request.id().to_string(),
            ));
        }
        storage.insert(quote_request.id(), quote_request.clone());
        Ok(quote_request.clone())
    }

    async fn get(&self, id: &QuoteRequestId) -> RepositoryResult<Option<QuoteRequest>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn find_by_requester(
        &self,
        requester_id: &TenantId,
    ) -> RepositoryResult<Vec<QuoteRequest>> {
        let storage = self.storage.read().await;
        let mut requests: Vec<QuoteRequest> = storage
            .values()
            .filter(|qr| qr.requester_id() == requester_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(requests)
    }

    async fn find_pending_by_responder(
        &self,
        responder_id: &TenantId,
    ) -> RepositoryResult<Vec<QuoteRequest>> {
        let storage = self.storage.read().await;
        let mut requests: Vec<QuoteRequest> = storage
            .values()
            .filter(|qr| {
                qr.find_responder(responder_id)
                    .is_some_and(|a| a.status() == ResponseStatus::Pending)
            })
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(requests)
    }

    async fn save(&self, quote_request: &QuoteRequest) -> RepositoryResult<QuoteRequest> {
        let mut storage = self.storage.write().await;

        if let Some(existing) = storage.get(&quote_request.id())
            && existing.version() >= quote_request.version()
        {
            return Err(RepositoryError::version_conflict(
                "QuoteRequest",
                quote_request.id().to_string(),
                quote_request.version(),
                existing.version(),
            ));
        }

        storage.insert(quote_request.id(), quote_request.clone());
        Ok(quote_request.clone())
    }

    async fn delete(&self, id: &QuoteRequestId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(id).is_some())
    }
}
