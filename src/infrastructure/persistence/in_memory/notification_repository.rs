//! # In-Memory Notification Repository
//!
//! In-memory implementation of [`NotificationRepository`] for testing the
//! projection's idempotent-upsert contract without a database.

use crate::domain::entities::notification::{Notification, NotificationKey};
use crate::domain::value_objects::{NotificationId, TenantId};
use crate::infrastructure::persistence::traits::{
    NotificationRepository, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    records: Vec<Notification>,
    keys: HashSet<NotificationKey>,
}

/// In-memory implementation of [`NotificationRepository`].
///
/// Keeps insertion order and a key set so redelivered events upsert into
/// nothing, exactly like the unique index a relational backend would use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryNotificationRepository {
    /// Creates a new empty in-memory notification repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store
            .try_read()
            .map(|guard| guard.records.len())
            .unwrap_or(0)
    }

    /// Returns true if no notifications are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn upsert(&self, notification: &Notification) -> RepositoryResult<bool> {
        let mut store = self.store.write().await;
        if store.keys.contains(&notification.key()) {
            return Ok(false);
        }
        store.keys.insert(notification.key());
        store.records.push(notification.clone());
        Ok(true)
    }

    async fn find_by_tenant(
        &self,
        tenant_id: &TenantId,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> RepositoryResult<Vec<Notification>> {
        let store = self.store.read().await;
        let mut records: Vec<Notification> = store
            .records
            .iter()
            .filter(|n| n.tenant_id() == tenant_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let offset = offset.unwrap_or(0);
        let records: Vec<Notification> = records
            .into_iter()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .collect();
        Ok(records)
    }

    async fn mark_as_read(&self, id: &NotificationId) -> RepositoryResult<bool> {
        let mut store = self.store.write().await;
        match store.records.iter_mut().find(|n| n.id() == *id) {
            Some(record) => {
                record.mark_read();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_unread(&self, tenant_id: &TenantId) -> RepositoryResult<u64> {
        let store = self.store.read().await;
        Ok(store
            .records
            .iter()
            .filter(|n| n.tenant_id() == tenant_id && !n.is_read())
            .count() as u64)
    }
}
