//! # PostgreSQL Quote Request Repository
//!
//! PostgreSQL implementation of [`QuoteRequestRepository`] using sqlx.
//!
//! The aggregate is stored on a single row: scalar columns for the root
//! fields, JSONB for the voyage data and the responder assignment
//! collection, so load and save are atomic without explicit transactions.
//! Optimistic locking rides on the `version` column.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE quote_requests (
//!     id UUID PRIMARY KEY,
//!     requester_id TEXT NOT NULL,
//!     voyage_data JSONB NOT NULL,
//!     status TEXT NOT NULL,
//!     responder_assignments JSONB NOT NULL,
//!     version BIGINT NOT NULL,
//!     created_at BIGINT NOT NULL,
//!     updated_at BIGINT NOT NULL
//! );
//! CREATE INDEX idx_quote_requests_requester ON quote_requests (requester_id, created_at DESC);
//! CREATE INDEX idx_quote_requests_assignments ON quote_requests USING GIN (responder_assignments);
//! ```

use crate::domain::entities::quote_request::QuoteRequest;
use crate::domain::entities::responder_assignment::ResponderAssignment;
use crate::domain::value_objects::{
    QuoteRequestId, QuoteRequestStatus, TenantId, Timestamp, VoyageData,
};
use crate::infrastructure::persistence::traits::{
    QuoteRequestRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

/// PostgreSQL implementation of [`QuoteRequestRepository`].
///
/// Uses connection pooling via `sqlx::PgPool` and JSONB for the embedded
/// voyage data and assignment collection.
///
/// # Examples
///
/// ```ignore
/// use sqlx::PgPool;
/// use freight_rfq::infrastructure::persistence::postgres::PostgresQuoteRequestRepository;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let repo = PostgresQuoteRequestRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresQuoteRequestRepository {
    pool: PgPool,
}

impl PostgresQuoteRequestRepository {
    /// Creates a new PostgreSQL quote request repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_aggregate(row: &sqlx::postgres::PgRow) -> RepositoryResult<QuoteRequest> {
        let id: uuid::Uuid = row
            .try_get("id")
            .map_err(|e| RepositoryError::query(e.to_string()))?;
        let requester_id: String = row
            .try_get("requester_id")
            .map_err(|e| RepositoryError::query(e.to_string()))?;
        let voyage_json: serde_json::Value = row
            .try_get("voyage_data")
            .map_err(|e| RepositoryError::query(e.to_string()))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| RepositoryError::query(e.to_string()))?;
        let assignments_json: serde_json::Value = row
            .try_get("responder_assignments")
            .map_err(|e| RepositoryError::query(e.to_string()))?;
        let version: i64 = row
            .try_get("version")
            .map_err(|e| RepositoryError::query(e.to_string()))?;
        let created_at: i64 = row
            .try_get("created_at")
            .map_err(|e| RepositoryError::query(e.to_string()))?;
        let updated_at: i64 = row
            .try_get("updated_at")
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        let voyage_data: VoyageData = serde_json::from_value(voyage_json)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let status: QuoteRequestStatus =
            serde_json::from_value(serde_json::Value::String(status))
                .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let responder_assignments: Vec<ResponderAssignment> =
            serde_json::from_value(assignments_json)
                .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let created_at = Timestamp::from_millis(created_at)
            .ok_or_else(|| RepositoryError::serialization("created_at out of range"))?;
        let updated_at = Timestamp::from_millis(updated_at)
            .ok_or_else(|| RepositoryError::serialization("updated_at out of range"))?;

        Ok(QuoteRequest::from_parts(
            QuoteRequestId::new(id),
            TenantId::new(requester_id),
            voyage_data,
            status,
            responder_assignments,
            version as u64,
            created_at,
            updated_at,
        ))
    }

    fn bind_columns(
        quote_request: &QuoteRequest,
    ) -> RepositoryResult<(serde_json::Value, serde_json::Value)> {
        let voyage_json = serde_json::to_value(quote_request.voyage_data())
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let assignments_json = serde_json::to_value(quote_request.responder_assignments())
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        Ok((voyage_json, assignments_json))
    }
}

#[async_trait]
impl QuoteRequestRepository for PostgresQuoteRequestRepository {
    async fn create(&self, quote_request: &QuoteRequest) -> RepositoryResult<QuoteRequest> {
        let (voyage_json, assignments_json) = Self::bind_columns(quote_request)?;

        let result = sqlx::query(
            r#"
            INSERT INTO quote_requests (
                id, requester_id, voyage_data, status, responder_assignments,
                version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(quote_request.id().get())
        .bind(quote_request.requester_id().as_str())
        .bind(&voyage_json)
        .bind(quote_request.status().to_string())
        .bind(&assignments_json)
        .bind(quote_request.version() as i64)
        .bind(quote_request.created_at().timestamp_millis())
        .bind(quote_request.updated_at().timestamp_millis())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(quote_request.clone()),
            Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => Err(
                RepositoryError::duplicate("QuoteRequest", quote_request.id().to_string()),
            ),
            Err(e) => Err(RepositoryError::query(e.to_string())),
        }
    }

    async fn get(&self, id: &QuoteRequestId) -> RepositoryResult<Option<QuoteRequest>> {
        let row = sqlx::query("SELECT * FROM quote_requests WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        row.as_ref().map(Self::row_to_aggregate).transpose()
    }

    async fn find_by_requester(
        &self,
        requester_id: &TenantId,
    ) -> RepositoryResult<Vec<QuoteRequest>> {
        let rows = sqlx::query(
            "SELECT * FROM quote_requests WHERE requester_id = $1 ORDER BY created_at DESC",
        )
        .bind(requester_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.iter().map(Self::row_to_aggregate).collect()
    }

    async fn find_pending_by_responder(
        &self,
        responder_id: &TenantId,
    ) -> RepositoryResult<Vec<QuoteRequest>> {
        let needle = serde_json::json!([{
            "responder_id": responder_id.as_str(),
            "status": "PENDING",
        }]);

        let rows = sqlx::query(
            r#"
            SELECT * FROM quote_requests
            WHERE responder_assignments @> $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(&needle)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.iter().map(Self::row_to_aggregate).collect()
    }

    async fn save(&self, quote_request: &QuoteRequest) -> RepositoryResult<QuoteRequest> {
        let (voyage_json, assignments_json) = Self::bind_columns(quote_request)?;

        // Upsert with version guard: the update only lands when the stored
        // row is older than the snapshot being written.
        let result = sqlx::query(
            r#"
            INSERT INTO quote_requests (
                id, requester_id, voyage_data, status, responder_assignments,
                version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                responder_assignments = EXCLUDED.responder_assignments,
                version = EXCLUDED.version,
                updated_at = EXCLUDED.updated_at
            WHERE quote_requests.version < EXCLUDED.version
            "#,
        )
        .bind(quote_request.id().get())
        .bind(quote_request.requester_id().as_str())
        .bind(&voyage_json)
        .bind(quote_request.status().to_string())
        .bind(&assignments_json)
        .bind(quote_request.version() as i64)
        .bind(quote_request.created_at().timestamp_millis())
        .bind(quote_request.updated_at().timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        if result.rows_affected() == 0 {
            let stored: Option<i64> =
                sqlx::query_scalar("SELECT version FROM quote_requests WHERE id = $1")
                    .bind(quote_request.id().get())
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(|e| RepositoryError::query(e.to_string()))?;

            return Err(RepositoryError::version_conflict(
                "QuoteRequest",
                quote_request.id().to_string(),
                quote_request.version(),
                stored.unwrap_or_default() as u64,
            ));
        }

        Ok(quote_request.clone())
    }

    async fn delete(&self, id: &QuoteRequestId) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM quote_requests WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
