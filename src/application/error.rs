//! # Application Errors
//!
//! Error types for the orchestration layer.
//!
//! Domain errors pass through unchanged; infrastructure failures are
//! wrapped. Every variant resolves to a stable [`kind`](ApplicationError::kind)
//! identity so a transport layer can assign status semantics with one
//! exhaustive match instead of string-matching messages.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::QuoteRequestId;
use crate::infrastructure::messaging::PublishError;
use crate::infrastructure::persistence::traits::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Referenced quote request does not exist.
    #[error("quote request not found: {quote_request_id}")]
    NotFound {
        /// The missing quote request.
        quote_request_id: QuoteRequestId,
    },

    /// Request validation failed before any domain mutation.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Domain error, propagated unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Optimistic-concurrency conflict that survived the bounded retries.
    #[error("quote request {quote_request_id} was concurrently modified ({attempts} attempts)")]
    ConcurrentModification {
        /// The contended quote request.
        quote_request_id: QuoteRequestId,
        /// How many load-mutate-save attempts were made.
        attempts: u32,
    },

    /// Persistence failure from the repository.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Publish failure after a successful save: the persisted state is
    /// correct, only the notification may be delayed.
    #[error("event publish failed for quote request {quote_request_id}: {source}")]
    EventPublish {
        /// The quote request whose event was lost.
        quote_request_id: QuoteRequestId,
        /// The underlying publish failure.
        source: PublishError,
    },
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Returns the stable machine identity of this error.
    ///
    /// Transport layers map these to status semantics (not-found vs
    /// conflict vs bad-request vs server-error).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::ValidationError(_) => "validation",
            Self::Domain(domain) => match domain {
                DomainError::InvalidPrice(_)
                | DomainError::InvalidVoyage(_)
                | DomainError::ValidationError(_) => "validation",
                DomainError::InvalidStatusTransition { .. }
                | DomainError::InvalidResponderState { .. } => "invalid_state",
                DomainError::AlreadyFinalized { .. } => "already_finalized",
                DomainError::AlreadySubmitted { .. } => "already_submitted",
                DomainError::DuplicateResponder { .. } => "duplicate_responder",
                DomainError::ResponderNotFound { .. } => "responder_not_found",
                DomainError::Unauthorized { .. } => "unauthorized",
            },
            Self::ConcurrentModification { .. } => "concurrent_modification",
            Self::Repository(_) => "persistence",
            Self::EventPublish { .. } => "event_publish",
        }
    }

    /// Returns true for the partial-success case: state was persisted but
    /// the event was not published.
    #[must_use]
    pub fn is_partial_success(&self) -> bool {
        matches!(self, Self::EventPublish { .. })
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TenantId;

    #[test]
    fn not_found_kind() {
        let err = ApplicationError::NotFound {
            quote_request_id: QuoteRequestId::new_v4(),
        };
        assert_eq!(err.kind(), "not_found");
        assert!(!err.is_partial_success());
    }

    #[test]
    fn domain_errors_keep_distinct_kinds() {
        let id = QuoteRequestId::new_v4();
        let cases: Vec<(ApplicationError, &str)> = vec![
            (
                DomainError::ResponderNotFound {
                    quote_request_id: id,
                    responder_id: TenantId::new("carrier-a"),
                }
                .into(),
                "responder_not_found",
            ),
            (
                DomainError::Unauthorized {
                    quote_request_id: id,
                    tenant_id: TenantId::new("carrier-a"),
                }
                .into(),
                "unauthorized",
            ),
            (
                DomainError::DuplicateResponder {
                    responder_id: TenantId::new("carrier-a"),
                }
                .into(),
                "duplicate_responder",
            ),
            (
                DomainError::ValidationError("bad".to_string()).into(),
                "validation",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.kind(), expected);
        }
    }

    #[test]
    fn event_publish_is_partial_success() {
        let err = ApplicationError::EventPublish {
            quote_request_id: QuoteRequestId::new_v4(),
            source: PublishError::delivery("broker unavailable"),
        };
        assert!(err.is_partial_success());
        assert_eq!(err.kind(), "event_publish");
        assert!(err.to_string().contains("broker unavailable"));
    }

    #[test]
    fn repository_error_converts() {
        let err: ApplicationError = RepositoryError::connection("refused").into();
        assert_eq!(err.kind(), "persistence");
    }

    #[test]
    fn domain_error_message_passes_through() {
        let err: ApplicationError = DomainError::ValidationError("empty list".to_string()).into();
        assert_eq!(err.to_string(), "validation error: empty list");
    }
}
