//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum for representing
//! domain-level errors with numeric error codes. Every variant carries the
//! structured context (ids, current vs. required state) a transport layer
//! needs to map the failure without string-matching.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//! - **2000-2999**: State errors
//! - **3000-3999**: Authorization errors
//!
//! # Examples
//!
//! ```
//! use freight_rfq::domain::errors::DomainError;
//!
//! let error = DomainError::InvalidPrice("price must be positive".to_string());
//! assert_eq!(error.code(), 1001);
//! assert_eq!(error.category(), "validation");
//! ```

use crate::domain::value_objects::{
    QuoteRequestId, QuoteRequestStatus, ResponseStatus, TenantId,
};
use thiserror::Error;

/// Domain-level error with numeric error codes.
///
/// Provides typed errors for quote-request workflow operations with
/// consistent error codes for logging and API responses.
///
/// # Error Code Ranges
///
/// | Range | Category |
/// |-------|----------|
/// | 1000-1999 | Validation errors |
/// | 2000-2999 | State errors |
/// | 3000-3999 | Authorization errors |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// Invalid price value.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Invalid voyage data.
    #[error("invalid voyage: {0}")]
    InvalidVoyage(String),

    /// Generic validation error.
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========================================================================
    // State Errors (2000-2999)
    // ========================================================================
    /// Invalid top-level status transition attempted.
    #[error("invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: QuoteRequestStatus,
        /// The attempted target status.
        to: QuoteRequestStatus,
    },

    /// A responder assignment is not in the state an operation requires.
    #[error("responder {responder_id} is in {current} state, but {required} is required")]
    InvalidResponderState {
        /// The responder whose assignment was targeted.
        responder_id: TenantId,
        /// The assignment's current status.
        current: ResponseStatus,
        /// The status the operation requires.
        required: ResponseStatus,
    },

    /// Mutation attempted on a finalized quote request.
    #[error("quote request {quote_request_id} has already been finalized ({status})")]
    AlreadyFinalized {
        /// The finalized quote request.
        quote_request_id: QuoteRequestId,
        /// Its terminal status.
        status: QuoteRequestStatus,
    },

    /// Duplicate response submission for the same responder.
    #[error("responder {responder_id} already submitted a response for quote request {quote_request_id}")]
    AlreadySubmitted {
        /// The quote request.
        quote_request_id: QuoteRequestId,
        /// The responder that already submitted.
        responder_id: TenantId,
    },

    /// Responder ID collision when building assignments.
    #[error("responder {responder_id} is already assigned to this quote request")]
    DuplicateResponder {
        /// The colliding responder.
        responder_id: TenantId,
    },

    /// Referenced responder has no assignment on the aggregate.
    #[error("responder {responder_id} not found in quote request {quote_request_id}")]
    ResponderNotFound {
        /// The quote request that was searched.
        quote_request_id: QuoteRequestId,
        /// The missing responder.
        responder_id: TenantId,
    },

    // ========================================================================
    // Authorization Errors (3000-3999)
    // ========================================================================
    /// Caller's tenant does not own the quote request.
    #[error("tenant {tenant_id} is not the requester of quote request {quote_request_id}")]
    Unauthorized {
        /// The quote request the caller tried to mutate.
        quote_request_id: QuoteRequestId,
        /// The caller's tenant.
        tenant_id: TenantId,
    },
}

impl DomainError {
    /// Returns the numeric error code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Validation errors (1000-1999)
            Self::InvalidPrice(_) => 1001,
            Self::InvalidVoyage(_) => 1002,
            Self::ValidationError(_) => 1099,

            // State errors (2000-2999)
            Self::InvalidStatusTransition { .. } => 2001,
            Self::InvalidResponderState { .. } => 2002,
            Self::AlreadyFinalized { .. } => 2003,
            Self::AlreadySubmitted { .. } => 2004,
            Self::DuplicateResponder { .. } => 2005,
            Self::ResponderNotFound { .. } => 2006,

            // Authorization errors (3000-3999)
            Self::Unauthorized { .. } => 3001,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "state",
            3000..=3999 => "authorization",
            _ => "unknown",
        }
    }

    /// Returns true if this is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }

    /// Returns true if this is a state error.
    #[inline]
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self.code(), 2000..=2999)
    }

    /// Returns true if this is an authorization error.
    #[inline]
    #[must_use]
    pub const fn is_authorization_error(&self) -> bool {
        matches!(self.code(), 3000..=3999)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request_id() -> QuoteRequestId {
        QuoteRequestId::new_v4()
    }

    mod error_codes {
        use super::*;

        #[test]
        fn validation_errors_in_range() {
            let errors = [
                DomainError::InvalidPrice("test".to_string()),
                DomainError::InvalidVoyage("test".to_string()),
                DomainError::ValidationError("test".to_string()),
            ];

            for error in errors {
                let code = error.code();
                assert!(
                    (1000..2000).contains(&code),
                    "Expected validation error code 1000-1999, got {}",
                    code
                );
                assert!(error.is_validation_error());
                assert_eq!(error.category(), "validation");
            }
        }

        #[test]
        fn state_errors_in_range() {
            let errors = [
                DomainError::InvalidStatusTransition {
                    from: QuoteRequestStatus::Accepted,
                    to: QuoteRequestStatus::Pending,
                },
                DomainError::InvalidResponderState {
                    responder_id: TenantId::new("carrier-a"),
                    current: ResponseStatus::Pending,
                    required: ResponseStatus::Submitted,
                },
                DomainError::AlreadyFinalized {
                    quote_request_id: request_id(),
                    status: QuoteRequestStatus::Cancelled,
                },
                DomainError::AlreadySubmitted {
                    quote_request_id: request_id(),
                    responder_id: TenantId::new("carrier-a"),
                },
                DomainError::DuplicateResponder {
                    responder_id: TenantId::new("carrier-a"),
                },
                DomainError::ResponderNotFound {
                    quote_request_id: request_id(),
                    responder_id: TenantId::new("carrier-a"),
                },
            ];

            for error in errors {
                let code = error.code();
                assert!(
                    (2000..3000).contains(&code),
                    "Expected state error code 2000-2999, got {}",
                    code
                );
                assert!(error.is_state_error());
                assert_eq!(error.category(), "state");
            }
        }

        #[test]
        fn authorization_errors_in_range() {
            let error = DomainError::Unauthorized {
                quote_request_id: request_id(),
                tenant_id: TenantId::new("intruder"),
            };
            assert_eq!(error.code(), 3001);
            assert!(error.is_authorization_error());
            assert_eq!(error.category(), "authorization");
        }
    }

    mod display {
        use super::*;

        #[test]
        fn invalid_price_display() {
            let error = DomainError::InvalidPrice("must be positive".to_string());
            assert_eq!(error.to_string(), "invalid price: must be positive");
        }

        #[test]
        fn responder_state_display() {
            let error = DomainError::InvalidResponderState {
                responder_id: TenantId::new("carrier-a"),
                current: ResponseStatus::Pending,
                required: ResponseStatus::Submitted,
            };
            assert_eq!(
                error.to_string(),
                "responder carrier-a is in PENDING state, but SUBMITTED is required"
            );
        }

        #[test]
        fn duplicate_responder_display() {
            let error = DomainError::DuplicateResponder {
                responder_id: TenantId::new("carrier-b"),
            };
            assert!(error.to_string().contains("carrier-b"));
        }

        #[test]
        fn already_finalized_display() {
            let id = request_id();
            let error = DomainError::AlreadyFinalized {
                quote_request_id: id,
                status: QuoteRequestStatus::Accepted,
            };
            assert!(error.to_string().contains(&id.to_string()));
            assert!(error.to_string().contains("ACCEPTED"));
        }
    }
}
