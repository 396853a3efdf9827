//! # Persistence
//!
//! Repository ports and their backends.
//!
//! The orchestration layer talks to [`traits::QuoteRequestRepository`] and
//! the projection to [`traits::NotificationRepository`]; PostgreSQL serves
//! production, the in-memory variants serve tests.

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use in_memory::{InMemoryNotificationRepository, InMemoryQuoteRequestRepository};
pub use postgres::PostgresQuoteRequestRepository;
pub use traits::{
    NotificationRepository, QuoteRequestRepository, RepositoryError, RepositoryResult,
};
