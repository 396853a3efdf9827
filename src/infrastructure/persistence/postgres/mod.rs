//! # PostgreSQL Persistence
//!
//! sqlx-backed repository implementations.

pub mod quote_request_repository;

pub use quote_request_repository::PostgresQuoteRequestRepository;
