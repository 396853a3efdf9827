//! # Domain Errors
//!
//! Error types raised by the quote-request state machine.

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};
