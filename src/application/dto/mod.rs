//! # Application DTOs
//!
//! Commands accepted by the orchestration layer, validated before any
//! domain mutation.

pub mod quote_request_dto;

pub use quote_request_dto::CreateQuoteRequestCommand;
