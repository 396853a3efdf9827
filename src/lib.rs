//! # Freight RFQ Engine
//!
//! Multi-party freight quote-request coordination: a requester tenant opens
//! a quote request for a shipping voyage, responder tenants submit priced
//! responses, the requester accepts exactly one (rejecting the rest), and
//! every committed transition fans out over a topic-based event bus to keep
//! a notification read-side in sync.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): The quote request aggregate, its state
//!   machines, value objects and workflow events
//! - **Application Layer** (`application`): Orchestration and projection
//!   services sequencing load → mutate → persist → publish
//! - **Infrastructure Layer** (`infrastructure`): Repository and event-bus
//!   adapters (PostgreSQL, NATS, in-memory)
//!
//! ## Example
//!
//! ```rust,ignore
//! use freight_rfq::application::services::QuoteOrchestrationService;
//! use freight_rfq::application::dto::CreateQuoteRequestCommand;
//!
//! let created = service.create_quote_request(command).await?;
//! service.accept_response(created.id(), responder, requester).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
