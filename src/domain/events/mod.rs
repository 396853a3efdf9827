//! # Domain Events
//!
//! Events emitted after each committed workflow transition, consumed by the
//! notification projection and any other subscriber of the `quote_events`
//! topic.

pub mod domain_event;
pub mod quote_events;

pub use domain_event::{DomainEvent, EventMetadata};
pub use quote_events::{
    QuoteEvent, QuoteRequestCancelled, QuoteRequestCreated, ResponseAccepted, ResponseSubmitted,
};
