//! # Application Services
//!
//! Use-case orchestration over the domain, repository and event bus.

pub mod notification_projection;
pub mod quote_orchestration;

pub use notification_projection::NotificationProjection;
pub use quote_orchestration::QuoteOrchestrationService;
