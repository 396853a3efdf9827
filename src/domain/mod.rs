//! # Domain Layer
//!
//! Core business logic: the quote request aggregate and its state machines,
//! value objects, domain errors and workflow events. This layer has no
//! dependencies on persistence or messaging.

pub mod entities;
pub mod errors;
pub mod events;
pub mod value_objects;
