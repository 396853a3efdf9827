//! # Quote Request Commands
//!
//! Input shapes for creating quote requests.

use crate::domain::value_objects::{TenantId, VoyageData};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Command to create a quote request with its full invitation set.
///
/// The authenticated requester tenant is part of the command; it is never
/// read from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuoteRequestCommand {
    /// The tenant opening the quote request.
    pub requester_id: TenantId,
    /// The voyage to be quoted.
    pub voyage_data: VoyageData,
    /// Responder tenants to invite, in the order they should appear.
    pub responder_ids: Vec<TenantId>,
}

impl CreateQuoteRequestCommand {
    /// Creates a new command.
    #[must_use]
    pub fn new(
        requester_id: TenantId,
        voyage_data: VoyageData,
        responder_ids: Vec<TenantId>,
    ) -> Self {
        Self {
            requester_id,
            voyage_data,
            responder_ids,
        }
    }

    /// Validates the command before any domain mutation.
    ///
    /// # Errors
    ///
    /// Returns a message if the responder list is empty, contains
    /// duplicates, or names the requester itself.
    pub fn validate(&self) -> Result<(), String> {
        if self.responder_ids.is_empty() {
            return Err("at least one responder must be invited".to_string());
        }

        let mut seen = HashSet::new();
        for responder_id in &self.responder_ids {
            if !seen.insert(responder_id) {
                return Err(format!("duplicate responder: {responder_id}"));
            }
        }

        if self.responder_ids.contains(&self.requester_id) {
            return Err("requester cannot respond to its own quote request".to_string());
        }

        Ok(())
    }
}
