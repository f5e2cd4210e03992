//! Application state for the Payroll Computation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyLoader;
use crate::ledger::{InMemoryLedger, ProcessedLedger};

/// Shared application state.
///
/// Contains the loaded policy tables and the processed-payroll ledger
/// consulted before any disbursement commit.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<PolicyLoader>,
    ledger: Arc<dyn ProcessedLedger>,
}

impl AppState {
    /// Creates a new application state with an in-memory ledger.
    pub fn new(policy: PolicyLoader) -> Self {
        Self {
            policy: Arc::new(policy),
            ledger: Arc::new(InMemoryLedger::new()),
        }
    }

    /// Creates a new application state with the given ledger backend.
    pub fn with_ledger(policy: PolicyLoader, ledger: Arc<dyn ProcessedLedger>) -> Self {
        Self {
            policy: Arc::new(policy),
            ledger,
        }
    }

    /// Returns a reference to the policy loader.
    pub fn policy(&self) -> &PolicyLoader {
        &self.policy
    }

    /// Returns a reference to the processed-payroll ledger.
    pub fn ledger(&self) -> &dyn ProcessedLedger {
        self.ledger.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
