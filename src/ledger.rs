//! Processed-payroll ledger.
//!
//! The calculators never decide whether a month has already been paid;
//! that state check lives behind the [`ProcessedLedger`] trait so the API
//! layer can ask it before committing a disbursement, and tests can swap
//! in the in-memory implementation. A positive answer must surface as a
//! distinct "duplicate prevented" outcome, never as a failure and never
//! as a re-credit.

use std::collections::HashSet;
use std::sync::Mutex;

/// Key identifying one disbursement: (employee, month, year).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayrollPeriodKey {
    /// The employee the disbursement is for.
    pub employee_id: String,
    /// Month of the period, 1-12.
    pub month: u32,
    /// Year of the period.
    pub year: i32,
}

impl PayrollPeriodKey {
    /// Creates a key for the given employee and period.
    pub fn new(employee_id: impl Into<String>, month: u32, year: i32) -> Self {
        Self {
            employee_id: employee_id.into(),
            month,
            year,
        }
    }
}

/// Records which (employee, month, year) periods have been disbursed.
pub trait ProcessedLedger: Send + Sync {
    /// Returns true if the period has already been disbursed.
    fn is_processed(&self, key: &PayrollPeriodKey) -> bool;

    /// Marks the period as disbursed.
    ///
    /// Returns `false` if it was already recorded (the duplicate-prevented
    /// case), `true` if this call recorded it first.
    fn record(&self, key: PayrollPeriodKey) -> bool;
}

/// In-memory [`ProcessedLedger`] for tests, previews, and the demo server.
///
/// A production deployment would put this behind the payroll database; the
/// trait is the seam.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    processed: Mutex<HashSet<PayrollPeriodKey>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessedLedger for InMemoryLedger {
    fn is_processed(&self, key: &PayrollPeriodKey) -> bool {
        self.processed
            .lock()
            .expect("ledger mutex poisoned")
            .contains(key)
    }

    fn record(&self, key: PayrollPeriodKey) -> bool {
        self.processed
            .lock()
            .expect("ledger mutex poisoned")
            .insert(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_period_is_unprocessed() {
        let ledger = InMemoryLedger::new();
        assert!(!ledger.is_processed(&PayrollPeriodKey::new("emp_001", 6, 2026)));
    }

    #[test]
    fn test_record_marks_period_processed() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.record(PayrollPeriodKey::new("emp_001", 6, 2026)));
        assert!(ledger.is_processed(&PayrollPeriodKey::new("emp_001", 6, 2026)));
    }

    #[test]
    fn test_second_record_reports_duplicate() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.record(PayrollPeriodKey::new("emp_001", 6, 2026)));
        assert!(!ledger.record(PayrollPeriodKey::new("emp_001", 6, 2026)));
    }

    #[test]
    fn test_periods_are_independent() {
        let ledger = InMemoryLedger::new();
        ledger.record(PayrollPeriodKey::new("emp_001", 6, 2026));

        assert!(!ledger.is_processed(&PayrollPeriodKey::new("emp_001", 7, 2026)));
        assert!(!ledger.is_processed(&PayrollPeriodKey::new("emp_002", 6, 2026)));
    }
}
