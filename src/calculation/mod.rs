//! Calculation logic for the Payroll Computation Engine.
//!
//! This module contains the pure calculators: salary-structure derivation
//! from annual CTC, attendance session reconstruction from clock-event
//! logs, strict sequence validation, monthly loss-of-pay proration,
//! CTC/tax breakdown views, and payslip assembly. Every function here is
//! side-effect free; persistence and the "already paid" check belong to
//! the caller and the [`ledger`](crate::ledger).

mod breakdown;
mod money;
mod payslip;
mod proration;
mod salary_structure;
mod sequence_check;
mod session;

pub use breakdown::{
    BreakdownPercentages, ComplianceReport, CtcBreakdownView, TaxAnalysis, build_breakdown,
    cost_per_day, employer_pf_contribution,
};
pub use money::{floor_percent_of, floor_to_unit};
pub use payslip::build_payslip;
pub use proration::{compute_monthly, days_in_month};
pub use salary_structure::{compute_auto_structure, compute_manual_aggregates};
pub use sequence_check::{SequenceViolation, check_sequence};
pub use session::reconstruct_day;
