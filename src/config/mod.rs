//! Policy configuration for the Payroll Computation Engine.
//!
//! Salary ratios, statutory caps, and tax slabs are jurisdiction-specific
//! policy, not business logic; they are loaded from YAML files and threaded
//! into the calculators as tables.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    ComplianceThresholds, PolicyConfig, PolicyMetadata, SalaryPolicy, TaxSlab,
};
