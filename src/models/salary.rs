//! Salary structure model.
//!
//! This module defines the [`SalaryStructure`] struct representing the
//! monthly component breakdown of an employee's annual CTC.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "INR".to_string()
}

fn default_auto_calculate() -> bool {
    true
}

/// The monthly salary component breakdown derived from an annual CTC.
///
/// In auto mode every derived field is recomputed from `annual_ctc`; in
/// manual mode the component fields are caller-supplied and only the
/// aggregates (`monthly_gross`, `total_deductions`, `net_pay`) are
/// recomputed. See [`compute_auto_structure`] and
/// [`compute_manual_aggregates`].
///
/// [`compute_auto_structure`]: crate::calculation::compute_auto_structure
/// [`compute_manual_aggregates`]: crate::calculation::compute_manual_aggregates
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure::zeroed();
/// assert_eq!(structure.net_pay, Decimal::ZERO);
/// assert_eq!(structure.currency, "INR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Annual cost-to-company.
    pub annual_ctc: Decimal,
    /// Monthly gross salary (basic + HRA + special allowance).
    pub monthly_gross: Decimal,
    /// Basic salary component.
    pub basic: Decimal,
    /// House rent allowance component.
    pub hra: Decimal,
    /// Special allowance component (remainder of gross after basic and HRA).
    pub special_allowance: Decimal,
    /// Employee provident fund deduction, capped per policy.
    pub pf_deduction: Decimal,
    /// Income tax deduction.
    pub tax_deduction: Decimal,
    /// Flat professional tax deduction.
    pub professional_tax: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Monthly take-home pay (gross minus deductions).
    pub net_pay: Decimal,
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Whether derived fields are recomputed from `annual_ctc` on change.
    #[serde(default = "default_auto_calculate")]
    pub auto_calculate: bool,
}

impl SalaryStructure {
    /// Returns a structure with every monetary field set to zero.
    pub fn zeroed() -> Self {
        Self {
            annual_ctc: Decimal::ZERO,
            monthly_gross: Decimal::ZERO,
            basic: Decimal::ZERO,
            hra: Decimal::ZERO,
            special_allowance: Decimal::ZERO,
            pf_deduction: Decimal::ZERO,
            tax_deduction: Decimal::ZERO,
            professional_tax: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_pay: Decimal::ZERO,
            currency: default_currency(),
            auto_calculate: true,
        }
    }

    /// Sum of the earning components (basic + HRA + special allowance).
    pub fn earnings_total(&self) -> Decimal {
        self.basic + self.hra + self.special_allowance
    }

    /// Annual gross salary (monthly gross over twelve months).
    pub fn annual_gross(&self) -> Decimal {
        self.monthly_gross * Decimal::from(12)
    }
}
