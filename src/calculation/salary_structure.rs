//! Salary structure derivation.
//!
//! This module derives the monthly component breakdown of a salary, either
//! automatically from annual CTC or by re-aggregating caller-supplied
//! components in manual mode.

use rust_decimal::Decimal;

use crate::config::SalaryPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryStructure;

use super::money::{floor_percent_of, floor_to_unit};

/// Derives a full salary structure from an annual CTC.
///
/// The derivation chain, with every truncation a floor:
///
/// 1. `monthly_gross = floor(annual_ctc / 12)`
/// 2. `basic = floor(monthly_gross × basic_pct)`
/// 3. `hra = floor(basic × hra_pct_of_basic)`
/// 4. `pf_deduction = min(pf_monthly_cap, floor(basic × pf_pct))`
/// 5. `professional_tax` flat from policy
/// 6. `tax_deduction = floor(monthly_gross × tax_pct)`
/// 7. `special_allowance = monthly_gross − (basic + hra)`
///
/// The identity `net_pay == monthly_gross − total_deductions` is kept exact:
/// for a CTC small enough that the flat professional tax exceeds gross, net
/// pay goes negative rather than being clamped.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a negative `annual_ctc`. A CTC
/// of exactly zero yields an all-zero structure (no professional tax is
/// charged against no salary).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_auto_structure;
/// use payroll_engine::config::SalaryPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = SalaryPolicy::default();
/// let structure = compute_auto_structure(Decimal::from(500_000), &policy).unwrap();
/// assert_eq!(structure.monthly_gross, Decimal::from(41_666));
/// assert_eq!(structure.basic, Decimal::from(16_666));
/// ```
pub fn compute_auto_structure(
    annual_ctc: Decimal,
    policy: &SalaryPolicy,
) -> EngineResult<SalaryStructure> {
    if annual_ctc < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "annual_ctc",
            "must not be negative",
        ));
    }

    if annual_ctc == Decimal::ZERO {
        return Ok(SalaryStructure::zeroed());
    }

    let monthly_gross = floor_to_unit(annual_ctc / Decimal::from(12));
    let basic = floor_percent_of(monthly_gross, policy.basic_pct);
    let hra = floor_percent_of(basic, policy.hra_pct_of_basic);
    let pf_deduction = policy
        .pf_monthly_cap
        .min(floor_percent_of(basic, policy.pf_pct));
    let professional_tax = policy.professional_tax;
    let tax_deduction = floor_percent_of(monthly_gross, policy.tax_pct).max(Decimal::ZERO);
    let special_allowance = (monthly_gross - (basic + hra)).max(Decimal::ZERO);
    let total_deductions = pf_deduction + tax_deduction + professional_tax;
    let net_pay = monthly_gross - total_deductions;

    Ok(SalaryStructure {
        annual_ctc,
        monthly_gross,
        basic,
        hra,
        special_allowance,
        pf_deduction,
        tax_deduction,
        professional_tax,
        total_deductions,
        net_pay,
        currency: "INR".to_string(),
        auto_calculate: true,
    })
}

/// Recomputes the aggregates of a manually-entered structure.
///
/// Only `monthly_gross`, `total_deductions`, and `net_pay` are derived;
/// the component fields pass through exactly as the caller supplied them.
/// The flat professional tax still comes from policy, not the caller.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] naming the first negative
/// component field.
pub fn compute_manual_aggregates(
    structure: &SalaryStructure,
    policy: &SalaryPolicy,
) -> EngineResult<SalaryStructure> {
    let components = [
        ("annual_ctc", structure.annual_ctc),
        ("basic", structure.basic),
        ("hra", structure.hra),
        ("special_allowance", structure.special_allowance),
        ("pf_deduction", structure.pf_deduction),
        ("tax_deduction", structure.tax_deduction),
    ];
    for (field, value) in components {
        if value < Decimal::ZERO {
            return Err(EngineError::invalid_input(field, "must not be negative"));
        }
    }

    let monthly_gross = structure.basic + structure.hra + structure.special_allowance;
    let professional_tax = policy.professional_tax;
    let total_deductions = structure.pf_deduction + structure.tax_deduction + professional_tax;
    let net_pay = monthly_gross - total_deductions;

    Ok(SalaryStructure {
        monthly_gross,
        professional_tax,
        total_deductions,
        net_pay,
        auto_calculate: false,
        ..structure.clone()
    })
}
