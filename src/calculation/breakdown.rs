//! CTC breakdown, tax-slab, and compliance view.
//!
//! This module turns a [`SalaryStructure`] into the percentage/compliance
//! view the finance screens display. Tax slabs come from the policy table,
//! not from code; rates vary by jurisdiction and year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{PolicyConfig, SalaryPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryStructure;

use super::money::floor_to_unit;

/// Component shares for the breakdown view, as display percentages
/// rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownPercentages {
    /// Basic as a percentage of annual CTC.
    pub basic_pct_of_ctc: Decimal,
    /// HRA as a percentage of basic.
    pub hra_pct_of_basic: Decimal,
    /// Special allowance as a percentage of annual CTC.
    pub special_pct_of_ctc: Decimal,
    /// Total deductions as a percentage of annual CTC.
    pub deductions_pct_of_ctc: Decimal,
    /// Net pay as a percentage of monthly gross.
    pub net_pct_of_gross: Decimal,
}

/// Tax analysis for the breakdown view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAnalysis {
    /// Annual gross income (monthly gross over twelve months).
    pub annual_gross_income: Decimal,
    /// Annual taxable income after the standard deduction.
    pub annual_taxable_income: Decimal,
    /// Display label of the slab the taxable income falls in.
    pub tax_slab: String,
    /// Marginal rate of that slab, as a fraction.
    pub slab_rate: Decimal,
    /// Estimated annual tax, slabs applied progressively.
    pub estimated_annual_tax: Decimal,
    /// Estimated monthly tax.
    pub estimated_monthly_tax: Decimal,
    /// Estimated tax as a percentage of annual gross.
    pub effective_tax_rate: Decimal,
}

/// Result of the compliance checks on a salary structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// True when no checks failed.
    pub is_compliant: bool,
    /// 0-100 score; each failed check costs 25 points.
    pub compliance_score: u32,
    /// One entry per failed check.
    pub issues: Vec<String>,
}

/// The complete breakdown view for one salary structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtcBreakdownView {
    /// Annual cost-to-company the view was built from.
    pub annual_ctc: Decimal,
    /// Monthly CTC (annual over twelve).
    pub monthly_ctc: Decimal,
    /// Component shares.
    pub percentages: BreakdownPercentages,
    /// Tax analysis from the policy slab table.
    pub tax: TaxAnalysis,
    /// Compliance checks.
    pub compliance: ComplianceReport,
    /// Employer PF contribution (wage-ceiling capped).
    pub employer_pf: Decimal,
    /// Employer cost per calendar day of the year.
    pub cost_per_day: Decimal,
}

/// Employer PF contribution: the PF rate applied to basic, with the PF
/// wage capped at the policy ceiling, floored to a whole unit.
pub fn employer_pf_contribution(basic: Decimal, policy: &SalaryPolicy) -> Decimal {
    floor_to_unit(basic.min(policy.employer_pf_wage_ceiling) * policy.employer_pf_pct)
}

/// Employer cost per calendar day: annual CTC over 365, rounded to two
/// decimals for display.
pub fn cost_per_day(annual_ctc: Decimal) -> Decimal {
    (annual_ctc / Decimal::from(365)).round_dp(2)
}

fn pct(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator == Decimal::ZERO {
        return Decimal::ZERO;
    }
    (numerator / denominator * Decimal::from(100)).round_dp(2)
}

/// Applies the slab table progressively to an annual taxable income.
fn progressive_tax(config: &PolicyConfig, taxable: Decimal) -> Decimal {
    let mut tax = Decimal::ZERO;
    for slab in config.tax_slabs() {
        if taxable <= slab.lower {
            break;
        }
        let upper = slab.upper.unwrap_or(taxable).min(taxable);
        tax += (upper - slab.lower) * slab.rate;
    }
    tax
}

/// Builds the breakdown view for a salary structure.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `annual_ctc` is not positive
/// (the percentage shares are undefined without a CTC).
pub fn build_breakdown(
    structure: &SalaryStructure,
    config: &PolicyConfig,
) -> EngineResult<CtcBreakdownView> {
    if structure.annual_ctc <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "annual_ctc",
            "breakdown requires a positive annual CTC",
        ));
    }

    let policy = config.salary();
    let annual = structure.annual_ctc;
    let annual_gross = structure.annual_gross();

    let percentages = BreakdownPercentages {
        basic_pct_of_ctc: pct(structure.basic * Decimal::from(12), annual),
        hra_pct_of_basic: pct(structure.hra, structure.basic),
        special_pct_of_ctc: pct(structure.special_allowance * Decimal::from(12), annual),
        deductions_pct_of_ctc: pct(structure.total_deductions * Decimal::from(12), annual),
        net_pct_of_gross: pct(structure.net_pay, structure.monthly_gross),
    };

    let taxable = (annual_gross - policy.standard_deduction).max(Decimal::ZERO);
    let slab = config.slab_for(taxable);
    let estimated_annual_tax = progressive_tax(config, taxable);
    let tax = TaxAnalysis {
        annual_gross_income: annual_gross,
        annual_taxable_income: taxable,
        tax_slab: slab.map(|s| s.label.clone()).unwrap_or_default(),
        slab_rate: slab.map(|s| s.rate).unwrap_or(Decimal::ZERO),
        estimated_annual_tax,
        estimated_monthly_tax: (estimated_annual_tax / Decimal::from(12)).round_dp(2),
        effective_tax_rate: pct(estimated_annual_tax, annual_gross),
    };

    let mut issues = Vec::new();
    let basic_share = pct(structure.basic * Decimal::from(12), annual);
    if basic_share < policy.compliance.basic_pct_min {
        issues.push(format!(
            "Basic is {}% of CTC, below the {}% floor",
            basic_share, policy.compliance.basic_pct_min
        ));
    }
    if basic_share > policy.compliance.basic_pct_max {
        issues.push(format!(
            "Basic is {}% of CTC, above the {}% ceiling",
            basic_share, policy.compliance.basic_pct_max
        ));
    }
    let hra_share = pct(structure.hra, structure.basic);
    if hra_share > policy.compliance.hra_max_pct_of_basic {
        issues.push(format!(
            "HRA is {}% of basic, above the {}% ceiling",
            hra_share, policy.compliance.hra_max_pct_of_basic
        ));
    }
    if structure.pf_deduction > policy.pf_monthly_cap {
        issues.push(format!(
            "PF deduction {} exceeds the statutory cap {}",
            structure.pf_deduction, policy.pf_monthly_cap
        ));
    }
    let compliance = ComplianceReport {
        is_compliant: issues.is_empty(),
        compliance_score: 100u32.saturating_sub(25 * issues.len() as u32),
        issues,
    };

    Ok(CtcBreakdownView {
        annual_ctc: annual,
        monthly_ctc: (annual / Decimal::from(12)).round_dp(2),
        percentages,
        tax,
        compliance,
        employer_pf: employer_pf_contribution(structure.basic, policy),
        cost_per_day: cost_per_day(annual),
    })
}
