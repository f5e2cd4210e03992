//! Payslip assembly.
//!
//! This module joins a [`SalaryStructure`] with a [`MonthlyPayrollRecord`]
//! into the display-boundary [`Payslip`]: per-component actual vs payable
//! earnings, deduction lines, and the final net floored to a whole
//! currency unit. This is the only place the proration result is floored.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::SalaryPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionLine, EarningLine, MonthlyPayrollRecord, Payslip, SalaryStructure};

use super::breakdown::{cost_per_day, employer_pf_contribution};
use super::money::floor_to_unit;

/// Assembles a payslip from a salary structure and a proration record.
///
/// Each earning component is prorated by `payable_days / days_in_month` and
/// rounded to two decimals per line; the leave math itself stays with the
/// record. The structure supplies the component amounts and deduction
/// figures, the record supplies the leave outcome.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a record with zero
/// `days_in_month` (cannot prorate over an empty month).
pub fn build_payslip(
    structure: &SalaryStructure,
    record: &MonthlyPayrollRecord,
    employee_id: &str,
    policy: &SalaryPolicy,
) -> EngineResult<Payslip> {
    if record.days_in_month == 0 {
        return Err(EngineError::invalid_input(
            "days_in_month",
            "cannot prorate over an empty month",
        ));
    }

    let factor = record.payable_days / Decimal::from(record.days_in_month);
    let prorate = |actual: Decimal| (actual * factor).round_dp(2);

    let earnings = vec![
        EarningLine {
            label: "Basic Salary".to_string(),
            actual: structure.basic,
            payable: prorate(structure.basic),
        },
        EarningLine {
            label: "HRA Allowance".to_string(),
            actual: structure.hra,
            payable: prorate(structure.hra),
        },
        EarningLine {
            label: "Special Allowance".to_string(),
            actual: structure.special_allowance,
            payable: prorate(structure.special_allowance),
        },
    ];
    let total_earnings_actual: Decimal = earnings.iter().map(|e| e.actual).sum();
    let total_earnings_payable: Decimal = earnings.iter().map(|e| e.payable).sum();

    let mut deductions = vec![
        DeductionLine {
            label: "Provident Fund".to_string(),
            amount: structure.pf_deduction,
        },
        DeductionLine {
            label: "Income Tax".to_string(),
            amount: structure.tax_deduction,
        },
        DeductionLine {
            label: "Professional Tax".to_string(),
            amount: structure.professional_tax,
        },
        DeductionLine {
            label: "Leave Deduction".to_string(),
            amount: record.leave_deduction.round_dp(2),
        },
    ];
    if record.custom_deduction > Decimal::ZERO {
        deductions.push(DeductionLine {
            label: "Custom Deduction".to_string(),
            amount: record.custom_deduction,
        });
    }
    let total_deductions: Decimal = deductions.iter().map(|d| d.amount).sum();

    Ok(Payslip {
        payslip_id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        month: record.month,
        year: record.year,
        generated_at: Utc::now(),
        currency: structure.currency.clone(),
        earnings,
        deductions,
        total_earnings_actual,
        total_earnings_payable,
        total_deductions,
        net_payable: floor_to_unit(record.final_net_salary),
        employer_pf: employer_pf_contribution(structure.basic, policy),
        cost_per_day: cost_per_day(structure.annual_ctc),
        record: record.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_auto_structure, compute_monthly};
    use crate::models::MonthlyPayrollInput;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy() -> SalaryPolicy {
        SalaryPolicy::default()
    }

    fn structure() -> SalaryStructure {
        compute_auto_structure(dec("500000"), &policy()).unwrap()
    }

    fn record(unpaid: &str, custom: &str) -> MonthlyPayrollRecord {
        let input = MonthlyPayrollInput {
            employee_id: "emp_001".to_string(),
            month: 6,
            year: 2026,
            fixed_monthly_net: structure().net_pay,
            unpaid_leave_days: dec(unpaid),
            half_day_leaves: 0,
            custom_deduction: dec(custom),
            working_days: None,
        };
        compute_monthly(&input).unwrap()
    }

    /// PS-001: zero leave pays every component in full
    #[test]
    fn test_full_month_pays_components_in_full() {
        let payslip = build_payslip(&structure(), &record("0", "0"), "emp_001", &policy()).unwrap();

        for line in &payslip.earnings {
            assert_eq!(line.actual, line.payable, "line {} was prorated", line.label);
        }
        assert_eq!(payslip.total_earnings_actual, dec("41666"));
        assert_eq!(payslip.total_earnings_payable, dec("41666"));
        assert_eq!(payslip.net_payable, dec("37583"));
    }

    /// PS-002: three unpaid days prorate each component by 27/30
    #[test]
    fn test_unpaid_days_prorate_components() {
        let payslip = build_payslip(&structure(), &record("3", "0"), "emp_001", &policy()).unwrap();

        assert_eq!(payslip.earnings[0].label, "Basic Salary");
        assert_eq!(payslip.earnings[0].actual, dec("16666"));
        assert_eq!(payslip.earnings[0].payable, dec("14999.40"));
        assert_eq!(payslip.earnings[1].payable, dec("5999.40"));
        assert_eq!(payslip.earnings[2].payable, dec("16500.60"));
        assert_eq!(payslip.total_earnings_payable, dec("41499.40"));

        // 37583 - 3 * (37583 / 30), floored at this boundary only
        assert_eq!(payslip.net_payable, dec("33824"));
    }

    /// PS-003: deduction lines carry structure and record figures
    #[test]
    fn test_deduction_lines() {
        let payslip = build_payslip(&structure(), &record("3", "0"), "emp_001", &policy()).unwrap();

        let labels: Vec<&str> = payslip.deductions.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Provident Fund", "Income Tax", "Professional Tax", "Leave Deduction"]
        );
        assert_eq!(payslip.deductions[0].amount, dec("1800"));
        assert_eq!(payslip.deductions[1].amount, dec("2083"));
        assert_eq!(payslip.deductions[2].amount, dec("200"));
        assert_eq!(payslip.deductions[3].amount, dec("3758.30"));
    }

    /// PS-004: a custom deduction adds its own line
    #[test]
    fn test_custom_deduction_line_appears_when_present() {
        let payslip =
            build_payslip(&structure(), &record("0", "750"), "emp_001", &policy()).unwrap();

        let custom = payslip
            .deductions
            .iter()
            .find(|d| d.label == "Custom Deduction")
            .expect("custom deduction line missing");
        assert_eq!(custom.amount, dec("750"));
    }

    /// PS-005: employer figures ride along for display
    #[test]
    fn test_employer_figures_attached() {
        let payslip = build_payslip(&structure(), &record("0", "0"), "emp_001", &policy()).unwrap();

        // min(16666, 15000) * 0.12 = 1800
        assert_eq!(payslip.employer_pf, dec("1800"));
        assert_eq!(payslip.cost_per_day, dec("1369.86"));
        assert_eq!(payslip.currency, "INR");
    }

    /// PS-006: a hand-built record with an empty month is rejected
    #[test]
    fn test_zero_day_record_rejected() {
        let mut broken = record("0", "0");
        broken.days_in_month = 0;

        match build_payslip(&structure(), &broken, "emp_001", &policy()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "days_in_month"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
