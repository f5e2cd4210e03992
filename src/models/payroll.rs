//! Monthly payroll models.
//!
//! This module contains the input and result types for monthly loss-of-pay
//! proration and the assembled [`Payslip`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inputs to a monthly payroll proration.
///
/// Leave counts come pre-aggregated from the leave service; the engine
/// treats them as trusted and only checks arithmetic feasibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayrollInput {
    /// The employee the proration is for.
    pub employee_id: String,
    /// Month of the period, 1-12.
    pub month: u32,
    /// Year of the period.
    pub year: i32,
    /// The fixed monthly net salary before leave deductions.
    pub fixed_monthly_net: Decimal,
    /// Full unpaid leave days taken; may be fractional.
    #[serde(default)]
    pub unpaid_leave_days: Decimal,
    /// Half-day leaves taken, each counting as 0.5 days of LOP.
    #[serde(default)]
    pub half_day_leaves: u32,
    /// Additional one-off deduction for the month.
    #[serde(default)]
    pub custom_deduction: Decimal,
    /// Scheduled working days, if the attendance service supplies them.
    /// Informational; proration always divides by calendar days.
    #[serde(default)]
    pub working_days: Option<u32>,
}

/// The derived proration result for one (employee, month, year).
///
/// `daily_salary` and `leave_deduction` keep full precision; flooring to a
/// whole currency unit happens only at the payslip/display boundary so
/// repeated previews never compound rounding error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayrollRecord {
    /// Month of the period, 1-12.
    pub month: u32,
    /// Year of the period.
    pub year: i32,
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// Scheduled working days for the month.
    pub working_days: u32,
    /// Full unpaid leave days taken.
    pub unpaid_leave_days: Decimal,
    /// Half-day leaves taken.
    pub half_day_leaves: u32,
    /// Total loss-of-pay days: unpaid + half-days × 0.5.
    pub total_lop_days: Decimal,
    /// Days the employee is paid for: calendar days minus LOP days.
    pub payable_days: Decimal,
    /// Full-precision per-day salary: fixed net / calendar days.
    pub daily_salary: Decimal,
    /// Full-precision leave deduction: daily salary × LOP days.
    pub leave_deduction: Decimal,
    /// Additional one-off deduction for the month.
    pub custom_deduction: Decimal,
    /// The fixed monthly net the proration started from.
    pub fixed_monthly_net: Decimal,
    /// Net salary after leave and custom deductions.
    pub final_net_salary: Decimal,
}

/// One earning line on a payslip, with actual and leave-prorated amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningLine {
    /// The component name (e.g., "Basic Salary").
    pub label: String,
    /// The full-month amount.
    pub actual: Decimal,
    /// The amount payable after leave proration.
    pub payable: Decimal,
}

/// One deduction line on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The deduction name (e.g., "Provident Fund").
    pub label: String,
    /// The deducted amount.
    pub amount: Decimal,
}

/// An assembled payslip for one (employee, month, year).
///
/// This is the display-boundary artifact: `net_payable` is floored to a
/// whole currency unit here and nowhere earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this payslip.
    pub payslip_id: Uuid,
    /// The employee the payslip is for.
    pub employee_id: String,
    /// Month of the period, 1-12.
    pub month: u32,
    /// Year of the period.
    pub year: i32,
    /// When the payslip was generated.
    pub generated_at: DateTime<Utc>,
    /// ISO currency code.
    pub currency: String,
    /// Earning lines with actual and payable amounts.
    pub earnings: Vec<EarningLine>,
    /// Deduction lines.
    pub deductions: Vec<DeductionLine>,
    /// Sum of full-month earnings.
    pub total_earnings_actual: Decimal,
    /// Sum of leave-prorated earnings.
    pub total_earnings_payable: Decimal,
    /// Sum of all deduction lines.
    pub total_deductions: Decimal,
    /// Final net payable, floored to a whole currency unit.
    pub net_payable: Decimal,
    /// Employer provident fund contribution (informational).
    pub employer_pf: Decimal,
    /// Employer cost per calendar day of the year (informational).
    pub cost_per_day: Decimal,
    /// The proration the payslip was assembled from.
    pub record: MonthlyPayrollRecord,
}
