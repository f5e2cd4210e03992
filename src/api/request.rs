//! Request types for the Payroll Computation Engine API.
//!
//! This module defines the JSON request structures for the engine's
//! endpoints and their conversions into domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ClockEvent, ClockEventKind, MonthlyPayrollInput, SalaryStructure};

fn default_currency() -> String {
    "INR".to_string()
}

fn default_auto_calculate() -> bool {
    true
}

/// Request body for the `/salary/structure` and `/finance/ctc-breakdown`
/// endpoints.
///
/// In auto mode only `annual_ctc` matters; in manual mode the component
/// fields are authoritative and the aggregates are recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureRequest {
    /// Annual cost-to-company.
    #[serde(default)]
    pub annual_ctc: Decimal,
    /// Basic salary component (manual mode).
    #[serde(default)]
    pub basic: Decimal,
    /// HRA component (manual mode).
    #[serde(default)]
    pub hra: Decimal,
    /// Special allowance component (manual mode).
    #[serde(default)]
    pub special_allowance: Decimal,
    /// PF deduction (manual mode).
    #[serde(default)]
    pub pf_deduction: Decimal,
    /// Tax deduction (manual mode).
    #[serde(default)]
    pub tax_deduction: Decimal,
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Whether to derive everything from `annual_ctc`.
    #[serde(default = "default_auto_calculate")]
    pub auto_calculate: bool,
}

/// Clock event in an attendance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockEventRequest {
    /// Unique identifier for the event.
    pub id: String,
    /// Event time as epoch milliseconds.
    pub timestamp_millis: i64,
    /// The kind of event.
    pub kind: ClockEventKind,
    /// Where the event was recorded.
    #[serde(default)]
    pub location: String,
}

/// Request body for the `/attendance/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryRequest {
    /// The day's clock events, in chronological order.
    pub events: Vec<ClockEventRequest>,
    /// The caller's current time as epoch milliseconds; drives the live
    /// tick of an open session.
    pub now_millis: i64,
    /// When true, the response includes strict sequence violations.
    #[serde(default)]
    pub strict: bool,
}

/// Request body for the `/payroll/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPayrollRequest {
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
    /// Half-day leaves taken.
    #[serde(default)]
    pub half_day_leaves: u32,
    /// Additional one-off deduction for the month.
    #[serde(default)]
    pub custom_deduction: Decimal,
    /// Scheduled working days, if the attendance service supplies them.
    #[serde(default)]
    pub working_days: Option<u32>,
}

/// Request body for the `/payroll/process` endpoint.
///
/// Carries the salary structure alongside the leave counts so the handler
/// can derive the fixed monthly net, prorate it, and assemble the payslip
/// in one commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPayrollRequest {
    /// The employee the disbursement is for.
    pub employee_id: String,
    /// Month of the period, 1-12.
    pub month: u32,
    /// Year of the period.
    pub year: i32,
    /// The employee's salary structure inputs.
    pub structure: SalaryStructureRequest,
    /// Full unpaid leave days taken; may be fractional.
    #[serde(default)]
    pub unpaid_leave_days: Decimal,
    /// Half-day leaves taken.
    #[serde(default)]
    pub half_day_leaves: u32,
    /// Additional one-off deduction for the month.
    #[serde(default)]
    pub custom_deduction: Decimal,
    /// Scheduled working days, if the attendance service supplies them.
    #[serde(default)]
    pub working_days: Option<u32>,
}

impl From<SalaryStructureRequest> for SalaryStructure {
    fn from(req: SalaryStructureRequest) -> Self {
        SalaryStructure {
            annual_ctc: req.annual_ctc,
            monthly_gross: Decimal::ZERO,
            basic: req.basic,
            hra: req.hra,
            special_allowance: req.special_allowance,
            pf_deduction: req.pf_deduction,
            tax_deduction: req.tax_deduction,
            professional_tax: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_pay: Decimal::ZERO,
            currency: req.currency,
            auto_calculate: req.auto_calculate,
        }
    }
}

impl From<ClockEventRequest> for ClockEvent {
    fn from(req: ClockEventRequest) -> Self {
        ClockEvent {
            id: req.id,
            timestamp_millis: req.timestamp_millis,
            kind: req.kind,
            location: req.location,
        }
    }
}

impl From<MonthlyPayrollRequest> for MonthlyPayrollInput {
    fn from(req: MonthlyPayrollRequest) -> Self {
        MonthlyPayrollInput {
            employee_id: req.employee_id,
            month: req.month,
            year: req.year,
            fixed_monthly_net: req.fixed_monthly_net,
            unpaid_leave_days: req.unpaid_leave_days,
            half_day_leaves: req.half_day_leaves,
            custom_deduction: req.custom_deduction,
            working_days: req.working_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_auto_structure_request() {
        let json = r#"{ "annual_ctc": "500000" }"#;

        let request: SalaryStructureRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.annual_ctc, dec("500000"));
        assert!(request.auto_calculate);
        assert_eq!(request.currency, "INR");
        assert_eq!(request.basic, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_manual_structure_request() {
        let json = r#"{
            "annual_ctc": "480000",
            "basic": "20000",
            "hra": "8000",
            "special_allowance": "12000",
            "pf_deduction": "1500",
            "tax_deduction": "1000",
            "auto_calculate": false
        }"#;

        let request: SalaryStructureRequest = serde_json::from_str(json).unwrap();
        assert!(!request.auto_calculate);
        assert_eq!(request.basic, dec("20000"));
    }

    #[test]
    fn test_deserialize_attendance_request() {
        let json = r#"{
            "events": [
                { "id": "evt_1", "timestamp_millis": 32400000, "kind": "clock_in" },
                { "id": "evt_2", "timestamp_millis": 64800000, "kind": "clock_out" }
            ],
            "now_millis": 72000000
        }"#;

        let request: AttendanceSummaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.events.len(), 2);
        assert_eq!(request.events[0].kind, ClockEventKind::ClockIn);
        assert!(!request.strict);
    }

    #[test]
    fn test_structure_request_conversion_zeroes_derived_fields() {
        let request = SalaryStructureRequest {
            annual_ctc: dec("500000"),
            basic: dec("20000"),
            hra: Decimal::ZERO,
            special_allowance: Decimal::ZERO,
            pf_deduction: Decimal::ZERO,
            tax_deduction: Decimal::ZERO,
            currency: "INR".to_string(),
            auto_calculate: false,
        };

        let structure: SalaryStructure = request.into();
        assert_eq!(structure.monthly_gross, Decimal::ZERO);
        assert_eq!(structure.net_pay, Decimal::ZERO);
        assert_eq!(structure.basic, dec("20000"));
    }

    #[test]
    fn test_monthly_request_conversion() {
        let request = MonthlyPayrollRequest {
            employee_id: "emp_001".to_string(),
            month: 6,
            year: 2026,
            fixed_monthly_net: dec("30000"),
            unpaid_leave_days: dec("1.5"),
            half_day_leaves: 1,
            custom_deduction: Decimal::ZERO,
            working_days: Some(22),
        };

        let input: MonthlyPayrollInput = request.into();
        assert_eq!(input.employee_id, "emp_001");
        assert_eq!(input.unpaid_leave_days, dec("1.5"));
        assert_eq!(input.working_days, Some(22));
    }
}
