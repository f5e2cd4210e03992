//! Monthly loss-of-pay proration.
//!
//! This module turns a fixed monthly net and the month's leave counts into
//! a [`MonthlyPayrollRecord`]. All intermediate values keep full precision;
//! flooring to a whole currency unit is the payslip boundary's job, so a
//! record can be recomputed for preview any number of times without
//! compounding rounding error.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlyPayrollInput, MonthlyPayrollRecord};

/// Returns the number of calendar days in the given month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `month` is outside 1-12 or the
/// (month, year) pair is not a representable date.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024).unwrap(), 29);
/// assert_eq!(days_in_month(6, 2026).unwrap(), 30);
/// ```
pub fn days_in_month(month: u32, year: i32) -> EngineResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EngineError::invalid_input("month", format!("{}-{} is not a valid month", year, month))
    })?;

    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| {
        EngineError::invalid_input("month", format!("{}-{} is not a valid month", year, month))
    })?;

    Ok(next_month_first.signed_duration_since(first).num_days() as u32)
}

/// Prorates a fixed monthly net over the month's unpaid leave.
///
/// - `total_lop_days = unpaid_leave_days + half_day_leaves × 0.5`
/// - `payable_days = days_in_month − total_lop_days`
/// - `daily_salary = fixed_monthly_net / days_in_month` (full precision)
/// - `leave_deduction = daily_salary × total_lop_days`
/// - `final_net_salary = fixed_monthly_net − leave_deduction − custom_deduction`
///
/// Purely functional: this performs no "already paid" check and may be
/// invoked repeatedly for previews. Committing a disbursement is the
/// ledger's concern.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] for negative monetary or leave inputs,
///   an unrepresentable month, or `working_days` beyond the calendar.
/// - [`EngineError::ValidationError`] when the leave days exceed the days
///   in the month (payable days would go negative).
pub fn compute_monthly(input: &MonthlyPayrollInput) -> EngineResult<MonthlyPayrollRecord> {
    if input.fixed_monthly_net < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "fixed_monthly_net",
            "must not be negative",
        ));
    }
    if input.unpaid_leave_days < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "unpaid_leave_days",
            "must not be negative",
        ));
    }
    if input.custom_deduction < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "custom_deduction",
            "must not be negative",
        ));
    }

    let days = days_in_month(input.month, input.year)?;
    let days_dec = Decimal::from(days);

    let working_days = match input.working_days {
        Some(wd) if wd > days => {
            return Err(EngineError::invalid_input(
                "working_days",
                format!("{} exceeds the {} calendar days of the month", wd, days),
            ));
        }
        Some(wd) => wd,
        None => days,
    };

    let half_days = Decimal::from(input.half_day_leaves) * Decimal::new(5, 1);
    let total_lop_days = input.unpaid_leave_days + half_days;

    if total_lop_days > days_dec {
        return Err(EngineError::validation(format!(
            "{} leave days exceed the {} days of {}-{}",
            total_lop_days, days, input.year, input.month
        )));
    }

    let payable_days = days_dec - total_lop_days;
    let daily_salary = input.fixed_monthly_net / days_dec;
    let leave_deduction = daily_salary * total_lop_days;
    let final_net_salary = input.fixed_monthly_net - leave_deduction - input.custom_deduction;

    Ok(MonthlyPayrollRecord {
        month: input.month,
        year: input.year,
        days_in_month: days,
        working_days,
        unpaid_leave_days: input.unpaid_leave_days,
        half_day_leaves: input.half_day_leaves,
        total_lop_days,
        payable_days,
        daily_salary,
        leave_deduction,
        custom_deduction: input.custom_deduction,
        fixed_monthly_net: input.fixed_monthly_net,
        final_net_salary,
    })
}
