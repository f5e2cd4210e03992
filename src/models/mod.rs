//! Domain models for the Payroll Computation Engine.
//!
//! This module contains the data structures used throughout the engine:
//! salary structures, clock events, attendance summaries, and monthly
//! payroll records.

mod attendance;
mod clock_event;
mod payroll;
mod salary;

pub use attendance::{AttendanceDaySummary, AttendanceStatus};
pub use clock_event::{ClockEvent, ClockEventKind};
pub use payroll::{DeductionLine, EarningLine, MonthlyPayrollInput, MonthlyPayrollRecord, Payslip};
pub use salary::SalaryStructure;
