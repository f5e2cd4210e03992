//! HTTP API module for the Payroll Computation Engine.
//!
//! This module provides the REST endpoints the HR dashboard calls for
//! salary structures, attendance summaries, payroll proration, and
//! disbursement commits.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceSummaryRequest, ClockEventRequest, MonthlyPayrollRequest, ProcessPayrollRequest,
    SalaryStructureRequest,
};
pub use response::{ApiError, AttendanceSummaryResponse, ProcessPayrollResponse};
pub use state::AppState;
