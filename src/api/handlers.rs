//! HTTP request handlers for the Payroll Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_breakdown, build_payslip, check_sequence, compute_auto_structure,
    compute_manual_aggregates, compute_monthly, reconstruct_day,
};
use crate::config::SalaryPolicy;
use crate::error::EngineResult;
use crate::ledger::PayrollPeriodKey;
use crate::models::{ClockEvent, MonthlyPayrollInput, SalaryStructure};

use super::request::{
    AttendanceSummaryRequest, MonthlyPayrollRequest, ProcessPayrollRequest, SalaryStructureRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, AttendanceSummaryResponse, ProcessPayrollResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary/structure", post(salary_structure_handler))
        .route("/attendance/summary", post(attendance_summary_handler))
        .route("/payroll/monthly", post(monthly_payroll_handler))
        .route("/payroll/process", post(process_payroll_handler))
        .route("/finance/ctc-breakdown", post(ctc_breakdown_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, translating axum rejections into API errors.
fn unpack<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(match rejection {
            JsonRejection::JsonDataError(err) => {
                // Get the body text which contains the detailed error from serde
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                if body_text.contains("missing field") {
                    ApiError::new("VALIDATION_ERROR", body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "JSON syntax error"
                );
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        }),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error(error: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn ok_json<T: serde::Serialize>(body: T) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Derives a salary structure from request inputs, honoring the mode flag.
fn derive_structure(
    request: SalaryStructureRequest,
    policy: &SalaryPolicy,
) -> EngineResult<SalaryStructure> {
    let input: SalaryStructure = request.into();
    if input.auto_calculate {
        let mut structure = compute_auto_structure(input.annual_ctc, policy)?;
        structure.currency = input.currency;
        Ok(structure)
    } else {
        compute_manual_aggregates(&input, policy)
    }
}

/// Handler for POST /salary/structure.
///
/// Computes the full structure in auto mode or re-aggregates caller
/// components in manual mode.
async fn salary_structure_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryStructureRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary structure request");

    let request = match unpack(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    match derive_structure(request, state.policy().salary()) {
        Ok(structure) => {
            info!(
                correlation_id = %correlation_id,
                net_pay = %structure.net_pay,
                auto = structure.auto_calculate,
                "Salary structure computed"
            );
            ok_json(structure)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Salary structure failed");
            engine_error(err)
        }
    }
}

/// Handler for POST /attendance/summary.
///
/// Reconstructs the day summary; with `strict: true` the response also
/// carries sequence violations. Reconstruction itself never fails.
async fn attendance_summary_handler(
    State(_state): State<AppState>,
    payload: Result<Json<AttendanceSummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");

    let request = match unpack(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let events: Vec<ClockEvent> = request.events.into_iter().map(Into::into).collect();
    let summary = reconstruct_day(&events, request.now_millis);
    let violations = request.strict.then(|| check_sequence(&events));

    info!(
        correlation_id = %correlation_id,
        events_count = events.len(),
        effective_worked_millis = summary.effective_worked_millis,
        violations = violations.as_ref().map(|v| v.len()).unwrap_or(0),
        "Attendance summary reconstructed"
    );

    ok_json(AttendanceSummaryResponse {
        summary,
        violations,
    })
}

/// Handler for POST /payroll/monthly.
///
/// Pure proration preview; no ledger interaction, safe to repeat.
async fn monthly_payroll_handler(
    State(_state): State<AppState>,
    payload: Result<Json<MonthlyPayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly payroll request");

    let request = match unpack(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let input: MonthlyPayrollInput = request.into();
    match compute_monthly(&input) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %input.employee_id,
                final_net_salary = %record.final_net_salary,
                "Monthly payroll computed"
            );
            ok_json(record)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Monthly payroll failed");
            engine_error(err)
        }
    }
}

/// Handler for POST /payroll/process.
///
/// Derives the structure, prorates the month, and commits against the
/// processed-payroll ledger. A period already in the ledger yields a
/// `duplicate_prevented` success with nothing credited — the UI must be
/// able to tell that apart from a genuine failure.
async fn process_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessPayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll commit request");

    let request = match unpack(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let policy = state.policy().salary();
    let structure = match derive_structure(request.structure, policy) {
        Ok(structure) => structure,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll commit failed");
            return engine_error(err);
        }
    };

    let input = MonthlyPayrollInput {
        employee_id: request.employee_id.clone(),
        month: request.month,
        year: request.year,
        fixed_monthly_net: structure.net_pay,
        unpaid_leave_days: request.unpaid_leave_days,
        half_day_leaves: request.half_day_leaves,
        custom_deduction: request.custom_deduction,
        working_days: request.working_days,
    };
    let record = match compute_monthly(&input) {
        Ok(record) => record,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll commit failed");
            return engine_error(err);
        }
    };

    let key = PayrollPeriodKey::new(request.employee_id.clone(), request.month, request.year);
    if !state.ledger().record(key) {
        info!(
            correlation_id = %correlation_id,
            employee_id = %request.employee_id,
            month = request.month,
            year = request.year,
            "Duplicate payroll commit prevented"
        );
        return ok_json(ProcessPayrollResponse {
            success: true,
            duplicate_prevented: true,
            message: "Salary for this month has already been credited".to_string(),
            employee_id: request.employee_id,
            month: request.month,
            year: request.year,
            status: "already_paid".to_string(),
            amount_processed: Decimal::ZERO,
            payslip: None,
        });
    }

    let payslip = match build_payslip(&structure, &record, &request.employee_id, policy) {
        Ok(payslip) => payslip,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payslip assembly failed");
            return engine_error(err);
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        month = request.month,
        year = request.year,
        amount_processed = %payslip.net_payable,
        "Payroll processed successfully"
    );

    ok_json(ProcessPayrollResponse {
        success: true,
        duplicate_prevented: false,
        message: "Salary processed successfully".to_string(),
        employee_id: request.employee_id,
        month: request.month,
        year: request.year,
        status: "paid".to_string(),
        amount_processed: payslip.net_payable,
        payslip: Some(payslip),
    })
}

/// Handler for POST /finance/ctc-breakdown.
async fn ctc_breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryStructureRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CTC breakdown request");

    let request = match unpack(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let config = state.policy().config();
    let result = derive_structure(request, config.salary())
        .and_then(|structure| build_breakdown(&structure, config));

    match result {
        Ok(view) => {
            info!(
                correlation_id = %correlation_id,
                annual_ctc = %view.annual_ctc,
                compliance_score = view.compliance.compliance_score,
                "CTC breakdown computed"
            );
            ok_json(view)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "CTC breakdown failed");
            engine_error(err)
        }
    }
}
