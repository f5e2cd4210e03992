//! Response types for the Payroll Computation Engine API.
//!
//! This module defines the success wrappers and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::SequenceViolation;
use crate::error::EngineError;
use crate::models::{AttendanceDaySummary, Payslip};

/// Response body for the `/attendance/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryResponse {
    /// The reconstructed day summary.
    pub summary: AttendanceDaySummary,
    /// Strict sequence violations; present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<SequenceViolation>>,
}

/// Response body for the `/payroll/process` endpoint.
///
/// A duplicate commit is a success with `duplicate_prevented: true` and no
/// payslip; the UI shows materially different messaging for a duplicate
/// than for a failure, so the two must never share a shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPayrollResponse {
    /// True for both a fresh disbursement and a prevented duplicate.
    pub success: bool,
    /// True when the period was already disbursed and nothing was credited.
    pub duplicate_prevented: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// The employee the commit was for.
    pub employee_id: String,
    /// Month of the period, 1-12.
    pub month: u32,
    /// Year of the period.
    pub year: i32,
    /// Disbursement status: "paid" or "already_paid".
    pub status: String,
    /// The amount credited; zero for a prevented duplicate.
    pub amount_processed: Decimal,
    /// The assembled payslip; absent for a prevented duplicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payslip: Option<Payslip>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input '{}': {}", field, message),
                    "The request contains a value the engine cannot calculate with",
                ),
            },
            EngineError::ValidationError { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Validation failed: {}", message),
                    "The requested leave and day combination is impossible",
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Policy configuration error",
                    format!("Policy file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Policy configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
