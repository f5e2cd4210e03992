//! Derived attendance summary types.

use serde::{Deserialize, Serialize};

/// The employee's state at the end of a reconstructed event sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// No events yet, or the day ended with a clock-out.
    Idle,
    /// A working session is open.
    Working,
    /// A break is open.
    OnBreak,
}

/// The derived summary of one attendance day.
///
/// Computed on demand from a clock-event sequence; never stored. Live
/// durations are relative to the `now_millis` the caller passed to
/// [`reconstruct_day`](crate::calculation::reconstruct_day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDaySummary {
    /// Total effective worked duration in milliseconds.
    pub effective_worked_millis: i64,
    /// Wall-clock span from first clock-in to last clock-out (or now).
    pub gross_millis: i64,
    /// Total closed break time, plus the live span of an open break.
    pub total_break_millis: i64,
    /// Duration of the currently open break, zero unless on break.
    pub current_break_millis: i64,
    /// State after the last event.
    pub status: AttendanceStatus,
    /// Timestamp of the first clock-in, if any.
    pub first_clock_in_millis: Option<i64>,
    /// Timestamp of the last clock-out, if any.
    pub last_clock_out_millis: Option<i64>,
}

impl AttendanceDaySummary {
    /// An empty summary: no events, everything zero, status `Idle`.
    pub fn empty() -> Self {
        Self {
            effective_worked_millis: 0,
            gross_millis: 0,
            total_break_millis: 0,
            current_break_millis: 0,
            status: AttendanceStatus::Idle,
            first_clock_in_millis: None,
            last_clock_out_millis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_is_idle_and_zero() {
        let summary = AttendanceDaySummary::empty();
        assert_eq!(summary.status, AttendanceStatus::Idle);
        assert_eq!(summary.effective_worked_millis, 0);
        assert_eq!(summary.gross_millis, 0);
        assert_eq!(summary.first_clock_in_millis, None);
    }

    #[test]
    fn test_status_serialization_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::OnBreak).unwrap(),
            "\"on_break\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Working).unwrap(),
            "\"working\""
        );
    }

    #[test]
    fn test_summary_serialization_round_trip() {
        let summary = AttendanceDaySummary {
            effective_worked_millis: 28_800_000,
            gross_millis: 32_400_000,
            total_break_millis: 3_600_000,
            current_break_millis: 0,
            status: AttendanceStatus::Idle,
            first_clock_in_millis: Some(1_700_000_000_000),
            last_clock_out_millis: Some(1_700_032_400_000),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: AttendanceDaySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
