//! Attendance session reconstruction.
//!
//! This module rebuilds a day's worked and break durations from its raw
//! clock-event log. The walk is deliberately lenient: malformed sequences
//! produce a best-effort summary, never an error. Strict diagnostics live
//! in [`check_sequence`](super::check_sequence) as a separate pass.

use crate::models::{AttendanceDaySummary, AttendanceStatus, ClockEvent, ClockEventKind};

/// Reconstructs a day summary from a chronological clock-event sequence.
///
/// A working session opens on `ClockIn` or `BreakEnd` (the first start wins
/// if a stray duplicate arrives) and closes on `BreakStart` or `ClockOut`,
/// contributing its span to the effective worked time. A session still open
/// after the last event contributes `now_millis − session_start` — the live
/// ticking the UI polls for. `now_millis` must come from the caller on every
/// invocation; this function holds no clock of its own.
///
/// Out-of-order timestamps clamp individual spans to zero rather than
/// failing; the reconstruction is total.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::reconstruct_day;
/// use payroll_engine::models::{AttendanceStatus, ClockEvent, ClockEventKind};
///
/// const HOUR: i64 = 3_600_000;
/// let events = vec![ClockEvent {
///     id: "evt_1".to_string(),
///     timestamp_millis: 9 * HOUR,
///     kind: ClockEventKind::ClockIn,
///     location: "Office".to_string(),
/// }];
///
/// let summary = reconstruct_day(&events, 11 * HOUR);
/// assert_eq!(summary.effective_worked_millis, 2 * HOUR);
/// assert_eq!(summary.status, AttendanceStatus::Working);
/// ```
pub fn reconstruct_day(events: &[ClockEvent], now_millis: i64) -> AttendanceDaySummary {
    let mut effective_worked: i64 = 0;
    let mut total_break: i64 = 0;
    let mut session_start: Option<i64> = None;
    let mut break_start: Option<i64> = None;

    for event in events {
        match event.kind {
            ClockEventKind::ClockIn | ClockEventKind::BreakEnd => {
                if event.kind == ClockEventKind::BreakEnd {
                    if let Some(start) = break_start.take() {
                        total_break += (event.timestamp_millis - start).max(0);
                    }
                }
                if session_start.is_none() {
                    session_start = Some(event.timestamp_millis);
                }
            }
            ClockEventKind::BreakStart | ClockEventKind::ClockOut => {
                if let Some(start) = session_start.take() {
                    effective_worked += (event.timestamp_millis - start).max(0);
                }
                if event.kind == ClockEventKind::BreakStart && break_start.is_none() {
                    break_start = Some(event.timestamp_millis);
                }
            }
        }
    }

    let status = match events.last().map(|e| e.kind) {
        None | Some(ClockEventKind::ClockOut) => AttendanceStatus::Idle,
        Some(ClockEventKind::BreakStart) => AttendanceStatus::OnBreak,
        Some(ClockEventKind::ClockIn) | Some(ClockEventKind::BreakEnd) => {
            AttendanceStatus::Working
        }
    };

    // Live contribution of a still-open session.
    if status == AttendanceStatus::Working {
        if let Some(start) = session_start {
            effective_worked += (now_millis - start).max(0);
        }
    }

    // Live contribution of a still-open break.
    let current_break = match (status, break_start) {
        (AttendanceStatus::OnBreak, Some(start)) => (now_millis - start).max(0),
        _ => 0,
    };
    total_break += current_break;

    let first_clock_in = events
        .iter()
        .find(|e| e.kind == ClockEventKind::ClockIn)
        .map(|e| e.timestamp_millis);
    let last_clock_out = events
        .iter()
        .rev()
        .find(|e| e.kind == ClockEventKind::ClockOut)
        .map(|e| e.timestamp_millis);

    let gross = match first_clock_in {
        None => 0,
        Some(first) => {
            let day_closed = events.last().map(|e| e.kind) == Some(ClockEventKind::ClockOut);
            let end = match (day_closed, last_clock_out) {
                (true, Some(out)) => out,
                _ => now_millis,
            };
            (end - first).max(0)
        }
    };

    AttendanceDaySummary {
        effective_worked_millis: effective_worked,
        gross_millis: gross,
        total_break_millis: total_break,
        current_break_millis: current_break,
        status,
        first_clock_in_millis: first_clock_in,
        last_clock_out_millis: last_clock_out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;
    const MINUTE: i64 = 60_000;

    fn ev(kind: ClockEventKind, timestamp_millis: i64) -> ClockEvent {
        ClockEvent {
            id: format!("evt_{timestamp_millis}"),
            timestamp_millis,
            kind,
            location: "Office".to_string(),
        }
    }

    /// SR-001: simple day, clock-in to clock-out
    #[test]
    fn test_simple_day() {
        let events = vec![
            ev(ClockEventKind::ClockIn, 9 * HOUR),
            ev(ClockEventKind::ClockOut, 18 * HOUR),
        ];

        let summary = reconstruct_day(&events, 20 * HOUR);

        assert_eq!(summary.effective_worked_millis, 9 * HOUR);
        assert_eq!(summary.gross_millis, 9 * HOUR);
        assert_eq!(summary.total_break_millis, 0);
        assert_eq!(summary.status, AttendanceStatus::Idle);
    }

    /// SR-002: day with one break
    #[test]
    fn test_day_with_break() {
        let events = vec![
            ev(ClockEventKind::ClockIn, 9 * HOUR),
            ev(ClockEventKind::BreakStart, 12 * HOUR),
            ev(ClockEventKind::BreakEnd, 13 * HOUR),
            ev(ClockEventKind::ClockOut, 18 * HOUR),
        ];

        let summary = reconstruct_day(&events, 20 * HOUR);

        assert_eq!(summary.effective_worked_millis, 8 * HOUR);
        assert_eq!(summary.gross_millis, 9 * HOUR);
        assert_eq!(summary.total_break_millis, HOUR);
        assert_eq!(summary.current_break_millis, 0);
        assert_eq!(summary.status, AttendanceStatus::Idle);
    }

    /// SR-003: live open session ticks against now
    #[test]
    fn test_live_open_session() {
        let events = vec![ev(ClockEventKind::ClockIn, 9 * HOUR)];

        let summary = reconstruct_day(&events, 11 * HOUR);

        assert_eq!(summary.effective_worked_millis, 2 * HOUR);
        assert_eq!(summary.gross_millis, 2 * HOUR);
        assert_eq!(summary.status, AttendanceStatus::Working);
    }

    /// SR-004: the live tick is recomputed from each fresh now
    #[test]
    fn test_live_session_advances_with_now() {
        let events = vec![ev(ClockEventKind::ClockIn, 9 * HOUR)];

        let at_11 = reconstruct_day(&events, 11 * HOUR);
        let at_12 = reconstruct_day(&events, 12 * HOUR);

        assert_eq!(at_12.effective_worked_millis - at_11.effective_worked_millis, HOUR);
    }

    /// SR-005: currently on break
    #[test]
    fn test_currently_on_break() {
        let events = vec![
            ev(ClockEventKind::ClockIn, 9 * HOUR),
            ev(ClockEventKind::BreakStart, 12 * HOUR),
        ];

        let summary = reconstruct_day(&events, 12 * HOUR + 30 * MINUTE);

        assert_eq!(summary.effective_worked_millis, 3 * HOUR);
        assert_eq!(summary.current_break_millis, 30 * MINUTE);
        assert_eq!(summary.total_break_millis, 30 * MINUTE);
        assert_eq!(summary.status, AttendanceStatus::OnBreak);
        // gross keeps ticking while on break
        assert_eq!(summary.gross_millis, 3 * HOUR + 30 * MINUTE);
    }

    /// SR-006: no events at all
    #[test]
    fn test_empty_log_is_idle_and_zero() {
        let summary = reconstruct_day(&[], 12 * HOUR);
        assert_eq!(summary, AttendanceDaySummary::empty());
    }

    /// SR-007: two consecutive clock-ins keep the first session start
    #[test]
    fn test_duplicate_clock_in_keeps_first_start() {
        let events = vec![
            ev(ClockEventKind::ClockIn, 9 * HOUR),
            ev(ClockEventKind::ClockIn, 10 * HOUR),
            ev(ClockEventKind::ClockOut, 18 * HOUR),
        ];

        let summary = reconstruct_day(&events, 20 * HOUR);

        assert_eq!(summary.effective_worked_millis, 9 * HOUR);
        assert_eq!(summary.status, AttendanceStatus::Idle);
    }

    /// SR-008: break-end without a break-start opens a session
    #[test]
    fn test_break_end_without_break_start() {
        let events = vec![
            ev(ClockEventKind::BreakEnd, 10 * HOUR),
            ev(ClockEventKind::ClockOut, 12 * HOUR),
        ];

        let summary = reconstruct_day(&events, 14 * HOUR);

        assert_eq!(summary.effective_worked_millis, 2 * HOUR);
        // no ClockIn anywhere, so no gross span
        assert_eq!(summary.gross_millis, 0);
        assert_eq!(summary.first_clock_in_millis, None);
    }

    /// SR-009: clock-out with no open session contributes nothing
    #[test]
    fn test_clock_out_only() {
        let events = vec![ev(ClockEventKind::ClockOut, 18 * HOUR)];

        let summary = reconstruct_day(&events, 20 * HOUR);

        assert_eq!(summary.effective_worked_millis, 0);
        assert_eq!(summary.status, AttendanceStatus::Idle);
    }

    /// SR-010: out-of-order timestamps clamp to zero instead of going negative
    #[test]
    fn test_out_of_order_clamps_to_zero() {
        let events = vec![
            ev(ClockEventKind::ClockIn, 12 * HOUR),
            ev(ClockEventKind::ClockOut, 9 * HOUR),
        ];

        let summary = reconstruct_day(&events, 14 * HOUR);

        assert_eq!(summary.effective_worked_millis, 0);
        assert_eq!(summary.gross_millis, 0);
    }

    /// SR-011: now earlier than an open session start clamps the live tick
    #[test]
    fn test_now_before_open_session_clamps() {
        let events = vec![ev(ClockEventKind::ClockIn, 9 * HOUR)];

        let summary = reconstruct_day(&events, 8 * HOUR);

        assert_eq!(summary.effective_worked_millis, 0);
        assert_eq!(summary.status, AttendanceStatus::Working);
    }

    /// SR-012: multiple breaks accumulate
    #[test]
    fn test_multiple_breaks_accumulate() {
        let events = vec![
            ev(ClockEventKind::ClockIn, 8 * HOUR),
            ev(ClockEventKind::BreakStart, 10 * HOUR),
            ev(ClockEventKind::BreakEnd, 10 * HOUR + 15 * MINUTE),
            ev(ClockEventKind::BreakStart, 13 * HOUR),
            ev(ClockEventKind::BreakEnd, 13 * HOUR + 45 * MINUTE),
            ev(ClockEventKind::ClockOut, 17 * HOUR),
        ];

        let summary = reconstruct_day(&events, 18 * HOUR);

        assert_eq!(summary.total_break_millis, HOUR);
        assert_eq!(summary.effective_worked_millis, 8 * HOUR);
        assert_eq!(summary.gross_millis, 9 * HOUR);
    }

    /// SR-013: a day that ends without clock-out keeps gross ticking
    #[test]
    fn test_unclosed_day_gross_uses_now() {
        let events = vec![
            ev(ClockEventKind::ClockIn, 9 * HOUR),
            ev(ClockEventKind::BreakStart, 12 * HOUR),
            ev(ClockEventKind::BreakEnd, 13 * HOUR),
        ];

        let summary = reconstruct_day(&events, 15 * HOUR);

        assert_eq!(summary.status, AttendanceStatus::Working);
        assert_eq!(summary.gross_millis, 6 * HOUR);
        assert_eq!(summary.effective_worked_millis, 5 * HOUR);
    }

    /// SR-014: reconstruction is a pure function of (events, now)
    #[test]
    fn test_reconstruction_is_idempotent() {
        let events = vec![
            ev(ClockEventKind::ClockIn, 9 * HOUR),
            ev(ClockEventKind::BreakStart, 12 * HOUR),
        ];

        let a = reconstruct_day(&events, 13 * HOUR);
        let b = reconstruct_day(&events, 13 * HOUR);
        assert_eq!(a, b);
    }
}
