//! Strict clock-event sequence validation.
//!
//! The reconstructor in [`session`](super::reconstruct_day) deliberately
//! tolerates malformed event orders. That leniency can mask data-integrity
//! problems at the attendance source, so this module offers a separate
//! strict pass that names every violation without affecting the summary.

use serde::{Deserialize, Serialize};

use crate::models::{ClockEvent, ClockEventKind};

/// A single deviation from the expected event grammar.
///
/// The expected grammar for one day is
/// `ClockIn (BreakStart BreakEnd)* ClockOut?` with strictly non-decreasing
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceViolation {
    /// The id of the offending event.
    pub event_id: String,
    /// A stable code identifying the violation type.
    pub code: String,
    /// A human-readable description.
    pub message: String,
}

impl SequenceViolation {
    fn new(event: &ClockEvent, code: &str, message: String) -> Self {
        Self {
            event_id: event.id.clone(),
            code: code.to_string(),
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Idle,
    Working,
    OnBreak,
    Closed,
}

/// Checks a clock-event sequence against the expected grammar.
///
/// Returns one violation per deviation, in event order; an empty vector
/// means the sequence is well-formed. This never rejects the sequence —
/// callers that want a hard failure can treat a non-empty result as one.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::check_sequence;
/// use payroll_engine::models::{ClockEvent, ClockEventKind};
///
/// let events = vec![
///     ClockEvent {
///         id: "evt_1".to_string(),
///         timestamp_millis: 1_000,
///         kind: ClockEventKind::ClockIn,
///         location: String::new(),
///     },
///     ClockEvent {
///         id: "evt_2".to_string(),
///         timestamp_millis: 2_000,
///         kind: ClockEventKind::ClockIn,
///         location: String::new(),
///     },
/// ];
///
/// let violations = check_sequence(&events);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].code, "DUPLICATE_CLOCK_IN");
/// ```
pub fn check_sequence(events: &[ClockEvent]) -> Vec<SequenceViolation> {
    let mut violations = Vec::new();
    let mut state = WalkState::Idle;
    let mut previous_ts: Option<i64> = None;

    for event in events {
        if let Some(prev) = previous_ts {
            if event.timestamp_millis < prev {
                violations.push(SequenceViolation::new(
                    event,
                    "OUT_OF_ORDER",
                    format!(
                        "timestamp {} precedes the previous event at {}",
                        event.timestamp_millis, prev
                    ),
                ));
            }
        }
        previous_ts = Some(event.timestamp_millis);

        if state == WalkState::Closed {
            violations.push(SequenceViolation::new(
                event,
                "EVENT_AFTER_CLOCK_OUT",
                "event recorded after the day was closed by a clock-out".to_string(),
            ));
            continue;
        }

        state = match (state, event.kind) {
            (WalkState::Idle, ClockEventKind::ClockIn) => WalkState::Working,
            (WalkState::Working, ClockEventKind::BreakStart) => WalkState::OnBreak,
            (WalkState::OnBreak, ClockEventKind::BreakEnd) => WalkState::Working,
            (WalkState::Working, ClockEventKind::ClockOut) => WalkState::Closed,

            (WalkState::Working, ClockEventKind::ClockIn)
            | (WalkState::OnBreak, ClockEventKind::ClockIn) => {
                violations.push(SequenceViolation::new(
                    event,
                    "DUPLICATE_CLOCK_IN",
                    "clock-in while a session is already open".to_string(),
                ));
                state
            }
            (WalkState::Idle, ClockEventKind::BreakStart)
            | (WalkState::OnBreak, ClockEventKind::BreakStart) => {
                violations.push(SequenceViolation::new(
                    event,
                    "BREAK_START_WHILE_NOT_WORKING",
                    "break started without an active working session".to_string(),
                ));
                state
            }
            (WalkState::Idle, ClockEventKind::BreakEnd)
            | (WalkState::Working, ClockEventKind::BreakEnd) => {
                violations.push(SequenceViolation::new(
                    event,
                    "BREAK_END_WITHOUT_BREAK",
                    "break ended without an open break".to_string(),
                ));
                state
            }
            (WalkState::Idle, ClockEventKind::ClockOut)
            | (WalkState::OnBreak, ClockEventKind::ClockOut) => {
                violations.push(SequenceViolation::new(
                    event,
                    "CLOCK_OUT_WITHOUT_SESSION",
                    "clock-out without an open working session".to_string(),
                ));
                state
            }
            (WalkState::Closed, _) => unreachable!("closed state handled above"),
        };
    }

    violations
}
