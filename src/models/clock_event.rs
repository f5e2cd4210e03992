//! Clock event model.
//!
//! This module defines the [`ClockEvent`] struct and [`ClockEventKind`]
//! enum representing a single entry in an employee's attendance log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a clock event.
///
/// A well-formed day alternates `ClockIn` → (`BreakStart` → `BreakEnd`)* →
/// `ClockOut`, with at most one open session or break at any time. The
/// reconstructor tolerates malformed orders; see
/// [`reconstruct_day`](crate::calculation::reconstruct_day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventKind {
    /// The employee started the working day.
    ClockIn,
    /// The employee ended the working day.
    ClockOut,
    /// The employee went on a break.
    BreakStart,
    /// The employee returned from a break.
    BreakEnd,
}

impl ClockEventKind {
    /// Returns true if this kind opens a working session.
    pub fn starts_session(&self) -> bool {
        matches!(self, ClockEventKind::ClockIn | ClockEventKind::BreakEnd)
    }

    /// Returns true if this kind closes a working session.
    pub fn ends_session(&self) -> bool {
        matches!(self, ClockEventKind::ClockOut | ClockEventKind::BreakStart)
    }
}

/// A single entry in an employee's attendance log for one day.
///
/// Events are appended by explicit user action and never deleted; the
/// attendance source supplies them in chronological order.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ClockEvent, ClockEventKind};
///
/// let event = ClockEvent {
///     id: "evt_001".to_string(),
///     timestamp_millis: 1_700_000_000_000,
///     kind: ClockEventKind::ClockIn,
///     location: "Office".to_string(),
/// };
/// assert!(event.kind.starts_session());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Unique identifier for the event.
    pub id: String,
    /// Event time as epoch milliseconds, as supplied by the attendance source.
    pub timestamp_millis: i64,
    /// The kind of event.
    pub kind: ClockEventKind,
    /// Where the event was recorded (e.g., "Office", "Remote").
    #[serde(default)]
    pub location: String,
}

impl ClockEvent {
    /// Converts the raw epoch-millisecond timestamp to a UTC datetime.
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_millis)
    }
}
