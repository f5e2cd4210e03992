//! Payroll Computation & Attendance Engine
//!
//! This crate provides the pure calculation core behind an HR dashboard:
//! salary-structure derivation from annual CTC, attendance session
//! reconstruction from clock-event logs, monthly loss-of-pay proration,
//! and CTC breakdown views, with a small REST surface for the UI layer.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
