//! Use case orchestration for conditions.
//!
//! This crate provides the application layer: use cases that coordinate the settings and domain
//! layers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod views;

pub use check::{CheckInput, CheckOutput, decision_exit_code, load_config, parse_request_json, run_check};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{format_decision, serialize_decision};
pub use views::{ViewSummary, format_views, list_views};
