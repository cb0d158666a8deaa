//! Stable DTOs and IDs used across the conditions workspace.
//!
//! This crate is intentionally boring:
//! - the three-valued evaluation outcome
//! - stable string IDs for builtin conditions
//! - a plain request snapshot hosts can fill in
//! - the decision receipt and explain registry

#![forbid(unsafe_code)]

pub mod decision;
pub mod explain;
pub mod ids;
pub mod outcome;
pub mod request;

pub use decision::{Decision, Level, SCHEMA_DECISION_V1};
pub use explain::{Explanation, lookup_explanation};
pub use outcome::TriState;
pub use request::{Caller, RequestSnapshot};
