//! Pure condition evaluation (no IO).
//!
//! Input: a condition tree built once at setup time, plus a request context.
//! Output: a three-valued outcome, narrowed to a boolean only at the permission boundary.

#![forbid(unsafe_code)]

pub mod algebra;
pub mod builder;
pub mod context;
pub mod error;
pub mod leaves;
pub mod permission;
pub mod policy;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use algebra::Operator;
pub use context::RequestContext;
pub use engine::Target;
pub use error::ConfigurationError;
pub use leaves::{Leaf, Method};
pub use permission::{ConditionPermission, decide, has_object_permission, has_permission};
pub use policy::{ANONYMOUS_NAME, Composite, Condition, Policy};

pub use conditions_types::{Decision, Level, TriState};
