//! Three-valued authorization conditions for request handlers.
//!
//! Conditions evaluate to [`TriState::Permit`], [`TriState::Deny`] or [`TriState::Abstain`] and
//! combine with `&`, `|` and `!`. A [`ConditionPermission`] attached to a view narrows the result
//! to a yes/no answer, treating `Abstain` as denial:
//!
//! ```
//! use conditions::{ConditionPermission, Leaf, Policy, RequestSnapshot};
//!
//! let policy = Policy::from(Leaf::Authenticated)
//!     & (Policy::from(Leaf::ReadOnly) | Policy::from(Leaf::Staff));
//! let permission = ConditionPermission::new(Some(policy));
//!
//! assert!(!permission.has_permission(&RequestSnapshot::new("GET")));
//! ```

#![forbid(unsafe_code)]

pub use conditions_domain::{
    ANONYMOUS_NAME, Composite, Condition, ConditionPermission, ConfigurationError, Leaf, Method,
    Operator, Policy, RequestContext, Target, algebra, builder, decide, has_object_permission,
    has_permission,
};
pub use conditions_types::{Caller, Decision, Level, RequestSnapshot, TriState, ids};
