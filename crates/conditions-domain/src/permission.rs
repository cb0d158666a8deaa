//! The permission boundary hosts call.
//!
//! This is the only place an abstaining outcome is collapsed: anything but
//! `Permit` denies.

use crate::context::RequestContext;
use crate::engine::Target;
use crate::policy::Policy;
use conditions_types::{Decision, TriState};
use std::any::Any;
use tracing::debug;

/// Permission check wrapping the condition configured for one view.
///
/// A view without a condition behaves as `AlwaysPermit`.
#[derive(Clone, Debug, Default)]
pub struct ConditionPermission {
    condition: Option<Policy>,
}

impl ConditionPermission {
    pub fn new(condition: Option<Policy>) -> Self {
        Self { condition }
    }

    /// The condition that will be evaluated, after applying the default.
    pub fn condition(&self) -> Policy {
        self.condition.clone().unwrap_or_default()
    }

    pub fn has_permission(&self, ctx: &dyn RequestContext) -> bool {
        has_permission(self.condition.as_ref(), ctx)
    }

    pub fn has_object_permission(&self, ctx: &dyn RequestContext, obj: &dyn Any) -> bool {
        has_object_permission(self.condition.as_ref(), ctx, obj)
    }

    pub fn decide(&self, ctx: &dyn RequestContext, target: Target<'_>) -> Decision {
        decide(self.condition.as_ref(), ctx, target)
    }
}

/// Collective-level check: `true` only when the condition permits.
pub fn has_permission(condition: Option<&Policy>, ctx: &dyn RequestContext) -> bool {
    decide(condition, ctx, Target::Collective).permitted
}

/// Object-level check for `obj`: `true` only when the condition permits.
pub fn has_object_permission(
    condition: Option<&Policy>,
    ctx: &dyn RequestContext,
    obj: &dyn Any,
) -> bool {
    decide(condition, ctx, Target::Object(obj)).permitted
}

/// Evaluate and narrow, keeping the raw outcome for diagnostics.
pub fn decide(condition: Option<&Policy>, ctx: &dyn RequestContext, target: Target<'_>) -> Decision {
    let fallback;
    let policy = match condition {
        Some(policy) => policy,
        None => {
            fallback = Policy::default();
            &fallback
        }
    };

    let outcome: TriState = policy.evaluate(ctx, target);
    let decision = Decision::new(policy.label(), target.level(), outcome);

    debug!(
        condition = %decision.condition,
        level = decision.level.as_str(),
        %outcome,
        permitted = decision.permitted,
        "condition permission checked"
    );

    decision
}
