use crate::algebra::{self, Operator};
use crate::context::RequestContext;
use crate::policy::{Composite, Policy};
use conditions_types::{Level, TriState};
use std::any::Any;
use tracing::trace;

/// Which permission check is being evaluated.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Collective,
    Object(&'a dyn Any),
}

impl Target<'_> {
    pub fn level(&self) -> Level {
        match self {
            Target::Collective => Level::Collective,
            Target::Object(_) => Level::Object,
        }
    }
}

impl Policy {
    /// Collective-level outcome, abstentions included.
    pub fn permits_collective(&self, ctx: &dyn RequestContext) -> TriState {
        evaluate(self, ctx, Target::Collective)
    }

    /// Object-level outcome for `obj`, abstentions included.
    pub fn permits_instance(&self, ctx: &dyn RequestContext, obj: &dyn Any) -> TriState {
        evaluate(self, ctx, Target::Object(obj))
    }

    pub fn evaluate(&self, ctx: &dyn RequestContext, target: Target<'_>) -> TriState {
        evaluate(self, ctx, target)
    }
}

fn evaluate(policy: &Policy, ctx: &dyn RequestContext, target: Target<'_>) -> TriState {
    let outcome = match (policy, target) {
        (Policy::Leaf(leaf), _) => leaf.evaluate(ctx, target.level()),
        (Policy::Custom(condition), Target::Collective) => condition.permits_collective(ctx),
        (Policy::Custom(condition), Target::Object(obj)) => condition.permits_instance(ctx, obj),
        (Policy::Composite(node), _) => evaluate_composite(node, ctx, target),
    };

    trace!(
        condition = %policy.label(),
        level = target.level().as_str(),
        %outcome,
        "evaluated condition"
    );

    outcome
}

fn evaluate_composite(node: &Composite, ctx: &dyn RequestContext, target: Target<'_>) -> TriState {
    match (node.operator(), node.operands()) {
        (Operator::And, [left, right]) => {
            let left = evaluate(left, ctx, target);
            if left.is_deny() {
                trace!(skipped = %right.label(), "and short-circuits on deny");
            }
            algebra::and(left, || evaluate(right, ctx, target))
        }
        (Operator::Or, [left, right]) => {
            let left = evaluate(left, ctx, target);
            if left.is_permit() {
                trace!(skipped = %right.label(), "or short-circuits on permit");
            }
            algebra::or(left, || evaluate(right, ctx, target))
        }
        (Operator::Not, [operand]) => algebra::not(evaluate(operand, ctx, target)),
        // Arity is enforced when the composite is built.
        _ => TriState::Abstain,
    }
}
