//! Condition descriptors.
//!
//! A [`Policy`] is an inert, immutable description of a condition tree. It is
//! built once at setup time and evaluated any number of times afterwards.
//! Composing two policies never touches either operand: the new composite
//! holds shared references to both.

use crate::algebra::Operator;
use crate::context::RequestContext;
use crate::error::ConfigurationError;
use crate::leaves::Leaf;
use conditions_types::TriState;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Label of a composite whose operands cannot all be named.
pub const ANONYMOUS_NAME: &str = "AnonymousConditionOperation";

/// A host-provided leaf condition.
///
/// Both evaluation methods abstain unless overridden. Implementations must be
/// free of observable side effects: the engine skips operands whose result
/// cannot change the outcome.
pub trait Condition: Send + Sync {
    /// Display name; unnamed conditions make enclosing composites anonymous.
    fn name(&self) -> Option<&str> {
        None
    }

    fn permits_collective(&self, _ctx: &dyn RequestContext) -> TriState {
        TriState::Abstain
    }

    fn permits_instance(&self, _ctx: &dyn RequestContext, _obj: &dyn Any) -> TriState {
        TriState::Abstain
    }
}

#[derive(Clone)]
pub enum Policy {
    Leaf(Leaf),
    Custom(Arc<dyn Condition>),
    Composite(Arc<Composite>),
}

/// An operator applied to one or two operand policies.
#[derive(Debug)]
pub struct Composite {
    operator: Operator,
    operands: Vec<Policy>,
    name: String,
}

impl Composite {
    /// Checked constructor: the operator must be present and the operand
    /// count must match its arity.
    pub fn new(
        operator: Option<Operator>,
        operands: Vec<Policy>,
    ) -> Result<Self, ConfigurationError> {
        let operator = operator.ok_or(ConfigurationError::MissingOperator)?;
        if operands.is_empty() {
            return Err(ConfigurationError::MissingOperands { operator });
        }
        if operands.len() != operator.arity() {
            return Err(ConfigurationError::OperandCount {
                operator,
                expected: operator.arity(),
                found: operands.len(),
            });
        }
        Ok(Self::from_parts(operator, operands))
    }

    /// Caller guarantees `operands.len() == operator.arity()`.
    pub(crate) fn from_parts(operator: Operator, operands: Vec<Policy>) -> Self {
        let name = composite_name(operator, &operands);
        Self {
            operator,
            operands,
            name,
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[Policy] {
        &self.operands
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn composite_name(operator: Operator, operands: &[Policy]) -> String {
    let names: Option<Vec<Cow<'_, str>>> = operands.iter().map(Policy::name).collect();
    let Some(names) = names else {
        return ANONYMOUS_NAME.to_string();
    };
    let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    operator
        .format_name(&names)
        .unwrap_or_else(|| ANONYMOUS_NAME.to_string())
}

impl Policy {
    /// Wrap a host-provided condition.
    pub fn custom<C: Condition + 'static>(condition: C) -> Self {
        Policy::Custom(Arc::new(condition))
    }

    /// Checked composite construction, see [`Composite::new`].
    pub fn composite(
        operator: Option<Operator>,
        operands: Vec<Policy>,
    ) -> Result<Self, ConfigurationError> {
        Composite::new(operator, operands).map(|c| Policy::Composite(Arc::new(c)))
    }

    /// Name used in diagnostics, `None` for unnamed custom conditions.
    pub fn name(&self) -> Option<Cow<'_, str>> {
        match self {
            Policy::Leaf(leaf) => Some(leaf.name()),
            Policy::Custom(condition) => condition.name().map(Cow::Borrowed),
            Policy::Composite(node) => Some(Cow::Borrowed(node.name())),
        }
    }

    /// Name, or a generic placeholder when the policy has none.
    pub fn label(&self) -> Cow<'_, str> {
        self.name().unwrap_or(Cow::Borrowed("AnonymousCondition"))
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Policy::Composite(node) => Some(node.as_ref()),
            _ => None,
        }
    }
}

impl Default for Policy {
    /// Unconfigured views permit everything.
    fn default() -> Self {
        Policy::Leaf(Leaf::AlwaysPermit)
    }
}

impl From<Leaf> for Policy {
    fn from(leaf: Leaf) -> Self {
        Policy::Leaf(leaf)
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<condition '{}'>", self.label())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Fixed, Unnamed};

    #[test]
    fn composite_requires_operator() {
        let err = Composite::new(None, vec![Leaf::Staff.into()]).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingOperator);
    }

    #[test]
    fn composite_requires_operands() {
        let err = Composite::new(Some(Operator::And), Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingOperands {
                operator: Operator::And
            }
        );
    }

    #[test]
    fn composite_checks_arity() {
        let err = Composite::new(Some(Operator::Not), vec![
            Leaf::Staff.into(),
            Leaf::ReadOnly.into(),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::OperandCount {
                operator: Operator::Not,
                expected: 1,
                found: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "`not` condition takes 1 operand(s), found 2"
        );
    }

    #[test]
    fn composite_names_follow_operator_template() {
        let policy = Policy::composite(Some(Operator::Or), vec![
            Leaf::ReadOnly.into(),
            Leaf::Staff.into(),
        ])
        .unwrap();
        assert_eq!(policy.label(), "(ReadOnly | Staff)");
        assert_eq!(format!("{policy:?}"), "<condition '(ReadOnly | Staff)'>");
    }

    #[test]
    fn unnamed_operand_makes_composite_anonymous() {
        let policy = Policy::composite(Some(Operator::And), vec![
            Leaf::Staff.into(),
            Policy::custom(Unnamed(TriState::Permit)),
        ])
        .unwrap();
        assert_eq!(policy.label(), ANONYMOUS_NAME);

        // An anonymous composite still has a name of its own.
        let negated = Policy::composite(Some(Operator::Not), vec![policy]).unwrap();
        assert_eq!(negated.label(), "(~AnonymousConditionOperation)");
    }

    #[test]
    fn custom_conditions_keep_their_names() {
        let policy = Policy::custom(Fixed::new(TriState::Abstain));
        assert_eq!(policy.label(), "Fixed(abstain)");
        assert!(Policy::custom(Unnamed(TriState::Deny)).name().is_none());
    }

    #[test]
    fn default_policy_is_always_permit() {
        assert!(matches!(Policy::default(), Policy::Leaf(Leaf::AlwaysPermit)));
    }

    #[test]
    fn policies_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Policy>();
    }
}
