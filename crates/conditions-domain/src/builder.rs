//! Factory functions composing policies at definition time.
//!
//! Nothing here evaluates anything: each function returns a new descriptor
//! that shares its operands. The operator impls on [`Policy`] (`&`, `|`, `!`,
//! `&=`, `|=`) are sugar over the same functions.

use crate::algebra::Operator;
use crate::error::ConfigurationError;
use crate::policy::{Composite, Policy};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::sync::Arc;

fn compose(operator: Operator, operands: Vec<Policy>) -> Policy {
    Policy::Composite(Arc::new(Composite::from_parts(operator, operands)))
}

/// Conjunction `(left & right)`.
pub fn and(left: Policy, right: Policy) -> Policy {
    compose(Operator::And, vec![left, right])
}

/// Disjunction `(left | right)`.
pub fn or(left: Policy, right: Policy) -> Policy {
    compose(Operator::Or, vec![left, right])
}

/// Negation `(~operand)`.
pub fn not(operand: Policy) -> Policy {
    compose(Operator::Not, vec![operand])
}

/// In-place conjunction: rebinds `target` to `(target & right)`.
///
/// The previous descriptor is left untouched; other trees sharing it are unaffected.
pub fn and_assign(target: &mut Policy, right: Policy) {
    *target = and(target.clone(), right);
}

/// In-place disjunction: rebinds `target` to `(target | right)`.
pub fn or_assign(target: &mut Policy, right: Policy) {
    *target = or(target.clone(), right);
}

/// Left fold of [`and`]: `[a, b, c]` becomes `((a & b) & c)`.
pub fn all<I>(operands: I) -> Result<Policy, ConfigurationError>
where
    I: IntoIterator<Item = Policy>,
{
    fold(Operator::And, operands, and)
}

/// Left fold of [`or`]: `[a, b, c]` becomes `((a | b) | c)`.
pub fn any<I>(operands: I) -> Result<Policy, ConfigurationError>
where
    I: IntoIterator<Item = Policy>,
{
    fold(Operator::Or, operands, or)
}

fn fold<I>(
    operator: Operator,
    operands: I,
    combine: fn(Policy, Policy) -> Policy,
) -> Result<Policy, ConfigurationError>
where
    I: IntoIterator<Item = Policy>,
{
    let mut operands = operands.into_iter();
    let first = operands
        .next()
        .ok_or(ConfigurationError::MissingOperands { operator })?;
    Ok(operands.fold(first, combine))
}

impl BitAnd for Policy {
    type Output = Policy;

    fn bitand(self, rhs: Policy) -> Policy {
        and(self, rhs)
    }
}

impl BitOr for Policy {
    type Output = Policy;

    fn bitor(self, rhs: Policy) -> Policy {
        or(self, rhs)
    }
}

impl Not for Policy {
    type Output = Policy;

    fn not(self) -> Policy {
        not(self)
    }
}

impl BitAndAssign for Policy {
    fn bitand_assign(&mut self, rhs: Policy) {
        and_assign(self, rhs);
    }
}

impl BitOrAssign for Policy {
    fn bitor_assign(&mut self, rhs: Policy) {
        or_assign(self, rhs);
    }
}
