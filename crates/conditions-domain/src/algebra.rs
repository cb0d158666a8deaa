//! Three-valued AND / OR / NOT.
//!
//! `Abstain` is neutral for both binary operators. A determining left value
//! (`Deny` for AND, `Permit` for OR) short-circuits and the right operand is
//! never produced; an abstaining left value always forces the right one.

use conditions_types::TriState;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    /// Number of operands the operator combines.
    pub fn arity(self) -> usize {
        match self {
            Operator::And | Operator::Or => 2,
            Operator::Not => 1,
        }
    }

    /// Display-name template for generated composites.
    pub fn template(self) -> &'static str {
        match self {
            Operator::And => "({} & {})",
            Operator::Or => "({} | {})",
            Operator::Not => "(~{})",
        }
    }

    /// Fill the template with operand names.
    ///
    /// Returns `None` when the number of names does not match the template.
    pub fn format_name(self, names: &[&str]) -> Option<String> {
        let mut pieces = self.template().split("{}");
        let mut out = String::from(pieces.next()?);
        let mut names = names.iter();
        for piece in pieces {
            out.push_str(names.next()?);
            out.push_str(piece);
        }
        if names.next().is_some() {
            return None;
        }
        Some(out)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conjunction. `right` is only called when `left` is not `Deny`.
pub fn and(left: TriState, right: impl FnOnce() -> TriState) -> TriState {
    if left == TriState::Deny {
        return TriState::Deny;
    }
    let right = right();
    if left == TriState::Abstain {
        return right;
    }
    if right == TriState::Abstain {
        return left;
    }
    TriState::from(right == TriState::Permit)
}

/// Disjunction. `right` is only called when `left` is not `Permit`.
pub fn or(left: TriState, right: impl FnOnce() -> TriState) -> TriState {
    if left == TriState::Permit {
        return TriState::Permit;
    }
    let right = right();
    if left == TriState::Abstain {
        return right;
    }
    if right == TriState::Abstain {
        return left;
    }
    TriState::from(right == TriState::Permit)
}

/// Negation. Abstention stays abstention.
pub fn not(value: TriState) -> TriState {
    match value {
        TriState::Permit => TriState::Deny,
        TriState::Deny => TriState::Permit,
        TriState::Abstain => TriState::Abstain,
    }
}
