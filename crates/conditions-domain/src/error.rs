use crate::algebra::Operator;
use thiserror::Error;

/// Raised while building a condition, never while evaluating one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("composite condition has no operator")]
    MissingOperator,

    #[error("`{operator}` condition has no operands")]
    MissingOperands { operator: Operator },

    #[error("`{operator}` condition takes {expected} operand(s), found {found}")]
    OperandCount {
        operator: Operator,
        expected: usize,
        found: usize,
    },

    #[error("method condition requires a request method")]
    MissingRequestMethod,

    #[error("unknown condition `{name}`")]
    UnknownCondition { name: String },
}
