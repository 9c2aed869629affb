use thiserror::Error;

use super::operand::OperandKind;
use super::operator::Operator;

/// Errors produced while evaluating an expression.
///
/// Evaluation is all-or-nothing: the first error aborts the whole expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    EmptyInput,

    #[error("empty value in '{expression}'")]
    EmptyValue { expression: String },

    #[error("unbalanced group in '{expression}': '{missing}' expected")]
    UnbalancedGroup { expression: String, missing: char },

    #[error("group has no value in '{expression}'")]
    EmptyGroup { expression: String },

    #[error("'{value}' is not a valid boolean")]
    InvalidBoolean { value: String },

    #[error(
        "operator '{operator}' cannot be applied to operands of type '{left}' and '{right}' in '{expression}'"
    )]
    TypeMismatch {
        expression: String,
        operator: Operator,
        left: OperandKind,
        right: OperandKind,
    },

    #[error("'{value}' is not a valid decimal number")]
    NumericConversion { value: String },

    #[error("nesting limit of {limit} exceeded at '{expression}'")]
    LimitExceeded { limit: usize, expression: String },
}

/// Errors produced when building an [`Evaluator`](crate::Evaluator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_depth must be at least 1")]
    ZeroDepth,
}
