use std::fmt;

use rust_decimal::Decimal;

use super::comparison::StringComparison;
use super::error::EvalError;
use super::operator::Operator;
use crate::parse;

/// Operand types named in type-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// A double-quoted string literal.
    String,
    /// A decimal number.
    Decimal,
    /// A boolean, either a literal or the result of a sub-expression.
    Bool,
    /// Anything that did not match the type of the other side.
    Unknown,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::String => write!(f, "string"),
            OperandKind::Decimal => write!(f, "decimal"),
            OperandKind::Bool => write!(f, "bool"),
            OperandKind::Unknown => write!(f, "unknown object"),
        }
    }
}

/// A leaf operand of `==` / `!=`, classified by its text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Operand<'a> {
    Quoted(&'a str),
    Decimal(Decimal),
    Bare(&'a str),
}

impl<'a> Operand<'a> {
    /// Quoting wins over numeric parsing; the text is expected to be trimmed.
    pub(crate) fn classify(text: &'a str) -> Self {
        if text.starts_with('"') && text.ends_with('"') {
            Operand::Quoted(text)
        } else if let Some(number) = parse::decimal(text) {
            Operand::Decimal(number)
        } else {
            Operand::Bare(text)
        }
    }

    fn kind_against(&self, reference: OperandKind) -> OperandKind {
        let kind = match self {
            Operand::Quoted(_) => OperandKind::String,
            Operand::Decimal(_) => OperandKind::Decimal,
            Operand::Bare(_) => OperandKind::Bool,
        };
        if kind == reference {
            kind
        } else {
            OperandKind::Unknown
        }
    }
}

/// Equality of two leaf operands.
///
/// Both sides must be quoted strings, both decimals, or both booleans.
pub(crate) fn leaf_equals(
    expression: &str,
    operator: Operator,
    left: &str,
    right: &str,
    comparison: StringComparison,
) -> Result<bool, EvalError> {
    let (left, right) = (left.trim(), right.trim());
    let (a, b) = (Operand::classify(left), Operand::classify(right));

    let mismatch = |reference: OperandKind| EvalError::TypeMismatch {
        expression: expression.to_owned(),
        operator,
        left: a.kind_against(reference),
        right: b.kind_against(reference),
    };

    match (&a, &b) {
        (Operand::Quoted(x), Operand::Quoted(y)) => Ok(comparison.equals(x, y)),
        (Operand::Quoted(_), _) | (_, Operand::Quoted(_)) => Err(mismatch(OperandKind::String)),
        (Operand::Decimal(x), Operand::Decimal(y)) => Ok(x == y),
        (Operand::Decimal(_), _) | (_, Operand::Decimal(_)) => Err(mismatch(OperandKind::Decimal)),
        (Operand::Bare(x), Operand::Bare(y)) => Ok(parse::boolean(x)? == parse::boolean(y)?),
    }
}
