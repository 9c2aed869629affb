//! Leaf literal parsing: booleans with `!` prefixes and decimal numbers.

mod grammar;

use rust_decimal::Decimal;
use winnow::Parser;

use crate::EvalError;

/// Validate a boolean leaf, applying any leading `!` negations.
///
/// # Errors
///
/// [`EvalError::EmptyValue`] if nothing follows the negations,
/// [`EvalError::InvalidBoolean`] if the remainder is not `true` or `false`.
pub(crate) fn boolean(text: &str) -> Result<bool, EvalError> {
    let trimmed = text.trim();
    let mut input = trimmed;
    let negations = grammar::negations(&mut input).map_err(|_| EvalError::InvalidBoolean {
        value: trimmed.to_owned(),
    })?;
    if input.is_empty() {
        return Err(EvalError::EmptyValue {
            expression: trimmed.to_owned(),
        });
    }
    let value = grammar::truth
        .parse(input)
        .map_err(|_| EvalError::InvalidBoolean {
            value: input.to_owned(),
        })?;
    Ok(value != (negations % 2 == 1))
}

/// Parse a decimal leaf. Returns `None` for anything that is not a number
/// or does not fit a 96-bit mantissa.
pub(crate) fn decimal(text: &str) -> Option<Decimal> {
    let (sign, integer, fraction) = grammar::decimal_literal.parse(text.trim()).ok()?;
    if integer.is_empty() && fraction.is_none() {
        return None;
    }

    let mut normalized = String::with_capacity(text.len() + 1);
    if sign == Some('-') {
        normalized.push('-');
    }
    normalized.push_str(if integer.is_empty() { "0" } else { integer });
    if let Some(fraction) = fraction {
        normalized.push('.');
        normalized.push_str(fraction);
    }
    normalized.parse().ok()
}
