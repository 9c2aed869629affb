use std::borrow::Cow;

use tracing::{debug, trace};

use crate::parse;
use crate::types::leaf_equals;
use crate::{EvalError, EvaluatorConfig, OperandKind, Operator, StringComparison};

pub(crate) fn evaluate(expression: &str, config: &EvaluatorConfig) -> Result<bool, EvalError> {
    if expression.trim().is_empty() {
        return Err(EvalError::EmptyInput);
    }

    let scope = Scope {
        comparison: config.string_comparison,
        max_depth: config.max_depth,
        depth: 0,
    };
    scope.reduce(expression).inspect_err(|err| {
        debug!(expression, error = %err, "evaluation failed");
    })
}

/// Per-descent evaluation state. Copied, never shared.
#[derive(Debug, Clone, Copy)]
struct Scope {
    comparison: StringComparison,
    max_depth: usize,
    depth: usize,
}

impl Scope {
    fn descend(self, expression: &str) -> Result<Self, EvalError> {
        let depth = self.depth + 1;
        if depth > self.max_depth {
            return Err(EvalError::LimitExceeded {
                limit: self.max_depth,
                expression: expression.to_owned(),
            });
        }
        Ok(Self { depth, ..self })
    }

    /// Resolve groups innermost-first, replacing each with its boolean
    /// literal, then split what remains.
    fn reduce(self, expression: &str) -> Result<bool, EvalError> {
        let scope = self.descend(expression)?;
        let mut current = Cow::Borrowed(expression);

        while let Some(group) = innermost_group(&current)? {
            let result = scope.split(group)?;
            let literal = if result { "true" } else { "false" };
            trace!(group, result, depth = scope.depth, "reduced group");
            let reduced = current.replace(&format!("({group})"), literal);
            current = Cow::Owned(reduced);
        }

        scope.split(&current)
    }

    /// Resolve the lowest-precedence operator present, or validate the whole
    /// expression as a boolean leaf.
    fn split(self, expression: &str) -> Result<bool, EvalError> {
        for op in Operator::PRECEDENCE {
            let Some((left, right)) = split_once(expression, op) else {
                continue;
            };
            trace!(%op, left, right, depth = self.depth, "split");

            return if op.is_logical() {
                // Both sides are always evaluated so errors on either surface.
                let (left, right) = (self.reduce(left)?, self.reduce(right)?);
                Ok(match op {
                    Operator::Or => left || right,
                    _ => left && right,
                })
            } else if op.is_relational() {
                self.relational(expression, op, left, right)
            } else {
                self.equality(expression, op, left, right)
            };
        }

        parse::boolean(expression)
    }

    fn equality(
        self,
        expression: &str,
        op: Operator,
        left: &str,
        right: &str,
    ) -> Result<bool, EvalError> {
        let left_nested = Operator::occurs_in(left);
        let right_nested = Operator::occurs_in(right);

        let equal = if left_nested || right_nested {
            let left = self.operand(left, left_nested)?;
            let right = self.operand(right, right_nested)?;
            left == right
        } else {
            leaf_equals(expression, op, left, right, self.comparison)?
        };

        Ok(if op == Operator::Neq { !equal } else { equal })
    }

    fn operand(self, text: &str, nested: bool) -> Result<bool, EvalError> {
        if nested {
            self.reduce(text)
        } else {
            parse::boolean(text)
        }
    }

    fn relational(
        self,
        expression: &str,
        op: Operator,
        left: &str,
        right: &str,
    ) -> Result<bool, EvalError> {
        if Operator::occurs_in(left) || Operator::occurs_in(right) {
            return Err(EvalError::TypeMismatch {
                expression: expression.to_owned(),
                operator: op,
                left: OperandKind::Bool,
                right: OperandKind::Unknown,
            });
        }

        let number = |text: &str| {
            parse::decimal(text).ok_or_else(|| EvalError::NumericConversion {
                value: text.to_owned(),
            })
        };
        let (left, right) = (number(left)?, number(right)?);
        Ok(op.admits(left.cmp(&right)))
    }
}

/// Split at the first occurrence of `op`. Both trimmed parts must be
/// non-empty for the split to count.
fn split_once(expression: &str, op: Operator) -> Option<(&str, &str)> {
    let (before, after) = expression.split_once(op.symbol())?;
    let (before, after) = (before.trim(), after.trim());
    (!before.is_empty() && !after.is_empty()).then_some((before, after))
}

/// Find the left-most group that contains no further group and return its
/// inner text. `None` once no `(` remains.
fn innermost_group(expression: &str) -> Result<Option<&str>, EvalError> {
    let opens = expression.matches('(').count();
    let closes = expression.matches(')').count();
    if opens != closes {
        return Err(EvalError::UnbalancedGroup {
            expression: expression.to_owned(),
            missing: if opens > closes { ')' } else { '(' },
        });
    }

    let Some((prefix, groups)) = expression.split_once('(') else {
        return Ok(None);
    };
    if prefix.contains(')') {
        return Err(EvalError::UnbalancedGroup {
            expression: prefix.to_owned(),
            missing: '(',
        });
    }

    for segment in groups.split('(').filter(|s| !s.is_empty()) {
        if let Some(rest) = segment.strip_prefix(')') {
            return Err(if rest.is_empty() {
                EvalError::EmptyGroup {
                    expression: expression.to_owned(),
                }
            } else {
                EvalError::UnbalancedGroup {
                    expression: segment.to_owned(),
                    missing: '(',
                }
            });
        }
        if let Some((inner, _)) = segment.split_once(')') {
            return Ok(Some(inner));
        }
    }

    Ok(None)
}
