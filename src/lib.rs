//! A tiny evaluator for boolean logic expressions embedded in strings.
//!
//! Expressions are parsed and evaluated in a single pass directly on the
//! input text, without a token stream or AST:
//!
//! ```
//! assert_eq!(microex::evaluate(r#"("text123" == "text123") && (7 <= 8)"#), Ok(true));
//! assert!(microex::evaluate("2 < 3 < 4").is_err());
//! ```
//!
//! Use an [`Evaluator`] built with [`EvaluatorBuilder`] to change how quoted
//! strings are compared or to tighten the nesting limit.

mod evaluate;
mod parse;
mod types;

pub use types::{
    ConfigError, EvalError, Evaluator, EvaluatorBuilder, EvaluatorConfig, OperandKind, Operator,
    StringComparison,
};

/// Evaluate `expression` with the default configuration.
///
/// # Errors
///
/// Returns [`EvalError`] describing the first problem found in the input.
pub fn evaluate(expression: &str) -> Result<bool, EvalError> {
    Evaluator::default().evaluate(expression)
}
