mod comparison;
mod error;
mod evaluator;
mod operand;
mod operator;

pub use comparison::StringComparison;
pub use error::{ConfigError, EvalError};
pub use evaluator::{Evaluator, EvaluatorBuilder, EvaluatorConfig};
pub(crate) use operand::leaf_equals;
pub use operand::OperandKind;
pub use operator::Operator;
