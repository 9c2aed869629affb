use super::comparison::StringComparison;
use super::error::{ConfigError, EvalError};

/// Settings shared by every evaluation performed through one [`Evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorConfig {
    /// How quoted string operands are compared.
    pub string_comparison: StringComparison,
    /// Maximum number of nested operand descents before evaluation fails
    /// with [`EvalError::LimitExceeded`].
    pub max_depth: usize,
}

impl EvaluatorConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            string_comparison: StringComparison::default(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Builder for an [`Evaluator`].
///
/// # Example
///
/// ```
/// use microex::{EvaluatorBuilder, StringComparison};
///
/// let evaluator = EvaluatorBuilder::new()
///     .string_comparison(StringComparison::CaseInsensitive)
///     .max_depth(64)
///     .build()
///     .unwrap();
///
/// assert_eq!(evaluator.evaluate(r#""ABC" == "abc""#), Ok(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvaluatorBuilder {
    config: EvaluatorConfig,
}

impl EvaluatorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison mode used for quoted strings.
    #[must_use]
    pub fn string_comparison(mut self, mode: StringComparison) -> Self {
        self.config.string_comparison = mode;
        self
    }

    /// Set the nesting limit. Must be at least 1.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Validate the settings and produce an [`Evaluator`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn build(self) -> Result<Evaluator, ConfigError> {
        Evaluator::from_config(self.config)
    }
}

/// An immutable, configured expression evaluator.
///
/// Holds no state besides its configuration, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Create an evaluator from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDepth`] if `max_depth` is zero.
    pub fn from_config(config: EvaluatorConfig) -> Result<Self, ConfigError> {
        if config.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(Self { config })
    }

    #[must_use]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate a boolean expression such as `("a" == "a") && (7 <= 8)`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError`] describing the first problem found in the input.
    pub fn evaluate(&self, expression: &str) -> Result<bool, EvalError> {
        crate::evaluate::evaluate(expression, &self.config)
    }
}
