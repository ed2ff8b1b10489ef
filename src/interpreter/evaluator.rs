use log::{debug, trace};

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        lexer::{Lexeme, tokenize, tokenize_lines},
        registry::{BinaryOperator, BinaryRegistry, UnaryRegistry},
        stack::OperandStack,
    },
};

/// The result of one line of a script evaluated with
/// [`Evaluator::evaluate_lines`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineResult {
    /// The 1-based source line of the expression.
    pub line:  usize,
    /// The value the expression evaluated to.
    pub value: f64,
}

/// Evaluates Reverse Polish Notation expressions against a fixed set of
/// operators.
///
/// An `Evaluator` owns a binary operator registry, which drives evaluation,
/// and a unary operator registry, which is kept as a separate extension
/// point and is never consulted by [`Evaluator::evaluate`]. Both are fixed
/// at construction, so a shared `&Evaluator` can be used from any number of
/// threads at once.
///
/// ## Usage
///
/// ```
/// use rpn_eval::{Evaluator, interpreter::registry::BinaryRegistry};
///
/// let evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate("2 3 4 * +").unwrap(), 14.0);
///
/// let extra = BinaryRegistry::new().with("@", |a, b| a + a - b);
/// let extended = Evaluator::with_operators(extra, false);
/// assert_eq!(extended.evaluate("2 3 4 * @").unwrap(), -8.0);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    binary: BinaryRegistry,
    unary:  UnaryRegistry,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the built-in operators `+`, `-`, `*`, `x`
    /// and `/`, and no unary operators.
    #[must_use]
    pub fn new() -> Self {
        Self::from_registries(BinaryRegistry::builtin(), UnaryRegistry::new())
    }

    /// Creates an evaluator with additional or replacement binary operators.
    ///
    /// With `overwrite` set, `extra` becomes the whole registry and the
    /// built-ins are dropped unless `extra` supplies them again. Otherwise
    /// `extra` is merged over the built-ins, and its bindings win where a
    /// token appears in both.
    ///
    /// # Example
    /// ```
    /// use rpn_eval::{Evaluator, error::EvalError, interpreter::registry::BinaryRegistry};
    ///
    /// let only_at = BinaryRegistry::new().with("@", |a, b| a + a - b);
    /// let evaluator = Evaluator::with_operators(only_at, true);
    /// assert!(matches!(evaluator.evaluate("2 3 +"),
    ///                  Err(EvalError::InvalidToken { .. })));
    /// ```
    #[must_use]
    pub fn with_operators(extra: impl Into<BinaryRegistry>, overwrite: bool) -> Self {
        let extra = extra.into();
        let binary = if overwrite {
            extra
        } else {
            BinaryRegistry::builtin().merge(extra)
        };
        Self::from_registries(binary, UnaryRegistry::new())
    }

    /// Creates an evaluator from explicit binary and unary registries.
    #[must_use]
    pub fn from_registries(binary: BinaryRegistry, unary: UnaryRegistry) -> Self {
        debug!("Evaluator created with operators [{}] and unary operators [{}]",
               binary.tokens().join(" "),
               unary.tokens().join(" "));
        Self { binary, unary }
    }

    /// The binary operator registry.
    #[must_use]
    pub const fn registry(&self) -> &BinaryRegistry {
        &self.binary
    }

    /// The unary operator registry.
    #[must_use]
    pub const fn unary_registry(&self) -> &UnaryRegistry {
        &self.unary
    }

    /// Looks up the binary operator bound to `token`.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<BinaryOperator> {
        self.binary.resolve(token)
    }

    /// Applies the unary operator bound to `token` to `operand`.
    ///
    /// This is the only way unary operators are reached; RPN evaluation
    /// itself only dispatches binary operators.
    ///
    /// # Example
    /// ```
    /// use rpn_eval::{
    ///     Evaluator,
    ///     interpreter::registry::{BinaryRegistry, UnaryRegistry},
    /// };
    ///
    /// let unary = UnaryRegistry::new().with("neg", |a| -a);
    /// let evaluator = Evaluator::from_registries(BinaryRegistry::builtin(), unary);
    /// assert_eq!(evaluator.apply_unary("neg", 3.0), Some(-3.0));
    /// assert!(evaluator.evaluate("3 neg").is_err());
    /// ```
    #[must_use]
    pub fn apply_unary(&self, token: &str, operand: f64) -> Option<f64> {
        self.unary.apply(token, operand)
    }

    /// Evaluates a single RPN expression.
    ///
    /// The expression is split on runs of whitespace, line breaks included.
    /// Each token that names a binary operator pops the right operand and
    /// then the left operand and pushes the result; every other token must
    /// parse as an `f64` and is pushed. Exactly one value must remain once
    /// all tokens are consumed.
    ///
    /// # Errors
    /// - [`EvalError::EmptyInput`] if the expression has no tokens.
    /// - [`EvalError::StackUnderflow`] if an operator finds fewer than two
    ///   operands.
    /// - [`EvalError::InvalidToken`] if a token is neither an operator nor a
    ///   number.
    /// - [`EvalError::IncompleteEvaluation`] if more than one value is left.
    ///
    /// # Example
    /// ```
    /// use rpn_eval::{Evaluator, error::EvalError};
    ///
    /// let evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate("10 4 -").unwrap(), 6.0);
    /// assert_eq!(evaluator.evaluate("10 4 /").unwrap(), 2.5);
    /// assert!(matches!(evaluator.evaluate("5 +"),
    ///                  Err(EvalError::StackUnderflow { available: 1, .. })));
    /// ```
    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        let lexemes = tokenize(expression)?;
        let result = self.evaluate_lexemes(&lexemes);

        match &result {
            Ok(value) => debug!("Evaluated '{expression}' to {value}"),
            Err(e) => debug!("Failed to evaluate '{expression}': {e}"),
        }

        result
    }

    /// Evaluates every non-blank line of `source` as an independent
    /// expression.
    ///
    /// Evaluation stops at the first failing line, whose error carries the
    /// line number within `source`.
    ///
    /// # Errors
    /// Returns the error of the first line that fails to evaluate.
    ///
    /// # Example
    /// ```
    /// use rpn_eval::Evaluator;
    ///
    /// let results = Evaluator::new().evaluate_lines("1 2 +\n\n3 4 x\n").unwrap();
    /// let values: Vec<_> = results.iter().map(|r| (r.line, r.value)).collect();
    /// assert_eq!(values, [(1, 3.0), (3, 12.0)]);
    /// ```
    pub fn evaluate_lines(&self, source: &str) -> EvalResult<Vec<LineResult>> {
        tokenize_lines(source)?.iter()
                               .map(|lexemes| {
                                   let value = self.evaluate_lexemes(lexemes)?;
                                   let line = lexemes.first().map_or(1, |l| l.line);
                                   debug!("Line {line} evaluated to {value}");
                                   Ok(LineResult { line, value })
                               })
                               .collect()
    }

    fn evaluate_lexemes(&self, lexemes: &[Lexeme<'_>]) -> EvalResult<f64> {
        let Some(last) = lexemes.last() else {
            return Err(EvalError::EmptyInput);
        };

        let mut stack = OperandStack::with_capacity(lexemes.len());

        for lexeme in lexemes {
            if let Some(operator) = self.binary.resolve(lexeme.text) {
                let (left, right) = stack.pop_operands(lexeme)?;
                let value = operator(left, right);
                trace!("{left} {right} {} => {value}", lexeme.text);
                stack.push(value);
            } else {
                stack.push(parse_operand(lexeme)?);
            }
        }

        stack.finish(last.line)
    }
}

/// Parses a token that is not an operator as a floating-point operand.
fn parse_operand(lexeme: &Lexeme<'_>) -> EvalResult<f64> {
    lexeme.text
          .parse()
          .map_err(|_| EvalError::InvalidToken { token:  lexeme.text.to_string(),
                                                 line:   lexeme.line,
                                                 column: lexeme.column, })
}

#[cfg(test)]
mod tests {
    use super::Evaluator;
    use crate::error::EvalError;

    #[test]
    fn numbers_alone_evaluate_to_themselves() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate("42").unwrap(), 42.0);
        assert_eq!(evaluator.evaluate("-2.5e1").unwrap(), -25.0);
    }

    #[test]
    fn invalid_token_is_not_confused_with_underflow() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate("2 3 foo"),
                   Err(EvalError::InvalidToken { token:  "foo".to_string(),
                                                 line:   1,
                                                 column: 5, }));
        assert!(matches!(evaluator.evaluate("+"),
                         Err(EvalError::StackUnderflow { available: 0, .. })));
    }

    #[test]
    fn whitespace_only_is_empty_input() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate(""), Err(EvalError::EmptyInput));
        assert_eq!(evaluator.evaluate(" \t\n "), Err(EvalError::EmptyInput));
    }

    #[test]
    fn script_errors_report_their_line() {
        let err = Evaluator::new().evaluate_lines("1 1 +\n2 2 2 +\n3 3 +")
                                  .unwrap_err();
        assert_eq!(err,
                   EvalError::IncompleteEvaluation { remaining: 2,
                                                     line:      2, });
    }
}
