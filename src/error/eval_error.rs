use thiserror::Error;

/// Result type used throughout the evaluator.
///
/// Every evaluation entry point returns either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an RPN expression.
pub enum EvalError {
    /// A binary operator was reached with fewer than two values on the stack.
    #[error("Error on line {line}, column {column}: Operator '{operator}' needs two operands, \
             but only {available} available.")]
    StackUnderflow {
        /// The operator token that could not be applied.
        operator:  String,
        /// How many values were on the stack when the operator was reached.
        available: usize,
        /// The source line of the operator.
        line:      usize,
        /// The byte column of the operator within its line.
        column:    usize,
    },
    /// A token is neither a registered operator nor a number.
    #[error("Error on line {line}, column {column}: Invalid token '{token}'.")]
    InvalidToken {
        /// The offending token.
        token:  String,
        /// The source line of the token.
        line:   usize,
        /// The byte column of the token within its line.
        column: usize,
    },
    /// All tokens were consumed but the stack does not hold exactly one value.
    #[error("Error on line {line}: Expression left {remaining} values on the stack, expected \
             exactly one.")]
    IncompleteEvaluation {
        /// How many values were left on the stack.
        remaining: usize,
        /// The source line of the last token.
        line:      usize,
    },
    /// The expression contains no tokens.
    #[error("Error: Expression is empty.")]
    EmptyInput,
}

impl EvalError {
    /// Returns the source line the error points at, if any.
    ///
    /// # Example
    /// ```
    /// use rpn_eval::{Evaluator, error::EvalError};
    ///
    /// let err = Evaluator::new().evaluate("1 2\n3 foo").unwrap_err();
    /// assert_eq!(err.line(), Some(2));
    /// assert_eq!(EvalError::EmptyInput.line(), None);
    /// ```
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::StackUnderflow { line, .. }
            | Self::InvalidToken { line, .. }
            | Self::IncompleteEvaluation { line, .. } => Some(*line),
            Self::EmptyInput => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EvalError;

    #[test]
    fn messages_name_the_offending_token() {
        let err = EvalError::InvalidToken { token:  "foo".to_string(),
                                            line:   1,
                                            column: 5, };
        assert_eq!(err.to_string(),
                   "Error on line 1, column 5: Invalid token 'foo'.");

        let err = EvalError::StackUnderflow { operator:  "+".to_string(),
                                              available: 1,
                                              line:      3,
                                              column:    2, };
        assert_eq!(err.to_string(),
                   "Error on line 3, column 2: Operator '+' needs two operands, but only 1 \
                    available.");
    }

    #[test]
    fn incomplete_evaluation_reports_leftovers() {
        let err = EvalError::IncompleteEvaluation { remaining: 3,
                                                    line:      1, };
        assert_eq!(err.to_string(),
                   "Error on line 1: Expression left 3 values on the stack, expected exactly one.");
    }
}
