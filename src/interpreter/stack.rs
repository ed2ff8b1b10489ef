use crate::{
    error::{EvalError, EvalResult},
    interpreter::lexer::Lexeme,
};

/// The LIFO stack of operands used during a single evaluation.
///
/// A fresh stack is created for every expression. Popping reports
/// [`EvalError::StackUnderflow`] instead of panicking, and [`finish`] only
/// succeeds when exactly one value is left.
///
/// [`finish`]: OperandStack::finish
#[derive(Debug, Default)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    /// Creates an empty stack with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { values: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pops the operands of the binary operator `operator`.
    ///
    /// The first value popped (the top of the stack) is the right operand,
    /// the second is the left operand; they are returned as `(left, right)`.
    /// The stack is left untouched on failure.
    ///
    /// # Errors
    /// Returns [`EvalError::StackUnderflow`] if fewer than two values are on
    /// the stack.
    pub fn pop_operands(&mut self, operator: &Lexeme<'_>) -> EvalResult<(f64, f64)> {
        let available = self.values.len();
        if available < 2 {
            return Err(EvalError::StackUnderflow { operator: operator.text.to_string(),
                                                   available,
                                                   line: operator.line,
                                                   column: operator.column });
        }

        let right = self.values.pop().unwrap_or_default();
        let left = self.values.pop().unwrap_or_default();
        Ok((left, right))
    }

    /// Consumes the stack and returns its single remaining value.
    ///
    /// # Errors
    /// Returns [`EvalError::EmptyInput`] if the stack is empty, and
    /// [`EvalError::IncompleteEvaluation`] if more than one value remains.
    pub fn finish(mut self, line: usize) -> EvalResult<f64> {
        match self.values.len() {
            0 => Err(EvalError::EmptyInput),
            1 => self.values.pop().ok_or(EvalError::EmptyInput),
            remaining => Err(EvalError::IncompleteEvaluation { remaining, line }),
        }
    }
}
