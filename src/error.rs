/// Evaluation errors.
///
/// Defines every way a single evaluation can fail: tokens that are neither
/// operators nor numbers, operators that find too few operands, expressions
/// that leave the stack unbalanced, and input with no tokens at all.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
