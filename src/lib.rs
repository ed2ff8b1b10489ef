//! # rpn-eval
//!
//! rpn-eval evaluates arithmetic expressions written in Reverse Polish
//! Notation, where operators follow their operands: `2 3 4 * +` is
//! `2 + (3 * 4)`. Operators come from a registry of plain functions that
//! callers can extend or replace when building an [`Evaluator`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating an expression. Every error names its failure mode and, where it
/// applies, the line and column of the offending token.
///
/// # Responsibilities
/// - Defines one error enum for all failure modes.
/// - Keeps stack errors distinct from unrecognized tokens.
/// - Integrates with standard error handling traits.
pub mod error;
/// Tokenizing, operator registries and the evaluation engine.
///
/// This module ties together the lexer, the operator registries, the operand
/// stack and the evaluator, and exposes the public API for evaluating
/// expressions.
pub mod interpreter;

pub use error::{EvalError, EvalResult};
pub use interpreter::{
    evaluator::{Evaluator, LineResult},
    registry::{BinaryOperator, BinaryRegistry, Registry, UnaryOperator, UnaryRegistry},
};

/// Evaluates `expression` with the built-in operators.
///
/// This is a shorthand for `Evaluator::new().evaluate(expression)`. Build an
/// [`Evaluator`] once and reuse it when evaluating many expressions.
///
/// # Errors
/// Returns an error if the expression is empty, contains an invalid token,
/// underflows the stack or leaves more than one value behind.
///
/// # Examples
/// ```
/// use rpn_eval::{EvalError, evaluate};
///
/// assert_eq!(evaluate("2 3 4 * +").unwrap(), 14.0);
/// assert!(matches!(evaluate("2 3"), Err(EvalError::IncompleteEvaluation { remaining: 2, .. })));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::new().evaluate(expression)
}
