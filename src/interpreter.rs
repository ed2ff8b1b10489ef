/// The evaluator module runs RPN expressions.
///
/// The evaluator walks the tokens of an expression once, pushing operands and
/// applying binary operators from its registry, and produces the single value
/// left on the stack. It is the core execution engine of the crate.
///
/// # Responsibilities
/// - Builds evaluators from default, merged or replaced operator registries.
/// - Evaluates single expressions and line-oriented scripts.
/// - Reports stack underflow, invalid tokens and unbalanced expressions.
pub mod evaluator;
/// The lexer module splits expressions into positioned words.
///
/// RPN needs nothing beyond whitespace separation, so the lexer produces one
/// word per run of non-whitespace characters, each tagged with its line and
/// column for error reporting.
pub mod lexer;
/// The registry module maps operator tokens to operator functions.
///
/// # Responsibilities
/// - Defines the binary and unary operator function types.
/// - Provides the built-in arithmetic operators.
/// - Supports building, merging and replacing operator tables by value.
pub mod registry;
/// The operand stack used during a single evaluation.
pub mod stack;
