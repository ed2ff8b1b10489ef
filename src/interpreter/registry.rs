use std::collections::HashMap;

/// A binary operator: takes the left and right operands, returns the result.
pub type BinaryOperator = fn(f64, f64) -> f64;
/// A unary operator: takes one operand, returns the result.
pub type UnaryOperator = fn(f64) -> f64;

/// Registry of binary operators, consulted by [`crate::Evaluator::evaluate`].
pub type BinaryRegistry = Registry<BinaryOperator>;
/// Registry of unary operators. Kept as a separate extension point; RPN
/// evaluation never dispatches through it.
pub type UnaryRegistry = Registry<UnaryOperator>;

/// A mapping from operator tokens to operator functions.
///
/// Registries are built by value and then handed to an evaluator, which only
/// ever reads them through [`Registry::resolve`]. Registering a token that is
/// already present replaces the earlier function.
#[derive(Clone, Debug)]
pub struct Registry<F> {
    operators: HashMap<String, F>,
}

impl<F> Default for Registry<F> {
    fn default() -> Self {
        Self { operators: HashMap::new() }
    }
}

impl<F: Copy> Registry<F> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry with `token` bound to `operator`, replacing any
    /// earlier binding for the same token.
    #[must_use]
    pub fn with(mut self, token: impl Into<String>, operator: F) -> Self {
        self.operators.insert(token.into(), operator);
        self
    }

    /// Returns the registry with every binding of `other` added. Where both
    /// registries bind the same token, the binding from `other` wins.
    ///
    /// # Example
    /// ```
    /// use rpn_eval::interpreter::registry::BinaryRegistry;
    ///
    /// let extra = BinaryRegistry::new().with("+", |a, b| a * 10.0 + b);
    /// let merged = BinaryRegistry::builtin().merge(extra);
    /// assert_eq!(merged.apply("+", 1.0, 2.0), Some(12.0));
    /// assert_eq!(merged.apply("-", 1.0, 2.0), Some(-1.0));
    /// ```
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.operators.extend(other.operators);
        self
    }

    /// Looks up the operator bound to `token`.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<F> {
        self.operators.get(token).copied()
    }

    /// Returns `true` if `token` is bound to an operator.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.operators.contains_key(token)
    }

    /// Number of bound tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Returns all bound tokens in sorted order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }
}

impl Registry<BinaryOperator> {
    /// Creates a registry holding the built-in operators: `+`, `-`, `*`, `x`
    /// (an alias of `*`) and `/`.
    ///
    /// # Example
    /// ```
    /// use rpn_eval::interpreter::registry::BinaryRegistry;
    ///
    /// let registry = BinaryRegistry::builtin();
    /// assert_eq!(registry.tokens(), ["*", "+", "-", "/", "x"]);
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self::new().with("-", subtract)
                   .with("+", add)
                   .with("*", multiply)
                   .with("x", multiply)
                   .with("/", divide)
    }

    /// Applies the operator bound to `token` to `a` (left) and `b` (right).
    /// Returns `None` if no operator is bound.
    #[must_use]
    pub fn apply(&self, token: &str, a: f64, b: f64) -> Option<f64> {
        self.resolve(token).map(|operator| operator(a, b))
    }
}

impl Registry<UnaryOperator> {
    /// Applies the operator bound to `token` to `a`. Returns `None` if no
    /// operator is bound.
    ///
    /// # Example
    /// ```
    /// use rpn_eval::interpreter::registry::UnaryRegistry;
    ///
    /// let registry = UnaryRegistry::new().with("neg", |a| -a);
    /// assert_eq!(registry.apply("neg", 4.0), Some(-4.0));
    /// assert_eq!(registry.apply("sqrt", 4.0), None);
    /// ```
    #[must_use]
    pub fn apply(&self, token: &str, a: f64) -> Option<f64> {
        self.resolve(token).map(|operator| operator(a))
    }
}

impl<F, K: Into<String>> FromIterator<(K, F)> for Registry<F> {
    fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
        Self { operators: iter.into_iter().map(|(k, f)| (k.into(), f)).collect() }
    }
}

impl<F> From<HashMap<String, F>> for Registry<F> {
    fn from(operators: HashMap<String, F>) -> Self {
        Self { operators }
    }
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn divide(a: f64, b: f64) -> f64 {
    a / b
}
