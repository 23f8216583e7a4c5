//! Ordered storage for validated functions.

use crate::expr::Expr;

/// A validated function together with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFunction {
    expr: Expr,
    label: String,
}

impl StoredFunction {
    /// Wrap a parsed right-hand side.
    pub fn new(expr: Expr) -> Self {
        let label = format!("y = {}", expr);
        Self { expr, label }
    }

    /// The parsed expression.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Display label, `y = <expression>` in canonical spelling.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Insertion-ordered function list.
///
/// Plot order and legend order equal addition order. Duplicates are kept
/// and plot redundantly; entries only leave the list through [`clear`].
///
/// [`clear`]: FunctionList::clear
#[derive(Debug, Clone, Default)]
pub struct FunctionList {
    functions: Vec<StoredFunction>,
}

impl FunctionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated function, returning its display label.
    pub fn add(&mut self, expr: Expr) -> String {
        let function = StoredFunction::new(expr);
        let label = function.label.clone();
        self.functions.push(function);
        label
    }

    /// Remove every stored function.
    pub fn clear(&mut self) {
        self.functions.clear();
    }

    /// Number of stored functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StoredFunction> {
        self.functions.iter()
    }
}
