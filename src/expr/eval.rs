//! Numeric evaluation of symbolic expressions over sample grids.

use ndarray::Array1;

use super::ast::{Expr, UnaryOp};
use crate::error::{DescartesError, Result};

impl Expr {
    /// Evaluate at a single x value.
    ///
    /// Mathematically undefined points come back non-finite (`1/0`,
    /// `ln(-1)`, ...); a variable other than `x` evaluates to NaN. Use
    /// [`Expr::sample`] to reject such expressions up front.
    pub fn eval_at(&self, x: f64) -> f64 {
        match self {
            Expr::Number(value) => *value,
            Expr::Constant(constant) => constant.value(),
            Expr::Var(name) => {
                if name == "x" {
                    x
                } else {
                    f64::NAN
                }
            }
            Expr::Unary(UnaryOp::Neg, operand) => -operand.eval_at(x),
            Expr::Binary(op, lhs, rhs) => op.apply(lhs.eval_at(x), rhs.eval_at(x)),
            Expr::Call(function, arg) => function.apply(arg.eval_at(x)),
        }
    }

    /// First referenced variable that is not `x`, if any.
    pub fn free_variable(&self) -> Option<&str> {
        match self {
            Expr::Var(name) if name != "x" => Some(name),
            Expr::Var(_) | Expr::Number(_) | Expr::Constant(_) => None,
            Expr::Unary(_, operand) => operand.free_variable(),
            Expr::Binary(_, lhs, rhs) => lhs.free_variable().or_else(|| rhs.free_variable()),
            Expr::Call(_, arg) => arg.free_variable(),
        }
    }

    /// Evaluate elementwise over a sample grid.
    ///
    /// Fails when the expression references a variable other than `x`.
    /// Per-point domain failures are non-finite samples, not errors.
    pub fn sample(&self, grid: &Array1<f64>) -> Result<Array1<f64>> {
        if let Some(name) = self.free_variable() {
            return Err(DescartesError::evaluation(
                self.to_string(),
                format!("variable '{}' is not defined", name),
            ));
        }
        Ok(grid.mapv(|x| self.eval_at(x)))
    }
}
