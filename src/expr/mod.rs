//! Expression engine: tokenizer, symbolic tree, parser, and evaluator.
//!
//! Input text like `2*x + 3` becomes an [`Expr`] tree via
//! [`parse_expression`]; full `y = ...` statements go through
//! [`parse_statement`]. Evaluation substitutes sample x-values elementwise,
//! producing non-finite values where the function is undefined instead of
//! failing.

mod ast;
mod eval;
mod parser;
mod statement;
mod token;

pub use ast::{BinaryOp, Constant, Expr, Function, UnaryOp};
pub use parser::parse_expression;
pub use statement::parse_statement;
