//! Recursive-descent parser for function expressions.
//!
//! Grammar, loosest first: `+`/`-`, then `*`/`/`/`%`, then prefix sign, then
//! `**` (right-associative), then literals, names, and parenthesized groups.
//! There is no implicit multiplication; `2x` is rejected.

use super::ast::{BinaryOp, Constant, Expr, Function};
use super::token::{tokenize, Token};
use crate::error::{DescartesError, Result};

/// Parse expression text into a symbolic tree.
pub fn parse_expression(input: &str) -> Result<Expr> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(DescartesError::parse("empty expression"));
    }

    let mut parser = Parser { tokens, current: 0 };
    let expr = parser.expression()?;
    if parser.current < parser.tokens.len() {
        return Err(DescartesError::parse(format!(
            "unexpected {} after expression",
            parser.tokens[parser.current].describe()
        )));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    fn expression(&mut self) -> Result<Expr> {
        let mut left = self.term()?;

        while self.current < self.tokens.len() {
            match self.tokens[self.current] {
                Token::Op('+') => {
                    self.current += 1;
                    let right = self.term()?;
                    left = Expr::binary(BinaryOp::Add, left, right);
                }
                Token::Op('-') => {
                    self.current += 1;
                    let right = self.term()?;
                    left = Expr::binary(BinaryOp::Sub, left, right);
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr> {
        let mut left = self.unary()?;

        while self.current < self.tokens.len() {
            match self.tokens[self.current] {
                Token::Op('*') => {
                    self.current += 1;
                    let right = self.unary()?;
                    left = Expr::binary(BinaryOp::Mul, left, right);
                }
                Token::Op('/') => {
                    self.current += 1;
                    let right = self.unary()?;
                    left = Expr::binary(BinaryOp::Div, left, right);
                }
                Token::Op('%') => {
                    self.current += 1;
                    let right = self.unary()?;
                    left = Expr::binary(BinaryOp::Mod, left, right);
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr> {
        if self.current < self.tokens.len() {
            match self.tokens[self.current] {
                Token::Op('+') => {
                    self.current += 1;
                    return self.unary();
                }
                Token::Op('-') => {
                    self.current += 1;
                    let operand = self.unary()?;
                    return Ok(Expr::neg(operand));
                }
                _ => {}
            }
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr> {
        let base = self.primary()?;

        if self.current < self.tokens.len() && self.tokens[self.current] == Token::Op('^') {
            self.current += 1;
            // The exponent re-enters at sign level so `2**-3` parses.
            let exponent = self.unary()?;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr> {
        let Some(token) = self.tokens.get(self.current) else {
            return Err(DescartesError::parse("unexpected end of expression"));
        };

        match token {
            Token::Number(value) => {
                let value = *value;
                self.current += 1;
                Ok(Expr::Number(value))
            }
            Token::LParen => {
                self.current += 1;
                let expr = self.expression()?;
                self.expect_rparen()?;
                Ok(expr)
            }
            Token::Ident(name) => {
                let name = name.clone();
                self.current += 1;

                if let Some(constant) = Constant::from_name(&name) {
                    return Ok(Expr::Constant(constant));
                }

                if let Some(function) = Function::from_name(&name) {
                    if self.tokens.get(self.current) != Some(&Token::LParen) {
                        return Err(DescartesError::parse(format!(
                            "function '{}' requires parentheses",
                            name
                        )));
                    }
                    self.current += 1;
                    let arg = self.expression()?;
                    self.expect_rparen()?;
                    return Ok(Expr::call(function, arg));
                }

                if self.tokens.get(self.current) == Some(&Token::LParen) {
                    return Err(DescartesError::parse(format!("unknown function '{}'", name)));
                }
                Ok(Expr::Var(name))
            }
            other => Err(DescartesError::parse(format!(
                "unexpected {}",
                other.describe()
            ))),
        }
    }

    fn expect_rparen(&mut self) -> Result<()> {
        match self.tokens.get(self.current) {
            Some(Token::RParen) => {
                self.current += 1;
                Ok(())
            }
            Some(other) => Err(DescartesError::parse(format!(
                "expected ')', found {}",
                other.describe()
            ))),
            None => Err(DescartesError::parse("missing closing parenthesis")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    #[test]
    fn parses_polynomial_with_precedence() {
        let expr = parse_expression("2*x + 3").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Add,
                Expr::binary(BinaryOp::Mul, Expr::Number(2.0), var("x")),
                Expr::Number(3.0),
            )
        );
    }

    #[test]
    fn caret_and_double_star_are_the_same_operator() {
        assert_eq!(
            parse_expression("x**2").unwrap(),
            parse_expression("x^2").unwrap()
        );
    }

    #[test]
    fn power_is_right_associative() {
        let expr = parse_expression("2**3**2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Pow,
                Expr::Number(2.0),
                Expr::binary(BinaryOp::Pow, Expr::Number(3.0), Expr::Number(2.0)),
            )
        );
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        let expr = parse_expression("-x**2").unwrap();
        assert_eq!(
            expr,
            Expr::neg(Expr::binary(BinaryOp::Pow, var("x"), Expr::Number(2.0)))
        );
    }

    #[test]
    fn negative_exponents_parse() {
        let expr = parse_expression("2**-3").unwrap();
        assert_eq!(
            expr,
            Expr::binary(BinaryOp::Pow, Expr::Number(2.0), Expr::neg(Expr::Number(3.0)))
        );
    }

    #[test]
    fn parses_function_calls() {
        let expr = parse_expression("sin(2*x)").unwrap();
        assert_eq!(
            expr,
            Expr::call(
                Function::Sin,
                Expr::binary(BinaryOp::Mul, Expr::Number(2.0), var("x")),
            )
        );
    }

    #[test]
    fn parses_nested_domains() {
        let expr = parse_expression("sqrt(x**2 - 1)").unwrap();
        assert_eq!(
            expr,
            Expr::call(
                Function::Sqrt,
                Expr::binary(
                    BinaryOp::Sub,
                    Expr::binary(BinaryOp::Pow, var("x"), Expr::Number(2.0)),
                    Expr::Number(1.0),
                ),
            )
        );
    }

    #[test]
    fn named_constants_resolve() {
        assert_eq!(
            parse_expression("pi").unwrap(),
            Expr::Constant(Constant::Pi)
        );
        assert_eq!(parse_expression("e").unwrap(), Expr::Constant(Constant::E));
    }

    #[test]
    fn unknown_names_are_free_variables() {
        assert_eq!(parse_expression("q").unwrap(), var("q"));
        assert!(parse_expression("q + 1").is_ok());
    }

    #[test]
    fn unknown_functions_are_rejected() {
        let err = parse_expression("foo(x)").unwrap_err();
        assert!(err.to_string().contains("unknown function 'foo'"));
    }

    #[test]
    fn known_function_without_parentheses_is_rejected() {
        let err = parse_expression("sin").unwrap_err();
        assert!(err.to_string().contains("requires parentheses"));
    }

    #[test]
    fn implicit_multiplication_is_rejected() {
        assert!(parse_expression("2x").is_err());
        assert!(parse_expression("x 2").is_err());
    }

    #[test]
    fn mismatched_parentheses_are_rejected() {
        assert!(parse_expression("(x + 1").is_err());
        assert!(parse_expression("x + 1)").is_err());
        assert!(parse_expression("sin(x, 2)").is_err());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse_expression("").is_err());
        assert!(parse_expression("   ").is_err());
    }

    #[test]
    fn modulo_parses_at_product_precedence() {
        let expr = parse_expression("x % 3 + 1").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Add,
                Expr::binary(BinaryOp::Mod, var("x"), Expr::Number(3.0)),
                Expr::Number(1.0),
            )
        );
    }

    #[test]
    fn display_of_parsed_expression_is_canonical() {
        for input in ["2*x + 3", "sin(2*x)", "x**2 - 1", "x/(x + 1)", "-x**2"] {
            let expr = parse_expression(input).unwrap();
            assert_eq!(expr.to_string(), input);
            assert_eq!(parse_expression(&expr.to_string()).unwrap(), expr);
        }
    }
}
