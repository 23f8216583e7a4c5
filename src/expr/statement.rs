//! The `y = <expression>` statement form.

use super::ast::Expr;
use super::parser::parse_expression;
use crate::error::{DescartesError, Result};

/// Parse a full `y = <expression>` statement into its right-hand side.
///
/// The left-hand side must be exactly `y`; the right-hand side must parse
/// as an expression.
pub fn parse_statement(input: &str) -> Result<Expr> {
    let input = input.trim();

    let Some((lhs, rhs)) = input.split_once('=') else {
        return Err(DescartesError::format(
            "Function must be in the form 'y = ...'",
        ));
    };

    if lhs.trim() != "y" {
        return Err(DescartesError::format("Function must start with 'y ='"));
    }

    parse_expression(rhs.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_statements() {
        assert!(parse_statement("y = 2*x + 3").is_ok());
        assert!(parse_statement("  y = sin(x)  ").is_ok());
        assert!(parse_statement("y=x").is_ok());
    }

    #[test]
    fn missing_equals_is_a_format_error() {
        let err = parse_statement("2*x + 3").unwrap_err();
        assert_eq!(err.to_string(), "Function must be in the form 'y = ...'");
    }

    #[test]
    fn left_hand_side_must_be_y() {
        let err = parse_statement("z = x").unwrap_err();
        assert_eq!(err.to_string(), "Function must start with 'y ='");
        assert!(parse_statement("yy = x").is_err());
    }

    #[test]
    fn unparseable_right_hand_side_is_a_parse_error() {
        assert!(matches!(
            parse_statement("y = 2 +* 3").unwrap_err(),
            DescartesError::Parse { .. }
        ));
        assert!(matches!(
            parse_statement("y = ").unwrap_err(),
            DescartesError::Parse { .. }
        ));
    }
}
