//! Tokenizer for function expressions.

use crate::error::{DescartesError, Result};

/// A lexical token of an expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// Numeric literal.
    Number(f64),
    /// Identifier: a function name, named constant, or variable.
    Ident(String),
    /// Arithmetic operator. Both `**` and `^` lex to `Op('^')`.
    Op(char),
    /// Opening parenthesis.
    LParen,
    /// Closing parenthesis.
    RParen,
    /// Argument separator.
    Comma,
}

impl Token {
    /// Short description used in parse error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number '{}'", n),
            Token::Ident(name) => format!("'{}'", name),
            Token::Op(c) => format!("'{}'", c),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Comma => "','".to_string(),
        }
    }
}

/// Tokenize expression text.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            ',' => {
                tokens.push(Token::Comma);
                chars.next();
            }
            '*' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push(Token::Op('^'));
                } else {
                    tokens.push(Token::Op('*'));
                }
            }
            '+' | '-' | '/' | '%' | '^' => {
                tokens.push(Token::Op(c));
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut num_str = String::new();
                let mut has_dot = false;
                let mut has_exp = false;

                while let Some(&ch) = chars.peek() {
                    match ch {
                        '.' if has_dot => break,
                        '.' => {
                            has_dot = true;
                            num_str.push(ch);
                            chars.next();
                        }
                        'e' | 'E' if !has_exp => {
                            has_exp = true;
                            num_str.push(ch);
                            chars.next();

                            if let Some(&next_ch) = chars.peek() {
                                if next_ch == '+' || next_ch == '-' {
                                    num_str.push(next_ch);
                                    chars.next();
                                }
                            }
                        }
                        '0'..='9' => {
                            num_str.push(ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                let value = num_str
                    .parse::<f64>()
                    .map_err(|_| DescartesError::parse(format!("invalid number '{}'", num_str)))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' {
                        ident.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(ident));
            }
            _ => {
                return Err(DescartesError::parse(format!(
                    "unexpected character '{}'",
                    c
                )))
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_arithmetic() {
        let tokens = tokenize("2*x + 3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Op('*'),
                Token::Ident("x".to_string()),
                Token::Op('+'),
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn double_star_lexes_as_power() {
        let tokens = tokenize("x**2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("x".to_string()),
                Token::Op('^'),
                Token::Number(2.0),
            ]
        );
        assert_eq!(tokens, tokenize("x^2").unwrap());
    }

    #[test]
    fn numbers_with_decimals_and_exponents() {
        assert_eq!(tokenize("1.5").unwrap(), vec![Token::Number(1.5)]);
        assert_eq!(tokenize("2e3").unwrap(), vec![Token::Number(2000.0)]);
        assert_eq!(tokenize("1.5e-2").unwrap(), vec![Token::Number(0.015)]);
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
    }

    #[test]
    fn identifiers_may_contain_digits() {
        let tokens = tokenize("log10(x)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("log10".to_string()),
                Token::LParen,
                Token::Ident("x".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        assert!(tokenize("x $ 2").is_err());
        assert!(tokenize("x?").is_err());
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(tokenize("2e").is_err());
        assert!(tokenize(".").is_err());
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
