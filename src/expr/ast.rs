//! Symbolic expression tree for single-variable functions.

use std::f64::consts;
use std::fmt;

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// The circle constant `pi`.
    Pi,
    /// Euler's number `e`.
    E,
}

impl Constant {
    /// Resolve a constant by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    /// Canonical spelling.
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    /// Numeric value.
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
            Constant::E => consts::E,
        }
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation.
    Neg,
}

/// An infix arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Floored modulo.
    Mod,
    /// Exponentiation.
    Pow,
}

impl BinaryOp {
    /// Apply the operator with IEEE semantics; undefined points come back
    /// non-finite rather than as errors.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            // Floored modulo, the convention numerical Python follows.
            BinaryOp::Mod => lhs - rhs * (lhs / rhs).floor(),
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => " + ",
            BinaryOp::Sub => " - ",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 2,
            BinaryOp::Pow => 4,
        }
    }

    fn is_right_associative(self) -> bool {
        matches!(self, BinaryOp::Pow)
    }
}

/// A named single-argument function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine (radians).
    Sin,
    /// Cosine (radians).
    Cos,
    /// Tangent (radians).
    Tan,
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Inverse hyperbolic sine.
    Asinh,
    /// Inverse hyperbolic cosine.
    Acosh,
    /// Inverse hyperbolic tangent.
    Atanh,
    /// Natural exponential.
    Exp,
    /// Natural logarithm.
    Ln,
    /// Natural logarithm (alias, as in symbolic math packages).
    Log,
    /// Base-10 logarithm.
    Log10,
    /// Square root.
    Sqrt,
    /// Cube root.
    Cbrt,
    /// Absolute value.
    Abs,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round to the nearest integer.
    Round,
}

impl Function {
    /// Resolve a function by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "asin" => Some(Function::Asin),
            "acos" => Some(Function::Acos),
            "atan" => Some(Function::Atan),
            "sinh" => Some(Function::Sinh),
            "cosh" => Some(Function::Cosh),
            "tanh" => Some(Function::Tanh),
            "asinh" => Some(Function::Asinh),
            "acosh" => Some(Function::Acosh),
            "atanh" => Some(Function::Atanh),
            "exp" => Some(Function::Exp),
            "ln" => Some(Function::Ln),
            "log" => Some(Function::Log),
            "log10" => Some(Function::Log10),
            "sqrt" => Some(Function::Sqrt),
            "cbrt" => Some(Function::Cbrt),
            "abs" => Some(Function::Abs),
            "floor" => Some(Function::Floor),
            "ceil" => Some(Function::Ceil),
            "round" => Some(Function::Round),
            _ => None,
        }
    }

    /// Canonical spelling.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Asinh => "asinh",
            Function::Acosh => "acosh",
            Function::Atanh => "atanh",
            Function::Exp => "exp",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Log10 => "log10",
            Function::Sqrt => "sqrt",
            Function::Cbrt => "cbrt",
            Function::Abs => "abs",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Round => "round",
        }
    }

    /// Apply the function with IEEE semantics; out-of-domain arguments come
    /// back non-finite rather than as errors.
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Function::Sin => arg.sin(),
            Function::Cos => arg.cos(),
            Function::Tan => arg.tan(),
            Function::Asin => arg.asin(),
            Function::Acos => arg.acos(),
            Function::Atan => arg.atan(),
            Function::Sinh => arg.sinh(),
            Function::Cosh => arg.cosh(),
            Function::Tanh => arg.tanh(),
            Function::Asinh => arg.asinh(),
            Function::Acosh => arg.acosh(),
            Function::Atanh => arg.atanh(),
            Function::Exp => arg.exp(),
            Function::Ln | Function::Log => arg.ln(),
            Function::Log10 => arg.log10(),
            Function::Sqrt => arg.sqrt(),
            Function::Cbrt => arg.cbrt(),
            Function::Abs => arg.abs(),
            Function::Floor => arg.floor(),
            Function::Ceil => arg.ceil(),
            Function::Round => arg.round(),
        }
    }
}

/// A symbolic expression: the parsed right-hand side of a `y = ...` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Named constant.
    Constant(Constant),
    /// A variable, usually `x`. Other names parse but fail at evaluation.
    Var(String),
    /// Prefix operator application.
    Unary(UnaryOp, Box<Expr>),
    /// Infix operator application.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// Named function call.
    Call(Function, Box<Expr>),
}

impl Expr {
    /// Build a binary node.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Build a negation node.
    pub fn neg(operand: Expr) -> Self {
        Expr::Unary(UnaryOp::Neg, Box::new(operand))
    }

    /// Build a function call node.
    pub fn call(function: Function, arg: Expr) -> Self {
        Expr::Call(function, Box::new(arg))
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Binary(op, _, _) => op.precedence(),
            Expr::Unary(UnaryOp::Neg, _) => 3,
            _ => 5,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Constant(constant) => write!(f, "{}", constant.name()),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Unary(UnaryOp::Neg, operand) => {
                if operand.precedence() <= self.precedence() {
                    write!(f, "-({})", operand)
                } else {
                    write!(f, "-{}", operand)
                }
            }
            Expr::Binary(op, lhs, rhs) => {
                let prec = op.precedence();
                let (lhs_needs, rhs_needs) = if op.is_right_associative() {
                    (lhs.precedence() <= prec, rhs.precedence() < prec)
                } else {
                    (lhs.precedence() < prec, rhs.precedence() <= prec)
                };
                if lhs_needs {
                    write!(f, "({})", lhs)?;
                } else {
                    write!(f, "{}", lhs)?;
                }
                f.write_str(op.symbol())?;
                if rhs_needs {
                    write!(f, "({})", rhs)
                } else {
                    write!(f, "{}", rhs)
                }
            }
            Expr::Call(function, arg) => write!(f, "{}({})", function.name(), arg),
        }
    }
}
