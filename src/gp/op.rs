//! The closed sets of operators and functions that may appear within an expression.

use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;

/// Failure to map a raw symbol or code onto a known operator or function.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpError {
    #[error("unknown binary operator `{0}`")]
    UnknownOperator(char),
    #[error("unknown unary function code {0}")]
    UnknownFunction(u8),
}

/// Binary arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Unary functions.
///
/// Each function has a stable numeric code in declaration order, starting at `0` for `Sin`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryFn {
    Sin,
    Cos,
    Exp,
    Abs,
    Neg,
}

impl BinaryOp {
    /// All operators, in the order used for uniform random selection.
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    /// The infix symbol for the operator.
    pub fn symbol(&self) -> char {
        match *self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }

    /// Combine the two operands.
    ///
    /// Division is unguarded and power may produce NaN for a negative base with a fractional
    /// exponent. Both follow `f64` semantics.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match *self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => a.powf(b),
        }
    }
}

impl UnaryFn {
    /// All functions, ordered by code.
    pub const ALL: [UnaryFn; 5] = [
        UnaryFn::Sin,
        UnaryFn::Cos,
        UnaryFn::Exp,
        UnaryFn::Abs,
        UnaryFn::Neg,
    ];

    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// The call name used when rendering, or `None` for the prefix negation.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            UnaryFn::Sin => Some("sin"),
            UnaryFn::Cos => Some("cos"),
            UnaryFn::Exp => Some("exp"),
            UnaryFn::Abs => Some("abs"),
            UnaryFn::Neg => None,
        }
    }

    pub fn apply(&self, v: f64) -> f64 {
        match *self {
            UnaryFn::Sin => v.sin(),
            UnaryFn::Cos => v.cos(),
            UnaryFn::Exp => v.exp(),
            UnaryFn::Abs => v.abs(),
            UnaryFn::Neg => -v,
        }
    }
}

impl TryFrom<char> for BinaryOp {
    type Error = OpError;
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        BinaryOp::ALL
            .iter()
            .cloned()
            .find(|op| op.symbol() == symbol)
            .ok_or(OpError::UnknownOperator(symbol))
    }
}

impl TryFrom<u8> for UnaryFn {
    type Error = OpError;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        UnaryFn::ALL
            .get(code as usize)
            .cloned()
            .ok_or(OpError::UnknownFunction(code))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
