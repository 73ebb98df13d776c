//! Items related to expressions.

use rand::Rng;
use std::fmt;

pub use super::op::{BinaryOp, UnaryFn};

/// An expression tree over a single free variable `x`.
///
/// `Const` and `Var` are the terminals of the tree. `Binary` and `Unary` are functions that
/// exclusively own their input expressions, so a tree never shares nodes with another tree.
/// Cloning an `Expr` produces a fully independent deep copy.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A fixed literal.
    Const(f64),
    /// The free input parameter, rendered as `x`.
    Var,
    /// A binary operation over the left and right inputs.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// A unary function applied to a single input.
    Unary(UnaryFn, Box<Expr>),
}

/// Generate a random expression of exactly the given height.
///
/// See `gen::full_tree`.
pub fn generate<R>(rng: &mut R, height: u32) -> Expr
where
    R: Rng,
{
    gen::full_tree(rng, height)
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Const(value)
    }

    pub fn var() -> Self {
        Expr::Var
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn unary(func: UnaryFn, operand: Expr) -> Self {
        Expr::Unary(func, Box::new(operand))
    }

    /// Evaluate the expression with `x` bound to the given value.
    ///
    /// Both inputs of a binary operation are always evaluated. NaN and infinite intermediate
    /// values propagate through the result rather than being treated as failures.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Expr::Const(value) => value,
            Expr::Var => x,
            Expr::Binary(op, ref l, ref r) => {
                let a = l.evaluate(x);
                let b = r.evaluate(x);
                op.apply(a, b)
            }
            Expr::Unary(func, ref e) => func.apply(e.evaluate(x)),
        }
    }

    /// The infix textual form of the expression. Equivalent to `to_string`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Whether or not this is a `Binary` node.
    pub fn is_binary(&self) -> bool {
        match *self {
            Expr::Binary(..) => true,
            _ => false,
        }
    }

    /// The number of function levels between this node and its deepest terminal.
    ///
    /// Terminals have a depth of `0`.
    pub fn depth(&self) -> u32 {
        match *self {
            Expr::Const(_) | Expr::Var => 0,
            Expr::Unary(_, ref e) => 1 + e.depth(),
            Expr::Binary(_, ref l, ref r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// The total number of nodes within the tree.
    pub fn node_count(&self) -> usize {
        1 + self.inputs().map(Expr::node_count).sum::<usize>()
    }

    /// The number of terminal nodes within the tree.
    pub fn leaf_count(&self) -> usize {
        use self::gen::Arity;
        match self.arity() {
            0 => 1,
            _ => self.inputs().map(Expr::leaf_count).sum(),
        }
    }

    /// The direct inputs to this node, left to right.
    pub fn inputs(&self) -> impl Iterator<Item = &Expr> {
        let (a, b) = match *self {
            Expr::Const(_) | Expr::Var => (None, None),
            Expr::Unary(_, ref e) => (Some(&**e), None),
            Expr::Binary(_, ref l, ref r) => (Some(&**l), Some(&**r)),
        };
        a.into_iter().chain(b)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Binary inputs are always wrapped, regardless of operator precedence.
        fn fmt_input(f: &mut fmt::Formatter, expr: &Expr) -> fmt::Result {
            if expr.is_binary() {
                write!(f, "({})", expr)
            } else {
                write!(f, "{}", expr)
            }
        }

        match *self {
            Expr::Const(value) => write!(f, "{:.2}", value),
            Expr::Var => write!(f, "x"),
            Expr::Binary(op, ref l, ref r) => {
                fmt_input(f, l)?;
                write!(f, " {} ", op)?;
                fmt_input(f, r)
            }
            Expr::Unary(func, ref e) => match func.name() {
                Some(name) => {
                    write!(f, "{}(", name)?;
                    fmt_input(f, e)?;
                    write!(f, ")")
                }
                None => {
                    write!(f, "-")?;
                    fmt_input(f, e)
                }
            },
        }
    }
}

/// Functions for generating expression trees.
pub mod gen {
    use rand::Rng;
    use super::{BinaryOp, Expr};

    /// The lower bound (inclusive) for randomly generated constants.
    pub const CONST_MIN: f64 = -5.0;
    /// The upper bound (exclusive) for randomly generated constants.
    pub const CONST_MAX: f64 = 5.0;

    /// Node types that know their number of inputs / arguments.
    pub trait Arity {
        /// The number of arguments to the node.
        ///
        /// Function nodes will return 1 or more. Terminal nodes will return 0.
        fn arity(&self) -> u32;
    }

    /// Function types that may be generated for use within an expression.
    pub trait Function: Arity {
        /// Generate an instance of this Function type.
        fn generate<R>(rng: &mut R) -> Self where R: Rng;
    }

    /// Terminal types that may be generated for use within an expression.
    pub trait Terminal {
        /// Generate an instance of this Terminal type.
        fn generate<R>(rng: &mut R) -> Self where R: Rng;
    }

    impl Arity for BinaryOp {
        fn arity(&self) -> u32 {
            2
        }
    }

    impl Arity for Expr {
        fn arity(&self) -> u32 {
            match *self {
                Expr::Const(_) | Expr::Var => 0,
                Expr::Unary(..) => 1,
                Expr::Binary(..) => 2,
            }
        }
    }

    impl Function for BinaryOp {
        fn generate<R>(rng: &mut R) -> Self
        where
            R: Rng,
        {
            BinaryOp::ALL[rng.gen_range(0, BinaryOp::ALL.len())]
        }
    }

    impl Terminal for Expr {
        fn generate<R>(rng: &mut R) -> Self
        where
            R: Rng,
        {
            match rng.gen_range(0, 2) {
                0 => Expr::Const(rng.gen_range(CONST_MIN, CONST_MAX)),
                1 => Expr::Var,
                _ => unreachable!(),
            }
        }
    }

    /// Generate an expression tree using the "full" approach.
    ///
    /// All branches end with terminals at exactly `height` levels below the root, while all
    /// other nodes are binary operations. The resulting tree has `2^height` terminals.
    ///
    /// Unary functions are never generated.
    pub fn full_tree<R>(rng: &mut R, height: u32) -> Expr
    where
        R: Rng,
    {
        if height == 0 {
            return Terminal::generate(rng);
        }
        let op: BinaryOp = Function::generate(rng);
        let left = full_tree(rng, height - 1);
        let right = full_tree(rng, height - 1);
        Expr::binary(op, left, right)
    }
}
