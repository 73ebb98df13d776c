//! Random arithmetic expression trees for symbolic regression.
//!
//! Expressions are generated at random with a given height, evaluated against a single input
//! `x` and rendered in infix form.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::prng::XorShiftRng;
//! use rexpr::gp::expr::{self, BinaryOp, Expr};
//!
//! let e = Expr::binary(BinaryOp::Mul, Expr::var(), Expr::constant(3.0));
//! assert_eq!(e.render(), "x * 3.00");
//! assert_eq!(e.evaluate(2.0), 6.0);
//!
//! let mut rng = XorShiftRng::from_seed([1; 16]);
//! let random = expr::generate(&mut rng, 3);
//! assert_eq!(random.depth(), 3);
//! ```

pub mod gp;
pub mod population;

pub use crate::gp::expr::{generate, Expr};
pub use crate::gp::op::{BinaryOp, OpError, UnaryFn};
pub use crate::population::{Population, PopulationConfig, PopulationError};
