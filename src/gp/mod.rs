//! Common items related to Genetic Programming.
//!
//! Expressions are trees of nodes with some level of arity - aka the number of inputs. Terminals
//! (constants and the input variable) have an arity of `0`, while functions (unary and binary
//! operations) take one or two input expressions.

pub mod expr;
pub mod op;
