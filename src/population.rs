//! Building populations of independent random expressions.
//!
//! Each expression within a population is generated by its own worker from its own
//! `XorShiftRng`, seeded in order from the caller's RNG. As a result a population produced from
//! a seeded RNG is reproducible regardless of the number of threads used to generate it.

use crate::gp::expr::{self, Expr};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand::prng::XorShiftRng;
use scoped_threadpool::Pool as ThreadPool;
use std::mem;
use std::slice;
use std::sync::mpsc;
use thiserror::Error;

/// Errors that may occur while generating a population.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopulationError {
    #[error("a population requires at least one worker thread")]
    NoThreads,
}

/// Describes the population to be generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PopulationConfig {
    /// The number of expressions within the population.
    pub size: usize,
    /// The height of every expression. See `gp::expr::gen::full_tree`.
    pub height: u32,
    /// The number of worker threads used for generation.
    pub num_threads: u32,
}

/// A collection of independently owned expressions.
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    exprs: Vec<Expr>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        PopulationConfig {
            size: 5,
            height: 3,
            num_threads: num_cpus::get() as _,
        }
    }
}

impl Population {
    /// Generate a new population as described by the given config.
    pub fn generate<R>(rng: &mut R, config: &PopulationConfig) -> Result<Self, PopulationError>
    where
        R: Rng,
    {
        if config.num_threads == 0 {
            return Err(PopulationError::NoThreads);
        }

        debug!(
            "generating {} expressions of height {} on {} threads",
            config.size, config.height, config.num_threads
        );

        let mut thread_pool = ThreadPool::new(config.num_threads);
        let height = config.height;

        // Generate each expression on the pool, tagged with its index.
        let (tx, rx) = mpsc::channel();
        thread_pool.scoped(|scoped| {
            for index in 0..config.size {
                let mut rng = XorShiftRng::from_seed(rng.gen());
                let tx = tx.clone();
                scoped.execute(move || {
                    let expr = expr::generate(&mut rng, height);
                    trace!("expression {}: {}", index, expr);
                    // The receiver outlives the scope, so sending cannot fail.
                    let _ = tx.send((index, expr));
                });
            }
        });
        mem::drop(tx);

        // Restore submission order.
        let mut indexed = rx.iter().collect::<Vec<_>>();
        indexed.sort_by_key(|&(index, _)| index);
        let exprs = indexed.into_iter().map(|(_, expr)| expr).collect();

        Ok(Population { exprs })
    }

    /// View the expressions in the order in which they were seeded.
    pub fn exprs(&self) -> &[Expr] {
        &self.exprs
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<Expr> {
        self.exprs.iter()
    }

    pub fn into_exprs(self) -> Vec<Expr> {
        self.exprs
    }
}

impl From<Vec<Expr>> for Population {
    fn from(exprs: Vec<Expr>) -> Self {
        Population { exprs }
    }
}

impl IntoIterator for Population {
    type Item = Expr;
    type IntoIter = ::std::vec::IntoIter<Expr>;
    fn into_iter(self) -> Self::IntoIter {
        self.exprs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Expr;
    type IntoIter = slice::Iter<'a, Expr>;
    fn into_iter(self) -> Self::IntoIter {
        self.exprs.iter()
    }
}
