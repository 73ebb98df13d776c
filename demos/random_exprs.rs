//! Generates a handful of random expressions and prints them.
//!
//! ```text
//! cargo run --example random_exprs -- --count 5 --height 3 --x 2.0
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::prng::XorShiftRng;
use rexpr::{Population, PopulationConfig};

/// Log level for the driver.
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Generate and print random expression trees.
#[derive(Parser, Debug)]
#[command(name = "random_exprs")]
struct Args {
    /// Number of expressions to generate
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// Number of operator levels above the leaves
    #[arg(long, default_value_t = 3)]
    height: u32,

    /// Seed byte for the RNG (random when omitted)
    #[arg(short, long)]
    seed: Option<u8>,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    threads: Option<u32>,

    /// Also print each expression's value at this input
    #[arg(short, long)]
    x: Option<f64>,

    /// Log level
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.to_log_level_filter())
        .init();

    // A random number generator with either the given or a unique seed.
    let seed = match args.seed {
        Some(byte) => [byte; 16],
        None => rand::random(),
    };
    let mut rng = XorShiftRng::from_seed(seed);
    println!("RNG seed: {:?}", seed);

    let mut config = PopulationConfig {
        size: args.count,
        height: args.height,
        ..PopulationConfig::default()
    };
    if let Some(num_threads) = args.threads {
        config.num_threads = num_threads;
    }

    info!("Generating {} expressions of height {}", config.size, config.height);
    let population =
        Population::generate(&mut rng, &config).context("failed to generate expressions")?;

    for expr in &population {
        match args.x {
            Some(x) => println!("{}    [x = {}: {}]", expr, x, expr.evaluate(x)),
            None => println!("{}", expr),
        }
    }

    Ok(())
}
