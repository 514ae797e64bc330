//! Item Value Calculator binary
//!
//! Reads item lists from stdin and prints their value and token count.
//! `perf` / `performance` runs the benchmark, `exit` quits.

use anyhow::Context;
use item_value_calculator::{
    calculator::Calculator,
    config::{Config, ConfigLocation},
    observability::init_observability,
    repl::{Session, SessionOutcome},
};
use std::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // An explicit ITEM_CALC_CONFIG must exist; the default file is optional
    let location = ConfigLocation::from_env();
    let config = Config::from_location(&location)
        .with_context(|| format!("failed to load configuration from {}", location.path.display()))?;

    init_observability(&config.logging.level, &config.logging.format);
    info!("Configuration loaded from {}", location.path.display());

    let session = Session::new(Calculator::with_global_table(), config.calculator.clone())
        .with_benchmark(config.benchmark.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = session.run(stdin.lock(), &mut stdout)?;

    match outcome {
        SessionOutcome::Exited => info!("Exiting"),
        SessionOutcome::EndOfInput => info!("Input closed, exiting"),
    }

    Ok(())
}
