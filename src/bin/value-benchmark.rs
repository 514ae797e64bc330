//! Standalone benchmark binary
//!
//! Runs every benchmark category, including the 5000 and 10000 item batches,
//! and prints the samples followed by the summary and analysis.

use anyhow::Context;
use item_value_calculator::{
    bench::Harness,
    calculator::Calculator,
    config::{Config, ConfigLocation},
    observability::init_observability,
};
use std::io::{self, Write};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // An explicit ITEM_CALC_CONFIG must exist; the default file is optional
    let location = ConfigLocation::from_env();
    let mut config = Config::from_location(&location)
        .with_context(|| format!("failed to load configuration from {}", location.path.display()))?;
    config.benchmark.include_extreme = true;

    init_observability(&config.logging.level, &config.logging.format);
    info!(seed = ?config.benchmark.seed, "Starting standalone benchmark");

    let mut harness = Harness::from_config(Calculator::with_global_table(), config.benchmark);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = harness.run(&mut out)?;
    out.flush()?;

    info!(samples = report.samples.len(), "Benchmark complete");
    Ok(())
}
