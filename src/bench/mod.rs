//! Synthetic load benchmark for the line calculator
//!
//! Each category in [`standard_batches`] is turned into input lines by the
//! [`InputGenerator`], every line is timed through one
//! [`Calculator::calculate_total`] call, and the resulting samples are
//! summarized by [`stats`].

pub mod batch;
pub mod generator;
pub mod report;
pub mod stats;

pub use batch::{standard_batches, BatchCount, BatchDescriptor, ItemPool};
pub use generator::InputGenerator;
pub use report::BenchmarkReport;
pub use stats::{analyze, summarize, OptimizationAnalysis, PerformanceSummary, ScalingVerdict, ThresholdVerdict};

use crate::calculator::Calculator;
use crate::catalog::ValueLookup;
use crate::config::BenchmarkConfig;
use crate::error::{BenchmarkError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One timed calculator call
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSample {
    pub label: String,
    pub item_count: usize,
    pub elapsed: Duration,
    pub total: f64,
    pub tokens: u64,
}

impl fmt::Display for BenchmarkSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} items, {:.2}ms, Total Value: {:.2}, Tokens: {}",
            self.label,
            self.item_count,
            self.elapsed.as_secs_f64() * 1000.0,
            self.total,
            self.tokens
        )
    }
}

/// Runs batch descriptors against a calculator
pub struct Harness<L, R> {
    calculator: Calculator<L>,
    generator: InputGenerator<R>,
    batches: Vec<BatchDescriptor>,
    config: BenchmarkConfig,
}

impl<L: ValueLookup> Harness<L, StdRng> {
    /// Harness over the standard batches, seeded from `config.seed` or from entropy
    pub fn from_config(calculator: Calculator<L>, config: BenchmarkConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(calculator, config, rng)
    }
}

impl<L: ValueLookup, R: Rng> Harness<L, R> {
    pub fn new(calculator: Calculator<L>, config: BenchmarkConfig, rng: R) -> Self {
        let catalog = calculator
            .lookup()
            .item_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            calculator,
            generator: InputGenerator::new(catalog, rng),
            batches: standard_batches(config.include_extreme),
            config,
        }
    }

    /// Replace the standard batches
    pub fn with_batches(mut self, batches: Vec<BatchDescriptor>) -> Self {
        self.batches = batches;
        self
    }

    pub fn batches(&self) -> &[BatchDescriptor] {
        &self.batches
    }

    /// Untimed calls to settle caches and allocator state
    pub fn warm_up(&mut self) -> Result<()> {
        for _ in 0..self.config.warmup_iterations {
            let input = self.generator.random_input(self.config.warmup_batch_size)?;
            std::hint::black_box(self.calculator.calculate_total(&input));
        }
        debug!(iterations = self.config.warmup_iterations, "Warm-up complete");
        Ok(())
    }

    /// Time one calculator call over `input`
    pub fn time_sample(&self, label: String, item_count: usize, input: &str) -> BenchmarkSample {
        let start = Instant::now();
        let result = std::hint::black_box(self.calculator.calculate_total(input));
        let elapsed = start.elapsed();

        BenchmarkSample {
            label,
            item_count,
            elapsed,
            total: result.total,
            tokens: result.tokens,
        }
    }

    /// Generate and time every sample of one batch, in order
    pub fn run_batch(&mut self, batch: &BatchDescriptor) -> Result<Vec<BenchmarkSample>> {
        batch.validate()?;

        let sizes: Vec<usize> = match &batch.count {
            BatchCount::Fixed(sizes) => sizes
                .iter()
                .flat_map(|&size| std::iter::repeat(size).take(batch.repeats))
                .collect(),
            BatchCount::Random(range) => (0..batch.repeats)
                .map(|_| self.generator.rng().gen_range(range.clone()))
                .collect(),
        };

        let mut samples = Vec::with_capacity(sizes.len());
        for (index, size) in sizes.into_iter().enumerate() {
            let input = self.generator.generate(&batch.pool, size, &batch.quantities)?;
            let label = batch.sample_label(size, index % batch.repeats);
            samples.push(self.time_sample(label, size, &input));
        }

        Ok(samples)
    }

    /// Warm up, run every batch, and write progress and the final report to `out`
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<BenchmarkReport> {
        info!(batches = self.batches.len(), "Starting benchmark");

        writeln!(out, "=== ITEM VALUE CALCULATOR PERFORMANCE TEST ===")?;
        writeln!(out, "Warming up...")?;
        self.warm_up()?;
        writeln!(out, "Warm-up complete.")?;

        let batches = self.batches.clone();
        let mut samples = Vec::new();

        for (number, batch) in batches.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "{}. {}", number + 1, batch.heading)?;
            for sample in self.run_batch(batch)? {
                writeln!(out, "{}", sample)?;
                samples.push(sample);
            }
        }

        let summary = summarize(&samples).ok_or(BenchmarkError::NoSamples)?;
        let analysis = analyze(&samples, self.config.slow_threshold());
        let report = BenchmarkReport { samples, summary, analysis };

        writeln!(out)?;
        for line in report.render() {
            writeln!(out, "{}", line)?;
        }

        info!(
            samples = report.summary.total_tests,
            average_ms = report.summary.average.as_secs_f64() * 1000.0,
            slow = report.analysis.slow_samples,
            "Benchmark finished"
        );

        Ok(report)
    }
}
