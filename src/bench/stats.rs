//! Descriptive statistics over benchmark samples

use super::BenchmarkSample;
use std::fmt;
use std::time::Duration;

/// Scaling efficiency above this is excellent
const SCALING_EXCELLENT: f64 = 0.8;
/// Scaling efficiency above this is good
const SCALING_GOOD: f64 = 0.5;
/// Fraction of slow samples below which the run is still good
const SLOW_FRACTION_GOOD: f64 = 0.1;

/// Latency overview of a run
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub total_tests: usize,
    pub average: Duration,
    pub fastest: Duration,
    pub fastest_label: String,
    pub slowest: Duration,
    pub slowest_label: String,
    /// Slowest over fastest
    pub range_ratio: f64,
}

/// Summarize samples. Ties keep the earliest sample. `None` for an empty slice.
pub fn summarize(samples: &[BenchmarkSample]) -> Option<PerformanceSummary> {
    let first = samples.first()?;

    let mut fastest = first;
    let mut slowest = first;
    let mut total_nanos: u128 = 0;

    for sample in samples {
        total_nanos += sample.elapsed.as_nanos();
        if sample.elapsed < fastest.elapsed {
            fastest = sample;
        }
        if sample.elapsed > slowest.elapsed {
            slowest = sample;
        }
    }

    let average_nanos = total_nanos / samples.len() as u128;
    let range_ratio = slowest.elapsed.as_nanos() as f64 / fastest.elapsed.as_nanos().max(1) as f64;

    Some(PerformanceSummary {
        total_tests: samples.len(),
        average: Duration::from_nanos(u64::try_from(average_nanos).unwrap_or(u64::MAX)),
        fastest: fastest.elapsed,
        fastest_label: fastest.label.clone(),
        slowest: slowest.elapsed,
        slowest_label: slowest.label.clone(),
        range_ratio,
    })
}

/// How well per-item throughput holds up from single items to large batches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingVerdict {
    Excellent,
    Good,
    Degrades,
}

impl ScalingVerdict {
    pub fn classify(efficiency: f64) -> Self {
        if efficiency > SCALING_EXCELLENT {
            ScalingVerdict::Excellent
        } else if efficiency > SCALING_GOOD {
            ScalingVerdict::Good
        } else {
            ScalingVerdict::Degrades
        }
    }
}

impl fmt::Display for ScalingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingVerdict::Excellent => write!(f, "EXCELLENT: Maintains high throughput at scale"),
            ScalingVerdict::Good => write!(f, "GOOD: Reasonable scaling performance"),
            ScalingVerdict::Degrades => write!(f, "WARNING: Performance degrades significantly with scale"),
        }
    }
}

/// How many samples exceeded the slow threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdVerdict {
    Excellent,
    Good,
    Warning,
}

impl ThresholdVerdict {
    pub fn classify(slow: usize, total: usize) -> Self {
        if slow == 0 {
            ThresholdVerdict::Excellent
        } else if (slow as f64) < total as f64 * SLOW_FRACTION_GOOD {
            ThresholdVerdict::Good
        } else {
            ThresholdVerdict::Warning
        }
    }
}

impl fmt::Display for ThresholdVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdVerdict::Excellent => write!(f, "EXCELLENT: All tests under performance threshold"),
            ThresholdVerdict::Good => write!(f, "GOOD: Most tests meet performance criteria"),
            ThresholdVerdict::Warning => write!(f, "WARNING: Many tests exceed performance threshold"),
        }
    }
}

/// Mean per-item throughput (items/second) by batch size bucket
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Throughput {
    /// Exactly one item
    pub single: Option<f64>,
    /// 50 to 100 items
    pub medium: Option<f64>,
    /// 1000 items or more
    pub large: Option<f64>,
}

/// Throughput, scaling and threshold analysis of a run
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationAnalysis {
    pub throughput: Throughput,
    /// Large-batch over single-item throughput, when both were measured
    pub scaling_efficiency: Option<f64>,
    pub scaling_verdict: Option<ScalingVerdict>,
    pub slow_threshold: Duration,
    pub slow_samples: usize,
    pub total_samples: usize,
    pub threshold_verdict: ThresholdVerdict,
}

/// Items per second for one sample. Zero durations count as one nanosecond.
pub fn items_per_second(sample: &BenchmarkSample) -> f64 {
    let nanos = sample.elapsed.as_nanos().max(1) as f64;
    sample.item_count as f64 * 1_000_000_000.0 / nanos
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

pub fn analyze(samples: &[BenchmarkSample], slow_threshold: Duration) -> OptimizationAnalysis {
    let mut single = Vec::new();
    let mut medium = Vec::new();
    let mut large = Vec::new();

    for sample in samples {
        match sample.item_count {
            1 => single.push(items_per_second(sample)),
            50..=100 => medium.push(items_per_second(sample)),
            n if n >= 1000 => large.push(items_per_second(sample)),
            _ => {}
        }
    }

    let throughput = Throughput {
        single: mean(&single),
        medium: mean(&medium),
        large: mean(&large),
    };

    let scaling_efficiency = match (throughput.single, throughput.large) {
        (Some(single), Some(large)) => Some(large / single),
        _ => None,
    };

    let slow_samples = samples.iter().filter(|s| s.elapsed > slow_threshold).count();

    OptimizationAnalysis {
        throughput,
        scaling_efficiency,
        scaling_verdict: scaling_efficiency.map(ScalingVerdict::classify),
        slow_threshold,
        slow_samples,
        total_samples: samples.len(),
        threshold_verdict: ThresholdVerdict::classify(slow_samples, samples.len()),
    }
}
