//! Text rendering of a finished benchmark run

use super::stats::{OptimizationAnalysis, PerformanceSummary};
use super::BenchmarkSample;

/// Everything a benchmark run produced
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub samples: Vec<BenchmarkSample>,
    pub summary: PerformanceSummary,
    pub analysis: OptimizationAnalysis,
}

/// Fixed notes closing every report
pub const OPTIMIZATION_NOTES: &[&str] = &[
    "Hash map lookup is O(1) on average",
    "String parsing dominates the cost of a line",
    "Large quantities do not affect lookup cost",
    "Lines of 10,000+ items are handled in a single pass",
    "Warm-up runs stabilize the measured timings",
];

fn millis(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn throughput_line(label: &str, value: Option<f64>) -> String {
    match value {
        Some(value) => format!("  {}: {:.0} items/sec", label, value),
        None => format!("  {}: n/a", label),
    }
}

impl BenchmarkReport {
    pub fn summary_lines(&self) -> Vec<String> {
        let summary = &self.summary;
        vec![
            format!("Total Tests Run: {}", summary.total_tests),
            format!("Average Execution Time: {:.2} ms", millis(summary.average)),
            format!("Fastest Test: {:.2} ms ({})", millis(summary.fastest), summary.fastest_label),
            format!("Slowest Test: {:.2} ms ({})", millis(summary.slowest), summary.slowest_label),
            format!("Performance Range: {:.2}x difference", summary.range_ratio),
        ]
    }

    pub fn analysis_lines(&self) -> Vec<String> {
        let analysis = &self.analysis;
        let mut lines = vec![
            "System Performance Analysis:".to_string(),
            "Per-item throughput (items/second):".to_string(),
            throughput_line("Single items", analysis.throughput.single),
            throughput_line("Medium batches (50-100)", analysis.throughput.medium),
            throughput_line("Large batches (1000+)", analysis.throughput.large),
        ];

        if let (Some(efficiency), Some(verdict)) = (analysis.scaling_efficiency, analysis.scaling_verdict) {
            lines.push(format!(
                "Scaling efficiency: {:.1}x (large batch vs single item throughput)",
                efficiency
            ));
            lines.push(verdict.to_string());
        }

        lines.push(format!(
            "Tests over {}ms threshold: {}/{}",
            analysis.slow_threshold.as_millis(),
            analysis.slow_samples,
            analysis.total_samples
        ));
        lines.push(analysis.threshold_verdict.to_string());
        lines
    }

    pub fn notes_lines(&self) -> Vec<String> {
        let mut lines = vec!["Optimization Notes:".to_string()];
        lines.extend(OPTIMIZATION_NOTES.iter().map(|note| format!("- {}", note)));
        lines
    }

    /// Summary, analysis and notes sections with headings
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec!["=== PERFORMANCE SUMMARY ===".to_string()];
        lines.extend(self.summary_lines());
        lines.push(String::new());
        lines.push("=== OPTIMIZATION ANALYSIS ===".to_string());
        lines.extend(self.analysis_lines());
        lines.push(String::new());
        lines.extend(self.notes_lines());
        lines
    }
}
