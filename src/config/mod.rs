//! Configuration management for the item value calculator

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub mod loader;
pub mod validation;

pub use loader::ConfigLocation;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interactive session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Print the usage banner when the session starts
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,

    /// Prompt written before every read
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            show_banner: default_show_banner(),
            prompt: default_prompt(),
        }
    }
}

/// Benchmark harness settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Discarded calls made before measuring
    #[serde(default = "default_warmup_iterations")]
    pub warmup_iterations: usize,

    /// Item count of each warm-up input
    #[serde(default = "default_warmup_batch_size")]
    pub warmup_batch_size: usize,

    /// Samples slower than this are counted as slow
    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: u64,

    /// Run the 5000 and 10000 item batches
    #[serde(default)]
    pub include_extreme: bool,

    /// Fixed RNG seed for reproducible inputs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    pub fn slow_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_threshold_ms)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: default_warmup_iterations(),
            warmup_batch_size: default_warmup_batch_size(),
            slow_threshold_ms: default_slow_threshold_ms(),
            include_extreme: false,
            seed: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_show_banner() -> bool { true }
fn default_prompt() -> String { "Enter items: ".to_string() }
fn default_warmup_iterations() -> usize { 10 }
fn default_warmup_batch_size() -> usize { 100 }
fn default_slow_threshold_ms() -> u64 { 50 }
fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let config = loader::load_config(path)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Load from a resolved location with environment variable overrides.
    /// An explicitly named file must exist; a missing default file leaves the
    /// defaults and the environment in place.
    pub fn from_location(location: &ConfigLocation) -> crate::error::Result<Self> {
        let config = loader::load_config_with_env(&location.path, location.required)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self {
            calculator: CalculatorConfig::default(),
            benchmark: BenchmarkConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
