//! Configuration validation

use super::*;
use crate::error::{CalculatorError, Result};

const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_calculator_config(&config.calculator)?;
    validate_benchmark_config(&config.benchmark)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate session configuration
fn validate_calculator_config(config: &CalculatorConfig) -> Result<()> {
    if config.prompt.is_empty() {
        return Err(CalculatorError::Config(
            "Prompt cannot be empty".to_string()
        ));
    }

    Ok(())
}

/// Validate benchmark configuration
fn validate_benchmark_config(config: &BenchmarkConfig) -> Result<()> {
    if config.warmup_batch_size == 0 {
        return Err(CalculatorError::Config(
            "Warm-up batch size must be greater than 0".to_string()
        ));
    }

    if config.warmup_iterations > 10_000 {
        return Err(CalculatorError::Config(
            "Warm-up iterations too large (max: 10000)".to_string()
        ));
    }

    if config.slow_threshold_ms == 0 {
        return Err(CalculatorError::Config(
            "Slow threshold must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CalculatorError::Config(
            "Log level cannot be empty".to_string()
        ));
    }

    if !LOG_FORMATS.contains(&config.format.as_str()) {
        return Err(CalculatorError::Config(
            format!("Unknown log format '{}' (expected one of: {})", config.format, LOG_FORMATS.join(", "))
        ));
    }

    Ok(())
}
