//! Error types for the item value calculator

use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Main error type for the calculator
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Clause error: {0}")]
    Clause(#[from] ClauseError),

    #[error("Benchmark error: {0}")]
    Benchmark(#[from] BenchmarkError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-clause failures. These are reported to the user and never end a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClauseError {
    #[error("Item not found: {0}")]
    UnknownItem(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl ClauseError {
    /// Line shown to the user for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            ClauseError::UnknownItem(_) => "Item not found",
            ClauseError::InvalidQuantity(_) => "Invalid quantity",
            ClauseError::InvalidFormat(_) => "Invalid format",
        }
    }
}

/// Errors raised while building a price table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    #[error("Invalid value {value} for item {name}")]
    InvalidValue { name: String, value: f64 },

    #[error("Empty item name")]
    EmptyName,

    #[error("Invalid item name: {0:?}")]
    InvalidName(String),
}

/// Errors raised by the benchmark harness
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    #[error("No samples were collected")]
    NoSamples,

    #[error("Item pool is empty for batch: {0}")]
    EmptyPool(String),

    #[error("Invalid batch descriptor: {0}")]
    InvalidDescriptor(String),
}

impl From<config::ConfigError> for CalculatorError {
    fn from(err: config::ConfigError) -> Self {
        CalculatorError::Config(err.to_string())
    }
}
