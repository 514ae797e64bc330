//! Item Value Calculator - price lookup, value aggregation and token conversion
//!
//! Looks up item unit values in a static price table, sums `name [quantity]`
//! clauses from a comma-separated line, and converts the total into tokens
//! (1000 value points per token, rounded down). A synthetic benchmark exercises
//! the same routine from single items up to ten thousand item lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use item_value_calculator::prelude::*;
//!
//! let calculator = Calculator::with_global_table();
//! let report = calculator.evaluate("diamond 5, iron_ingot 32");
//!
//! for line in report.render() {
//!     println!("{}", line);
//! }
//!
//! let result = report.result.expect("both items are in the table");
//! assert_eq!(result.tokens, (result.total / 1000.0).floor() as u64);
//! ```

pub mod bench;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod observability;
pub mod repl;

pub use config::Config;
pub use error::{CalculatorError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::bench::{BenchmarkReport, BenchmarkSample, Harness};
    pub use crate::calculator::{tokens_for, AggregationResult, Calculator, LineReport, TOKEN_VALUE};
    pub use crate::catalog::{normalize_identifier, PriceTable, ValueLookup};
    pub use crate::config::Config;
    pub use crate::error::{CalculatorError, ClauseError, Result};
    pub use crate::repl::{Session, SessionOutcome};
}
