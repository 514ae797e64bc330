//! Line parsing, value aggregation and token conversion

pub mod aggregator;
pub mod models;
pub mod parser;

pub use aggregator::Calculator;
pub use models::{AggregationResult, Clause, ClauseOutcome, LineReport, ParsedLine};
pub use parser::{parse_clause, parse_line, split_clauses};

/// Value points per token
pub const TOKEN_VALUE: f64 = 1000.0;

/// Whole tokens a total converts to, rounding down
pub fn tokens_for(total: f64) -> u64 {
    (total / TOKEN_VALUE).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_for() {
        assert_eq!(tokens_for(0.0), 0);
        assert_eq!(tokens_for(999.99), 0);
        assert_eq!(tokens_for(1000.0), 1);
        assert_eq!(tokens_for(2999.5), 2);
        assert_eq!(tokens_for(150_000.0), 150);
    }
}
