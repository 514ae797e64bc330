//! Data models for line evaluation

use crate::error::ClauseError;

/// One `name [quantity]` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Normalized item identifier
    pub name: String,

    /// Quantity, 1 when omitted
    pub quantity: u32,
}

impl Clause {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self { name: name.into(), quantity }
    }
}

/// Clauses of one input line, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine {
    pub clauses: Vec<Result<Clause, ClauseError>>,
}

impl ParsedLine {
    /// Number of clauses supplied, including malformed ones
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

/// Total value of a line and the tokens it converts to
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregationResult {
    pub total: f64,
    pub tokens: u64,
}

/// Outcome of a single clause
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseOutcome {
    Resolved {
        name: String,
        quantity: u32,
        unit_value: f64,
        subtotal: f64,
    },
    Failed(ClauseError),
}

impl ClauseOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ClauseOutcome::Resolved { .. })
    }
}

/// Everything the calculator knows about one evaluated line
#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    pub outcomes: Vec<ClauseOutcome>,

    /// `Some` iff at least one clause resolved
    pub result: Option<AggregationResult>,
}

impl LineReport {
    pub fn clause_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Output lines for this report
    pub fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .map(|outcome| match outcome {
                ClauseOutcome::Resolved { subtotal, .. } => format!("Value: {:.2}", subtotal),
                ClauseOutcome::Failed(err) => err.user_message().to_string(),
            })
            .collect();

        if let Some(result) = &self.result {
            if self.clause_count() > 1 {
                lines.push(format!("Total: {:.2}", result.total));
            }
            lines.push(format!("Tokens: {}", result.tokens));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(subtotal: f64) -> ClauseOutcome {
        ClauseOutcome::Resolved {
            name: "x".to_string(),
            quantity: 1,
            unit_value: subtotal,
            subtotal,
        }
    }

    #[test]
    fn test_render_single_clause_has_no_total() {
        let report = LineReport {
            outcomes: vec![resolved(16.0)],
            result: Some(AggregationResult { total: 16.0, tokens: 0 }),
        };

        assert_eq!(report.render(), vec!["Value: 16.00", "Tokens: 0"]);
    }

    #[test]
    fn test_render_failures_only() {
        let report = LineReport {
            outcomes: vec![
                ClauseOutcome::Failed(ClauseError::UnknownItem("foo".to_string())),
                ClauseOutcome::Failed(ClauseError::InvalidFormat("a b c".to_string())),
            ],
            result: None,
        };

        assert_eq!(report.render(), vec!["Item not found", "Invalid format"]);
    }

    #[test]
    fn test_render_total_counts_failed_clauses() {
        let report = LineReport {
            outcomes: vec![
                resolved(1500.0),
                ClauseOutcome::Failed(ClauseError::InvalidQuantity("abc".to_string())),
            ],
            result: Some(AggregationResult { total: 1500.0, tokens: 1 }),
        };

        assert_eq!(
            report.render(),
            vec!["Value: 1500.00", "Invalid quantity", "Total: 1500.00", "Tokens: 1"]
        );
    }
}
