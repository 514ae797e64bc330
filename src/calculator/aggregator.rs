//! Resolving clauses against a price table and summing them

use super::models::{AggregationResult, Clause, ClauseOutcome, LineReport};
use super::parser::{parse_clause, parse_line, split_clauses};
use super::tokens_for;
use crate::catalog::{PriceTable, ValueLookup};
use crate::error::ClauseError;
use tracing::debug;

/// Line calculator over any [`ValueLookup`]
#[derive(Debug, Clone)]
pub struct Calculator<L> {
    lookup: L,
}

impl Calculator<&'static PriceTable> {
    /// Calculator over the built-in price table
    pub fn with_global_table() -> Self {
        Self::new(PriceTable::global())
    }
}

impl<L: ValueLookup> Calculator<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    fn unit_value(&self, clause: &Clause) -> Result<f64, ClauseError> {
        self.lookup
            .value_of(&clause.name)
            .ok_or_else(|| ClauseError::UnknownItem(clause.name.clone()))
    }

    /// Unit value times quantity for a parsed clause
    pub fn resolve(&self, clause: &Clause) -> Result<f64, ClauseError> {
        self.unit_value(clause)
            .map(|value| value * f64::from(clause.quantity))
    }

    /// Evaluate a line, keeping every clause outcome for display
    pub fn evaluate(&self, line: &str) -> LineReport {
        let parsed = parse_line(line);
        let mut total = 0.0;
        let mut found_any = false;

        let outcomes: Vec<ClauseOutcome> = parsed
            .clauses
            .into_iter()
            .map(|clause| {
                let resolved = clause.and_then(|clause| {
                    self.unit_value(&clause).map(|unit_value| (clause, unit_value))
                });

                match resolved {
                    Ok((clause, unit_value)) => {
                        let subtotal = unit_value * f64::from(clause.quantity);
                        total += subtotal;
                        found_any = true;
                        ClauseOutcome::Resolved {
                            unit_value,
                            name: clause.name,
                            quantity: clause.quantity,
                            subtotal,
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "Clause skipped");
                        ClauseOutcome::Failed(err)
                    }
                }
            })
            .collect();

        let result = found_any.then(|| AggregationResult {
            total,
            tokens: tokens_for(total),
        });

        debug!(
            clauses = outcomes.len(),
            resolved = outcomes.iter().filter(|o| o.is_resolved()).count(),
            total,
            "Line evaluated"
        );

        LineReport { outcomes, result }
    }

    /// Total and tokens for a line without collecting outcomes.
    /// Unresolved or malformed clauses contribute nothing.
    pub fn calculate_total(&self, line: &str) -> AggregationResult {
        let total: f64 = split_clauses(line)
            .into_iter()
            .filter_map(|segment| parse_clause(segment).ok())
            .filter_map(|clause| self.resolve(&clause).ok())
            .fold(0.0, |total, subtotal| total + subtotal);

        AggregationResult {
            total,
            tokens: tokens_for(total),
        }
    }
}
