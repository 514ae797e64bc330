//! Splitting an input line into clauses

use super::models::{Clause, ParsedLine};
use crate::catalog::normalize_identifier;
use crate::error::ClauseError;

/// Split a line on commas.
///
/// Trailing empty segments are dropped, except that a line without any comma
/// always yields exactly one segment (possibly empty).
pub fn split_clauses(line: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = line.split(',').collect();
    if segments.len() > 1 {
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
    }
    segments
}

/// Parse one comma-delimited segment
pub fn parse_clause(segment: &str) -> Result<Clause, ClauseError> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();

    match tokens.as_slice() {
        // An empty clause names the empty identifier and fails lookup later
        [] => Ok(Clause::new(String::new(), 1)),
        [name] => Ok(Clause::new(normalize_identifier(name), 1)),
        [name, quantity] => quantity
            .parse::<u32>()
            .map(|quantity| Clause::new(normalize_identifier(name), quantity))
            .map_err(|_| ClauseError::InvalidQuantity(quantity.to_string())),
        _ => Err(ClauseError::InvalidFormat(segment.trim().to_string())),
    }
}

/// Parse a full input line
pub fn parse_line(line: &str) -> ParsedLine {
    ParsedLine {
        clauses: split_clauses(line).into_iter().map(parse_clause).collect(),
    }
}
