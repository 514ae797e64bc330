//! Integration tests for the item value calculator
//!
//! These run against the public API only: the built-in price table, the line
//! calculator, the interactive session and the benchmark harness.

use item_value_calculator::{
    bench::{analyze, BatchCount, BatchDescriptor, Harness, ItemPool, ScalingVerdict, ThresholdVerdict},
    calculator::{tokens_for, Calculator},
    catalog::{PriceTable, ValueLookup},
    config::{BenchmarkConfig, CalculatorConfig, Config, ConfigLocation},
    error::ClauseError,
    repl::{Session, SessionOutcome},
};
use std::io::Cursor;
use std::time::Duration;

/// Helper to look up a value that must exist
fn value(name: &str) -> f64 {
    PriceTable::global()
        .value_of(name)
        .unwrap_or_else(|| panic!("{} missing from price table", name))
}

/// Helper to run a quiet session over the given input
fn run_session(input: &str) -> (SessionOutcome, Vec<String>) {
    let config = CalculatorConfig {
        show_banner: false,
        prompt: "Enter items: ".to_string(),
    };
    let session = Session::new(Calculator::with_global_table(), config);
    let mut out = Vec::new();
    let outcome = session
        .run(Cursor::new(input.to_string()), &mut out)
        .expect("session failed");

    let text = String::from_utf8(out).expect("utf8 output");
    let lines = text
        .lines()
        .map(|line| line.trim_start_matches("Enter items: ").to_string())
        .filter(|line| !line.is_empty())
        .collect();
    (outcome, lines)
}

#[test]
fn test_every_known_item_resolves() {
    let table = PriceTable::global();
    let calculator = Calculator::with_global_table();

    for name in table.item_names() {
        assert!(table.has(name));
        let result = calculator.calculate_total(name);
        assert_eq!(result.total, value(name), "{}", name);
    }
}

#[test]
fn test_diamond_five() {
    let report = Calculator::with_global_table().evaluate("diamond 5");
    let result = report.result.unwrap();

    assert_eq!(result.total, 5.0 * value("diamond"));
    assert_eq!(result.tokens, tokens_for(5.0 * value("diamond")));
}

#[test]
fn test_session_query_output() {
    let (outcome, lines) = run_session("diamond 5, iron_ingot 32\nexit\n");
    let total = 5.0 * value("diamond") + 32.0 * value("iron_ingot");

    assert_eq!(outcome, SessionOutcome::Exited);
    assert_eq!(
        lines,
        vec![
            format!("Value: {:.2}", 5.0 * value("diamond")),
            format!("Value: {:.2}", 32.0 * value("iron_ingot")),
            format!("Total: {:.2}", total),
            format!("Tokens: {}", tokens_for(total)),
            "Goodbye!".to_string(),
        ]
    );
}

#[test]
fn test_session_input_is_case_insensitive() {
    let (_, upper) = run_session("DIAMOND 5\n");
    let (_, lower) = run_session("diamond 5\n");
    assert_eq!(upper, lower);
}

#[test]
fn test_session_survives_errors() {
    let (outcome, lines) = run_session("foo 5\ndiamond abc\ndiamond 5 extra\n,,,\nkelp 64\n");

    assert_eq!(outcome, SessionOutcome::EndOfInput);
    assert_eq!(
        lines,
        vec!["Item not found", "Invalid quantity", "Invalid format", "Value: 16.00", "Tokens: 0"]
    );
}

#[test]
fn test_clause_errors_are_reported_per_clause() {
    let report = Calculator::with_global_table().evaluate("foo, diamond x, a b c, emerald");
    let failures: Vec<_> = report
        .outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            item_value_calculator::calculator::ClauseOutcome::Failed(err) => Some(err.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(
        failures,
        vec![
            ClauseError::UnknownItem("foo".to_string()),
            ClauseError::InvalidQuantity("x".to_string()),
            ClauseError::InvalidFormat("a b c".to_string()),
        ]
    );
    assert_eq!(report.result.unwrap().total, value("emerald"));
}

#[test]
fn test_custom_table_through_trait() {
    let table = PriceTable::from_entries([("widget", 250.0), ("gadget", 0.0)]).unwrap();
    let calculator = Calculator::new(&table);

    let result = calculator.calculate_total("widget 8, gadget 1000, diamond");
    assert_eq!(result.total, 2000.0);
    assert_eq!(result.tokens, 2);
}

#[test]
fn test_custom_batch_harness() {
    let config = BenchmarkConfig {
        warmup_iterations: 0,
        seed: Some(11),
        ..BenchmarkConfig::default()
    };
    let batches = vec![BatchDescriptor {
        heading: "TINY",
        label: "Tiny",
        label_with_size: true,
        count: BatchCount::Fixed(vec![2, 3]),
        repeats: 2,
        pool: ItemPool::Subset(&["diamond"]),
        quantities: 1..=1,
    }];
    let mut harness = Harness::from_config(Calculator::with_global_table(), config).with_batches(batches);

    let mut out = Vec::new();
    let report = harness.run(&mut out).unwrap();
    let labels: Vec<&str> = report.samples.iter().map(|s| s.label.as_str()).collect();

    assert_eq!(labels, vec!["Tiny 2 items #1", "Tiny 2 items #2", "Tiny 3 items #1", "Tiny 3 items #2"]);
    assert_eq!(report.samples[2].total, 3.0 * value("diamond"));
    assert!(String::from_utf8(out).unwrap().contains("1. TINY"));
}

#[test]
fn test_analysis_with_synthetic_timings() {
    use item_value_calculator::bench::BenchmarkSample;

    let sample = |item_count: usize, micros: u64| BenchmarkSample {
        label: format!("{} items", item_count),
        item_count,
        elapsed: Duration::from_micros(micros),
        total: 0.0,
        tokens: 0,
    };

    // single: 1 item / 2us = 500k/s; large: 1000 items / 3ms = 333k/s -> 0.67
    let analysis = analyze(&[sample(1, 2), sample(1000, 3_000)], Duration::from_millis(50));
    assert_eq!(analysis.scaling_verdict, Some(ScalingVerdict::Good));
    assert_eq!(analysis.threshold_verdict, ThresholdVerdict::Excellent);
}

#[test]
fn test_default_config_is_valid() {
    let config = Config::default_config();
    assert!(config.validate().is_ok());
    assert_eq!(config.benchmark.slow_threshold(), Duration::from_millis(50));
}

#[test]
fn test_config_location_required_only_when_explicit() {
    let missing = std::env::temp_dir().join("item-calc-integration-missing.toml");

    let explicit = ConfigLocation::resolve(Some(missing.display().to_string()));
    assert!(Config::from_location(&explicit).is_err());

    let fallback = ConfigLocation {
        path: missing,
        required: false,
    };
    let config = Config::from_location(&fallback).unwrap();
    assert_eq!(config.calculator.prompt, "Enter items: ");
}
