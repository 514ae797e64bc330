//! Interactive read-evaluate-print session

pub mod command;

pub use command::Command;

use crate::bench::Harness;
use crate::calculator::Calculator;
use crate::catalog::ValueLookup;
use crate::config::{BenchmarkConfig, CalculatorConfig};
use crate::error::{CalculatorError, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed `exit`
    Exited,
    /// Input closed
    EndOfInput,
}

/// Prompt loop over any line source and sink
pub struct Session<L> {
    calculator: Calculator<L>,
    config: CalculatorConfig,
    benchmark: Option<BenchmarkConfig>,
}

impl<L: ValueLookup + Clone> Session<L> {
    pub fn new(calculator: Calculator<L>, config: CalculatorConfig) -> Self {
        Self {
            calculator,
            config,
            benchmark: None,
        }
    }

    /// Enable the `perf` / `performance` command
    pub fn with_benchmark(mut self, config: BenchmarkConfig) -> Self {
        self.benchmark = Some(config);
        self
    }

    fn write_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Item Value Calculator")?;
        writeln!(out, "Examples: 'kelp 64' or 'diamond 5, iron_ingot 32'")?;
        if self.benchmark.is_some() {
            writeln!(out, "Type 'perf' to run the performance test")?;
        }
        writeln!(out, "Type 'exit' to quit")?;
        writeln!(out)?;
        Ok(())
    }

    /// Run until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<SessionOutcome> {
        if self.config.show_banner {
            self.write_banner(out)?;
        }

        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    debug!("Input closed");
                    return Ok(SessionOutcome::EndOfInput);
                }
            };

            if let Some(outcome) = self.handle_line(&line, out)? {
                return Ok(outcome);
            }
        }
    }

    /// Handle one line. Returns `Some` when the session should end.
    pub fn handle_line<W: Write>(&self, line: &str, out: &mut W) -> Result<Option<SessionOutcome>> {
        match Command::parse(line, self.benchmark.is_some()) {
            Command::Exit => {
                writeln!(out, "Goodbye!")?;
                info!("Session ended by user");
                Ok(Some(SessionOutcome::Exited))
            }
            Command::Performance => {
                if let Some(config) = &self.benchmark {
                    let mut harness = Harness::from_config(self.calculator.clone(), config.clone());
                    match harness.run(out) {
                        Ok(_) => {
                            writeln!(out)?;
                            writeln!(out, "Performance test finished")?;
                            writeln!(out)?;
                        }
                        // A broken sink ends the session; anything else is reported
                        Err(CalculatorError::Io(err)) => return Err(CalculatorError::Io(err)),
                        Err(err) => {
                            warn!(error = %err, "Performance test failed");
                            writeln!(out, "Performance test failed: {}", err)?;
                        }
                    }
                }
                Ok(None)
            }
            Command::Query(query) => {
                for rendered in self.calculator.evaluate(&query).render() {
                    writeln!(out, "{}", rendered)?;
                }
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceTable;
    use std::io::Cursor;

    fn session() -> Session<&'static PriceTable> {
        let config = CalculatorConfig {
            show_banner: false,
            prompt: "> ".to_string(),
        };
        Session::new(Calculator::with_global_table(), config)
    }

    fn run(session: &Session<&'static PriceTable>, input: &str) -> (SessionOutcome, String) {
        let mut out = Vec::new();
        let outcome = session.run(Cursor::new(input.to_string()), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_prints_farewell() {
        let (outcome, text) = run(&session(), "exit\ndiamond\n");
        assert_eq!(outcome, SessionOutcome::Exited);
        assert_eq!(text, "> Goodbye!\n");
    }

    #[test]
    fn test_end_of_input() {
        let (outcome, text) = run(&session(), "kelp 64\n");
        assert_eq!(outcome, SessionOutcome::EndOfInput);
        assert_eq!(text, "> Value: 16.00\nTokens: 0\n> ");
    }

    #[test]
    fn test_bad_clauses_do_not_end_session() {
        let (outcome, text) = run(&session(), "diamond abc\nfoo 5\nexit\n");
        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(text.contains("Invalid quantity\n"));
        assert!(text.contains("Item not found\n"));
        assert!(!text.contains("Tokens"));
    }

    #[test]
    fn test_perf_without_benchmark_is_a_query() {
        let (_, text) = run(&session(), "perf\n");
        assert!(text.contains("Item not found"));
    }

    #[test]
    fn test_banner() {
        let session = Session::new(Calculator::with_global_table(), CalculatorConfig::default())
            .with_benchmark(BenchmarkConfig::default());
        let mut out = Vec::new();
        session.run(Cursor::new("exit\n"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Item Value Calculator\n"));
        assert!(text.contains("Type 'perf' to run the performance test"));
        assert!(text.contains("Enter items: Goodbye!"));
    }

    #[test]
    fn test_perf_runs_benchmark() {
        let benchmark = BenchmarkConfig {
            warmup_iterations: 1,
            warmup_batch_size: 5,
            seed: Some(3),
            ..BenchmarkConfig::default()
        };
        let session = session().with_benchmark(benchmark);
        let (outcome, text) = run(&session, "performance\nexit\n");

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(text.contains("=== PERFORMANCE SUMMARY ==="));
        assert!(text.contains("Performance test finished"));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_failed_benchmark_keeps_session_running() {
        let table = PriceTable::default();
        let config = CalculatorConfig {
            show_banner: false,
            prompt: "> ".to_string(),
        };
        let session = Session::new(Calculator::new(&table), config).with_benchmark(BenchmarkConfig {
            seed: Some(1),
            ..BenchmarkConfig::default()
        });

        let mut out = Vec::new();
        let outcome = session
            .run(Cursor::new("perf\nfoo\nexit\n"), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(text.contains("Performance test failed: "));
        assert!(!text.contains("Performance test finished"));
        assert!(text.contains("Item not found\n"));
        assert!(text.ends_with("Goodbye!\n"));
    }
}
