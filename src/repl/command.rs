//! Session commands

/// What a line of input asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Performance,
    /// Normalized item list
    Query(String),
}

impl Command {
    /// Parse a raw input line. The line is trimmed and lowercased.
    ///
    /// `perf` and `performance` are only commands when benchmarking is enabled;
    /// otherwise they are ordinary queries.
    pub fn parse(line: &str, benchmark_enabled: bool) -> Self {
        let normalized = line.trim().to_lowercase();

        match normalized.as_str() {
            "exit" => Command::Exit,
            "perf" | "performance" if benchmark_enabled => Command::Performance,
            _ => Command::Query(normalized),
        }
    }
}
