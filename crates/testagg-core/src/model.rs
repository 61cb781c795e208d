use serde::{Deserialize, Serialize};
use std::fmt;

/// A `testStarted` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartEvent {
    pub id: String,
    pub name: String,
}

/// A `testFinished` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishEvent {
    pub id: String,
    pub duration_ms: u64,
    pub result: TestOutcome,
    pub error: Option<String>,
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Start(StartEvent),
    Finish(FinishEvent),
    Unrecognized,
}

/// Result word of a finish line.
///
/// Only the exact word `OK` is a success. Anything that is not `OK` or
/// `FAIL` is kept verbatim and counted as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestOutcome {
    Ok,
    Fail,
    Other(String),
}

impl TestOutcome {
    pub fn from_word(word: &str) -> Self {
        match word {
            "OK" => TestOutcome::Ok,
            "FAIL" => TestOutcome::Fail,
            other => TestOutcome::Other(other.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestOutcome::Ok)
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Ok => f.write_str("OK"),
            TestOutcome::Fail => f.write_str("FAIL"),
            TestOutcome::Other(word) => f.write_str(word),
        }
    }
}

/// Finish half of a [`TestRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishData {
    pub duration_ms: u64,
    pub result: TestOutcome,
    pub error: Option<String>,
}

/// Accumulated state for one test identifier.
///
/// Each half is written independently; a record is complete once its
/// finish half is set, with or without a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRecord {
    pub name: Option<String>,
    pub finish: Option<FinishData>,
}

impl TestRecord {
    pub fn is_complete(&self) -> bool {
        self.finish.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.finish
            .as_ref()
            .and_then(|f| f.error.as_deref())
            .is_some_and(|e| !e.is_empty())
    }
}

/// Summary of one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationReport {
    pub total_tests: usize,
    pub successful_tests: usize,
    pub failed_tests: usize,
    pub tests_with_error: usize,
    /// Fraction in `[0, 1]`.
    pub pass_rate: f64,
    pub avg_duration_ms: f64,
    pub total_duration_ms: f64,
    pub omitted_lines: usize,
    pub summary_text: String,
}

impl AggregationReport {
    pub fn is_empty(&self) -> bool {
        self.total_tests == 0
    }

    pub fn pass_rate_pct(&self) -> f64 {
        self.pass_rate * 100.0
    }
}
