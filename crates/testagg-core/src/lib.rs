//! Correlates `testStarted` / `testFinished` log lines and aggregates them
//! into pass/fail statistics.

pub mod aggregate;
pub mod config;
pub mod correlate;
pub mod errors;
pub mod generator;
pub mod grammar;
pub mod input;
pub mod model;
pub mod report;
pub mod thresholds;

pub use aggregate::{aggregate, aggregate_text};
pub use correlate::CorrelationTable;
pub use grammar::EventGrammar;
pub use model::AggregationReport;
