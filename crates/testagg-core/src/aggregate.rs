//! Reduction of a [`CorrelationTable`] into an [`AggregationReport`].

use crate::correlate::CorrelationTable;
use crate::model::AggregationReport;
use tracing::info;

/// Parse, correlate and reduce `text` in one pass.
pub fn aggregate_text(text: &str) -> AggregationReport {
    aggregate(CorrelationTable::from_text(text))
}

/// Consume the table and compute the summary.
///
/// Records without finish data are excluded from the totals and each adds
/// one omitted line.
pub fn aggregate(table: CorrelationTable) -> AggregationReport {
    let mut omitted_lines = table.omitted_lines();
    let mut total_tests = 0usize;
    let mut successful_tests = 0usize;
    let mut tests_with_error = 0usize;
    let mut total_duration_ms = 0f64;

    for (_, record) in table.records() {
        let Some(finish) = &record.finish else {
            omitted_lines += 1;
            continue;
        };

        total_tests += 1;
        if finish.result.is_success() {
            successful_tests += 1;
        }
        if record.has_error() {
            tests_with_error += 1;
        }
        total_duration_ms += finish.duration_ms as f64;
    }

    let failed_tests = total_tests - successful_tests;

    if total_tests == 0 {
        info!(omitted_lines, "no complete tests to aggregate");
        return AggregationReport {
            total_tests: 0,
            successful_tests: 0,
            failed_tests: 0,
            tests_with_error: 0,
            pass_rate: 0.0,
            avg_duration_ms: 0.0,
            total_duration_ms: 0.0,
            omitted_lines,
            summary_text: format!(
                "No tests to aggregate.\nNumber of omitted lines: {}",
                omitted_lines
            ),
        };
    }

    let pass_rate = successful_tests as f64 / total_tests as f64;
    let avg_duration_ms = total_duration_ms / total_tests as f64;

    info!(
        total_tests,
        successful_tests,
        failed_tests,
        tests_with_error,
        omitted_lines,
        "aggregated test results"
    );

    let summary_text = format!(
        "Total number of tests: {}\n\
         Number of successful tests: {}\n\
         Number of failed tests: {}\n\
         Number of failed tests with errors: {}\n\
         Pass rate: {:.2}%\n\
         Average test duration: {:.2} ms\n\
         Total duration of running all tests: {:.2} ms\n\
         Number of omitted lines: {}",
        total_tests,
        successful_tests,
        failed_tests,
        tests_with_error,
        pass_rate * 100.0,
        avg_duration_ms,
        total_duration_ms,
        omitted_lines
    );

    AggregationReport {
        total_tests,
        successful_tests,
        failed_tests,
        tests_with_error,
        pass_rate,
        avg_duration_ms,
        total_duration_ms,
        omitted_lines,
        summary_text,
    }
}
