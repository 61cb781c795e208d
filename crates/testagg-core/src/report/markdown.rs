use crate::model::AggregationReport;

pub fn render_markdown(report: &AggregationReport) -> String {
    if report.is_empty() {
        return format!(
            "## Test Results\n\nNo tests to aggregate.\n\nOmitted lines: {}\n",
            report.omitted_lines
        );
    }

    let status = if report.failed_tests == 0 { "✅" } else { "❌" };
    format!(
        "## Test Results {}\n\n\
        | Metric | Value |\n\
        |--------|-------|\n\
        | Total tests | {} |\n\
        | Successful | {} |\n\
        | Failed | {} |\n\
        | Failed with errors | {} |\n\
        | Pass rate | {:.2}% |\n\
        | Average duration | {:.2} ms |\n\
        | Total duration | {:.2} ms |\n\
        | Omitted lines | {} |\n",
        status,
        report.total_tests,
        report.successful_tests,
        report.failed_tests,
        report.tests_with_error,
        report.pass_rate_pct(),
        report.avg_duration_ms,
        report.total_duration_ms,
        report.omitted_lines,
    )
}
