use crate::model::AggregationReport;

const PASSED_CELL: char = '#';
const FAILED_CELL: char = '.';

/// Proportional pass/fail bar: `floor(width * pass_rate)` passed cells,
/// the rest failed.
pub fn pass_rate_bar(pass_rate: f64, width: usize) -> String {
    let passed = ((width as f64) * pass_rate.clamp(0.0, 1.0)).floor() as usize;
    let passed = passed.min(width);

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(PASSED_CELL).take(passed));
    bar.extend(std::iter::repeat(FAILED_CELL).take(width - passed));
    bar.push(']');
    bar
}

pub fn render_text(report: &AggregationReport, bar_width: usize) -> String {
    format!(
        "{}\n{}",
        pass_rate_bar(report.pass_rate, bar_width),
        report.summary_text
    )
}
