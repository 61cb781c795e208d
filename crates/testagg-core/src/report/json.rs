use crate::model::AggregationReport;
use chrono::Utc;
use serde::Serialize;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportEnvelope<'a> {
    pub schema_version: u32,
    pub generated_at: String,
    pub testagg_version: &'static str,
    pub report: &'a AggregationReport,
}

impl<'a> ReportEnvelope<'a> {
    pub fn new(report: &'a AggregationReport) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            testagg_version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

pub fn render_json(report: &AggregationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportEnvelope::new(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_text;

    #[test]
    fn test_json_envelope_fields() {
        let report = aggregate_text(
            "testStarted id=\"2\" name=\"B\"\ntestFinished id=\"2\" duration=\"10\" result=FAIL error=\"boom\"",
        );
        let v: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(v["schema_version"], 1);
        assert!(v["generated_at"].as_str().is_some());
        assert_eq!(v["report"]["total_tests"], 1);
        assert_eq!(v["report"]["tests_with_error"], 1);
        assert_eq!(v["report"]["pass_rate"], 0.0);
    }
}
