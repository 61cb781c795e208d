use crate::model::AggregationReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThresholdConfig {
    /// Minimum pass rate as a fraction in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pass_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdOutcome {
    NotConfigured,
    Met { min_pass_rate: f64 },
    Missed { min_pass_rate: f64, actual: f64 },
}

impl ThresholdOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ThresholdOutcome::Missed { .. })
    }
}

impl ThresholdConfig {
    pub fn check(&self, report: &AggregationReport) -> ThresholdOutcome {
        match self.min_pass_rate {
            None => ThresholdOutcome::NotConfigured,
            Some(min) if report.pass_rate >= min => ThresholdOutcome::Met { min_pass_rate: min },
            Some(min) => ThresholdOutcome::Missed {
                min_pass_rate: min,
                actual: report.pass_rate,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_text;

    fn half_passing() -> AggregationReport {
        aggregate_text(
            "testStarted id=\"1\" name=\"A\"\ntestFinished id=\"1\" duration=\"1\" result=OK\n\
             testStarted id=\"2\" name=\"B\"\ntestFinished id=\"2\" duration=\"1\" result=FAIL",
        )
    }

    #[test]
    fn test_no_threshold() {
        assert_eq!(
            ThresholdConfig::default().check(&half_passing()),
            ThresholdOutcome::NotConfigured
        );
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let t = ThresholdConfig {
            min_pass_rate: Some(0.5),
        };
        assert!(!t.check(&half_passing()).is_failure());
    }

    #[test]
    fn test_threshold_missed() {
        let t = ThresholdConfig {
            min_pass_rate: Some(0.8),
        };
        assert_eq!(
            t.check(&half_passing()),
            ThresholdOutcome::Missed {
                min_pass_rate: 0.8,
                actual: 0.5
            }
        );
    }
}
