//! Synthetic test-event logs.
//!
//! Output always parses with zero omitted lines. Randomness comes from the
//! caller so runs can be reproduced from a seed.

use crate::errors::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const SAMPLE_ERROR_MESSAGE: &str = "Sample error message";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    pub min_tests: u32,
    pub max_tests: u32,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            min_tests: 100,
            max_tests: 2000,
            min_duration_ms: 3,
            max_duration_ms: 100,
            seed: None,
        }
    }
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_tests == 0 {
            return Err(ConfigError::Invalid(
                "generator.min_tests must be at least 1".into(),
            ));
        }
        if self.min_tests > self.max_tests {
            return Err(ConfigError::Invalid(format!(
                "generator.min_tests ({}) exceeds generator.max_tests ({})",
                self.min_tests, self.max_tests
            )));
        }
        if self.min_duration_ms > self.max_duration_ms {
            return Err(ConfigError::Invalid(format!(
                "generator.min_duration_ms ({}) exceeds generator.max_duration_ms ({})",
                self.min_duration_ms, self.max_duration_ms
            )));
        }
        Ok(())
    }
}

/// Generated log text plus the parameters that were drawn for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticLog {
    pub text: String,
    pub test_count: u32,
    pub success_count: u32,
    /// Pass rate that was drawn, before rounding to `success_count`.
    pub target_pass_rate: f64,
}

/// Generate a log from `rng`.
pub fn generate<R: Rng>(
    rng: &mut R,
    settings: &GeneratorSettings,
) -> Result<SyntheticLog, ConfigError> {
    settings.validate()?;

    let test_count = rng.gen_range(settings.min_tests..=settings.max_tests);
    let target_pass_rate: f64 = rng.gen_range(0.0..=1.0);
    let success_count = (target_pass_rate * test_count as f64).round() as u32;

    let mut text = String::with_capacity(test_count as usize * 96);
    for i in 0..test_count {
        let id = i + 1;
        let is_success = i < success_count;
        let duration = rng.gen_range(settings.min_duration_ms..=settings.max_duration_ms);
        let has_error = !is_success && rng.gen_bool(0.5);

        text.push_str(&format!("testStarted id=\"{id}\" name = \"Test{id}\"\n"));
        text.push_str(&format!(
            "testFinished id=\"{id}\" duration=\"{duration}\" result={}",
            if is_success { "OK" } else { "FAIL" }
        ));
        if has_error {
            text.push_str(&format!(" error=\"{SAMPLE_ERROR_MESSAGE}\""));
        }
        text.push('\n');
    }

    tracing::debug!(test_count, success_count, "generated synthetic log");

    Ok(SyntheticLog {
        text,
        test_count,
        success_count,
        target_pass_rate,
    })
}

/// Generate with a seeded RNG, or from entropy when `settings.seed` is unset.
pub fn generate_from_settings(settings: &GeneratorSettings) -> Result<SyntheticLog, ConfigError> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(&mut rng, settings)
}
