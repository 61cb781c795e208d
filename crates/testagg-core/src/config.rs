use crate::errors::ConfigError;
use crate::generator::GeneratorSettings;
use crate::report::OutputFormat;
use crate::thresholds::ThresholdConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;
pub const DEFAULT_CONFIG_PATH: &str = "testagg.yaml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggConfig {
    #[serde(default = "default_version", rename = "configVersion", alias = "version")]
    pub version: u32,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for AggConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            generator: GeneratorSettings::default(),
            thresholds: ThresholdConfig::default(),
            output: OutputSettings::default(),
        }
    }
}

fn default_version() -> u32 {
    SUPPORTED_CONFIG_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub bar_width: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            bar_width: 40,
        }
    }
}

impl AggConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != SUPPORTED_CONFIG_VERSION {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {} (supported: {})",
                self.version, SUPPORTED_CONFIG_VERSION
            )));
        }
        self.generator.validate()?;
        if let Some(min) = self.thresholds.min_pass_rate {
            if !(0.0..=1.0).contains(&min) {
                return Err(ConfigError::Invalid(format!(
                    "thresholds.min_pass_rate must be within [0, 1], got {}",
                    min
                )));
            }
        }
        if self.output.bar_width == 0 {
            return Err(ConfigError::Invalid(
                "output.bar_width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a YAML config.
///
/// Unknown keys are reported; with `strict` they are an error, otherwise a
/// warning.
pub fn load_config(path: &Path, strict: bool) -> Result<AggConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&raw, strict)
}

pub fn parse_config(raw: &str, strict: bool) -> Result<AggConfig, ConfigError> {
    let mut ignored_keys = BTreeSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(raw);
    let cfg: AggConfig = serde_ignored::deserialize(deserializer, |path| {
        ignored_keys.insert(path.to_string());
    })?;

    // Keys starting with `x-` or `_` are reserved for YAML anchors.
    let meaningful: Vec<_> = ignored_keys
        .iter()
        .filter(|k| !k.starts_with("x-") && !k.starts_with('_'))
        .collect();
    if !meaningful.is_empty() {
        if strict {
            return Err(ConfigError::Invalid(format!(
                "unknown fields detected in strict mode: {:?}",
                meaningful
            )));
        }
        tracing::warn!(keys = ?meaningful, "ignored unknown config fields");
    }

    cfg.validate()?;
    Ok(cfg)
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(
        path,
        r#"configVersion: 1

# Synthetic log generation (`testagg generate`)
generator:
  min_tests: 100
  max_tests: 2000
  min_duration_ms: 3
  max_duration_ms: 100
  # seed: 42

thresholds:
  # Exit with code 1 when the pass rate falls below this fraction, e.g. 0.9
  min_pass_rate: null

output:
  format: text   # text | json | markdown
  bar_width: 40
"#,
    )
    .map_err(ConfigError::Write)?;
    Ok(())
}
