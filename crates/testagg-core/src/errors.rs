use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("failed to write sample config: {0}")]
    Write(#[source] std::io::Error),
}

/// Rejections applied before text reaches the engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("only text input is allowed ({source_name} does not look like text)")]
    NotText { source_name: String },

    #[error("input is empty; provide some test log lines")]
    Empty,
}
