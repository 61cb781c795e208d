use std::env;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Debug)]
pub struct CliEnv {
    pub log_level: String,
    pub log_json: bool,
}

impl Default for CliEnv {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_json: false,
        }
    }
}

impl CliEnv {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(v) = env::var("TESTAGG_LOG") {
            cfg.log_level = v;
        }
        if let Ok(v) = env::var("TESTAGG_LOG_FORMAT") {
            cfg.log_json = v.eq_ignore_ascii_case("json");
        }
        cfg
    }
}

/// Logs always go to stderr; stdout carries the report.
pub fn init_logging(env: &CliEnv) {
    let filter = EnvFilter::try_new(&env.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_writer(std::io::stderr);

    if env.log_json {
        builder
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .init();
    } else {
        builder.init();
    }
}
