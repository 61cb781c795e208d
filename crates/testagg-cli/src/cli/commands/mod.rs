use super::args::*;
use anyhow::Context;
use std::path::Path;
use testagg_core::config::{load_config, AggConfig, DEFAULT_CONFIG_PATH};

pub mod aggregate;
pub mod generate;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const THRESHOLD_FAILED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Aggregate(args) => aggregate::cmd_aggregate(args).await,
        Command::Generate(args) => generate::cmd_generate(args).await,
        Command::Init(args) => cmd_init(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

fn cmd_init(args: InitArgs) -> anyhow::Result<i32> {
    if args.config.exists() {
        eprintln!("note: {} already exists", args.config.display());
        return Ok(exit_codes::OK);
    }
    if let Some(parent) = args.config.parent() {
        std::fs::create_dir_all(parent)?;
    }
    testagg_core::config::write_sample_config(&args.config)?;
    eprintln!("created {}", args.config.display());
    Ok(exit_codes::OK)
}

/// Explicit `--config` must exist; the default path is optional.
pub(crate) fn resolve_config(args: &ConfigArgs) -> anyhow::Result<AggConfig> {
    match &args.config {
        Some(path) => load_config(path, args.strict_config)
            .with_context(|| format!("config error: {}", path.display())),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                tracing::debug!(path = %default.display(), "loading default config");
                load_config(default, args.strict_config)
                    .with_context(|| format!("config error: {}", default.display()))
            } else {
                Ok(AggConfig::default())
            }
        }
    }
}
