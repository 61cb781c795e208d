use super::{exit_codes, resolve_config};
use crate::cli::args::GenerateArgs;
use anyhow::{Context, Result};
use testagg_core::generator::{generate_from_settings, GeneratorSettings};

pub async fn cmd_generate(args: GenerateArgs) -> Result<i32> {
    let cfg = match resolve_config(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e:#}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let settings = apply_overrides(cfg.generator, &args);
    let log = match generate_from_settings(&settings) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("config error: {e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    tracing::info!(
        test_count = log.test_count,
        success_count = log.success_count,
        seed = ?settings.seed,
        "generated synthetic log"
    );

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, &log.text)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "wrote {} tests ({} passing) to {}",
                log.test_count,
                log.success_count,
                path.display()
            );
        }
        None => print!("{}", log.text),
    }

    Ok(exit_codes::OK)
}

fn apply_overrides(mut settings: GeneratorSettings, args: &GenerateArgs) -> GeneratorSettings {
    if let Some(v) = args.seed {
        settings.seed = Some(v);
    }
    if let Some(v) = args.min_tests {
        settings.min_tests = v;
    }
    if let Some(v) = args.max_tests {
        settings.max_tests = v;
    }
    if let Some(v) = args.min_duration_ms {
        settings.min_duration_ms = v;
    }
    if let Some(v) = args.max_duration_ms {
        settings.max_duration_ms = v;
    }
    settings
}
