use super::{exit_codes, resolve_config};
use crate::cli::args::AggregateArgs;
use anyhow::{Context, Result};
use testagg_core::input::{decode_text, ensure_non_empty};
use testagg_core::report::{render, OutputFormat};
use testagg_core::thresholds::{ThresholdConfig, ThresholdOutcome};
use tokio::io::AsyncReadExt;

pub async fn cmd_aggregate(args: AggregateArgs) -> Result<i32> {
    // 1. Settings: flags override config, config overrides defaults
    let cfg = match resolve_config(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e:#}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let format = match args.format.as_deref() {
        Some(f) => match f.parse::<OutputFormat>() {
            Ok(f) => f,
            Err(msg) => {
                eprintln!("config error: {msg}");
                return Ok(exit_codes::CONFIG_ERROR);
            }
        },
        None => cfg.output.format,
    };

    let bar_width = args.bar_width.unwrap_or(cfg.output.bar_width);
    if bar_width == 0 {
        eprintln!("config error: --bar-width must be at least 1");
        return Ok(exit_codes::CONFIG_ERROR);
    }

    let thresholds = ThresholdConfig {
        min_pass_rate: args.min_pass_rate.or(cfg.thresholds.min_pass_rate),
    };
    if let Some(min) = thresholds.min_pass_rate {
        if !(0.0..=1.0).contains(&min) {
            eprintln!("config error: --min-pass-rate must be within [0, 1], got {min}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    }

    // 2. Input; an empty file is still aggregated, empty typed input is not
    let text = match read_input(&args).await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("input error: {e:#}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };
    if args.file.is_none() {
        if let Err(e) = ensure_non_empty(&text) {
            eprintln!("input error: {e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    }

    // 3. Aggregate + output
    let report = testagg_core::aggregate_text(&text);
    println!("{}", render(&report, format, bar_width)?);

    // 4. Threshold gate
    match thresholds.check(&report) {
        ThresholdOutcome::Missed {
            min_pass_rate,
            actual,
        } => {
            eprintln!(
                "\n❌ Pass rate threshold not met ({:.2}% < {:.2}%)",
                actual * 100.0,
                min_pass_rate * 100.0
            );
            Ok(exit_codes::THRESHOLD_FAILED)
        }
        ThresholdOutcome::Met { min_pass_rate } => {
            tracing::info!(min_pass_rate, "pass rate threshold met");
            Ok(exit_codes::OK)
        }
        ThresholdOutcome::NotConfigured => Ok(exit_codes::OK),
    }
}

async fn read_input(args: &AggregateArgs) -> Result<String> {
    if let Some(path) = &args.file {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read log file: {}", path.display()))?;
        return Ok(decode_text(bytes, &path.display().to_string())?);
    }

    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let mut bytes = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut bytes)
        .await
        .context("failed to read stdin")?;
    Ok(decode_text(bytes, "stdin")?)
}
