use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "testagg",
    version,
    about = "Aggregate testStarted/testFinished logs into pass/fail statistics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate a test log from a file, inline text or stdin
    Aggregate(AggregateArgs),
    /// Print a synthetic test log
    Generate(GenerateArgs),
    /// Write a sample config file
    Init(InitArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Config file (defaults to ./testagg.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Treat unknown config keys as errors
    #[arg(long)]
    pub strict_config: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct AggregateArgs {
    /// Log file to read
    #[arg(long, short = 'f', conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Log text given inline
    #[arg(long)]
    pub text: Option<String>,

    /// Output format: text | json | markdown
    #[arg(long)]
    pub format: Option<String>,

    /// Width of the pass-rate bar (text format)
    #[arg(long)]
    pub bar_width: Option<usize>,

    /// Fail (exit 1) when the pass rate is below this fraction
    #[arg(long)]
    pub min_pass_rate: Option<f64>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub min_tests: Option<u32>,

    #[arg(long)]
    pub max_tests: Option<u32>,

    #[arg(long)]
    pub min_duration_ms: Option<u64>,

    #[arg(long)]
    pub max_duration_ms: Option<u64>,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = "testagg.yaml")]
    pub config: PathBuf,
}
