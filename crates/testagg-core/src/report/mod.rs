pub mod console;
pub mod json;
pub mod markdown;

use crate::model::AggregationReport;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!(
                "unknown output format '{}' (expected text|json|markdown)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        })
    }
}

/// Render `report` in the requested format.
pub fn render(
    report: &AggregationReport,
    format: OutputFormat,
    bar_width: usize,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(console::render_text(report, bar_width)),
        OutputFormat::Json => json::render_json(report),
        OutputFormat::Markdown => Ok(markdown::render_markdown(report)),
    }
}
