//! Output formatting for error reports.

use crate::error::{ConfigError, ErrorReport};
use clap::ValueEnum;

/// Output format for error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Error: <message>`
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Render an error for display at the program boundary.
pub fn format_error(err: &ConfigError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {}", err),
        OutputFormat::Json => {
            let report = ErrorReport::from(err);
            serde_json::to_string_pretty(&report)
                .unwrap_or_else(|_| format!("Error: {}", err))
        }
    }
}
