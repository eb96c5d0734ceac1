//! CLI definitions for config-open
//!
//! This module defines the CLI structure using clap's derive macros.

use crate::config::ConfigLoader;
use crate::format::OutputFormat;
use crate::logging::LogTarget;
use clap::Parser;
use std::path::PathBuf;

/// Open a config file and report why it could not be opened
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default: $CONFIG_OPEN_PATH or config.json)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,

    /// Error report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Config path after applying the environment and default fallbacks.
    pub fn config_path(&self) -> PathBuf {
        ConfigLoader::resolve_path(self.config.as_deref())
    }

    /// Log target from `--log`. Stdout is reserved for the report in JSON
    /// mode, so stdout logging moves to stderr there.
    pub fn log_target(&self) -> LogTarget {
        match (LogTarget::parse(&self.log), self.format) {
            (LogTarget::Stdout, OutputFormat::Json) => LogTarget::Stderr,
            (target, _) => target,
        }
    }
}
