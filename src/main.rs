//! config-open
//!
//! Opens a configuration file, releases it, and prints a diagnostic when
//! it cannot be opened.

use anyhow::Result;
use clap::Parser;
use config_open::cli::Cli;
use config_open::config::ConfigLoader;
use config_open::format::{OutputFormat, format_error};
use config_open::logging;
use std::process::ExitCode;
use tracing::{debug, info, warn};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(&cli.log_target(), cli.verbose)?;

    let path = cli.config_path();
    debug!(path = %path.display(), "Opening config file");

    match ConfigLoader::new().load(&path) {
        Ok(()) => {
            info!(path = %path.display(), "Config file opened and released");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(path = %path.display(), kind = ?err.kind(), "Config file could not be opened");
            let report = format_error(&err, cli.format);
            match cli.format {
                OutputFormat::Text => eprintln!("{}", report),
                // Logs never go to stdout in JSON mode, see `Cli::log_target`.
                OutputFormat::Json => println!("{}", report),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
