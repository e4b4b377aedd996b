//! lifreport library root.
//! Exposes the CLI parser, the high-level run() function, and the pipeline modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::Cli;
use crate::config::{FieldSplit, ReportConfig};
use crate::core::report::{ReportOutcome, run_report};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Merge the optional config file with command-line overrides.
pub fn build_config(cli: &Cli, directory: &str) -> AppResult<ReportConfig> {
    let mut cfg = match &cli.config {
        Some(file) => ReportConfig::load(&expand_tilde(file))?,
        None => ReportConfig::default(),
    };

    cfg.directory = expand_tilde(directory);
    if let Some(ext) = &cli.extension {
        cfg.extension = ext.clone();
    }
    if let Some(output) = &cli.output {
        cfg.output_file = output.clone();
    }
    if cli.quoted {
        cfg.field_split = FieldSplit::Quoted;
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Directory from the command line, or asked for interactively.
fn resolve_directory(cli: &Cli) -> AppResult<String> {
    match &cli.directory {
        Some(dir) => Ok(dir.trim().to_string()),
        None => Ok(ui::messages::prompt("Enter the directory path: ")?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<ReportOutcome> {
    let cli = Cli::parse();

    let directory = resolve_directory(&cli)?;
    let cfg = build_config(&cli, &directory)?;
    run_report(&cfg)
}
