//! The report pipeline: discovery, extraction, ordering, emission.

use crate::config::ReportConfig;
use crate::core::discovery::discover;
use crate::core::extract::{extract_record, read_first_line};
use crate::core::timeline::build_timeline;
use crate::errors::AppResult;
use crate::export::{notify_report_saved, write_report};
use crate::models::Record;
use crate::ui::messages::{error, info, warning};
use std::path::{Path, PathBuf};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// No file with the configured extension was found; nothing was written.
    NoFiles,
    Written {
        path: PathBuf,
        rows: usize,
        skipped: usize,
    },
}

/// Run the whole pipeline for `cfg.directory`.
///
/// Only an invalid directory, a failing directory listing or a failing
/// output write stop the run; unreadable or malformed files are skipped.
pub fn run_report(cfg: &ReportConfig) -> AppResult<ReportOutcome> {
    let suffix = cfg.suffix();
    let files = discover(&cfg.directory, &suffix)?;

    if files.is_empty() {
        warning(format!("No {suffix} files found in the directory."));
        return Ok(ReportOutcome::NoFiles);
    }

    let records = collect_records(&files, cfg);
    let skipped = files.len() - records.len();
    if skipped > 0 {
        info(format!("{skipped} of {} file(s) produced no record.", files.len()));
    }

    let rows = build_timeline(records);
    let output = cfg.output_path();
    write_report(&output, &rows, cfg.field_split)?;
    notify_report_saved(&output);

    Ok(ReportOutcome::Written {
        path: output,
        rows: rows.len(),
        skipped,
    })
}

/// Extract one record per readable, well-formed file, in discovery order.
pub fn collect_records(files: &[PathBuf], cfg: &ReportConfig) -> Vec<Record> {
    files
        .iter()
        .filter_map(|path| record_for(path, cfg))
        .collect()
}

fn record_for(path: &Path, cfg: &ReportConfig) -> Option<Record> {
    let line = match read_first_line(path) {
        Ok(line) => line,
        Err(e) => {
            error(e);
            return None;
        }
    };
    if line.is_empty() {
        return None;
    }
    extract_record(&line, cfg.field_split)
}
