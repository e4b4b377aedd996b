use crate::config::FieldSplit;
use crate::errors::{AppError, AppResult};
use crate::models::ReportRow;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::path::Path;

/// Render rows as `f1,f2,f3,f4,f11,elapsed` lines joined by `\n`.
///
/// Naive input is written back verbatim; quoted input is re-quoted where a
/// field needs it. The last line has no trailing newline.
pub fn render_report(rows: &[ReportRow], mode: FieldSplit) -> AppResult<String> {
    let quoting = match mode {
        FieldSplit::Naive => QuoteStyle::Never,
        FieldSplit::Quoted => QuoteStyle::Necessary,
    };
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(quoting)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        wtr.write_record(row.to_fields())?;
    }

    let bytes = wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, rows: &[ReportRow], mode: FieldSplit) -> AppResult<()> {
    let text = render_report(rows, mode)?;
    fs::write(path, text).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
