//! First-line extraction: read a record file and pull out the report fields.

use crate::config::FieldSplit;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::utils::time::parse_hms;
use std::fs;
use std::path::Path;

/// Minimum number of comma-separated fields a usable first line carries.
pub const MIN_FIELDS: usize = 11;

/// Column indices copied into the report: f1..f4 and the time of day.
const FIELD_INDICES: [usize; 5] = [0, 1, 2, 3, 10];

/// Read a file and return its first line, trimmed.
///
/// Invalid UTF-8 is replaced rather than rejected; only I/O failures are errors.
pub fn read_first_line(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let data = String::from_utf8_lossy(&bytes);
    let first = data.split('\n').next().unwrap_or_default();
    Ok(first.trim().to_string())
}

/// Split a line into raw fields according to `mode`.
pub fn split_fields(line: &str, mode: FieldSplit) -> Vec<String> {
    match mode {
        FieldSplit::Naive => line.split(',').map(str::to_string).collect(),
        FieldSplit::Quoted => {
            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(line.as_bytes());
            match rdr.records().next() {
                Some(Ok(rec)) => rec.iter().map(str::to_string).collect(),
                // A line the tokenizer rejects carries no usable fields.
                _ => Vec::new(),
            }
        }
    }
}

/// Build a record from a first line, or `None` when it has too few fields.
pub fn extract_record(line: &str, mode: FieldSplit) -> Option<Record> {
    let fields = split_fields(line, mode);
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let [f1, f2, f3, f4, f11] = FIELD_INDICES.map(|i| fields[i].trim().to_string());
    let time = parse_hms(&f11);
    Some(Record {
        f1,
        f2,
        f3,
        f4,
        f11,
        time,
    })
}
