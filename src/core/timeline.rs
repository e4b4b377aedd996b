//! Ordering and differencing: sort records by time of day and attach the
//! elapsed time since the previous record.

use crate::models::{Record, ReportRow, Timestamp};
use crate::utils::time::format_elapsed;

pub const ZERO_ELAPSED: &str = "00:00:00";

/// Stable sort by ascending timestamp; equal times keep their input order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_key(|r| r.time);
}

/// Sort `records` and turn them into report rows.
///
/// Every record becomes the baseline of the next one, unparsable records
/// included. Since those sort last, everything after the first unparsable
/// record reports zero elapsed time.
pub fn build_timeline(mut records: Vec<Record>) -> Vec<ReportRow> {
    sort_records(&mut records);

    let mut previous: Option<Timestamp> = None;
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let elapsed = match previous.and_then(|prev| record.time.since(&prev)) {
            Some(secs) => format_elapsed(secs),
            None => ZERO_ELAPSED.to_string(),
        };
        previous = Some(record.time);

        rows.push(ReportRow { record, elapsed });
    }

    rows
}
