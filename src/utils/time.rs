//! Time utilities: parsing HH:MM:SS time-of-day strings and formatting elapsed durations.

use crate::models::Timestamp;

/// Parse `HH:MM:SS` into seconds since midnight.
///
/// Anything that is not exactly three colon-separated integers becomes
/// `Timestamp::Unparsable`. An empty component counts as zero. Components
/// are not range-checked, so `25:00:00` is accepted.
pub fn parse_hms(t: &str) -> Timestamp {
    let parts: Vec<&str> = t.split(':').collect();
    if parts.len() != 3 {
        return Timestamp::Unparsable;
    }

    let mut values = [0u64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let part = part.trim();
        if part.is_empty() {
            // "10::05" reads as 10:00:05
            continue;
        }
        match part.parse::<u64>() {
            Ok(v) => *slot = v,
            Err(_) => return Timestamp::Unparsable,
        }
    }

    let [hh, mm, ss] = values;
    hh.checked_mul(3600)
        .and_then(|h| mm.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(ss))
        .map_or(Timestamp::Unparsable, Timestamp::Valid)
}

/// Format a number of seconds as `HH:MM:SS`.
///
/// Hours are padded to two digits but never truncated (`100:00:00`).
pub fn format_elapsed(seconds: u64) -> String {
    if seconds == 0 {
        return "00:00:00".to_string();
    }

    let hh = seconds / 3600;
    let mm = (seconds % 3600) / 60;
    let ss = seconds % 60;
    format!("{:02}:{:02}:{:02}", hh, mm, ss)
}
