/// Time of day of a record, in seconds since midnight.
///
/// Variant order matters: the derived `Ord` places every `Valid` value
/// before `Unparsable`, so records with a broken time field sort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Timestamp {
    Valid(u64),
    Unparsable,
}

impl Timestamp {
    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// Only defined when both sides are valid; a negative gap is clamped to zero.
    pub fn since(&self, earlier: &Timestamp) -> Option<u64> {
        match (self, earlier) {
            (Timestamp::Valid(cur), Timestamp::Valid(prev)) => Some(cur.saturating_sub(*prev)),
            _ => None,
        }
    }
}

/// First-line fields extracted from one timing-log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub f1: String,
    pub f2: String,
    pub f3: String,
    pub f4: String,
    pub f11: String, // time of day, HH:MM:SS
    pub time: Timestamp,
}

impl Record {
    /// Columns as they appear in the report, without the elapsed column.
    pub fn columns(&self) -> [&str; 5] {
        [&self.f1, &self.f2, &self.f3, &self.f4, &self.f11]
    }
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub record: Record,
    pub elapsed: String,
}

impl ReportRow {
    pub fn to_fields(&self) -> Vec<&str> {
        let mut fields = self.record.columns().to_vec();
        fields.push(&self.elapsed);
        fields
    }
}
