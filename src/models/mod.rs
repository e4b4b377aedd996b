pub mod record;

pub use record::{Record, ReportRow, Timestamp};
