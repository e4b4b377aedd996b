pub mod path;
pub mod time;

pub use time::{format_elapsed, parse_hms};
