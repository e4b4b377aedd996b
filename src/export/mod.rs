// src/export/mod.rs

pub mod csv;

pub use self::csv::{render_report, write_report};

use crate::ui::messages::success;
use std::path::Path;

/// Common completion message once the report is on disk.
pub(crate) fn notify_report_saved(path: &Path) {
    success(format!("Sorted output saved to: {}", path.display()));
}
