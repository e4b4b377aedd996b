pub mod discovery;
pub mod extract;
pub mod report;
pub mod timeline;
