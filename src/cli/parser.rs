use clap::Parser;

/// Command-line interface definition for lifreport
#[derive(Parser, Debug)]
#[command(
    name = "lifreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Collect timing logs from a directory, sort them by time of day and write an elapsed-time report",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the timing-log files (prompted for when omitted)
    pub directory: Option<String>,

    /// Extension of the files to collect (without the dot)
    #[arg(long = "ext", value_name = "EXT")]
    pub extension: Option<String>,

    /// Name of the report written into the scanned directory
    #[arg(long = "output", short = 'o', value_name = "NAME")]
    pub output: Option<String>,

    /// Load settings from a YAML file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Tokenize the first line as CSV so quoted fields may contain commas
    #[arg(long = "quoted")]
    pub quoted: bool,
}
