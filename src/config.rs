//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;

/// Default glossary file, relative to the working directory
pub const DEFAULT_FILE: &str = "input.csv";

/// View and append rows to a CSV glossary
#[derive(Debug, Clone, Parser)]
#[command(name = "glossary", version, about)]
pub struct Config {
    /// Glossary CSV file (created on first append if missing)
    #[arg(value_name = "FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Directory for rotating log files [default: <temp dir>/glossary]
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print the glossary as text and exit instead of opening the UI
    #[arg(long)]
    pub print: bool,
}

impl Config {
    /// Log directory, falling back to a per-user temp location
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("glossary"))
    }
}
