//! Command-line argument parsing

use std::path::PathBuf;

use clap::Parser;

/// Triage a First Notice of Loss document and print the routing decision as JSON
#[derive(Debug, Parser)]
#[command(name = "fnol-triage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the FNOL document (.txt or .pdf)
    pub document: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
