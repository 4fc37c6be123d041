//! FNOL Triage Command-Line Interface
//!
//! This crate wraps the triage pipeline for use from a shell.
//!
//! # Architecture
//!
//! - **Loader**: Reads `.txt` and `.pdf` documents into plain text
//! - **CLI**: Argument parsing with clap
//! - **Config**: `FNOL_`-prefixed environment configuration
//! - **Error Handling**: Load, configuration and serialization errors
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{render, DocumentLoader};
//!
//! let text = DocumentLoader::load(Path::new("claim.txt"))?;
//! println!("{}", render(&text, true)?);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, LoadError};
pub use loader::{DocumentFormat, DocumentLoader};

use std::path::Path;

/// Triages document text and serializes the result
///
/// # Arguments
///
/// * `text` - Document text
/// * `pretty` - Emit indented JSON
pub fn render(text: &str, pretty: bool) -> Result<String, CliError> {
    let result = domain_triage::process(text);
    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(json)
}

/// Loads the document at `path`, triages it, and returns the JSON result
pub fn triage_file(path: &Path, pretty: bool) -> Result<String, CliError> {
    let text = DocumentLoader::load(path)?;
    render(&text, pretty)
}
