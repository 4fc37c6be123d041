//! CLI error handling

use std::path::PathBuf;

use thiserror::Error;

use core_kernel::CoreError;

/// Errors raised while turning a file into document text
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),
}

/// Top-level CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
