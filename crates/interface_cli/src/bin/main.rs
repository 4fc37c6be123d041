//! FNOL Triage - Command-Line Binary
//!
//! Reads one First Notice of Loss document and prints the triage result as
//! JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! fnol-triage claim.txt
//! fnol-triage claim.pdf --pretty
//!
//! # Verbose logging
//! FNOL_LOG_LEVEL=debug fnol-triage claim.txt
//! ```
//!
//! # Environment Variables
//!
//! * `FNOL_LOG_LEVEL` - Log level: trace, debug, info, warn, error, off (default: warn)
//! * `FNOL_PRETTY` - Pretty-print JSON output (default: false)
//! * `RUST_LOG` - Overrides `FNOL_LOG_LEVEL` with a full filter directive

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{triage_file, Cli, CliConfig};

/// Main entry point.
///
/// # Errors
///
/// Returns an error, and so a non-zero exit code, if:
/// - Configuration in the environment is invalid
/// - The document cannot be loaded
fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.log_level);

    let pretty = cli.pretty || config.pretty;
    tracing::info!(document = %cli.document.display(), pretty, "Triaging document");

    let json = triage_file(&cli.document, pretty)
        .with_context(|| format!("Could not triage {}", cli.document.display()))?;
    println!("{}", json);

    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output when `RUST_LOG` is unset
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
