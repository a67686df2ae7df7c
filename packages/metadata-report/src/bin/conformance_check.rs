//! CLI entry point for the strict ISO 19139 conformance check.

use metadata_report::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = cli::run_conformance() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
