//! Herald CLI binary.
//!
//! Narrates the news through a talking-avatar front-end, once or
//! continuously.

use clap::Parser;
use herald::{ObservabilityConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run_broadcast};

    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut observability = ObservabilityConfig::new().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_logging(&observability)?;

    run_broadcast(&cli).await?;

    Ok(())
}
