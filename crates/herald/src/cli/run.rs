//! Broadcast command handler.

use super::Cli;
use herald::{
    API_BASE_VAR, API_KEY_VAR, ApiKey, BroadcastReport, HeraldConfig, HeraldResult, HeraldSettings,
    JsonError, broadcast, default_topics, load_topics,
};
use std::env;
use tracing::{debug, info};

/// Resolves configuration, runs the broadcast and prints the report.
pub async fn run_broadcast(cli: &Cli) -> HeraldResult<()> {
    let report = broadcast_with(
        cli,
        env::var(API_KEY_VAR).ok(),
        env::var(API_BASE_VAR).ok(),
    )
    .await?;
    print_report(&report, cli.json_logs)?;
    println!("Done!");
    Ok(())
}

/// Builds the run configuration from flags, the settings file and the
/// credential and API root read from the environment.
///
/// A blank `api_base` is ignored.
///
/// # Errors
///
/// Fails on a missing or blank credential, an unreadable settings file or
/// invalid values.
pub fn resolve_config(
    cli: &Cli,
    api_key: Option<String>,
    api_base: Option<String>,
) -> HeraldResult<HeraldConfig> {
    let api_key = ApiKey::new(api_key)?;

    let mut settings = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading settings file");
            HeraldSettings::from_file(path)?
        }
        None => HeraldSettings::default(),
    };
    if let Some(api_base) = api_base.filter(|v| !v.trim().is_empty()) {
        settings.generation.api_base = Some(api_base);
    }

    Ok(settings.overlay(cli.settings()).into_config(api_key)?)
}

/// Runs the broadcast; the credential is checked before any client is built.
async fn broadcast_with(
    cli: &Cli,
    api_key: Option<String>,
    api_base: Option<String>,
) -> HeraldResult<BroadcastReport> {
    let config = resolve_config(cli, api_key, api_base)?;

    let topics = match &cli.topics {
        Some(path) => load_topics(path)?,
        None => default_topics(),
    };
    info!(
        topics = topics.len(),
        continuous = config.schedule().continuous(),
        "Starting Herald"
    );

    broadcast(&config, topics).await
}

fn print_report(report: &BroadcastReport, json: bool) -> HeraldResult<()> {
    if json {
        let line = serde_json::to_string(report)
            .map_err(|e| JsonError::new(format!("Failed to serialize report: {}", e)))?;
        println!("{}", line);
    } else {
        println!(
            "Segments generated: {} ({} fallback)",
            report.generations, report.fallbacks
        );
        println!(
            "Deliveries: {} attempted, {} failed",
            report.deliveries, report.delivery_failures
        );
        println!("Pauses: {}", report.sleeps);
        if report.stopped_early {
            println!("Stopped after the opening segment could not be delivered");
        }
    }
    Ok(())
}
