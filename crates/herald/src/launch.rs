//! Wires the production clients into a broadcast.

use herald_avatar::AvatarClient;
use herald_bot::{BroadcastReport, Broadcaster};
use herald_core::{HeraldConfig, Topic};
use herald_error::HeraldResult;
use herald_models::OpenAiClient;
use herald_narrative::NarrativeGenerator;
use tracing::{info, instrument};

/// Runs one broadcast against the configured completion service and avatar.
///
/// # Errors
///
/// Fails only if an HTTP client cannot be constructed. Generation and
/// delivery failures are absorbed by the loop and show up in the report.
#[instrument(skip_all, fields(model = %config.generation().model(), topics = topics.len()))]
pub async fn broadcast(config: &HeraldConfig, topics: Vec<Topic>) -> HeraldResult<BroadcastReport> {
    let driver = OpenAiClient::new(config.generation())?;
    let sink = AvatarClient::new(config.delivery())?;
    info!(
        completions = %driver.completions_url(),
        avatar = %config.delivery().endpoint(),
        "Clients ready"
    );

    let generator = NarrativeGenerator::new(driver, config.generation());
    let broadcaster = Broadcaster::new(generator, sink, topics, config.schedule());
    Ok(broadcaster.run().await)
}
