//! Topic catalog for the opening segment.

use herald_core::Topic;
use herald_error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Built-in headlines used when no topic file is given.
pub fn default_topics() -> Vec<Topic> {
    vec![
        Topic::new(
            "Global Cryptocurrency Adoption Rising",
            "Countries are increasingly adopting cryptocurrencies for international trade, bypassing traditional banking systems.",
        ),
        Topic::new(
            "Breakthrough in Renewable Energy Storage",
            "Scientists develop new battery technology that can store renewable energy for months at low cost.",
        ),
        Topic::new(
            "AI System Predicts Protein Structures",
            "New AI model accurately predicts 3D structures of proteins, potentially revolutionizing drug discovery.",
        ),
        Topic::new(
            "Space Tourism Reaches Milestone",
            "Commercial space flight company completes first civilian orbital mission with non-professional astronauts.",
        ),
        Topic::new(
            "Global Weather Patterns Show Significant Shift",
            "New climate data reveals unprecedented changes in global weather systems over the past decade.",
        ),
        Topic::new(
            "Breakthrough in Quantum Computing",
            "Researchers achieve quantum supremacy with new 128-qubit processor, solving previously impossible calculations.",
        ),
    ]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TopicFile {
    topics: Vec<Topic>,
}

/// Parses a TOML topic list:
///
/// ```toml
/// [[topics]]
/// headline = "A"
/// summary = "a"
/// ```
///
/// # Errors
///
/// Returns an error if the TOML is invalid or the list is empty.
pub fn parse_topics(content: &str) -> Result<Vec<Topic>, ConfigError> {
    let file: TopicFile = toml::from_str(content)
        .map_err(|e| ConfigError::new(format!("Failed to parse topics: {}", e)))?;

    if file.topics.is_empty() {
        return Err(ConfigError::new("Topic list is empty"));
    }
    Ok(file.topics)
}

/// Loads a TOML topic list from disk.
pub fn load_topics(path: impl AsRef<Path>) -> Result<Vec<Topic>, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!(
            "Failed to read topics file {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_topics(&content)
}
