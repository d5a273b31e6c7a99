//! News topics used to seed the opening narrative.

use serde::{Deserialize, Serialize};

/// A headline with its short summary.
///
/// # Examples
///
/// ```
/// use herald_core::Topic;
///
/// let topic = Topic::new("A", "a");
/// assert_eq!(topic.to_string(), "A - a");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("{} - {}", headline, summary)]
pub struct Topic {
    /// Short headline
    headline: String,
    /// One or two sentence summary
    summary: String,
}

impl Topic {
    /// Creates a topic.
    pub fn new(headline: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            summary: summary.into(),
        }
    }
}
