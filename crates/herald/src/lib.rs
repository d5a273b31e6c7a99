//! Herald - an LLM news narrator for a talking-avatar front-end.
//!
//! Herald asks an OpenAI-style chat-completions service for a short spoken
//! news segment covering a list of topics, posts it to the avatar front-end,
//! and in continuous mode keeps the story going one segment per interval.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use herald::{ApiKey, HeraldSettings, broadcast, default_topics};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HeraldSettings::default().into_config(ApiKey::from_env()?)?;
//!     let report = broadcast(&config, default_topics()).await?;
//!     println!("{} segments delivered", report.deliveries - report.delivery_failures);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `herald_error` - Error types
//! - `herald_core` - Messages, topics and run configuration
//! - `herald_interface` - `HeraldDriver` and `SegmentSink` traits
//! - `herald_models` - OpenAI chat-completions client
//! - `herald_narrative` - Prompt construction and fallback handling
//! - `herald_avatar` - Avatar front-end delivery client
//! - `herald_bot` - The driver loop
//!
//! This crate (`herald`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod launch;
mod observability;

pub use launch::broadcast;
pub use observability::{ObservabilityConfig, init_logging};

pub use herald_avatar::*;
pub use herald_bot::*;
pub use herald_core::*;
pub use herald_error::*;
pub use herald_interface::*;
pub use herald_models::*;
pub use herald_narrative::*;
