//! Core data types for Herald.
//!
//! This crate holds the plain data passed between the narrative generator,
//! the completion client and the avatar client, plus the run configuration
//! that is built once at startup and shared by reference.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod message;
mod request;
mod role;
mod settings;
mod topic;

pub use config::{
    API_BASE_VAR, API_KEY_VAR, ApiKey, DEFAULT_API_BASE, DEFAULT_AVATAR_URL, DEFAULT_INTERVAL_SECS,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_ROUNDS, DEFAULT_TEMPERATURE, DeliveryConfig,
    DeliveryConfigBuilder, GenerationConfig, GenerationConfigBuilder, HeraldConfig,
    RECEIVE_TEXT_PATH, ScheduleConfig, ScheduleConfigBuilder,
};
pub use message::Message;
pub use request::{GenerateRequest, GenerateResponse, Output};
pub use role::Role;
pub use settings::{DeliverySettings, GenerationSettings, HeraldSettings, ScheduleSettings};
pub use topic::Topic;
