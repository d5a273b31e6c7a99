//! Run configuration, assembled once at startup and shared by reference.

use derive_builder::Builder;
use derive_getters::Getters;
use herald_error::ConfigError;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the completion service credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable overriding the chat-completions API root.
pub const API_BASE_VAR: &str = "OPENAI_API_BASE";
/// Chat-completions API root used when none is configured.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4";
/// Completion length budget per segment.
pub const DEFAULT_MAX_TOKENS: u32 = 150;
/// Sampling temperature per segment.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Front-end base URL used when none is configured.
pub const DEFAULT_AVATAR_URL: &str = "http://localhost:3000";
/// Path of the front-end's text ingestion route.
pub const RECEIVE_TEXT_PATH: &str = "/api/receive-text";
/// Pause between continuous-mode rounds.
pub const DEFAULT_INTERVAL_SECS: u64 = 15;
/// Rounds performed in continuous mode.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Completion service credential.
///
/// `Debug` never prints the secret.
///
/// # Examples
///
/// ```
/// use herald_core::ApiKey;
///
/// let key = ApiKey::new(Some("sk-test".to_string())).unwrap();
/// assert_eq!(key.expose(), "sk-test");
/// assert!(!format!("{:?}", key).contains("sk-test"));
///
/// assert!(ApiKey::new(None).is_err());
/// assert!(ApiKey::new(Some("   ".to_string())).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Accepts a credential, rejecting a missing or blank value.
    #[track_caller]
    pub fn new(value: Option<String>) -> Result<Self, ConfigError> {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Ok(Self(v)),
            _ => Err(ConfigError::new(format!(
                "Please set the {} environment variable",
                API_KEY_VAR
            ))),
        }
    }

    /// Reads the credential from `OPENAI_API_KEY`.
    #[track_caller]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(std::env::var(API_KEY_VAR).ok())
    }

    /// The raw credential, for building the authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Settings for the completion service call.
///
/// # Examples
///
/// ```
/// use herald_core::{ApiKey, GenerationConfig};
///
/// let key = ApiKey::new(Some("sk-test".to_string())).unwrap();
/// let config = GenerationConfig::builder().api_key(key).build().unwrap();
/// assert_eq!(config.model(), "gpt-4");
/// assert_eq!(*config.max_tokens(), 150);
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GenerationConfig {
    /// Credential sent as a bearer token
    api_key: ApiKey,
    /// API root, e.g. `https://api.openai.com/v1`
    #[builder(default = "DEFAULT_API_BASE.to_string()")]
    api_base: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Maximum completion length in tokens
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
}

impl GenerationConfig {
    /// Creates a new builder.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

impl GenerationConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(format!(
                    "temperature must be in [0.0, 2.0], got {}",
                    temperature
                ));
            }
        }
        if self.max_tokens == Some(0) {
            return Err("max_tokens must be greater than zero".to_string());
        }
        if matches!(&self.api_base, Some(base) if base.trim().is_empty()) {
            return Err("api_base must not be empty".to_string());
        }
        Ok(())
    }
}

/// Where and what to deliver alongside each segment.
///
/// # Examples
///
/// ```
/// use herald_core::DeliveryConfig;
///
/// let config = DeliveryConfig::builder()
///     .base_url("http://localhost:3000/")
///     .build()
///     .unwrap();
/// assert_eq!(config.endpoint(), "http://localhost:3000/api/receive-text");
/// assert!(config.image_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into))]
pub struct DeliveryConfig {
    /// Base URL of the avatar front-end
    #[builder(default = "DEFAULT_AVATAR_URL.to_string()")]
    base_url: String,
    /// Image shown next to the spoken text
    #[builder(default)]
    image_url: Option<String>,
    /// Image replacing the avatar's green-screen background
    #[builder(default)]
    background_image: Option<String>,
}

impl DeliveryConfig {
    /// Creates a new builder.
    pub fn builder() -> DeliveryConfigBuilder {
        DeliveryConfigBuilder::default()
    }

    /// Full URL of the text ingestion route.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            RECEIVE_TEXT_PATH
        )
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AVATAR_URL.to_string(),
            image_url: None,
            background_image: None,
        }
    }
}

/// Pacing of the driver loop.
///
/// # Examples
///
/// ```
/// use herald_core::ScheduleConfig;
/// use std::time::Duration;
///
/// let schedule = ScheduleConfig::default();
/// assert!(!schedule.continuous());
/// assert_eq!(schedule.interval(), Duration::from_secs(15));
/// assert_eq!(schedule.effective_rounds(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into))]
pub struct ScheduleConfig {
    /// Keep generating continuations after the opening segment
    #[builder(default)]
    #[getter(skip)]
    continuous: bool,
    /// Seconds to pause between rounds
    #[builder(default = "DEFAULT_INTERVAL_SECS")]
    interval_secs: u64,
    /// Total rounds in continuous mode, counting the opening one
    #[builder(default = "DEFAULT_ROUNDS")]
    rounds: u32,
}

impl ScheduleConfig {
    /// Creates a new builder.
    pub fn builder() -> ScheduleConfigBuilder {
        ScheduleConfigBuilder::default()
    }

    /// Whether continuation rounds follow the opening segment.
    pub fn continuous(&self) -> bool {
        self.continuous
    }

    /// Pause between rounds.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Round count actually performed; the opening round always happens.
    pub fn effective_rounds(&self) -> u32 {
        self.rounds.max(1)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            interval_secs: DEFAULT_INTERVAL_SECS,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

/// Everything one process invocation needs, fixed for its lifetime.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct HeraldConfig {
    /// Completion service settings
    generation: GenerationConfig,
    /// Avatar front-end settings
    delivery: DeliveryConfig,
    /// Loop pacing
    schedule: ScheduleConfig,
}

impl HeraldConfig {
    /// Groups the three sections.
    pub fn new(
        generation: GenerationConfig,
        delivery: DeliveryConfig,
        schedule: ScheduleConfig,
    ) -> Self {
        Self {
            generation,
            delivery,
            schedule,
        }
    }
}
