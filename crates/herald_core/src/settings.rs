//! Optional TOML settings file and flag overlay.
//!
//! Values resolve in three layers: command-line flags over the settings file
//! over built-in defaults. The credential never comes from this file.

use crate::{ApiKey, DeliveryConfig, GenerationConfig, HeraldConfig, ScheduleConfig};
use herald_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// `[generation]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSettings {
    /// Chat-completions API root
    pub api_base: Option<String>,
    /// Model identifier
    pub model: Option<String>,
    /// Completion length budget
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

/// `[delivery]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeliverySettings {
    /// Avatar front-end base URL
    pub url: Option<String>,
    /// Image shown with the text
    pub image: Option<String>,
    /// Background replacement image
    pub background: Option<String>,
}

/// `[schedule]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleSettings {
    /// Run continuation rounds
    pub continuous: Option<bool>,
    /// Seconds between rounds
    pub interval_secs: Option<u64>,
    /// Total rounds in continuous mode
    pub rounds: Option<u32>,
}

/// Partially specified configuration.
///
/// # Examples
///
/// ```
/// use herald_core::HeraldSettings;
///
/// let file: HeraldSettings = r#"
///     [delivery]
///     url = "http://avatar.local:3000"
///
///     [schedule]
///     rounds = 3
/// "#.parse().unwrap();
///
/// let mut flags = HeraldSettings::default();
/// flags.schedule.rounds = Some(5);
///
/// let merged = file.overlay(flags);
/// assert_eq!(merged.schedule.rounds, Some(5));
/// assert_eq!(merged.delivery.url.as_deref(), Some("http://avatar.local:3000"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeraldSettings {
    /// Completion service settings
    #[serde(default)]
    pub generation: GenerationSettings,
    /// Avatar front-end settings
    #[serde(default)]
    pub delivery: DeliverySettings,
    /// Loop pacing
    #[serde(default)]
    pub schedule: ScheduleSettings,
}

impl FromStr for HeraldSettings {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }
}

impl HeraldSettings {
    /// Load settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;
        content.parse()
    }

    /// Layers `over` on top of `self`; any value set in `over` wins.
    pub fn overlay(self, over: HeraldSettings) -> HeraldSettings {
        HeraldSettings {
            generation: GenerationSettings {
                api_base: over.generation.api_base.or(self.generation.api_base),
                model: over.generation.model.or(self.generation.model),
                max_tokens: over.generation.max_tokens.or(self.generation.max_tokens),
                temperature: over.generation.temperature.or(self.generation.temperature),
            },
            delivery: DeliverySettings {
                url: over.delivery.url.or(self.delivery.url),
                image: over.delivery.image.or(self.delivery.image),
                background: over.delivery.background.or(self.delivery.background),
            },
            schedule: ScheduleSettings {
                continuous: over.schedule.continuous.or(self.schedule.continuous),
                interval_secs: over.schedule.interval_secs.or(self.schedule.interval_secs),
                rounds: over.schedule.rounds.or(self.schedule.rounds),
            },
        }
    }

    /// Fills the gaps with defaults and validates the result.
    pub fn into_config(self, api_key: ApiKey) -> Result<HeraldConfig, ConfigError> {
        let mut generation = GenerationConfig::builder();
        generation.api_key(api_key);
        if let Some(api_base) = self.generation.api_base {
            generation.api_base(api_base);
        }
        if let Some(model) = self.generation.model {
            generation.model(model);
        }
        if let Some(max_tokens) = self.generation.max_tokens {
            generation.max_tokens(max_tokens);
        }
        if let Some(temperature) = self.generation.temperature {
            generation.temperature(temperature);
        }
        let generation = generation
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid generation settings: {}", e)))?;

        let mut delivery = DeliveryConfig::builder();
        if let Some(url) = self.delivery.url {
            delivery.base_url(url);
        }
        let delivery = delivery
            .image_url(self.delivery.image)
            .background_image(self.delivery.background)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid delivery settings: {}", e)))?;

        let mut schedule = ScheduleConfig::builder();
        if let Some(continuous) = self.schedule.continuous {
            schedule.continuous(continuous);
        }
        if let Some(interval_secs) = self.schedule.interval_secs {
            schedule.interval_secs(interval_secs);
        }
        if let Some(rounds) = self.schedule.rounds {
            schedule.rounds(rounds);
        }
        let schedule = schedule
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid schedule settings: {}", e)))?;

        Ok(HeraldConfig::new(generation, delivery, schedule))
    }
}
