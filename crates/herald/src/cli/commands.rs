//! CLI flag definitions.

use clap::Parser;
use herald::{DeliverySettings, GenerationSettings, HeraldSettings, ScheduleSettings};
use std::path::PathBuf;

/// Herald - LLM news narrator for a talking-avatar front-end
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(about = "Narrate the news through a talking avatar", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the avatar front-end [default: http://localhost:3000]
    #[arg(long)]
    pub url: Option<String>,

    /// Keep narrating after the opening segment
    #[arg(long)]
    pub continuous: bool,

    /// Seconds between segments in continuous mode [default: 15]
    #[arg(long)]
    pub interval: Option<u64>,

    /// Segments to narrate in continuous mode [default: 10]
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Image URL to display with the text
    #[arg(long)]
    pub image: Option<String>,

    /// Background image URL for the avatar
    #[arg(long)]
    pub background: Option<String>,

    /// Chat-completions model [default: gpt-4]
    #[arg(long)]
    pub model: Option<String>,

    /// TOML file of `[[topics]]` replacing the built-in news topics
    #[arg(long)]
    pub topics: Option<PathBuf>,

    /// TOML settings file; flags take precedence over its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs and the final report as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Settings given on the command line; unset flags stay `None`.
    pub fn settings(&self) -> HeraldSettings {
        HeraldSettings {
            generation: GenerationSettings {
                model: self.model.clone(),
                ..Default::default()
            },
            delivery: DeliverySettings {
                url: self.url.clone(),
                image: self.image.clone(),
                background: self.background.clone(),
            },
            schedule: ScheduleSettings {
                continuous: self.continuous.then_some(true),
                interval_secs: self.interval,
                rounds: self.rounds,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_leaves_settings_empty() {
        let cli = Cli::try_parse_from(["herald"]).expect("parse");
        assert_eq!(cli.settings(), HeraldSettings::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_map_to_settings() {
        let cli = Cli::try_parse_from([
            "herald",
            "--url",
            "http://avatar.local:8080",
            "--continuous",
            "--interval",
            "5",
            "--rounds",
            "3",
            "--image",
            "https://example.com/chart.png",
            "--background",
            "https://example.com/studio.jpg",
            "--model",
            "gpt-4o-mini",
        ])
        .expect("parse");

        let settings = cli.settings();
        assert_eq!(
            settings.delivery.url.as_deref(),
            Some("http://avatar.local:8080")
        );
        assert_eq!(
            settings.delivery.image.as_deref(),
            Some("https://example.com/chart.png")
        );
        assert_eq!(
            settings.delivery.background.as_deref(),
            Some("https://example.com/studio.jpg")
        );
        assert_eq!(settings.generation.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(settings.schedule.continuous, Some(true));
        assert_eq!(settings.schedule.interval_secs, Some(5));
        assert_eq!(settings.schedule.rounds, Some(3));
    }

    #[test]
    fn test_rejects_non_numeric_interval() {
        let result = Cli::try_parse_from(["herald", "--interval", "soon"]);
        assert!(result.is_err());
    }
}
