//! Narrative generator: one completion request per segment.

use crate::{ConversationSeed, Generation};
use herald_core::{GenerateRequest, GenerationConfig};
use herald_error::{HeraldError, OpenAiError, OpenAiErrorKind};
use herald_interface::HeraldDriver;
use tracing::{debug, error, info, instrument};

/// Builds prompts from a seed and asks the completion service for a segment.
///
/// Never fails: any error from the driver becomes a [`Generation::Fallback`].
pub struct NarrativeGenerator<D: HeraldDriver> {
    driver: D,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl<D: HeraldDriver> NarrativeGenerator<D> {
    /// Creates a generator sampling with the given settings.
    pub fn new(driver: D, config: &GenerationConfig) -> Self {
        Self {
            driver,
            model: config.model().clone(),
            max_tokens: *config.max_tokens(),
            temperature: *config.temperature(),
        }
    }

    /// The underlying completion backend.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Completion request for a seed.
    pub fn request_for(&self, seed: &ConversationSeed) -> GenerateRequest {
        GenerateRequest {
            messages: seed.messages(),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            model: Some(self.model.clone()),
        }
    }

    /// Produces the next segment.
    #[instrument(
        skip(self, seed),
        fields(
            seed = %seed,
            provider = self.driver.provider_name(),
            model = %self.model,
        )
    )]
    pub async fn generate(&self, seed: &ConversationSeed) -> Generation {
        let request = self.request_for(seed);
        debug!(
            messages = request.messages.len(),
            "Requesting narrative segment"
        );

        match self.driver.generate(&request).await {
            Ok(response) => {
                let text = response.text();
                if text.trim().is_empty() {
                    let cause = OpenAiError::new(OpenAiErrorKind::EmptyResponse);
                    Self::fallback(seed, cause.into())
                } else {
                    info!(chars = text.len(), "Narrative generated");
                    Generation::Success(text)
                }
            }
            Err(e) => Self::fallback(seed, e),
        }
    }

    fn fallback(seed: &ConversationSeed, cause: HeraldError) -> Generation {
        error!(error = %cause, "Error generating {}", seed);
        Generation::Fallback {
            text: seed.fallback().to_string(),
            cause,
        }
    }
}
