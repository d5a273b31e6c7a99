//! OpenAI chat-completions client.

use super::conversion;
use super::dto::ChatResponse;
use async_trait::async_trait;
use herald_core::{ApiKey, GenerateRequest, GenerateResponse, GenerationConfig};
use herald_error::{HeraldResult, OpenAiError, OpenAiErrorKind, OpenAiResult};
use herald_interface::HeraldDriver;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Chat-completions client.
///
/// Issues exactly one request per `generate` call. There is no retry and no
/// timeout beyond the HTTP client's defaults.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: ApiKey,
    url: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a client from the generation settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn new(config: &GenerationConfig) -> OpenAiResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                OpenAiError::new(OpenAiErrorKind::Http(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        let url = format!(
            "{}/chat/completions",
            config.api_base().trim_end_matches('/')
        );
        debug!(url = %url, "Configured chat-completions endpoint");

        Ok(Self {
            client,
            api_key: config.api_key().clone(),
            url,
            model: config.model().clone(),
        })
    }

    /// Full URL requests are posted to.
    pub fn completions_url(&self) -> &str {
        &self.url
    }

    #[instrument(
        skip(self, req),
        fields(
            provider = "openai",
            model = %self.model,
            messages = req.messages.len(),
        )
    )]
    async fn chat(&self, req: &GenerateRequest) -> OpenAiResult<GenerateResponse> {
        let body = conversion::to_chat_request(req, &self.model)?;

        debug!(url = %self.url, "Sending chat-completions request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                OpenAiError::new(OpenAiErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = conversion::error_message(&error_text);
            warn!(
                status = status.as_u16(),
                message = %message,
                "Chat-completions request rejected"
            );
            return Err(OpenAiError::new(OpenAiErrorKind::from_status(
                status.as_u16(),
                message,
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            OpenAiError::new(OpenAiErrorKind::ResponseParsing(e.to_string()))
        })?;

        if let Some(usage) = parsed.usage() {
            debug!(
                prompt_tokens = usage.prompt_tokens(),
                completion_tokens = usage.completion_tokens(),
                "Token usage"
            );
        }

        conversion::from_chat_response(&parsed)
    }
}

#[async_trait]
impl HeraldDriver for OpenAiClient {
    async fn generate(&self, req: &GenerateRequest) -> HeraldResult<GenerateResponse> {
        self.chat(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
