//! HTTP client for the avatar front-end's text ingestion route.

use crate::DeliveryPayload;
use async_trait::async_trait;
use herald_core::DeliveryConfig;
use herald_error::{DeliveryError, DeliveryErrorKind, HeraldResult, HttpError};
use herald_interface::SegmentSink;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument};

/// Posts segments to `{base_url}/api/receive-text`.
///
/// One POST per delivery; no retry, queuing or batching. Only a 200
/// response counts as delivered.
#[derive(Debug, Clone)]
pub struct AvatarClient {
    client: Client,
    endpoint: String,
    image_url: Option<String>,
    background_image: Option<String>,
}

impl AvatarClient {
    /// Creates a client for the configured front-end.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DeliveryConfig) -> HeraldResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            image_url: config.image_url().clone(),
            background_image: config.background_image().clone(),
        })
    }

    /// Payload for a segment, carrying the configured visuals.
    pub fn payload(&self, text: &str) -> DeliveryPayload {
        DeliveryPayload::new(
            text,
            self.image_url.as_deref(),
            self.background_image.as_deref(),
        )
    }

    /// Performs the POST, reporting why it failed.
    #[instrument(
        skip(self, payload),
        fields(endpoint = %self.endpoint, chars = payload.text.len())
    )]
    pub async fn send(&self, payload: &DeliveryPayload) -> HeraldResult<()> {
        debug!("Posting segment to avatar");

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| DeliveryError::new(DeliveryErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::new(DeliveryErrorKind::Status {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        Ok(())
    }
}

#[async_trait]
impl SegmentSink for AvatarClient {
    async fn deliver(&self, segment: &str) -> bool {
        let payload = self.payload(segment);
        match self.send(&payload).await {
            Ok(()) => {
                info!("{}", payload.success_message());
                true
            }
            Err(e) => {
                error!(error = %e, endpoint = %self.endpoint, "Delivery to avatar failed");
                false
            }
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
