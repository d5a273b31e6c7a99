//! JSON body of the text ingestion route.

use serde::{Deserialize, Serialize};

/// One delivery: the text to speak plus optional visuals.
///
/// Optional fields are omitted from the JSON when absent, never sent as `null`.
///
/// # Examples
///
/// ```
/// use herald_avatar::DeliveryPayload;
///
/// let payload = DeliveryPayload::new("Hello world.", None, Some(""));
/// assert!(payload.background_image.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPayload {
    /// Text for the avatar to speak
    pub text: String,
    /// Image shown alongside the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Image replacing the green-screen background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl DeliveryPayload {
    /// Builds a payload; empty image references count as absent.
    pub fn new(
        text: impl Into<String>,
        image_url: Option<&str>,
        background_image: Option<&str>,
    ) -> Self {
        Self {
            text: text.into(),
            image_url: non_empty(image_url),
            background_image: non_empty(background_image),
        }
    }

    /// Log line reported after a successful delivery.
    pub fn success_message(&self) -> String {
        let mut message = String::from("Successfully sent text");
        if self.image_url.is_some() {
            message.push_str(" and image");
        }
        if self.background_image.is_some() {
            message.push_str(" with custom background");
        }
        message.push_str(" to avatar");
        message
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
