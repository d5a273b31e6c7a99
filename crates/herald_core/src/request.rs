//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Provider-neutral completion request.
///
/// # Examples
///
/// ```
/// use herald_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello!")],
///     max_tokens: Some(150),
///     temperature: Some(0.7),
///     model: Some("gpt-4".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(150));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

/// Pieces of a completion the service can hand back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Generated text.
    Text(String),
    /// The model declined to answer; carries its explanation.
    Refusal(String),
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use herald_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("Good evening.".to_string())],
/// };
///
/// assert_eq!(response.text(), "Good evening.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenated text outputs; refusals are skipped.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                Output::Text(text) => Some(text.as_str()),
                Output::Refusal(_) => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}
