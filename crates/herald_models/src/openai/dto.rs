//! Chat-completions wire types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Message role as spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// One message in the request conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// Message role
    role: ChatRole,
    /// Message content
    content: String,
}

impl ChatMessage {
    /// Creates a new builder for `ChatMessage`.
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::default()
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation so far
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl ChatRequest {
    /// Creates a new builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// Assistant message inside a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatResponseMessage {
    /// Generated text, absent when the model refused
    #[serde(default)]
    content: Option<String>,
    /// Refusal explanation
    #[serde(default)]
    refusal: Option<String>,
}

/// One candidate completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// The generated message
    message: ChatResponseMessage,
    /// Why generation stopped ("stop", "length", ...)
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token accounting reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatUsage {
    /// Prompt tokens consumed
    #[serde(default)]
    prompt_tokens: u32,
    /// Completion tokens generated
    #[serde(default)]
    completion_tokens: u32,
}

/// Response body of `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ChatResponse {
    /// Candidate completions; herald only reads the first
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Token usage, when reported
    #[serde(default)]
    usage: Option<ChatUsage>,
}

/// Error envelope the service returns with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub(crate) message: String,
}
