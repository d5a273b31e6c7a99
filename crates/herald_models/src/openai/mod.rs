//! OpenAI chat-completions integration.

mod client;
mod conversion;
mod dto;

pub use client::OpenAiClient;
pub use dto::{
    ChatChoice, ChatMessage, ChatMessageBuilder, ChatRequest, ChatRequestBuilder, ChatResponse,
    ChatResponseMessage, ChatRole, ChatUsage,
};
