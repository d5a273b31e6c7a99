//! Completion service integrations for Herald.
//!
//! The only provider is an OpenAI-style chat-completions endpoint. Anything
//! that speaks the same wire format (a proxy, a local server) works by
//! pointing `api_base` at it.
//!
//! ```no_run
//! use herald_core::{ApiKey, GenerateRequest, GenerationConfig, Message};
//! use herald_interface::HeraldDriver;
//! use herald_models::OpenAiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GenerationConfig::builder()
//!     .api_key(ApiKey::from_env()?)
//!     .build()?;
//! let client = OpenAiClient::new(&config)?;
//! let request = GenerateRequest {
//!     messages: vec![Message::user("Hello")],
//!     ..Default::default()
//! };
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatChoice, ChatMessage, ChatMessageBuilder, ChatRequest, ChatRequestBuilder, ChatResponse,
    ChatResponseMessage, ChatRole, ChatUsage, OpenAiClient,
};
