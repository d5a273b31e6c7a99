//! Type conversions between herald and chat-completions types.

use super::dto::{ApiErrorBody, ChatMessage, ChatRequest, ChatResponse, ChatRole};
use herald_core::{GenerateRequest, GenerateResponse, Message, Output, Role};
use herald_error::{OpenAiError, OpenAiErrorKind, OpenAiResult};

/// Converts a herald request to the wire request, filling in the model.
pub fn to_chat_request(
    request: &GenerateRequest,
    default_model: &str,
) -> OpenAiResult<ChatRequest> {
    let messages = request
        .messages
        .iter()
        .map(to_chat_message)
        .collect::<OpenAiResult<Vec<_>>>()?;

    let model = request
        .model
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    ChatRequest::builder()
        .model(model)
        .messages(messages)
        .max_tokens(request.max_tokens)
        .temperature(request.temperature)
        .build()
        .map_err(|e| {
            OpenAiError::new(OpenAiErrorKind::Builder(format!(
                "Failed to build chat request: {}",
                e
            )))
        })
}

fn to_chat_message(message: &Message) -> OpenAiResult<ChatMessage> {
    ChatMessage::builder()
        .role(to_chat_role(message.role))
        .content(message.content.clone())
        .build()
        .map_err(|e| {
            OpenAiError::new(OpenAiErrorKind::Builder(format!(
                "Failed to build chat message: {}",
                e
            )))
        })
}

fn to_chat_role(role: Role) -> ChatRole {
    match role {
        Role::System => ChatRole::System,
        Role::User => ChatRole::User,
        Role::Assistant => ChatRole::Assistant,
    }
}

/// Reads the first choice of a wire response.
pub fn from_chat_response(response: &ChatResponse) -> OpenAiResult<GenerateResponse> {
    let choice = response
        .choices()
        .first()
        .ok_or_else(|| OpenAiError::new(OpenAiErrorKind::EmptyResponse))?;

    let message = choice.message();
    let mut outputs = Vec::new();
    if let Some(content) = message.content() {
        outputs.push(Output::Text(content.clone()));
    }
    if let Some(refusal) = message.refusal() {
        outputs.push(Output::Refusal(refusal.clone()));
    }

    if outputs.is_empty() {
        return Err(OpenAiError::new(OpenAiErrorKind::EmptyResponse));
    }

    Ok(GenerateResponse { outputs })
}

/// Extracts the service's error message from a failure body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.to_string())
}
