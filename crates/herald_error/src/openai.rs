//! Completion service error types.

/// Failure conditions of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OpenAiErrorKind {
    /// Request never produced a response (DNS, connect, TLS, body read)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Service answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or error message
        message: String,
    },
    /// Credential rejected (401/403)
    #[display("Unauthorized: {}", _0)]
    Unauthorized(String),
    /// Too many requests (429)
    #[display("Rate limit exceeded: {}", _0)]
    RateLimit(String),
    /// Response body was not the expected JSON shape
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
    /// Response contained no usable text
    #[display("Completion contained no text")]
    EmptyResponse,
    /// Wire request could not be assembled
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl OpenAiErrorKind {
    /// Classify a non-success HTTP status from the completion service.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Unauthorized(message),
            429 => Self::RateLimit(message),
            _ => Self::Api { status, message },
        }
    }
}

/// Completion service error with source location tracking.
///
/// # Examples
///
/// ```
/// use herald_error::{OpenAiError, OpenAiErrorKind};
///
/// let err = OpenAiError::new(OpenAiErrorKind::from_status(429, "slow down"));
/// assert!(format!("{}", err).contains("Rate limit"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("OpenAI Error: {} at line {} in {}", kind, line, file)]
pub struct OpenAiError {
    /// The kind of error that occurred
    pub kind: OpenAiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OpenAiError {
    /// Create a new OpenAiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OpenAiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for completion service operations.
pub type OpenAiResult<T> = Result<T, OpenAiError>;
