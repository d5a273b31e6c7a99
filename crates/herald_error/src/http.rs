//! HTTP client setup errors.

/// Failure to set up an HTTP client, e.g. the avatar client's `reqwest`
/// builder rejecting its TLS or user-agent settings.
///
/// The bundled clients report failed requests as
/// [`OpenAiError`](crate::OpenAiError) or [`DeliveryError`](crate::DeliveryError);
/// custom drivers and sinks may use this for transport failures.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// What went wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Records a client setup failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use herald_error::{HeraldError, HeraldErrorKind, HttpError};
    ///
    /// let err: HeraldError = HttpError::new("Failed to build HTTP client: no TLS backend").into();
    /// assert!(matches!(err.kind(), HeraldErrorKind::Http(_)));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
