//! Avatar delivery error types.

/// Why a segment did not reach the avatar front-end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DeliveryErrorKind {
    /// POST could not be completed
    #[display("Error sending to avatar: {}", _0)]
    Transport(String),
    /// Endpoint answered with something other than 200
    #[display("Failed to send to avatar: {} - {}", status, body)]
    Status {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Response body, possibly empty
        body: String,
    },
}

/// Delivery error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Delivery Error: {} at line {} in {}", kind, line, file)]
pub struct DeliveryError {
    /// The kind of error that occurred
    pub kind: DeliveryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DeliveryError {
    /// Create a new DeliveryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DeliveryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
