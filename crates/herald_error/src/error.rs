//! Top-level error wrapper types.

use crate::{ConfigError, DeliveryError, HttpError, JsonError, OpenAiError};

/// Every failure the herald crates can produce.
///
/// # Examples
///
/// ```
/// use herald_error::{HeraldErrorKind, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: HeraldErrorKind = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HeraldErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Completion service error
    #[from(OpenAiError)]
    OpenAi(OpenAiError),
    /// Avatar delivery error
    #[from(DeliveryError)]
    Delivery(DeliveryError),
}

/// Herald error with kind discrimination.
///
/// # Examples
///
/// ```
/// use herald_error::{ConfigError, HeraldResult};
///
/// fn might_fail() -> HeraldResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Herald Error: {}", _0)]
pub struct HeraldError(Box<HeraldErrorKind>);

impl HeraldError {
    /// Create a new error from a kind.
    pub fn new(kind: HeraldErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HeraldErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HeraldErrorKind
impl<T> From<T> for HeraldError
where
    T: Into<HeraldErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for herald operations.
pub type HeraldResult<T> = std::result::Result<T, HeraldError>;
