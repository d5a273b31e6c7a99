//! Outcome of one generation.

use herald_error::HeraldError;

/// A narrative segment, tagged with whether it came from the model.
///
/// Both variants are valid segments: they are delivered the same way and
/// either can seed the next continuation.
#[derive(Debug)]
pub enum Generation {
    /// Text produced by the completion service.
    Success(String),
    /// Fixed apology substituted after a failed request.
    Fallback {
        /// The substituted segment
        text: String,
        /// Why the request failed
        cause: HeraldError,
    },
}

impl Generation {
    /// The segment text, whichever variant.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) => text,
            Self::Fallback { text, .. } => text,
        }
    }

    /// Consumes the outcome, keeping only the segment.
    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::Fallback { text, .. } => text,
        }
    }

    /// Whether the segment is a substitute.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Failure behind a fallback.
    pub fn cause(&self) -> Option<&HeraldError> {
        match self {
            Self::Success(_) => None,
            Self::Fallback { cause, .. } => Some(cause),
        }
    }
}
