//! Trait definitions for completion backends and delivery targets.

use async_trait::async_trait;
use herald_core::{GenerateRequest, GenerateResponse};
use herald_error::HeraldResult;

/// Core trait that every completion backend implements.
#[async_trait]
pub trait HeraldDriver: Send + Sync {
    /// Generate model output for a role-tagged conversation.
    async fn generate(&self, req: &GenerateRequest) -> HeraldResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4").
    fn model_name(&self) -> &str;
}

/// Destination for finished narrative segments.
///
/// Implementations swallow their own failures: the only signal a caller
/// gets is the returned flag, and the detail goes to the log.
#[async_trait]
pub trait SegmentSink: Send + Sync {
    /// Deliver one segment. `true` only when the target accepted it.
    async fn deliver(&self, segment: &str) -> bool;

    /// Human-readable target, used in log lines.
    fn endpoint(&self) -> &str;
}
