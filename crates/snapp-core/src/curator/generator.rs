//! The text-generation seam used by the curator.

use crate::error::Result;

/// Something that turns a prompt into model text.
///
/// Implementations should map transport failures to
/// [`SnappError::Curator`](crate::error::SnappError::Curator), marking
/// transient ones as retryable.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` and returns the raw text of the first candidate.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Short label used in logs.
    fn name(&self) -> &str;
}
