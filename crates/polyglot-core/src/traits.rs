use crate::error::PolyglotError;
use async_trait::async_trait;

/// Machine translation backend.
///
/// Every translation service (Google web endpoint, Cloud Translation API)
/// implements this trait so the batch can run against either one.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider requires an API key to function.
    fn requires_api_key(&self) -> bool;

    /// Translate `text` from `source` to `target`, both external language codes.
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, PolyglotError>;

    /// Check if the provider is configured and usable.
    async fn is_available(&self) -> bool;
}
