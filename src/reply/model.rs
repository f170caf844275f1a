use async_trait::async_trait;

use super::ModelError;

/// A hosted text model: one prompt in, one reply out.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Model identifier, used in diagnostics.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
