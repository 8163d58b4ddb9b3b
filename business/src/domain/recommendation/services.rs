use async_trait::async_trait;

use super::errors::GenerationError;

/// Service port for the external text generation collaborator.
///
/// Takes a complete natural-language instruction and returns the model's raw
/// text, which is not guaranteed to be well-formed JSON.
#[async_trait]
pub trait TextGeneratorService: Send + Sync {
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError>;
}
