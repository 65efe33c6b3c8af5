//! The design model collaborator.

use async_trait::async_trait;
use pixelforge_core::{GeneratedArtifact, GenerationSettings};
use thiserror::Error;

/// Failure reported by a [`DesignModel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("API key is missing. Set it in pixelforge.toml or the PIXELFORGE_API_KEY environment variable.")]
    MissingApiKey,

    #[error("Model request failed: {0}")]
    Request(String),

    #[error("Model returned no code")]
    EmptyResponse,
}

/// A model that turns design images into code and edits code on request.
///
/// Implementations own transport, prompting and response parsing. A rejected
/// call means no code is available; callers keep their previous state.
#[async_trait]
pub trait DesignModel: Send + Sync {
    /// Generate code and design tokens from an image given as a data URL.
    async fn generate(
        &self,
        image_data_url: &str,
        settings: &GenerationSettings,
    ) -> Result<GeneratedArtifact, ModelError>;

    /// Apply a natural-language instruction to existing code.
    async fn refine(
        &self,
        code: &str,
        instruction: &str,
        settings: &GenerationSettings,
    ) -> Result<String, ModelError>;
}
