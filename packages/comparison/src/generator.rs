//! Text-generation abstraction.
//!
//! The pipeline depends only on [`TextGenerator`], so its correctness can
//! be exercised with the deterministic mock in [`crate::testing`] while
//! production wires in the OpenAI-backed implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GenerationError;

/// Options for a single generation request.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Model identifier (e.g. "gpt-4")
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Completion budget in tokens
    pub max_tokens: u32,

    /// Optional system message pinned before the prompt
    pub system: Option<String>,
}

impl GenerateOptions {
    /// Create options for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.7,
            max_tokens: 256,
            system: None,
        }
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set max tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the system message.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Narrow interface over a text-generation backend.
///
/// Implementations wrap a specific provider and handle transport details.
/// A whitespace-only completion must be reported as
/// [`GenerationError::EmptyCompletion`] rather than returned.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt.
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, GenerationError>;
}

#[async_trait]
impl<G: TextGenerator + ?Sized> TextGenerator for Arc<G> {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, GenerationError> {
        (**self).generate(prompt, options).await
    }
}
