//! [`TextGenerator`] backed by the OpenAI chat completions API.

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAiClient, OpenAiError};

use crate::error::GenerationError;
use crate::generator::{GenerateOptions, TextGenerator};

/// Text generator calling OpenAI chat completions.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: OpenAiClient,
}

impl OpenAiGenerator {
    /// Wrap a configured client.
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    /// Client configured from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, GenerationError> {
        let client = OpenAiClient::from_env().map_err(map_error)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, GenerationError> {
        let mut request = ChatRequest::new(options.model.as_str())
            .temperature(options.temperature)
            .max_tokens(options.max_tokens);
        if let Some(system) = &options.system {
            request = request.message(Message::system(system.as_str()));
        }
        request = request.message(Message::user(prompt));

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(map_error)?;

        let content = response.content.trim();
        if content.is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }
        Ok(content.to_string())
    }
}

fn map_error(error: OpenAiError) -> GenerationError {
    match error {
        OpenAiError::Timeout(message) | OpenAiError::Network(message) => {
            GenerationError::Network(message)
        }
        OpenAiError::Api { status, message } => {
            GenerationError::Api(format!("status {}: {}", status, message))
        }
        OpenAiError::Config(message) | OpenAiError::Parse(message) => {
            GenerationError::Api(message)
        }
    }
}
