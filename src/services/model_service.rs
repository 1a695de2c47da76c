use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::Config;
use crate::constants::prompts::{GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE, SYSTEM_PROMPT};
use crate::errors::GenerationError;
use crate::services::generation_client::GenerationClient;

/// In-process backend: calls the OpenAI chat-completion API directly.
///
/// Construction succeeds without a credential so a keyless server still
/// boots and answers diagnostics; calls then fail with `MissingCredential`.
pub struct ModelService {
    client: Client<OpenAIConfig>,
    has_key: bool,
}

impl ModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = match &config.openai_api_key {
            Some(key) => OpenAIConfig::new().with_api_key(key.expose_secret()),
            None => OpenAIConfig::new(),
        };
        Self {
            client: Client::with_config(openai_config),
            has_key: config.has_api_key(),
        }
    }

    /// One chat-completion round trip. Returns the raw message content,
    /// defaulting to `"[]"` when the upstream response carries none.
    pub async fn chat_completion(
        &self,
        prompt: &str,
        model: &str,
    ) -> Result<String, GenerationError> {
        if !self.has_key {
            return Err(GenerationError::MissingCredential);
        }

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .temperature(GENERATION_TEMPERATURE)
            .max_tokens(GENERATION_MAX_TOKENS)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()
                    .map_err(to_generation_error)?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()
                    .map_err(to_generation_error)?
                    .into(),
            ])
            .build()
            .map_err(to_generation_error)?;

        log::debug!("requesting chat completion from model {}", model);
        let completion = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(to_generation_error)?;

        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_else(|| "[]".to_string());
        Ok(content)
    }
}

fn to_generation_error(err: OpenAIError) -> GenerationError {
    GenerationError::transport(err.to_string())
}

#[async_trait]
impl GenerationClient for ModelService {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError> {
        self.chat_completion(prompt, model).await
    }
}
