//! The generative fallback answerer.
//!
//! Unclassified questions go to a generative model wrapped in a fixed
//! space-expert prompt. When no model is configured the [`StaticAnswerer`]
//! stands in, so the dispatcher never branches on whether AI is enabled.
//! Model failures of any kind end in a draw from the general fact pool.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use vyomnetra_core::error::ProviderError;
use vyomnetra_core::facts::GENERAL_FACTS;
use vyomnetra_core::provider::{Provider, ProviderRequest};

/// Answers free-form questions that matched no topic.
#[async_trait]
pub trait Answerer: Send + Sync {
    /// Whether a generative model backs this answerer.
    fn is_enabled(&self) -> bool;

    /// Produce answer text. Never fails.
    async fn answer(&self, message: &str) -> String;
}

/// Embed the user message in the space-expert instruction prompt.
pub fn build_prompt(message: &str) -> String {
    format!(
        "You are VyomNetra, an expert space and astronomy chatbot. Answer this question about space, \
         astronomy, constellations, planets, or any space-related topic with accurate, engaging \
         information. Keep your response informative but friendly, include relevant emojis, and make \
         it educational.\n\n\
         User question: {message}\n\n\
         Please provide a detailed, accurate answer about the space topic they're asking about. If \
         it's about a constellation, include information about its stars, mythology, and how to find \
         it. If it's about planets, include facts about their characteristics and any NASA missions. \
         Make it interesting and educational!"
    )
}

/// Null object: AI disabled, always answers from the general pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticAnswerer;

#[async_trait]
impl Answerer for StaticAnswerer {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn answer(&self, _message: &str) -> String {
        GENERAL_FACTS.draw().to_string()
    }
}

/// Answers through a generative model, once, under a timeout.
pub struct ModelAnswerer {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl ModelAnswerer {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
            timeout,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    async fn ask(&self, message: &str) -> Result<String, ProviderError> {
        let request = ProviderRequest {
            temperature: self.temperature,
            ..ProviderRequest::new(&self.model, build_prompt(message))
        };

        let response = tokio::time::timeout(self.timeout, self.provider.complete(request))
            .await
            .map_err(|_| {
                ProviderError::Timeout(format!(
                    "Provider '{}' timed out after {}s",
                    self.provider.name(),
                    self.timeout.as_secs()
                ))
            })??;

        if response.text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        if let Some(usage) = &response.usage {
            debug!(
                model = %response.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Model answered"
            );
        }
        Ok(response.text)
    }
}

#[async_trait]
impl Answerer for ModelAnswerer {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn answer(&self, message: &str) -> String {
        debug!(provider = %self.provider.name(), model = %self.model, "Asking model");
        match self.ask(message).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    provider = %self.provider.name(),
                    error = %e,
                    "Model answer failed, using a general space fact"
                );
                GENERAL_FACTS.draw().to_string()
            }
        }
    }
}
