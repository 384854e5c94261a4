//! Build the answerer from configuration.
//!
//! A model credential selects the Gemini-backed [`ModelAnswerer`]; its
//! absence (or a failure to set the client up) selects [`StaticAnswerer`].

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use vyomnetra_config::ModelConfig;

use crate::fallback::{Answerer, ModelAnswerer, StaticAnswerer};
use crate::gemini::GeminiProvider;

pub fn build_from_config(config: &ModelConfig) -> Arc<dyn Answerer> {
    let Some(api_key) = config.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        info!("No model API key found, answering general questions from static facts");
        return Arc::new(StaticAnswerer);
    };

    let timeout = Duration::from_secs(config.timeout_secs);
    match GeminiProvider::new(api_key, timeout) {
        Ok(provider) => {
            let provider = match &config.api_url {
                Some(url) => provider.with_base_url(url),
                None => provider,
            };
            info!(model = %config.model, "Gemini model enabled for general questions");
            Arc::new(
                ModelAnswerer::new(Arc::new(provider), &config.model, timeout)
                    .with_temperature(config.temperature),
            )
        }
        Err(e) => {
            warn!(error = %e, "Gemini setup failed, answering from static facts");
            Arc::new(StaticAnswerer)
        }
    }
}
