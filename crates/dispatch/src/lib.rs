//! The single entry point of the chatbot core.
//!
//! [`Dispatcher::respond`] classifies a message, routes it to one live
//! feed, fact pool, or the generative answerer, and always returns text.
//! Feed and model failures are absorbed by the components themselves;
//! anything that still escapes (a panic) is turned into an apology here.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info};

use vyomnetra_config::AppConfig;
use vyomnetra_core::facts::{AGENCY_FACTS, CONSTELLATIONS, GALAXIES, MARS_ROVER_FACTS, PLANETS, STARS};
use vyomnetra_core::{ChatExchange, Error, Topic, classify};
use vyomnetra_providers::Answerer;
use vyomnetra_sources::Sources;

/// Build the last-resort reply, naming what went wrong.
pub fn degraded_response(detail: &str) -> String {
    format!(
        "I'm having trouble connecting to space agencies right now, but here's an interesting \
         space fact: The universe is about 13.8 billion years old and contains over 2 trillion \
         galaxies! 🌌 Error details: {detail}"
    )
}

/// Routes classified messages to the component that answers them.
#[derive(Clone)]
pub struct Dispatcher {
    sources: Sources,
    answerer: Arc<dyn Answerer>,
}

impl Dispatcher {
    pub fn new(sources: Sources, answerer: Arc<dyn Answerer>) -> Self {
        Self { sources, answerer }
    }

    /// Wire the live feeds and the answerer from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let sources = Sources::from_config(&config.sources)?;
        let answerer = vyomnetra_providers::build_from_config(&config.model);
        Ok(Self::new(sources, answerer))
    }

    /// Whether general questions go to a generative model.
    pub fn ai_enabled(&self) -> bool {
        self.answerer.is_enabled()
    }

    /// Answer one message. Never fails and never returns empty text.
    pub async fn respond(&self, message: &str) -> ChatExchange {
        let outcome = AssertUnwindSafe(self.answer(message)).catch_unwind().await;

        let (topic, response) = match outcome {
            Ok((topic, text)) if !text.is_empty() => (topic, text),
            Ok((topic, _)) => {
                error!(%topic, "Empty answer produced");
                (topic, degraded_response("no answer was produced"))
            }
            Err(panic) => {
                let detail = panic_message(panic.as_ref());
                error!(error = %detail, "Dispatch panicked");
                (Topic::General, degraded_response(&detail))
            }
        };

        ChatExchange::new(message, topic, response)
    }

    async fn answer(&self, message: &str) -> (Topic, String) {
        let topic = classify(message);
        info!(%topic, message_len = message.len(), "Routing message");
        let text = self.route(topic, message).await;
        (topic, text)
    }

    async fn route(&self, topic: Topic, message: &str) -> String {
        match topic {
            Topic::PictureOfDay => self.sources.picture_of_day().await,
            Topic::NearEarthObject => self.sources.near_earth_objects().await,
            Topic::Launch => self.sources.latest_launch().await,
            // No live feed exists for these two; they are always static.
            Topic::MarsRover => MARS_ROVER_FACTS.draw().to_string(),
            Topic::AgencyTrivia => AGENCY_FACTS.draw().to_string(),
            Topic::Constellation => CONSTELLATIONS.lookup(message).to_string(),
            Topic::Planet => PLANETS.lookup(message).to_string(),
            Topic::Star => STARS.lookup(message).to_string(),
            Topic::Galaxy => GALAXIES.lookup(message).to_string(),
            Topic::General => self.answerer.answer(message).await,
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unexpected internal failure".into())
}
