//! Generative model integration for VyomNetra.
//!
//! [`GeminiProvider`] implements `vyomnetra_core::Provider` over the Gemini
//! REST API. The [`Answerer`] trait is what the dispatcher sees: a
//! [`ModelAnswerer`] when a credential is configured, otherwise the
//! [`StaticAnswerer`] null object that always answers from the general
//! fact pool.

pub mod builder;
pub mod fallback;
pub mod gemini;

pub use builder::build_from_config;
pub use fallback::{Answerer, ModelAnswerer, StaticAnswerer, build_prompt};
pub use gemini::GeminiProvider;
