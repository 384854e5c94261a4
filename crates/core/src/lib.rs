//! # VyomNetra Core
//!
//! Domain types and traits for the VyomNetra space chatbot.
//! This crate performs **no I/O**. It defines the topic classifier,
//! the static fact pools, and the seams (provider trait, error taxonomy)
//! that the fetcher, provider, and dispatch crates implement against.
//!
//! ## Request flow
//!
//! raw text → [`classify`] picks a [`Topic`] → the dispatcher routes to a
//! live source, a fact pool, or the generative model → one text answer.

pub mod error;
pub mod exchange;
pub mod facts;
pub mod provider;
pub mod topic;

// Re-export key types at crate root for ergonomics
pub use error::{Error, FetchError, ProviderError, Result};
pub use exchange::ChatExchange;
pub use facts::{FactEntry, KeyedPool, RandomPool};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use topic::{Topic, classify};
