//! Live space data feeds for VyomNetra.
//!
//! Each feed implements [`LiveSource`]: one GET with a bounded timeout
//! and a text template over a fixed response shape. [`fetch_with_fallback`]
//! owns the failure policy for all of them. There are no retries; any
//! failure is answered from the feed's static fact pool.

pub mod apod;
pub mod client;
pub mod launch;
pub mod neo;

pub use apod::ApodSource;
pub use client::{LiveSource, build_client, fetch_with_fallback};
pub use launch::LaunchSource;
pub use neo::NeoSource;

use std::sync::Arc;
use std::time::Duration;

use vyomnetra_config::SourcesConfig;
use vyomnetra_core::FetchError;

/// The three live feeds plus the shared timeout.
#[derive(Clone)]
pub struct Sources {
    apod: Arc<dyn LiveSource>,
    neo: Arc<dyn LiveSource>,
    launch: Arc<dyn LiveSource>,
    timeout: Duration,
}

impl Sources {
    pub fn new(
        apod: Arc<dyn LiveSource>,
        neo: Arc<dyn LiveSource>,
        launch: Arc<dyn LiveSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            apod,
            neo,
            launch,
            timeout,
        }
    }

    /// Build the real HTTP feeds from configuration, sharing one client.
    pub fn from_config(config: &SourcesConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = build_client(timeout)?;

        Ok(Self::new(
            Arc::new(ApodSource::new(
                client.clone(),
                &config.apod_url,
                &config.nasa_api_key,
            )),
            Arc::new(NeoSource::new(
                client.clone(),
                &config.neo_url,
                &config.nasa_api_key,
            )),
            Arc::new(LaunchSource::new(client, &config.launch_url)),
            timeout,
        ))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Astronomy picture of the day, or an APOD fact.
    pub async fn picture_of_day(&self) -> String {
        fetch_with_fallback(self.apod.as_ref(), self.timeout).await
    }

    /// Today's featured near-Earth object, or a NEO fact.
    pub async fn near_earth_objects(&self) -> String {
        fetch_with_fallback(self.neo.as_ref(), self.timeout).await
    }

    /// The latest launch, or a launch fact.
    pub async fn latest_launch(&self) -> String {
        fetch_with_fallback(self.launch.as_ref(), self.timeout).await
    }
}
