//! Shared HTTP plumbing and the single-shot fallback policy.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use vyomnetra_core::FetchError;
use vyomnetra_core::facts::RandomPool;

/// A live data feed with a static fallback pool.
#[async_trait]
pub trait LiveSource: Send + Sync {
    /// Short name used in logs (e.g., "apod").
    fn name(&self) -> &str;

    /// The pool answered from when [`LiveSource::fetch`] fails.
    fn fallback(&self) -> &'static RandomPool;

    /// Perform one request and format the result as answer text.
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Build the HTTP client shared by all feeds.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("vyomnetra/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {e}")))
}

/// Run one fetch under `timeout`; on any failure draw from the fallback pool.
///
/// Single attempt only; the fallback is drawn on the first failure.
pub async fn fetch_with_fallback(source: &dyn LiveSource, timeout: Duration) -> String {
    let error = match tokio::time::timeout(timeout, source.fetch()).await {
        Ok(Ok(text)) => return text,
        Ok(Err(e)) => e,
        Err(_) => FetchError::Timeout {
            timeout_secs: timeout.as_secs(),
        },
    };

    warn!(
        source = source.name(),
        error = %error,
        "Live fetch failed, answering from fallback pool"
    );
    source.fallback().draw().to_string()
}

/// GET `url` with `query` and decode a JSON body.
///
/// Non-2xx statuses, transport failures, and undecodable bodies each map
/// to their own [`FetchError`] variant.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, FetchError> {
    debug!(url, "Fetching live data");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status_code: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}
