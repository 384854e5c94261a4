//! Latest SpaceX launch.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use vyomnetra_core::FetchError;
use vyomnetra_core::facts::{LAUNCH_FACTS, RandomPool};

use crate::client::{LiveSource, get_json};

/// Used when `details` is null or empty.
const DEFAULT_DETAILS: &str = "This mission represents SpaceX continued efforts to advance space exploration and make life multiplanetary!";

/// Used when the `details` key is absent.
const MISSING_DETAILS: &str = "No details available";

/// The latest-launch payload.
///
/// `details` and `success` keep absent apart from `null`: the outer
/// `Option` is key presence, the inner one is the JSON value.
#[derive(Debug, Default, Deserialize)]
pub struct LaunchResponse {
    pub name: Option<String>,
    pub date_utc: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub details: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub success: Option<Option<bool>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl LaunchResponse {
    /// `null` means no outcome yet; an absent key counts as a failure.
    pub fn status(&self) -> &'static str {
        match self.success {
            Some(Some(true)) => "✅ Successful",
            Some(None) => "⏳ Scheduled",
            Some(Some(false)) | None => "❌ Failed",
        }
    }

    pub fn render(&self) -> String {
        let details = match &self.details {
            None => MISSING_DETAILS,
            Some(Some(d)) if !d.is_empty() => d.as_str(),
            Some(_) => DEFAULT_DETAILS,
        };

        format!(
            "🚀 **Latest SpaceX Mission**: {}\n\n📅 **Launch Date**: {}\n🎯 **Status**: {}\n\n📝 **Details**: {}",
            self.name.as_deref().unwrap_or("Unknown Mission"),
            self.date_utc.as_deref().unwrap_or("Unknown Date"),
            self.status(),
            details,
        )
    }
}

pub struct LaunchSource {
    client: reqwest::Client,
    url: String,
}

impl LaunchSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl LiveSource for LaunchSource {
    fn name(&self) -> &str {
        "launch"
    }

    fn fallback(&self) -> &'static RandomPool {
        &LAUNCH_FACTS
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        let body: LaunchResponse = get_json(&self.client, &self.url, &[]).await?;
        Ok(body.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{build_client, fetch_with_fallback};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer) -> LaunchSource {
        let client = build_client(Duration::from_secs(2)).unwrap();
        LaunchSource::new(client, format!("{}/v4/launches/latest", server.uri()))
    }

    #[tokio::test]
    async fn renders_latest_launch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/launches/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Crew-5",
                "date_utc": "2022-10-05T16:00:00.000Z",
                "details": null,
                "success": true
            })))
            .mount(&server)
            .await;

        let text = source(&server).fetch().await.unwrap();
        assert!(text.contains("**Latest SpaceX Mission**: Crew-5"));
        assert!(text.contains("2022-10-05T16:00:00.000Z"));
        assert!(text.contains("✅ Successful"));
        assert!(text.contains(DEFAULT_DETAILS));
    }

    fn parse(body: serde_json::Value) -> LaunchResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn status_is_tri_state() {
        assert_eq!(parse(json!({ "success": true })).status(), "✅ Successful");
        assert_eq!(parse(json!({ "success": false })).status(), "❌ Failed");
        assert_eq!(parse(json!({ "success": null })).status(), "⏳ Scheduled");
    }

    #[test]
    fn absent_success_counts_as_failed() {
        let launch = parse(json!({ "name": "X", "date_utc": "d" }));
        assert_eq!(launch.status(), "❌ Failed");

        let text = launch.render();
        assert!(text.contains("🎯 **Status**: ❌ Failed"));
        assert!(text.contains("📝 **Details**: No details available"));
        assert!(!text.contains(DEFAULT_DETAILS));
    }

    #[test]
    fn null_or_empty_details_use_default_sentence() {
        for details in [json!(null), json!("")] {
            let text = parse(json!({ "details": details })).render();
            assert!(text.contains(DEFAULT_DETAILS), "for {details}");
        }
    }

    #[test]
    fn blank_details_are_kept() {
        let text = parse(json!({ "details": "   " })).render();
        assert!(text.contains("📝 **Details**:    "));
        assert!(!text.contains(DEFAULT_DETAILS));
    }

    #[test]
    fn provided_details_are_kept() {
        let text = parse(json!({ "details": "Static fire complete." })).render();
        assert!(text.contains("📝 **Details**: Static fire complete."));
        assert!(text.contains("Unknown Mission"));
        assert!(text.contains("Unknown Date"));
    }

    #[tokio::test]
    async fn not_found_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let text = fetch_with_fallback(&source(&server), Duration::from_secs(2)).await;
        assert!(LAUNCH_FACTS.contains(&text));
    }
}
