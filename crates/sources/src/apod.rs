//! NASA Astronomy Picture of the Day.

use async_trait::async_trait;
use serde::Deserialize;
use vyomnetra_core::FetchError;
use vyomnetra_core::facts::{APOD_FACTS, RandomPool};

use crate::client::{LiveSource, get_json};

/// The subset of the APOD response we render. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ApodResponse {
    pub title: Option<String>,
    pub explanation: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

impl ApodResponse {
    pub fn render(&self) -> String {
        format!(
            "🌟 **NASA's Astronomy Picture of the Day**: {}\n\n{}\n\n📅 Date: {}\n🔗 You can view it at: {}",
            self.title.as_deref().unwrap_or("Amazing Space Image"),
            self.explanation
                .as_deref()
                .unwrap_or("A beautiful view from space!"),
            self.date.as_deref().unwrap_or("Today"),
            self.url.as_deref().unwrap_or("NASA APOD website"),
        )
    }
}

pub struct ApodSource {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl ApodSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl LiveSource for ApodSource {
    fn name(&self) -> &str {
        "apod"
    }

    fn fallback(&self) -> &'static RandomPool {
        &APOD_FACTS
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        let body: ApodResponse =
            get_json(&self.client, &self.url, &[("api_key", self.api_key.as_str())]).await?;
        Ok(body.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{build_client, fetch_with_fallback};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer) -> ApodSource {
        let client = build_client(Duration::from_secs(2)).unwrap();
        ApodSource::new(client, format!("{}/planetary/apod", server.uri()), "DEMO_KEY")
    }

    #[tokio::test]
    async fn renders_live_picture() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/planetary/apod"))
            .and(query_param("api_key", "DEMO_KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "title": "The Horsehead Nebula",
                "explanation": "A dark cloud of dust.",
                "date": "2024-01-15",
                "url": "https://apod.nasa.gov/apod/image/horsehead.jpg",
                "media_type": "image"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = source(&server).fetch().await.unwrap();
        assert!(text.contains("**NASA's Astronomy Picture of the Day**: The Horsehead Nebula"));
        assert!(text.contains("A dark cloud of dust."));
        assert!(text.contains("📅 Date: 2024-01-15"));
        assert!(text.contains("horsehead.jpg"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let text = ApodResponse::default().render();
        assert!(text.contains("Amazing Space Image"));
        assert!(text.contains("A beautiful view from space!"));
        assert!(text.contains("Date: Today"));
        assert!(text.contains("NASA APOD website"));
    }

    #[tokio::test]
    async fn rate_limited_feed_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let src = source(&server);
        assert!(matches!(
            src.fetch().await,
            Err(FetchError::Status { status_code: 429 })
        ));
        let text = fetch_with_fallback(&src, Duration::from_secs(2)).await;
        assert!(APOD_FACTS.contains(&text));
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        assert!(matches!(source(&server).fetch().await, Err(FetchError::Parse(_))));
    }
}
