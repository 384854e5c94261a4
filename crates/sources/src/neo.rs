//! NASA near-Earth object feed, queried for a single day.
//!
//! A 200 response is not enough: the feed must report at least one object
//! and list objects under the requested date, otherwise the result counts
//! as a failure and the caller falls back.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use vyomnetra_core::FetchError;
use vyomnetra_core::facts::{NEO_FACTS, RandomPool};

use crate::client::{LiveSource, get_json};

#[derive(Debug, Default, Deserialize)]
pub struct NeoFeed {
    #[serde(default)]
    pub element_count: u64,

    /// Objects keyed by `YYYY-MM-DD`
    #[serde(default)]
    pub near_earth_objects: HashMap<String, Vec<NearEarthObject>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NearEarthObject {
    pub name: Option<String>,

    #[serde(default)]
    pub estimated_diameter: EstimatedDiameter,
}

#[derive(Debug, Default, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default)]
    pub meters: DiameterRange,
}

#[derive(Debug, Default, Deserialize)]
pub struct DiameterRange {
    #[serde(default)]
    pub estimated_diameter_min: f64,
    #[serde(default)]
    pub estimated_diameter_max: f64,
}

impl NeoFeed {
    /// Render the first object listed for `day`.
    pub fn render(&self, day: &str) -> Result<String, FetchError> {
        if self.element_count == 0 {
            return Err(FetchError::Empty(format!("no objects tracked on {day}")));
        }

        let neo = self
            .near_earth_objects
            .get(day)
            .and_then(|objects| objects.first())
            .ok_or_else(|| FetchError::Empty(format!("no object list for {day}")))?;

        let size = &neo.estimated_diameter.meters;
        Ok(format!(
            "🌌 **NASA NEO Update**: Today, there are {} Near Earth Objects being tracked!\n\n\
             🪨 **Featured Asteroid**: {}\n\
             📏 **Estimated Size**: {:.1} - {:.1} meters\n\n\
             ⚠️ NASA continuously monitors these objects to ensure Earth's safety! All current NEOs pose no threat to our planet.",
            self.element_count,
            neo.name.as_deref().unwrap_or("Unknown asteroid"),
            size.estimated_diameter_min,
            size.estimated_diameter_max,
        ))
    }
}

pub struct NeoSource {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl NeoSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the one-day window starting and ending on `date`.
    pub async fn fetch_for(&self, date: NaiveDate) -> Result<String, FetchError> {
        let day = date.format("%Y-%m-%d").to_string();
        let feed: NeoFeed = get_json(
            &self.client,
            &self.url,
            &[
                ("start_date", day.as_str()),
                ("end_date", day.as_str()),
                ("api_key", self.api_key.as_str()),
            ],
        )
        .await?;
        feed.render(&day)
    }
}

#[async_trait]
impl LiveSource for NeoSource {
    fn name(&self) -> &str {
        "neo"
    }

    fn fallback(&self) -> &'static RandomPool {
        &NEO_FACTS
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        self.fetch_for(Local::now().date_naive()).await
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

    fn source(server: &MockServer) -> NeoSource {
        let client = build_client(Duration::from_secs(2)).unwrap();
        NeoSource::new(client, format!("{}/neo/rest/v1/feed", server.uri()), "DEMO_KEY")
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[tokio::test]
    async fn queries_a_single_day_window() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/neo/rest/v1/feed"))
            .and(query_param("start_date", "2024-03-09"))
            .and(query_param("end_date", "2024-03-09"))
            .and(query_param("api_key", "DEMO_KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "element_count": 12,
                "near_earth_objects": {
                    "2024-03-09": [
                        {
                            "name": "(2024 EF)",
                            "estimated_diameter": {
                                "meters": {
                                    "estimated_diameter_min": 21.0756,
                                    "estimated_diameter_max": 47.1264
                                }
                            }
                        },
                        { "name": "(2019 XY)" }
                    ]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = source(&server).fetch_for(day()).await.unwrap();
        assert!(text.contains("Today, there are 12 Near Earth Objects"));
        assert!(text.contains("**Featured Asteroid**: (2024 EF)"));
        assert!(text.contains("21.1 - 47.1 meters"));
        assert!(!text.contains("2019 XY"));
    }

    #[tokio::test]
    async fn zero_element_count_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "element_count": 0,
                "near_earth_objects": {}
            })))
            .mount(&server)
            .await;

        let src = source(&server);
        assert!(matches!(src.fetch_for(day()).await, Err(FetchError::Empty(_))));

        let text = fetch_with_fallback(&src, Duration::from_secs(2)).await;
        assert!(NEO_FACTS.contains(&text));
        assert!(!text.contains("0 Near Earth Objects"));
    }

    #[tokio::test]
    async fn server_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let text = fetch_with_fallback(&source(&server), Duration::from_secs(2)).await;
        assert!(NEO_FACTS.contains(&text));
    }

    #[tokio::test]
    async fn slow_feed_times_out_into_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let text = fetch_with_fallback(&source(&server), Duration::from_millis(200)).await;
        assert!(NEO_FACTS.contains(&text));
    }

    #[test]
    fn count_without_list_for_day_is_empty() {
        let feed: NeoFeed = serde_json::from_value(json!({
            "element_count": 3,
            "near_earth_objects": { "2024-03-10": [ { "name": "x" } ] }
        }))
        .unwrap();
        assert!(matches!(feed.render("2024-03-09"), Err(FetchError::Empty(_))));
    }

    #[test]
    fn missing_name_and_size_use_defaults() {
        let feed: NeoFeed = serde_json::from_value(json!({
            "element_count": 1,
            "near_earth_objects": { "2024-03-09": [ {} ] }
        }))
        .unwrap();
        let text = feed.render("2024-03-09").unwrap();
        assert!(text.contains("Unknown asteroid"));
        assert!(text.contains("0.0 - 0.0 meters"));
    }
}
