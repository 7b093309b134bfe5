//! Metra GTFS API HTTP client.
//!
//! Provides async methods for fetching the static schedule tables and the
//! real-time trip updates feed. Handles authentication and maps error
//! statuses to [`FeedError`] variants.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::schedule::{CalendarRecord, StopTimeRecord, TripRecord};

use super::error::FeedError;
use super::types::TripUpdateEntity;

/// Default base URL for the Metra GTFS API.
const DEFAULT_BASE_URL: &str = "https://gtfsapi.metrarail.com/gtfs";

/// Configuration for the Metra client.
#[derive(Debug, Clone)]
pub struct MetraConfig {
    /// API username (32 characters issued by Metra)
    pub username: String,
    /// API password
    pub password: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MetraConfig {
    /// Create a new config with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Metra GTFS API client.
///
/// The request timeout bounds every fetch, so a refresh loop built on
/// this client cannot stall indefinitely on a dead connection.
#[derive(Debug, Clone)]
pub struct MetraClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl MetraClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MetraConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            username: config.username,
            password: config.password,
        })
    }

    /// Fetch all service calendars.
    pub async fn fetch_calendar(&self) -> Result<Vec<CalendarRecord>, FeedError> {
        self.get_json("schedule/calendar").await
    }

    /// Fetch all trips.
    pub async fn fetch_trips(&self) -> Result<Vec<TripRecord>, FeedError> {
        self.get_json("schedule/trips").await
    }

    /// Fetch all stop times.
    pub async fn fetch_stop_times(&self) -> Result<Vec<StopTimeRecord>, FeedError> {
        self.get_json("schedule/stop_times").await
    }

    /// Fetch the current trip updates feed.
    pub async fn fetch_trip_updates(&self) -> Result<Vec<TripUpdateEntity>, FeedError> {
        self.get_json("tripUpdates").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FeedError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FeedError::Unauthorized);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FeedError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = MetraConfig::new("user", "pass")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.username, "user");
        assert_eq!(config.password, "pass");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = MetraConfig::new("user", "pass");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let config = MetraConfig::new("user", "pass");
        assert!(MetraClient::new(config).is_ok());
    }

    // Integration tests would require real API credentials and live HTTP
    // requests; they should be marked #[ignore] and run separately.
}
