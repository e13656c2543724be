//! Trip search HTTP client.
//!
//! Forwards a resolved query to the trip search service and converts the
//! response into a [`ResultSet`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info};

use crate::domain::SearchQuery;

use super::convert::convert_response;
use super::error::SearchError;
use super::result_set::ResultSet;
use super::search::TripSearch;
use super::types::SearchResponse;

/// Default base URL for the trip search service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of body characters kept in error reports.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Configuration for the trip search client.
#[derive(Debug, Clone)]
pub struct TrainlineConfig {
    /// Base URL of the service
    pub base_url: String,
    /// Optional API key, sent as `x-apikey`
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TrainlineConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TrainlineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Trip search service client.
#[derive(Debug, Clone)]
pub struct TrainlineClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrainlineClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TrainlineConfig) -> Result<Self, SearchError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| SearchError::InvalidApiKey)?;
            headers.insert(HeaderName::from_static("x-apikey"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query parameters for a search.
    ///
    /// The transportation mean is left out entirely when there is no filter.
    fn search_params(query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("departure_station", query.departure.clone()),
            ("arrival_station", query.arrival.clone()),
            ("from_date", query.from_date_param()),
            ("to_date", query.to_date_param()),
        ];
        if let Some(mean) = query.transportation_mean {
            params.push(("transportation_mean", mean.as_str().to_string()));
        }
        params
    }
}

#[async_trait]
impl TripSearch for TrainlineClient {
    async fn search(&self, query: &SearchQuery) -> Result<ResultSet, SearchError> {
        let url = format!("{}/search", self.base_url);
        let params = Self::search_params(query);
        debug!(%url, ?params, "sending trip search");

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SearchError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SearchError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::StationNotFound { message: body });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let decoded: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(MAX_ERROR_BODY_CHARS).collect()),
            })?;

        let results = convert_response(&decoded);
        info!(
            received = decoded.trips.len(),
            kept = results.len(),
            "trip search answered"
        );
        Ok(results)
    }
}
