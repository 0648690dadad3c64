//! LocationIQ HTTP client
//!
//! Thin transport over the LocationIQ search, autocomplete and lookup
//! endpoints. Responses are decoded into [`RawLocation`] records; all
//! normalization happens in the domain layer.

use std::time::Duration;

use async_trait::async_trait;
use domain::{OsmTid, RawLocation};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::LocationIqConfig;
use crate::error::LocationIqError;

/// Trait for geocoding clients returning raw provider records
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Forward geocode free-form text, with address details
    async fn search(&self, query: &str) -> Result<Vec<RawLocation>, LocationIqError>;

    /// Suggest places for partially typed text
    async fn autocomplete(&self, query: &str) -> Result<Vec<RawLocation>, LocationIqError>;

    /// Look up a single element by transit ID
    async fn lookup(&self, tid: &OsmTid) -> Result<RawLocation, LocationIqError>;
}

/// LocationIQ-backed geocoding client
#[derive(Debug)]
pub struct LocationIqClient {
    client: Client,
    config: LocationIqConfig,
}

impl LocationIqClient {
    /// Create a new LocationIQ client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &LocationIqConfig) -> Result<Self, LocationIqError> {
        config
            .validate()
            .map_err(LocationIqError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("geosmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LocationIqError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Common query parameters: key and response format
    fn base_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("key", self.config.token().unwrap_or_default().to_string()),
            ("format", "json".to_string()),
        ]
    }

    /// Reject blank queries before spending an API call on them
    fn check_query(query: &str) -> Result<&str, LocationIqError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LocationIqError::InvalidQuery(
                "query must not be empty".to_string(),
            ));
        }
        Ok(query)
    }

    /// Send a GET request and decode the JSON array of results
    ///
    /// LocationIQ answers 404 when nothing matches; that is an empty list,
    /// not an error.
    async fn fetch(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<Vec<RawLocation>, LocationIqError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LocationIqError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    LocationIqError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LocationIqError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status == StatusCode::NOT_FOUND {
            debug!("No results (HTTP 404)");
            return Ok(Vec::new());
        }

        if !status.is_success() {
            return Err(LocationIqError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LocationIqError::ParseError(e.to_string()))?;

        Self::parse_results(&body)
    }

    /// Decode a JSON array of provider records
    fn parse_results(body: &str) -> Result<Vec<RawLocation>, LocationIqError> {
        serde_json::from_str(body).map_err(|e| LocationIqError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for LocationIqClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<RawLocation>, LocationIqError> {
        let query = Self::check_query(query)?;

        let mut params = self.base_params();
        params.push(("addressdetails", "1".to_string()));
        params.push(("q", query.to_string()));

        let results = self.fetch(&self.config.search_url, &params).await?;
        debug!(count = results.len(), "Search results");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn autocomplete(&self, query: &str) -> Result<Vec<RawLocation>, LocationIqError> {
        let query = Self::check_query(query)?;

        let mut params = self.base_params();
        params.push(("dedupe", "1".to_string()));
        params.push(("limit", self.config.autocomplete_limit.to_string()));
        params.push(("q", query.to_string()));

        let results = self.fetch(&self.config.autocomplete_url, &params).await?;
        debug!(count = results.len(), "Autocomplete results");
        Ok(results)
    }

    #[instrument(skip(self, tid), fields(tid = %tid))]
    async fn lookup(&self, tid: &OsmTid) -> Result<RawLocation, LocationIqError> {
        let mut params = self.base_params();
        params.push(("addressdetails", "1".to_string()));
        params.push(("osm_ids", tid.to_string()));

        let results = self.fetch(&self.config.lookup_url, &params).await?;
        if results.len() > 1 {
            warn!(count = results.len(), "Lookup returned several elements, using the first");
        }

        results
            .into_iter()
            .next()
            .ok_or_else(|| LocationIqError::NotFound(tid.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_token() {
        let result = LocationIqClient::new(&LocationIqConfig::default());
        assert!(matches!(
            result,
            Err(LocationIqError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_new_with_valid_config() {
        assert!(LocationIqClient::new(&LocationIqConfig::for_testing()).is_ok());
    }

    #[test]
    fn test_base_params_carry_token() {
        let client = LocationIqClient::new(&LocationIqConfig::for_testing()).unwrap();
        let params = client.base_params();
        assert!(params.contains(&("key", "test-token".to_string())));
        assert!(params.contains(&("format", "json".to_string())));
    }

    #[test]
    fn test_check_query() {
        assert_eq!(LocationIqClient::check_query("  Springfield ").unwrap(), "Springfield");
        assert!(matches!(
            LocationIqClient::check_query(" \t"),
            Err(LocationIqError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_parse_results() {
        let json = r#"[
            {"osm_id": "62", "osm_type": "relation", "display_name": "Springfield", "lat": "39.8", "lon": "-89.6"},
            {"osm_id": "63", "osm_type": "node", "display_name": "Springfield Park", "lat": "39.7", "lon": "-89.5", "address": {"park": "x", "city": "Springfield"}}
        ]"#;
        let results = LocationIqClient::parse_results(json).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].address.is_none());
        assert_eq!(results[1].city(), "Springfield");
    }

    #[test]
    fn test_parse_results_empty() {
        assert!(LocationIqClient::parse_results("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_results_error_object() {
        let result = LocationIqClient::parse_results(r#"{"error": "Invalid key"}"#);
        assert!(matches!(result, Err(LocationIqError::ParseError(_))));
    }
}
