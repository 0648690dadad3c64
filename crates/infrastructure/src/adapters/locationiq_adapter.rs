//! LocationIQ adapter - Implements GeocodingPort using integration_locationiq

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{DomainError, OsmTid, RawLocation};
use integration_locationiq::{GeocodingClient, LocationIqClient, LocationIqConfig, LocationIqError};
use tracing::{debug, instrument};

/// Adapter for the LocationIQ geocoding API
pub struct LocationIqAdapter {
    client: Box<dyn GeocodingClient>,
}

impl std::fmt::Debug for LocationIqAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIqAdapter")
            .field("client", &"LocationIqClient")
            .finish()
    }
}

impl LocationIqAdapter {
    /// Create an adapter from the LocationIQ configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &LocationIqConfig) -> Result<Self, ApplicationError> {
        let client = LocationIqClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing geocoding client
    #[must_use]
    pub fn with_client(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Map integration errors to application errors
    fn map_error(err: LocationIqError) -> ApplicationError {
        match err {
            LocationIqError::NotFound(what) => DomainError::not_found(what).into(),
            LocationIqError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
            LocationIqError::InvalidQuery(e) => ApplicationError::InvalidInput(e),
            LocationIqError::ConfigurationError(e) => ApplicationError::Configuration(e),
            LocationIqError::ConnectionFailed(_)
            | LocationIqError::RequestFailed(_)
            | LocationIqError::ParseError(_)
            | LocationIqError::Timeout { .. } => ApplicationError::ExternalService(err.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for LocationIqAdapter {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<RawLocation>, ApplicationError> {
        self.client.search(query).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn search_many(&self, query: &str) -> Result<Vec<RawLocation>, ApplicationError> {
        let records = self.client.search(query).await.map_err(Self::map_error)?;
        debug!(count = records.len(), "Keeping every search result");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn autocomplete(&self, query: &str) -> Result<Vec<RawLocation>, ApplicationError> {
        self.client.autocomplete(query).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, tid), fields(tid = %tid))]
    async fn lookup(&self, tid: &OsmTid) -> Result<RawLocation, ApplicationError> {
        self.client.lookup(tid).await.map_err(Self::map_error)
    }
}
