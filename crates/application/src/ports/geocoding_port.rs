//! Geocoding service port
//!
//! Defines how the application fetches raw provider records. Adapters in the
//! infrastructure layer implement this port on top of a concrete geocoder.

use async_trait::async_trait;
use domain::{OsmTid, RawLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding providers
///
/// Implementations fetch and decode only; selection and normalization are
/// done by the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search by free-form text; the caller narrows to one result
    async fn search(&self, query: &str) -> Result<Vec<RawLocation>, ApplicationError>;

    /// Search by free-form text, keeping every result
    async fn search_many(&self, query: &str) -> Result<Vec<RawLocation>, ApplicationError>;

    /// Autocomplete partially typed text
    async fn autocomplete(&self, query: &str) -> Result<Vec<RawLocation>, ApplicationError>;

    /// Look up one element; fails with not found when the provider has none
    async fn lookup(&self, tid: &OsmTid) -> Result<RawLocation, ApplicationError>;
}
