//! LocationIQ integration for geosmith
//!
//! Provides forward geocoding, autocomplete and lookup by OSM id via the
//! [LocationIQ](https://locationiq.com) API, an OpenStreetMap-based geocoder
//! with a Nominatim-compatible response format.
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the transport interface, implemented by
//! [`LocationIqClient`]. The client only fetches and decodes; results are
//! returned as raw [`domain::RawLocation`] records.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_locationiq::{GeocodingClient, LocationIqClient, LocationIqConfig};
//!
//! let config = LocationIqConfig::with_token("pk.your-token");
//! let client = LocationIqClient::new(&config)?;
//!
//! let results = client.search("615 John Muir Dr, San Francisco").await?;
//! ```

mod client;
mod config;
mod error;

pub use client::{GeocodingClient, LocationIqClient};
pub use config::LocationIqConfig;
pub use error::LocationIqError;
