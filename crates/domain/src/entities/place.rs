//! Normalized location records returned to callers

use serde::{Deserialize, Serialize};

use crate::value_objects::{OsmKind, encode_tid};

/// Latitude used when the provider's value could not be parsed
pub const INVALID_LAT: f64 = 999.0;

/// Longitude used when the provider's value could not be parsed
pub const INVALID_LNG: f64 = 999.0;

/// OSM id used when the provider's value is missing or unparseable
pub const INVALID_OSM_ID: i64 = 0;

/// A street-level location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmStreet {
    pub osm_id: i64,
    pub kind: OsmKind,
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
    /// "street, city, state"
    pub address: String,
}

/// A locality (city, town, village or hamlet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmCity {
    pub osm_id: i64,
    pub kind: OsmKind,
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
    /// "city, state"
    pub address: String,
}

/// Any addressable place, with search keys for its street and city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmPoint {
    pub osm_id: i64,
    pub kind: OsmKind,
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
    pub address: String,
    /// "street, city, state, country code", empty without a street
    pub street_search_text: String,
    /// "city, state, country code", empty without a city
    pub city_search_text: String,
}

macro_rules! impl_place {
    ($($place:ty),+) => {$(
        impl $place {
            /// Transit ID of this place, empty when the kind is unknown
            #[must_use]
            pub fn tid(&self) -> String {
                encode_tid(self.osm_id, self.kind)
            }

            /// True when the OSM id was resolved
            #[must_use]
            pub const fn has_osm_id(&self) -> bool {
                self.osm_id != INVALID_OSM_ID
            }

            /// True when both coordinates were parsed
            #[must_use]
            #[allow(clippy::float_cmp)]
            pub fn has_coordinates(&self) -> bool {
                self.lat != INVALID_LAT && self.lng != INVALID_LNG
            }
        }
    )+};
}

impl_place!(OsmStreet, OsmCity, OsmPoint);
