//! Raw provider records
//!
//! These mirror the JSON returned by OpenStreetMap-based geocoders
//! (LocationIQ, Nominatim) with `addressdetails=1`. Every address field is
//! optional on the wire and decodes to an empty string when missing.

use serde::{Deserialize, Deserializer, Serialize};

use crate::address;

/// Address details of a provider record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAddress {
    pub house_number: String,
    pub road: String,
    pub pedestrian: String,
    pub footway: String,
    pub cycleway: String,
    pub highway: String,
    pub path: String,
    pub suburb: String,
    pub city: String,
    pub town: String,
    pub village: String,
    pub hamlet: String,
    pub county: String,
    pub country: String,
    pub country_code: String,
    pub state: String,
    pub state_district: String,
    pub postcode: String,
}

impl RawAddress {
    /// Locality fields, most specific settlement type first
    #[must_use]
    pub fn city_candidates(&self) -> [&str; 4] {
        [&self.city, &self.town, &self.village, &self.hamlet].map(String::as_str)
    }

    /// Street-like fields in resolution order
    #[must_use]
    pub fn street_candidates(&self) -> [&str; 6] {
        [
            &self.road,
            &self.pedestrian,
            &self.path,
            &self.cycleway,
            &self.footway,
            &self.highway,
        ]
        .map(String::as_str)
    }
}

/// One result of a search, autocomplete or lookup query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLocation {
    #[serde(default, deserialize_with = "text_or_number")]
    pub osm_id: String,
    #[serde(default)]
    pub osm_type: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub lat: String,
    #[serde(rename = "lon", default, deserialize_with = "text_or_number")]
    pub lng: String,
    /// Absent when the query did not request address details
    #[serde(default)]
    pub address: Option<RawAddress>,
}

impl RawLocation {
    /// Resolved city of the record, empty when unknown
    #[must_use]
    pub fn city(&self) -> &str {
        address::resolve_city(self.address.as_ref())
    }

    /// True when the record describes a locality rather than a street-level place
    #[must_use]
    pub fn is_city(&self) -> bool {
        address::is_city_record(self.address.as_ref())
    }

    /// Full display address, `display_name` when address details are absent
    #[must_use]
    pub fn display_address(&self) -> String {
        self.address.as_ref().map_or_else(
            || self.display_name.clone(),
            |a| address::format_display_address(Some(a)),
        )
    }

    /// Point address: the display address, named after the place itself
    #[must_use]
    pub fn point_address(&self) -> String {
        address::format_point_address(&self.display_name, self.address.as_ref())
    }

    /// "city, state", `display_name` when address details are absent
    #[must_use]
    pub fn city_address(&self) -> String {
        self.address.as_ref().map_or_else(
            || self.display_name.clone(),
            |a| address::format_city_address(Some(a)),
        )
    }

    /// "street, city, state", `display_name` when address details are absent
    #[must_use]
    pub fn street_address(&self) -> String {
        self.address.as_ref().map_or_else(
            || self.display_name.clone(),
            |a| address::format_street_address(Some(a)),
        )
    }

    /// Street search key, `display_name` when address details are absent
    #[must_use]
    pub fn street_search_text(&self) -> String {
        self.address.as_ref().map_or_else(
            || self.display_name.clone(),
            |a| address::format_street_search_text(Some(a)),
        )
    }

    /// City search key, `display_name` when address details are absent
    #[must_use]
    pub fn city_search_text(&self) -> String {
        self.address.as_ref().map_or_else(
            || self.display_name.clone(),
            |a| address::format_city_search_text(Some(a)),
        )
    }
}

/// Providers send ids and coordinates as strings, but some endpoints use numbers
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        match Option::<TextOrNumber>::deserialize(deserializer)? {
            Some(TextOrNumber::Text(text)) => text,
            Some(TextOrNumber::Number(number)) => number.to_string(),
            None => String::new(),
        },
    )
}
