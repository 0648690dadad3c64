//! Assembly of normalized places from raw provider records
//!
//! Assembly never fails. A field that cannot be parsed falls back to its
//! sentinel (`INVALID_OSM_ID`, `INVALID_LAT`, `INVALID_LNG`) and the parse
//! error is collected in [`Assembled::errors`], next to the fully populated
//! value.

use crate::entities::{
    INVALID_LAT, INVALID_LNG, INVALID_OSM_ID, OsmCity, OsmPoint, OsmStreet, RawLocation,
};
use crate::errors::{FieldErrors, FieldParseError};
use crate::value_objects::OsmKind;

/// Builds the `address` of an assembled place from its raw record
pub type AddressFn = fn(&RawLocation) -> String;

/// A best-effort value plus every field error hit while building it
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled<T> {
    pub value: T,
    pub errors: FieldErrors,
}

impl<T> Assembled<T> {
    /// Wrap a value with no errors
    #[must_use]
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            errors: FieldErrors::new(),
        }
    }

    /// True when every field parsed
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into the value and the combined error, if any
    #[must_use]
    pub fn into_parts(self) -> (T, Option<FieldErrors>) {
        (self.value, self.errors.into_option())
    }

    /// Transform the value, keeping the errors
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Assembled<U> {
        Assembled {
            value: f(self.value),
            errors: self.errors,
        }
    }
}

/// Fields shared by every place shape, as returned by [`assemble`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceFields {
    pub osm_id: i64,
    pub kind: OsmKind,
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
    pub address: String,
}

/// Parse an OSM id; empty text is a valid "unknown" and yields 0 silently
pub(crate) fn parse_osm_id(raw: &str, errors: &mut FieldErrors) -> i64 {
    if raw.is_empty() {
        return INVALID_OSM_ID;
    }
    raw.parse().unwrap_or_else(|e| {
        errors.push(FieldParseError::new("osm_id", raw, e));
        INVALID_OSM_ID
    })
}

/// Parse a coordinate, substituting `sentinel` on failure
pub(crate) fn parse_coordinate(
    field: &'static str,
    raw: &str,
    sentinel: f64,
    errors: &mut FieldErrors,
) -> f64 {
    raw.parse().unwrap_or_else(|e| {
        errors.push(FieldParseError::new(field, raw, e));
        sentinel
    })
}

/// Assemble the shared fields, building `address` with `address_fn`
///
/// A record without address details takes `display_name` as its address;
/// `address_fn` is only called when details are present.
#[must_use]
pub fn assemble(record: &RawLocation, address_fn: AddressFn) -> Assembled<PlaceFields> {
    let mut errors = FieldErrors::new();
    let osm_id = parse_osm_id(&record.osm_id, &mut errors);
    let lat = parse_coordinate("lat", &record.lat, INVALID_LAT, &mut errors);
    let lng = parse_coordinate("lon", &record.lng, INVALID_LNG, &mut errors);

    Assembled {
        value: PlaceFields {
            osm_id,
            kind: OsmKind::from_osm_type(&record.osm_type),
            lat,
            lng,
            display_name: record.display_name.clone(),
            address: record
                .address
                .as_ref()
                .map_or_else(|| record.display_name.clone(), |_| address_fn(record)),
        },
        errors,
    }
}

/// Assemble a street: address is "street, city, state"
#[must_use]
pub fn assemble_street(record: &RawLocation) -> Assembled<OsmStreet> {
    assemble(record, RawLocation::street_address).map(|f| OsmStreet {
        osm_id: f.osm_id,
        kind: f.kind,
        lat: f.lat,
        lng: f.lng,
        display_name: f.display_name,
        address: f.address,
    })
}

/// Assemble a city: address is "city, state"
#[must_use]
pub fn assemble_city(record: &RawLocation) -> Assembled<OsmCity> {
    assemble(record, RawLocation::city_address).map(|f| OsmCity {
        osm_id: f.osm_id,
        kind: f.kind,
        lat: f.lat,
        lng: f.lng,
        display_name: f.display_name,
        address: f.address,
    })
}

/// Assemble a point with its street and city search keys
#[must_use]
pub fn assemble_point(record: &RawLocation) -> Assembled<OsmPoint> {
    assemble(record, RawLocation::point_address).map(|f| OsmPoint {
        osm_id: f.osm_id,
        kind: f.kind,
        lat: f.lat,
        lng: f.lng,
        display_name: f.display_name,
        address: f.address,
        street_search_text: record.street_search_text(),
        city_search_text: record.city_search_text(),
    })
}
