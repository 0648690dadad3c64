//! Domain entities - provider records and the places derived from them

mod place;
mod raw_location;

pub use place::{INVALID_LAT, INVALID_LNG, INVALID_OSM_ID, OsmCity, OsmPoint, OsmStreet};
pub use raw_location::{RawAddress, RawLocation};
