//! Location service
//!
//! Resolves free-form text and transit IDs into normalized streets, cities
//! and points. Every operation makes exactly one call on the
//! [`GeocodingPort`]; everything after that is pure domain logic.
//!
//! Results come back as [`Assembled`] values: the best-effort places plus the
//! field parse errors hit while building them. Only transport failures,
//! empty single-result queries and malformed transit IDs are errors.

use std::{fmt, sync::Arc};

use domain::selection::{
    dedupe_by_normalized_address, filter_by_query_prefix, filter_city_records,
    select_first_with_city,
};
use domain::{
    Assembled, DomainError, FieldErrors, OsmCity, OsmPoint, OsmStreet, OsmTid, RawLocation,
    assemble_city, assemble_point, assemble_street,
};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::GeocodingPort};

/// Service for street, city and point lookups
pub struct LocationService {
    geocoding: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for LocationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationService").finish_non_exhaustive()
    }
}

impl LocationService {
    /// Create a new location service
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoding }
    }

    /// Resolve text to a single street
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when the search returns nothing.
    #[instrument(skip(self))]
    pub async fn get_street_by_text(
        &self,
        text: &str,
    ) -> Result<Assembled<OsmStreet>, ApplicationError> {
        let record = self.search_one(text).await?;
        Ok(log_field_errors(assemble_street(&record)))
    }

    /// Resolve text to a single city
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when the search returns nothing.
    #[instrument(skip(self))]
    pub async fn get_city_by_text(
        &self,
        text: &str,
    ) -> Result<Assembled<OsmCity>, ApplicationError> {
        let record = self.search_one(text).await?;
        Ok(log_field_errors(assemble_city(&record)))
    }

    /// Look up a point by its transit ID (e.g. `N5200886615`)
    ///
    /// # Errors
    ///
    /// Fails when `tid` is malformed, on transport errors, or when the
    /// provider knows no such element.
    #[instrument(skip(self))]
    pub async fn get_point_by_tid(
        &self,
        tid: &str,
    ) -> Result<Assembled<OsmPoint>, ApplicationError> {
        let record = self.lookup(tid).await?;
        Ok(log_field_errors(assemble_point(&record)))
    }

    /// Look up a city by its transit ID (e.g. `R62`)
    ///
    /// # Errors
    ///
    /// Fails when `tid` is malformed, on transport errors, or when the
    /// provider knows no such element.
    #[instrument(skip(self))]
    pub async fn get_city_by_tid(&self, tid: &str) -> Result<Assembled<OsmCity>, ApplicationError> {
        let record = self.lookup(tid).await?;
        Ok(log_field_errors(assemble_city(&record)))
    }

    /// Every point matching `text`, deduplicated and prefix-filtered
    ///
    /// # Errors
    ///
    /// Fails on transport errors only; an empty list is a valid answer.
    #[instrument(skip(self))]
    pub async fn get_points_by_search(
        &self,
        text: &str,
    ) -> Result<Assembled<Vec<OsmPoint>>, ApplicationError> {
        let records = self.geocoding.search_many(text).await?;
        debug!(count = records.len(), "Search returned records");

        Ok(narrow(
            assemble_all(&records, assemble_point),
            text,
            |point: &OsmPoint| point.address.clone(),
        ))
    }

    /// Every city matching `text`, deduplicated and prefix-filtered
    ///
    /// # Errors
    ///
    /// Fails on transport errors only; an empty list is a valid answer.
    #[instrument(skip(self))]
    pub async fn get_cities_by_search(
        &self,
        text: &str,
    ) -> Result<Assembled<Vec<OsmCity>>, ApplicationError> {
        let records = self.geocoding.search_many(text).await?;
        Ok(cities_matching(records, text))
    }

    /// City suggestions for partially typed text
    ///
    /// # Errors
    ///
    /// Fails on transport errors only; an empty list is a valid answer.
    #[instrument(skip(self))]
    pub async fn get_cities_by_autocomplete(
        &self,
        text: &str,
    ) -> Result<Assembled<Vec<OsmCity>>, ApplicationError> {
        let records = self.geocoding.autocomplete(text).await?;
        Ok(cities_matching(records, text))
    }

    async fn search_one(&self, text: &str) -> Result<RawLocation, ApplicationError> {
        let records = self.geocoding.search(text).await?;
        debug!(count = records.len(), "Search returned records");
        Ok(select_first_with_city(records)?)
    }

    async fn lookup(&self, tid: &str) -> Result<RawLocation, ApplicationError> {
        let tid: OsmTid = tid.parse().map_err(DomainError::from)?;
        self.geocoding.lookup(&tid).await
    }
}

/// Localities among `records`, assembled and narrowed to `text`
fn cities_matching(records: Vec<RawLocation>, text: &str) -> Assembled<Vec<OsmCity>> {
    let total = records.len();
    let records = filter_city_records(records);
    debug!(total, cities = records.len(), "Kept locality records");

    narrow(assemble_all(&records, assemble_city), text, |city: &OsmCity| {
        city.address.clone()
    })
}

/// Records assembled one by one, plus the errors of those that were skipped
struct AssembledRecords<T> {
    places: Vec<Assembled<T>>,
    skipped: FieldErrors,
}

/// Assemble every record, skipping those whose OSM id cannot be parsed
///
/// A record with an unparseable id can never be looked up again, so it is
/// dropped and its errors go to `skipped`. Coordinate failures keep the
/// record with sentinel values and its errors stay attached to it.
fn assemble_all<T>(
    records: &[RawLocation],
    assemble: fn(&RawLocation) -> Assembled<T>,
) -> AssembledRecords<T> {
    let mut places = Vec::with_capacity(records.len());
    let mut skipped = FieldErrors::new();

    for record in records {
        let assembled = assemble(record);
        if assembled.errors.has_field("osm_id") {
            warn!(
                osm_id = %record.osm_id,
                display_name = %record.display_name,
                "Skipping record with malformed OSM id"
            );
            skipped.merge(assembled.errors);
        } else {
            if !assembled.is_clean() {
                warn!(errors = %assembled.errors, "Record assembled with fallback values");
            }
            places.push(assembled);
        }
    }

    AssembledRecords { places, skipped }
}

/// Drop duplicate addresses, then keep those starting with `text`
///
/// Only the errors of surviving places and of skipped records are reported.
fn narrow<T>(
    records: AssembledRecords<T>,
    text: &str,
    address_fn: impl Fn(&T) -> String,
) -> Assembled<Vec<T>> {
    let address_of = |item: &Assembled<T>| address_fn(&item.value);
    let places = dedupe_by_normalized_address(records.places, address_of);
    let places = filter_by_query_prefix(places, text, address_of);
    debug!(count = places.len(), "Places after dedupe and prefix filter");

    let mut errors = records.skipped;
    let values = places
        .into_iter()
        .map(|place| {
            errors.merge(place.errors);
            place.value
        })
        .collect();

    Assembled {
        value: values,
        errors,
    }
}

fn log_field_errors<T>(assembled: Assembled<T>) -> Assembled<T> {
    if !assembled.is_clean() {
        warn!(errors = %assembled.errors, "Assembled with fallback values");
    }
    assembled
}
