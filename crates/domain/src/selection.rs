//! Result selection
//!
//! A single query returns several candidates ranked by the provider. These
//! functions narrow that list down: pick one record, keep only localities,
//! drop duplicate addresses and keep only entries matching what the user
//! typed. All of them preserve input order.

use std::collections::HashSet;

use crate::address::sanitize_address;
use crate::entities::RawLocation;
use crate::errors::DomainError;

/// Comparison key for an address: sanitized and lower-cased
#[must_use]
pub fn normalize_key(address: &str) -> String {
    sanitize_address(address).to_lowercase()
}

/// First record with a resolvable city, otherwise the provider's top hit
///
/// # Errors
///
/// Returns [`DomainError::NotFound`] if `records` is empty.
pub fn select_first_with_city(records: Vec<RawLocation>) -> Result<RawLocation, DomainError> {
    let index = records
        .iter()
        .position(|record| !record.city().is_empty())
        .unwrap_or(0);

    records
        .into_iter()
        .nth(index)
        .ok_or_else(|| DomainError::not_found("empty result set"))
}

/// Keep only records describing a locality
#[must_use]
pub fn filter_city_records(records: Vec<RawLocation>) -> Vec<RawLocation> {
    records.into_iter().filter(RawLocation::is_city).collect()
}

/// Keep the first item of each distinct normalized address
pub fn dedupe_by_normalized_address<T, F>(items: Vec<T>, address_fn: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(normalize_key(&address_fn(item))))
        .collect()
}

/// Keep items whose normalized address starts with the normalized query
///
/// An empty query keeps everything.
pub fn filter_by_query_prefix<T, F>(items: Vec<T>, query: &str, address_fn: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let prefix = normalize_key(query);
    if prefix.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| normalize_key(&address_fn(item)).starts_with(&prefix))
        .collect()
}
