//! Address normalization
//!
//! OpenStreetMap address details spread the same concept over several
//! overlapping fields: a locality may be tagged `city`, `town`, `village` or
//! `hamlet`, a street `road`, `pedestrian`, `path` and so on. The functions
//! here resolve those fields in a fixed priority order and build the address
//! strings handed to callers.
//!
//! Every function accepts an absent address and returns an empty string or
//! `false` for it; low-detail searches legitimately return no address.

use crate::entities::RawAddress;

/// First non-empty candidate, or the empty string
fn first_non_empty<'a>(candidates: impl IntoIterator<Item = &'a str>) -> &'a str {
    candidates
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default()
}

/// Resolve the locality name: city, then town, village, hamlet
#[must_use]
pub fn resolve_city(addr: Option<&RawAddress>) -> &str {
    addr.map_or("", |a| first_non_empty(a.city_candidates()))
}

/// Resolve the street name: road, then pedestrian, path, cycleway, footway, highway
#[must_use]
pub fn resolve_street(addr: Option<&RawAddress>) -> &str {
    addr.map_or("", |a| first_non_empty(a.street_candidates()))
}

/// True when the address denotes a locality rather than a street-level place
#[must_use]
pub fn is_city_record(addr: Option<&RawAddress>) -> bool {
    resolve_street(addr).is_empty() && !resolve_city(addr).is_empty()
}

/// Human-readable address: `[house_number ]street, city[, state][, postcode]`
///
/// Without a street the result starts at the city.
#[must_use]
pub fn format_display_address(addr: Option<&RawAddress>) -> String {
    let Some(a) = addr else {
        return String::new();
    };

    let city = resolve_city(addr);
    let street = resolve_street(addr);

    let mut address = match (street.is_empty(), a.house_number.is_empty()) {
        (true, _) => city.to_string(),
        (false, true) => format!("{street}, {city}"),
        (false, false) => format!("{} {street}, {city}", a.house_number),
    };

    for segment in [&a.state, &a.postcode] {
        if !segment.is_empty() {
            address.push_str(", ");
            address.push_str(segment);
        }
    }
    address
}

/// "city, state", falling back to the county when no locality is tagged
#[must_use]
pub fn format_city_address(addr: Option<&RawAddress>) -> String {
    let Some(a) = addr else {
        return String::new();
    };
    let city = match resolve_city(addr) {
        "" => a.county.as_str(),
        city => city,
    };
    format!("{city}, {}", a.state)
}

/// "street, city, state"
///
/// Empty components are kept so field positions stay stable for parsing.
#[must_use]
pub fn format_street_address(addr: Option<&RawAddress>) -> String {
    let Some(a) = addr else {
        return String::new();
    };
    format!(
        "{}, {}, {}",
        resolve_street(addr),
        resolve_city(addr),
        a.state
    )
}

/// "street, city, state, country_code"; empty when no street resolves
#[must_use]
pub fn format_street_search_text(addr: Option<&RawAddress>) -> String {
    let Some(a) = addr else {
        return String::new();
    };
    let street = resolve_street(addr);
    if street.is_empty() {
        return String::new();
    }
    format!(
        "{street}, {}, {}, {}",
        resolve_city(addr),
        a.state,
        a.country_code
    )
}

/// "city, state, country_code"; empty when no city resolves
#[must_use]
pub fn format_city_search_text(addr: Option<&RawAddress>) -> String {
    let Some(a) = addr else {
        return String::new();
    };
    let city = resolve_city(addr);
    if city.is_empty() {
        return String::new();
    }
    format!("{city}, {}, {}", a.state, a.country_code)
}

/// Display address named after the place itself
///
/// The leading segment of `display_name` is usually the place's own name
/// ("Ferry Building, 1 Ferry Building, San Francisco, ..."). When the display
/// address does not already contain it, it is prepended. Without address
/// details the display name is returned as is.
#[must_use]
pub fn format_point_address(display_name: &str, addr: Option<&RawAddress>) -> String {
    if addr.is_none() {
        return display_name.to_string();
    }
    let name = truncate_at_first_separator(display_name, ",");
    let address = format_display_address(addr);

    if address.is_empty() {
        name.to_string()
    } else if address.contains(name) {
        address
    } else {
        format!("{name}, {address}")
    }
}

/// The part of `s` before the first `sep`, or all of `s`
#[must_use]
pub fn truncate_at_first_separator<'a>(s: &'a str, sep: &str) -> &'a str {
    s.split_once(sep).map_or(s, |(head, _)| head)
}

/// Clean up free-form address text
///
/// Collapses runs of whitespace (including tabs and newlines) to a single
/// space, drops whitespace before commas and trims both ends.
#[must_use]
pub fn sanitize_address(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" ,", ",")
}
