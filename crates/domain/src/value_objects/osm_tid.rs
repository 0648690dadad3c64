//! Transit ID: a compact reference to an OpenStreetMap element
//!
//! A TID is the element kind's prefix letter followed by the decimal OSM id,
//! e.g. `N5200886615` or `W123456`. It is what callers hand back to look a
//! previously seen location up again.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::OsmKind;

/// Errors produced when decoding a transit ID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TidError {
    /// Fewer than two characters
    #[error("Invalid transit ID '{0}': too short")]
    InvalidFormat(String),

    /// Everything after the prefix must be an integer
    #[error("Invalid OSM id in transit ID '{0}'")]
    InvalidId(String),

    /// Prefix is not one of N, W, R
    #[error("Invalid OSM kind prefix '{0}'")]
    InvalidKind(char),
}

/// Encode an OSM id and kind as a transit ID
///
/// Returns an empty string for [`OsmKind::None`], which has no prefix.
#[must_use]
pub fn encode_tid(osm_id: i64, kind: OsmKind) -> String {
    kind.prefix()
        .map(|prefix| format!("{prefix}{osm_id}"))
        .unwrap_or_default()
}

/// Decode a transit ID into its OSM id and kind
///
/// # Errors
///
/// - [`TidError::InvalidFormat`] if the input has fewer than two characters
/// - [`TidError::InvalidId`] if the part after the prefix is not an integer
/// - [`TidError::InvalidKind`] if the prefix is not N, W or R (any case)
pub fn decode_tid(tid: &str) -> Result<(i64, OsmKind), TidError> {
    let mut chars = tid.chars();
    let (Some(prefix), rest) = (chars.next(), chars.as_str()) else {
        return Err(TidError::InvalidFormat(tid.to_string()));
    };
    if rest.is_empty() {
        return Err(TidError::InvalidFormat(tid.to_string()));
    }

    let osm_id = rest
        .parse::<i64>()
        .map_err(|_| TidError::InvalidId(tid.to_string()))?;
    let kind = OsmKind::from_prefix(prefix).ok_or(TidError::InvalidKind(prefix))?;

    Ok((osm_id, kind))
}

/// A decoded transit ID
///
/// Only constructible for encodable kinds, so `Display` always yields a
/// valid TID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OsmTid {
    osm_id: i64,
    kind: OsmKind,
}

impl OsmTid {
    /// Create a TID; `None` when the kind cannot be encoded
    #[must_use]
    pub fn new(osm_id: i64, kind: OsmKind) -> Option<Self> {
        kind.prefix().map(|_| Self { osm_id, kind })
    }

    /// The numeric OSM id
    #[must_use]
    pub const fn osm_id(&self) -> i64 {
        self.osm_id
    }

    /// The element kind
    #[must_use]
    pub const fn kind(&self) -> OsmKind {
        self.kind
    }
}

impl FromStr for OsmTid {
    type Err = TidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (osm_id, kind) = decode_tid(s)?;
        Ok(Self { osm_id, kind })
    }
}

impl TryFrom<String> for OsmTid {
    type Error = TidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OsmTid> for String {
    fn from(tid: OsmTid) -> Self {
        tid.to_string()
    }
}

impl fmt::Display for OsmTid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_tid(self.osm_id, self.kind))
    }
}
