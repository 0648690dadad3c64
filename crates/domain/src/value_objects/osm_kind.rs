//! OpenStreetMap element kind

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of OpenStreetMap element a location refers to
///
/// `None` is the fallback for missing or unknown provider values and never
/// signals a successful parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmKind {
    /// Unknown or unparseable
    #[default]
    None,
    /// A single point
    Node,
    /// A polyline or polygon
    Way,
    /// A grouping of elements (cities, boundaries)
    Relation,
}

impl OsmKind {
    /// Map the provider's `osm_type` string; anything unrecognised is `None`
    #[must_use]
    pub fn from_osm_type(osm_type: &str) -> Self {
        match osm_type {
            "node" => Self::Node,
            "way" => Self::Way,
            "relation" => Self::Relation,
            _ => Self::None,
        }
    }

    /// Single-letter prefix used in transit IDs
    #[must_use]
    pub const fn prefix(self) -> Option<char> {
        match self {
            Self::Node => Some('N'),
            Self::Way => Some('W'),
            Self::Relation => Some('R'),
            Self::None => None,
        }
    }

    /// Parse a transit ID prefix (case-insensitive)
    #[must_use]
    pub const fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'N' => Some(Self::Node),
            'W' => Some(Self::Way),
            'R' => Some(Self::Relation),
            _ => None,
        }
    }

    /// Provider name of this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for OsmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(OsmKind::default(), OsmKind::None);
    }

    #[test]
    fn from_osm_type_known_values() {
        assert_eq!(OsmKind::from_osm_type("node"), OsmKind::Node);
        assert_eq!(OsmKind::from_osm_type("way"), OsmKind::Way);
        assert_eq!(OsmKind::from_osm_type("relation"), OsmKind::Relation);
    }

    #[test]
    fn from_osm_type_unknown_values() {
        assert_eq!(OsmKind::from_osm_type(""), OsmKind::None);
        assert_eq!(OsmKind::from_osm_type("Node"), OsmKind::None);
        assert_eq!(OsmKind::from_osm_type("area"), OsmKind::None);
    }

    #[test]
    fn prefix_mapping() {
        assert_eq!(OsmKind::Node.prefix(), Some('N'));
        assert_eq!(OsmKind::Way.prefix(), Some('W'));
        assert_eq!(OsmKind::Relation.prefix(), Some('R'));
        assert_eq!(OsmKind::None.prefix(), None);
    }

    #[test]
    fn from_prefix_is_case_insensitive() {
        assert_eq!(OsmKind::from_prefix('n'), Some(OsmKind::Node));
        assert_eq!(OsmKind::from_prefix('W'), Some(OsmKind::Way));
        assert_eq!(OsmKind::from_prefix('r'), Some(OsmKind::Relation));
        assert_eq!(OsmKind::from_prefix('Z'), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&OsmKind::Relation).unwrap();
        assert_eq!(json, "\"relation\"");
    }
}
