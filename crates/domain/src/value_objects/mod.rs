//! Value Objects - Immutable, identity-less domain primitives

mod osm_kind;
mod osm_tid;

pub use osm_kind::OsmKind;
pub use osm_tid::{OsmTid, TidError, decode_tid, encode_tid};
