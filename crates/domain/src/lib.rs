//! Domain layer for geosmith
//!
//! Raw geocoder records, the address normalizer that resolves their
//! overlapping fields, result selection, assembly of normalized places and
//! the transit ID codec. Everything here is pure and synchronous.

pub mod address;
pub mod assembly;
pub mod entities;
pub mod errors;
pub mod selection;
pub mod value_objects;

pub use assembly::{
    Assembled, PlaceFields, assemble, assemble_city, assemble_point, assemble_street,
};
pub use entities::*;
pub use errors::{DomainError, FieldErrors, FieldParseError};
pub use value_objects::*;
