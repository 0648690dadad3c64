//! Application layer - Use cases and orchestration
//!
//! Exposes the location lookups callers use (street, city and point by text,
//! by transit ID, by search and by autocomplete) on top of the
//! [`GeocodingPort`] transport.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
