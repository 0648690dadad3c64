//! Application services - Use case implementations

mod location_service;

pub use location_service::LocationService;
