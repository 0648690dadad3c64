//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application's [`GeocodingPort`](application::GeocodingPort)
//! on top of LocationIQ and provides configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::AppConfig;
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
