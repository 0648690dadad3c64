//! Logging setup
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a console
//! formatter. `RUST_LOG` takes precedence over the configured filter.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
