//! Application configuration
//!
//! Loaded from an optional `config.toml` in the working directory, then
//! overridden by `GEOSMITH_*` environment variables. Nested keys use a double
//! underscore, e.g. `GEOSMITH_LOCATIONIQ__ACCESS_TOKEN`.

use integration_locationiq::LocationIqConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Prefix of the environment variables read by [`AppConfig::load`]
pub const ENV_PREFIX: &str = "GEOSMITH";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// LocationIQ geocoding configuration
    #[serde(default)]
    pub locationiq: LocationIqConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong
    /// type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load from the file `name` (any extension the `config` crate knows,
    /// optional) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong
    /// type.
    pub fn load_from(name: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from TOML text, without consulting the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value has the
    /// wrong type.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Replace the LocationIQ access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.locationiq.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid section.
    pub fn validate(&self) -> Result<(), String> {
        self.locationiq
            .validate()
            .map_err(|e| format!("locationiq: {e}"))
    }
}
