//! LocationIQ client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the LocationIQ geocoding API
#[derive(Clone, Serialize, Deserialize)]
pub struct LocationIqConfig {
    /// API access token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Forward geocoding endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Autocomplete endpoint
    #[serde(default = "default_autocomplete_url")]
    pub autocomplete_url: String,

    /// Lookup-by-OSM-id endpoint
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of autocomplete suggestions
    #[serde(default = "default_autocomplete_limit")]
    pub autocomplete_limit: u8,
}

impl std::fmt::Debug for LocationIqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIqConfig")
            .field(
                "access_token",
                &if self.access_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("search_url", &self.search_url)
            .field("autocomplete_url", &self.autocomplete_url)
            .field("lookup_url", &self.lookup_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("autocomplete_limit", &self.autocomplete_limit)
            .finish()
    }
}

fn default_search_url() -> String {
    "https://us1.locationiq.com/v1/search".to_string()
}

fn default_autocomplete_url() -> String {
    "https://api.locationiq.com/v1/autocomplete".to_string()
}

fn default_lookup_url() -> String {
    "https://us1.locationiq.com/v1/lookup".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_autocomplete_limit() -> u8 {
    10
}

impl Default for LocationIqConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            search_url: default_search_url(),
            autocomplete_url: default_autocomplete_url(),
            lookup_url: default_lookup_url(),
            timeout_secs: default_timeout_secs(),
            autocomplete_limit: default_autocomplete_limit(),
        }
    }
}

impl LocationIqConfig {
    /// Create a configuration with the given access token and default endpoints
    #[must_use]
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(SecretString::from(access_token.into())),
            ..Default::default()
        }
    }

    /// Create a configuration whose endpoints all live under `base_url`
    ///
    /// Paths are `/v1/search`, `/v1/autocomplete` and `/v1/lookup`, as on the
    /// public API.
    #[must_use]
    pub fn with_base_url(access_token: impl Into<String>, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            search_url: format!("{base_url}/v1/search"),
            autocomplete_url: format!("{base_url}/v1/autocomplete"),
            lookup_url: format!("{base_url}/v1/lookup"),
            ..Self::with_token(access_token)
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Self::with_token("test-token")
        }
    }

    /// The access token, if one is configured
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_ref()
            .map(|token| token.expose_secret())
            .filter(|token| !token.is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.token().is_none() {
            return Err("access_token must be set".to_string());
        }

        for (name, url) in [
            ("search_url", &self.search_url),
            ("autocomplete_url", &self.autocomplete_url),
            ("lookup_url", &self.lookup_url),
        ] {
            if url.is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.autocomplete_limit == 0 || self.autocomplete_limit > 20 {
            return Err("autocomplete_limit must be between 1 and 20".to_string());
        }

        Ok(())
    }
}
