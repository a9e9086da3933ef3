//! Configuration structures for GoDaddy clients.
//!
//! This module provides the deserializable configuration used to construct
//! API clients: endpoint selection, credentials, and request timeouts.

use crate::error::Error;
use crate::types::ApiEnvironment;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Configuration for a GoDaddy client instance.
///
/// Credentials are an API key/secret pair issued per environment; the secret
/// is held in a [`SecretString`] so it stays out of debug output. The struct
/// deserializes from config files but deliberately does not serialize.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GodaddyConfig {
    /// API base URL
    #[validate(url)]
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key
    #[validate(length(min = 1))]
    pub api_key: String,

    /// API secret
    pub api_secret: SecretString,

    /// Optional shopper ID, sent as `X-Shopper-Id` on every request
    #[serde(default)]
    pub shopper_id: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    ApiEnvironment::Production.base_url().to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl GodaddyConfig {
    /// Create a configuration for the production environment.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (e.g. an empty API key).
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_url: default_api_url(),
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            shopper_id: None,
            request_timeout_secs: default_request_timeout_secs(),
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Point the configuration at a named API environment.
    #[must_use]
    pub fn with_environment(mut self, environment: ApiEnvironment) -> Self {
        self.api_url = environment.base_url().to_string();
        self
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the shopper ID sent with every request.
    #[must_use]
    pub fn with_shopper_id(mut self, shopper_id: impl Into<String>) -> Self {
        self.shopper_id = Some(shopper_id.into());
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse and validate the API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Url::parse(&self.api_url)
            .map_err(|e| Error::ConfigError(format!("Invalid API URL: {e}")))
    }

    /// Render the `Authorization` header value for these credentials.
    ///
    /// The API authenticates every request with
    /// `Authorization: sso-key {key}:{secret}`.
    #[must_use]
    pub fn authorization(&self) -> SecretString {
        SecretString::from(format!(
            "sso-key {}:{}",
            self.api_key,
            self.api_secret.expose_secret()
        ))
    }
}
