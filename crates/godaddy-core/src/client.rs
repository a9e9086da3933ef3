//! HTTP client settings.
//!
//! This module provides the transport-level knobs shared by the GoDaddy API
//! client crates. The clients issue exactly one request per operation; there
//! is no retry machinery and reqwest's default connection pool is used as-is.

use std::time::Duration;

/// Default timeout for domains API requests, in seconds
pub const DOMAINS_DEFAULT_TIMEOUT: u64 = 30;

/// Default TCP connect timeout, in seconds
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Transport settings for an API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    /// Request timeout
    pub timeout: Duration,

    /// TCP connect timeout
    pub connect_timeout: Duration,

    /// Enable request logging
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,
}

impl HttpSettings {
    /// Create settings with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DOMAINS_DEFAULT_TIMEOUT),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            enable_logging: true,
            enable_compression: true,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the TCP connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enable or disable request logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable response compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_constants() {
        assert_eq!(DOMAINS_DEFAULT_TIMEOUT, 30);
        assert_eq!(DEFAULT_CONNECT_TIMEOUT, 10);
    }

    #[test]
    fn test_http_settings_new() {
        let settings = HttpSettings::new();
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert!(settings.enable_logging);
        assert!(settings.enable_compression);
    }

    #[test]
    fn test_http_settings_default() {
        assert_eq!(HttpSettings::default(), HttpSettings::new());
    }

    #[test]
    fn test_http_settings_builder() {
        let settings = HttpSettings::new()
            .with_timeout(Duration::from_secs(60))
            .with_connect_timeout(Duration::from_secs(5))
            .with_logging(false)
            .with_compression(false);

        assert_eq!(settings.timeout, Duration::from_secs(60));
        assert_eq!(settings.connect_timeout, Duration::from_secs(5));
        assert!(!settings.enable_logging);
        assert!(!settings.enable_compression);
    }
}
