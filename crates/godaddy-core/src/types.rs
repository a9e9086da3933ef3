//! Core registrar domain types.
//!
//! This module provides fundamental types for GoDaddy API operations:
//! the API environments the service is published under and the DNS record
//! kinds the records endpoints accept.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Base URL of the production API
pub const PRODUCTION_API_URL: &str = "https://api.godaddy.com/";
/// Base URL of the OTE (operational test environment) API
pub const OTE_API_URL: &str = "https://api.ote-godaddy.com/";

/// Default TTL for records created by the convenience helpers, in seconds
pub const DEFAULT_RECORD_TTL: u32 = 600;
/// Smallest TTL the API accepts, in seconds
pub const MIN_RECORD_TTL: u32 = 600;

/// GoDaddy API environments.
///
/// Credentials are issued per environment; an OTE key is rejected by the
/// production endpoint and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    /// Production API at `api.godaddy.com`
    #[default]
    Production,
    /// Operational test environment at `api.ote-godaddy.com`
    Ote,
}

impl ApiEnvironment {
    /// Returns the environment name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Ote => "ote",
        }
    }

    /// Returns the base URL the environment is served from.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Ote => OTE_API_URL,
        }
    }

    /// Returns all available environments.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Production, Self::Ote]
    }
}

impl FromStr for ApiEnvironment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "ote" | "test" => Ok(Self::Ote),
            other => Err(Error::ConfigError(format!(
                "Unknown API environment: {other}"
            ))),
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// DNS record kinds accepted by the records endpoints.
///
/// The record type appears both in record payloads and as a URL path segment
/// on the per-record endpoints, so it is an enum rather than a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// IPv6 address record
    Aaaa,
    /// Certification authority authorization record
    Caa,
    /// Canonical name record
    Cname,
    /// Mail exchange record
    Mx,
    /// Name server record
    Ns,
    /// Start of authority record
    Soa,
    /// Service locator record
    Srv,
    /// Text record
    Txt,
}

impl RecordType {
    /// Returns the record type in the uppercase form the API uses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
        }
    }

    /// Returns all record types the API understands.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::A,
            Self::Aaaa,
            Self::Caa,
            Self::Cname,
            Self::Mx,
            Self::Ns,
            Self::Soa,
            Self::Srv,
            Self::Txt,
        ]
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CAA" => Ok(Self::Caa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "NS" => Ok(Self::Ns),
            "SOA" => Ok(Self::Soa),
            "SRV" => Ok(Self::Srv),
            "TXT" => Ok(Self::Txt),
            other => Err(Error::InvalidRecordType(other.to_string())),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
