//! Domains API models shared by the client and its tests.

use chrono::{DateTime, Utc};
use godaddy_core::query::QueryPairs;
use godaddy_core::types::{RecordType, DEFAULT_RECORD_TTL};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// How thorough an availability check should be.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CheckType {
    /// Registry-cached answer, may not be definitive
    #[default]
    Fast,
    /// Live registry lookup
    Full,
}

impl CheckType {
    /// Returns the value the `checkType` query parameter expects.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "FAST",
            Self::Full => "FULL",
        }
    }
}

/// Optional parameters for the availability endpoint.
#[derive(Debug, Default, Clone)]
pub struct AvailabilityQuery {
    /// Requested check thoroughness (`checkType`).
    pub check_type: Option<CheckType>,
    /// Check availability for an inbound transfer instead of a registration.
    pub for_transfer: Option<bool>,
}

impl AvailabilityQuery {
    /// Convert the parameters into URL query pairs for the given domain.
    #[must_use]
    pub fn to_pairs(&self, domain: &str) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        pairs.push("domain", domain);
        pairs.push_opt("checkType", self.check_type.map(|c| c.as_str()));
        pairs.push_opt("forTransfer", self.for_transfer);
        pairs.into_pairs()
    }
}

/// Parameters supported by the owned-domain list endpoint.
///
/// Passed through to the API verbatim; the client never follows pages, so a
/// caller wanting more than one page re-issues the call with the `marker`
/// from the last returned domain.
#[derive(Debug, Default, Clone)]
pub struct DomainListQuery {
    /// Filter by domain status (e.g. `ACTIVE`, `EXPIRED`).
    pub statuses: Option<Vec<String>>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Domain name to start the listing after.
    pub marker: Option<String>,
    /// Optional detail sections to include (e.g. `contacts`, `nameServers`).
    pub includes: Option<Vec<String>>,
}

impl DomainListQuery {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        pairs.push_joined("statuses", self.statuses.as_deref());
        pairs.push_opt("limit", self.limit);
        pairs.push_opt("marker", self.marker.as_deref());
        pairs.push_joined("includes", self.includes.as_deref());
        pairs.into_pairs()
    }
}

/// Answer from the availability endpoint.
///
/// `price` is an integer amount in micro-units of `currency` (one million
/// micro-units per unit) and `period` is in years; both are absent for
/// domains that cannot be registered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainAvailable {
    /// Whether the domain can be purchased.
    pub available: bool,
    /// Currency for `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Whether the answer came from the registry rather than a cache.
    pub definitive: bool,
    /// The domain that was queried.
    pub domain: String,
    /// Registration period in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    /// Price in micro-units of `currency`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}

/// A single DNS record.
///
/// The SRV/MX extras (`port`, `priority`, `protocol`, `service`, `weight`)
/// are omitted from request payloads when unset rather than sent as
/// zero/empty placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainRecord {
    /// Record value (an address, a hostname, text, ...).
    pub data: String,
    /// Record name; `@` addresses the domain apex.
    pub name: String,
    /// Service port (SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Record priority (MX and SRV).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Service protocol (SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Service name (SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Record kind.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record weight (SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl DomainRecord {
    /// Create a record with the default TTL and no SRV/MX extras.
    #[must_use]
    pub fn new(record_type: RecordType, name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            name: name.into(),
            port: None,
            priority: None,
            protocol: None,
            service: None,
            ttl: DEFAULT_RECORD_TTL,
            record_type,
            weight: None,
        }
    }

    /// Create an `A` record pointing `name` at `address`.
    ///
    /// Use `@` as the name for the domain apex and a bare label (e.g. `one`)
    /// for a subdomain.
    #[must_use]
    pub fn address(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self::new(RecordType::A, name, address.to_string())
    }

    /// Set the TTL.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the priority (MX and SRV records).
    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// One entry of the owned-domain listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummary {
    /// The domain name.
    pub domain: String,
    /// Registrar-internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<u64>,
    /// Current status (e.g. `ACTIVE`, `EXPIRED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Registration timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    /// Deadline for renewing after expiry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_deadline: Option<DateTime<Utc>>,
    /// Whether auto-renewal is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_auto: Option<bool>,
    /// Whether the registrar transfer lock is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Whether WHOIS privacy is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<bool>,
    /// Whether the domain is protected from transfer away.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_protected: Option<bool>,
    /// Authoritative name servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_servers: Option<Vec<String>>,
}

/// Full detail for a single owned domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainDetail {
    /// The domain name.
    pub domain: String,
    /// Registrar-internal numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<u64>,
    /// Current status (e.g. `ACTIVE`, `EXPIRED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Registration timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    /// Whether auto-renewal is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_auto: Option<bool>,
    /// Whether the registrar transfer lock is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Whether WHOIS privacy is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<bool>,
    /// Whether the domain is protected from transfer away.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_protected: Option<bool>,
    /// Authoritative name servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_servers: Option<Vec<String>>,
    /// Transfer authorization code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Registrant contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_registrant: Option<Contact>,
    /// Administrative contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_admin: Option<Contact>,
    /// Technical contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_tech: Option<Contact>,
    /// Billing contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_billing: Option<Contact>,
}

/// A registrar contact attached to a domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_first: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_last: Option<String>,
    /// Organization name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mailing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_mailing: Option<MailingAddress>,
}

/// Mailing address of a registrar contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MailingAddress {
    /// First address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    /// Second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
