//! GoDaddy Domains API client and data models.
//!
//! Provides typed structures and an asynchronous client for the GoDaddy
//! Domains API: availability checks, owned-domain listings, and DNS record
//! management. Each operation issues exactly one HTTP request.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{DomainsClient, DomainsClientBuilder};
pub use models::{
    AvailabilityQuery, CheckType, Contact, DomainAvailable, DomainDetail, DomainListQuery,
    DomainRecord, DomainSummary, MailingAddress,
};

/// Convenient result alias that reuses the shared GoDaddy error type.
pub type Result<T> = godaddy_core::Result<T>;
