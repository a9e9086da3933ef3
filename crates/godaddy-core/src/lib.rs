//! # godaddy-core
//!
//! Core types and utilities for working with the GoDaddy registrar API.
//!
//! This crate provides foundational types, error handling, and HTTP client
//! settings shared by the GoDaddy API client crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and GoDaddy error payload parsing
//! - [`types`] - Registrar domain types (API environments, DNS record kinds)
//! - [`config`] - Configuration structures for GoDaddy clients
//! - [`client`] - HTTP client settings
//! - [`query`] - Query parameter assembly helpers

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
