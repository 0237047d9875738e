// crates/ads-contract/src/error.rs
// ============================================================================
// Module: Ads Contract Errors
// Description: Harness-level error taxonomy.
// Purpose: Separate harness failures from contract violations.
// Dependencies: reqwest, thiserror
// ============================================================================

//! ## Overview
//! [`ContractError`] covers failures of the harness itself: bad
//! configuration, unusable base URLs, and requests that never produced a
//! response. A response that disagrees with the contract is a
//! [`crate::Violation`] instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the contract harness.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Configuration value is missing or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Base URL cannot host API paths.
    #[error("invalid base url {url}: {reason}")]
    BaseUrl {
        /// Offending URL text.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },
    /// Fixture file could not be read or decoded.
    #[error("fixture file {path}: {reason}")]
    Fixtures {
        /// Fixture file path.
        path: PathBuf,
        /// Read or decode failure.
        reason: String,
    },
    /// HTTP client construction failed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// The request produced no response.
    #[error("{method} {url} failed: {source}")]
    Transport {
        /// HTTP method.
        method: String,
        /// Target URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}
