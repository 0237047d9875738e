// crates/ads-contract/src/config/env.rs
// ============================================================================
// Module: Contract Environment
// Description: Environment-backed configuration for the contract suite.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid or empty values fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::fixtures::Fixtures;
use crate::error::ContractError;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Service root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

/// Environment keys for contract configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractEnv {
    /// Service root URL; API version paths are appended to it.
    BaseUrl,
    /// Optional request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Optional TOML file overriding fixture ids.
    Fixtures,
}

impl ContractEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "ADS_CONTRACT_BASE_URL",
            Self::TimeoutSeconds => "ADS_CONTRACT_TIMEOUT_SEC",
            Self::Fixtures => "ADS_CONTRACT_FIXTURES",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed contract configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    /// Service root URL.
    pub base_url: Url,
    /// Request timeout; `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
    /// Ids that must already exist on the service.
    pub fixtures: Fixtures,
}

impl ContractConfig {
    /// Builds a configuration for `base_url` with default fixtures.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            fixtures: Fixtures::default(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when an environment value is not valid UTF-8,
    /// is empty, or fails validation, or when the fixture file cannot be read.
    pub fn load() -> Result<Self, ContractError> {
        Self::load_with(ConfigOverrides::default())
    }

    /// Loads configuration, preferring `overrides` over environment variables.
    ///
    /// An environment variable is only read when its override is absent, so a
    /// broken value never blocks an explicit replacement.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when a consulted environment value is invalid
    /// or a fixture file cannot be read.
    pub fn load_with(overrides: ConfigOverrides) -> Result<Self, ContractError> {
        let base_url = overrides.base_url.map_or_else(env_base_url, Ok)?;
        let timeout = overrides.timeout.map_or_else(env_timeout, |timeout| Ok(Some(timeout)))?;
        let fixtures_path =
            overrides.fixtures.map_or_else(env_fixtures_path, |path| Ok(Some(path)))?;
        let fixtures =
            fixtures_path.map(|path| Fixtures::load(&path)).transpose()?.unwrap_or_default();
        Ok(Self {
            base_url,
            timeout,
            fixtures,
        })
    }
}

/// Already-validated values that replace their environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `ADS_CONTRACT_BASE_URL`.
    pub base_url: Option<Url>,
    /// Replaces `ADS_CONTRACT_TIMEOUT_SEC`.
    pub timeout: Option<Duration>,
    /// Replaces `ADS_CONTRACT_FIXTURES`.
    pub fixtures: Option<PathBuf>,
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, ContractError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string()
            .map(Some)
            .map_err(|_| ContractError::Config(format!("{name} must be valid UTF-8")))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, ContractError> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => {
            Err(ContractError::Config(format!("{name} must not be empty")))
        }
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Reads the base URL from the environment, falling back to the default.
fn env_base_url() -> Result<Url, ContractError> {
    let raw = read_env_nonempty(ContractEnv::BaseUrl.as_str())?;
    parse_base_url(raw.as_deref().unwrap_or(DEFAULT_BASE_URL))
}

/// Reads the optional request timeout from the environment.
fn env_timeout() -> Result<Option<Duration>, ContractError> {
    read_env_nonempty(ContractEnv::TimeoutSeconds.as_str())?
        .map(|value| parse_timeout_seconds(ContractEnv::TimeoutSeconds.as_str(), &value))
        .transpose()
}

/// Reads the optional fixture file path from the environment.
fn env_fixtures_path() -> Result<Option<PathBuf>, ContractError> {
    Ok(read_env_nonempty(ContractEnv::Fixtures.as_str())?.map(PathBuf::from))
}

/// Parses and validates a service root URL.
///
/// # Errors
///
/// Returns [`ContractError::BaseUrl`] when the value is not an absolute
/// `http` or `https` URL that can carry path segments.
pub fn parse_base_url(raw: &str) -> Result<Url, ContractError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|err| ContractError::BaseUrl {
        url: trimmed.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ContractError::BaseUrl {
            url: trimmed.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(ContractError::BaseUrl {
            url: trimmed.to_string(),
            reason: "url must include a host".to_string(),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ContractError::BaseUrl {
            url: trimmed.to_string(),
            reason: "url must not carry a query or fragment".to_string(),
        });
    }
    Ok(url)
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
pub fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, ContractError> {
    let trimmed = raw.trim();
    let secs: u64 = trimmed.parse().map_err(|_| {
        ContractError::Config(format!("{name} must be a positive integer number of seconds"))
    })?;
    if secs == 0 {
        return Err(ContractError::Config(format!("{name} must be greater than zero")));
    }
    Ok(Duration::from_secs(secs))
}
