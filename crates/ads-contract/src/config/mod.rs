// crates/ads-contract/src/config/mod.rs
// ============================================================================
// Module: Contract Configuration
// Description: Injected target environment for the contract suite.
// Purpose: Provide typed access to the base URL, timeout, and fixture ids.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! The target service is never hard-coded: the base URL, an optional request
//! timeout, and the fixture ids that must already exist on the service are
//! read from environment variables and an optional TOML fixture file.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;
mod fixtures;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::ConfigOverrides;
pub use env::ContractConfig;
pub use env::ContractEnv;
pub use env::DEFAULT_BASE_URL;
pub use env::parse_base_url;
pub use env::parse_timeout_seconds;
pub use env::read_env_strict;
pub use fixtures::Fixtures;
