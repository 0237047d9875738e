// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for ads contract system tests.
// Purpose: Provide typed access to artifact settings and the target service.
// Dependencies: ads-contract
// ============================================================================

//! ## Overview
//! System-test configuration is read from environment variables. Artifact
//! settings live here; the target service settings are delegated to
//! [`ads_contract::ContractConfig`].

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::SystemTestConfig;
pub use env::SystemTestEnv;
