// system-tests/src/lib.rs
// ============================================================================
// Module: Ads Contract System Tests Library
// Description: Shared configuration for live contract system tests.
// Purpose: Provide common settings for the system-test binaries.
// Dependencies: ads-contract
// ============================================================================

//! ## Overview
//! This crate hosts the configuration shared by the live contract suite in
//! `system-tests/tests`. The suite only runs with the `system-tests` feature:
//!
//! ```text
//! cargo test -p system-tests --features system-tests -- --test-threads=1
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
