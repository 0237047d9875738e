// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for ads contract system-tests.
// Purpose: Provide the case harness and artifact utilities.
// Dependencies: system-tests, ads-contract
// ============================================================================

//! ## Overview
//! Shared helpers for ads contract system-tests.
//! Invariants:
//! - Each test runs exactly one catalog case against the configured service.
//! - Every test leaves a summary and a request transcript behind.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod artifacts;
pub mod harness;
