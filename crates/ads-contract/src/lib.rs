// crates/ads-contract/src/lib.rs
// ============================================================================
// Module: Ads Contract Library
// Description: Declarative contract harness for the classified-ads HTTP API.
// Purpose: Describe, send, and verify the ads service contract catalog.
// Dependencies: reqwest, serde, serde_json, thiserror, toml, url, uuid
// ============================================================================

//! ## Overview
//! Ads Contract sends a fixed catalog of HTTP requests to a remote ads
//! service and checks every response against a declared [`Expectation`].
//! The service itself is an external collaborator; this crate only models the
//! requests it accepts and the outcomes the suite expects.
//! Invariants:
//! - Every case step issues exactly one request. Failed requests are never
//!   retried.
//! - Cases share no state; values captured inside a case stay in that case.
//! - Mismatches are reported as [`Violation`]s, never recovered.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod expectation;
pub mod model;
pub mod runner;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::ABSENT_DELETE_ID;
pub use catalog::ABSENT_ITEM_ID;
pub use catalog::CaseGroup;
pub use catalog::CaseKind;
pub use catalog::ContractCase;
pub use catalog::PathArg;
pub use catalog::RequestSpec;
pub use catalog::Step;
pub use catalog::contract_catalog;
pub use client::AdsClient;
pub use client::Exchange;
pub use config::ConfigOverrides;
pub use config::ContractConfig;
pub use config::ContractEnv;
pub use config::Fixtures;
pub use endpoint::ApiVersion;
pub use endpoint::Endpoint;
pub use error::ContractError;
pub use expectation::BodyCheck;
pub use expectation::Expectation;
pub use expectation::Violation;
pub use model::CONFIRMATION_PHRASE;
pub use model::ItemId;
pub use model::ItemPayload;
pub use model::ItemStatistics;
pub use model::PayloadRejection;
pub use model::PayloadVerdict;
pub use model::SellerId;
pub use model::classify_create_payload;
pub use model::created_item_id;
pub use runner::CaseOutcome;
pub use runner::ContractRunner;
pub use runner::RunCounts;
pub use runner::RunReport;
pub use runner::Verdict;
