// crates/ads-contract/src/config/fixtures.rs
// ============================================================================
// Module: Contract Fixtures
// Description: Ids the suite expects to already exist on the service.
// Purpose: Keep environment-specific ids out of the case catalog.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! Positive lookups need resources that exist before the run starts. The
//! defaults match the shared QA environment; a TOML file may override any
//! subset of them:
//!
//! ```toml
//! existing_item_id = "06a70754-120c-40b0-b901-02de8abf5f60"
//! seller_without_items = 411718
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ContractError;
use crate::model::ItemId;
use crate::model::SellerId;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a fixture file.
const MAX_FIXTURE_BYTES: u64 = 64 * 1024;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Pre-existing service resources used by positive cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fixtures {
    /// Item returned by `GET /api/1/item/{id}` and `GET /api/2/statistic/{id}`.
    pub existing_item_id: ItemId,
    /// Item with statistics for `GET /api/1/statistic/{id}`.
    pub statistic_item_id: ItemId,
    /// Item deleted by the v2 delete cases.
    pub deletable_item_id: ItemId,
    /// Seller owning at least one item.
    pub seller_with_items: SellerId,
    /// Known seller owning no items.
    pub seller_without_items: SellerId,
    /// Seller unknown to the service.
    pub absent_seller: SellerId,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            existing_item_id: ItemId::new("06a70754-120c-40b0-b901-02de8abf5f60"),
            statistic_item_id: ItemId::new("5806557a-61ac-4dea-9e1a-afbe0e0df13e"),
            deletable_item_id: ItemId::new("e7bf24f4-eae9-43ff-8843-9fb97e4d47a3"),
            seller_with_items: SellerId::new(111_111),
            seller_without_items: SellerId::new(411_718),
            absent_seller: SellerId::new(417_649),
        }
    }
}

impl Fixtures {
    /// Parses fixtures from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the TOML decode error message.
    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|err| err.to_string())
    }

    /// Loads fixtures from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Fixtures`] when the file is missing, too
    /// large, not UTF-8, or not valid fixture TOML.
    pub fn load(path: &Path) -> Result<Self, ContractError> {
        let fail = |reason: String| ContractError::Fixtures {
            path: path.to_path_buf(),
            reason,
        };
        let metadata = fs::metadata(path).map_err(|err| fail(err.to_string()))?;
        if metadata.len() > MAX_FIXTURE_BYTES {
            return Err(fail(format!("exceeds {MAX_FIXTURE_BYTES} bytes")));
        }
        let raw = fs::read_to_string(path).map_err(|err| fail(err.to_string()))?;
        Self::from_toml_str(&raw).map_err(fail)
    }
}
