// system-tests/tests/suites/create_item.rs
// ============================================================================
// Module: Create Item Suite
// Description: Live cases for POST /api/1/item.
// Purpose: Run each catalog case for this endpoint against the live service.
// Dependencies: system-tests helpers
// ============================================================================

//! Create Item Suite system tests. Every accepted create leaves a new item
//! on the service; the suite never cleans up after itself.

use helpers::harness::DynError;
use helpers::harness::run_catalog_case;

use crate::helpers;

#[test]
fn create_item_valid_all_fields() -> Result<(), DynError> {
    run_catalog_case("create_item_valid_all_fields")
}

#[test]
fn create_item_required_fields_only() -> Result<(), DynError> {
    run_catalog_case("create_item_required_fields_only")
}

#[test]
fn create_item_max_seller_id() -> Result<(), DynError> {
    run_catalog_case("create_item_max_seller_id")
}

#[test]
fn create_item_min_seller_id() -> Result<(), DynError> {
    run_catalog_case("create_item_min_seller_id")
}

#[test]
fn create_duplicate_item_for_same_seller() -> Result<(), DynError> {
    run_catalog_case("create_duplicate_item_for_same_seller")
}

#[test]
fn create_item_missing_seller_id() -> Result<(), DynError> {
    run_catalog_case("create_item_missing_seller_id")
}

#[test]
fn create_item_invalid_price_type() -> Result<(), DynError> {
    run_catalog_case("create_item_invalid_price_type")
}

#[test]
fn create_item_seller_id_below_min() -> Result<(), DynError> {
    run_catalog_case("create_item_seller_id_below_min")
}

#[test]
fn create_item_seller_id_above_max() -> Result<(), DynError> {
    run_catalog_case("create_item_seller_id_above_max")
}

#[test]
fn create_item_empty_name() -> Result<(), DynError> {
    run_catalog_case("create_item_empty_name")
}

#[test]
fn create_item_negative_price() -> Result<(), DynError> {
    run_catalog_case("create_item_negative_price")
}

#[test]
fn create_item_then_get_by_id() -> Result<(), DynError> {
    run_catalog_case("create_item_then_get_by_id")
}

#[test]
fn create_item_then_get_by_seller() -> Result<(), DynError> {
    run_catalog_case("create_item_then_get_by_seller")
}
