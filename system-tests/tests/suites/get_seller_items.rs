// system-tests/tests/suites/get_seller_items.rs
// ============================================================================
// Module: Seller Items Suite
// Description: Live cases for GET /api/1/{sellerId}/item.
// Purpose: Run each catalog case for this endpoint against the live service.
// Dependencies: system-tests helpers
// ============================================================================

//! Seller Items Suite system tests.

use helpers::harness::DynError;
use helpers::harness::run_catalog_case;

use crate::helpers;

#[test]
fn get_items_by_seller_with_items() -> Result<(), DynError> {
    run_catalog_case("get_items_by_seller_with_items")
}

#[test]
fn get_items_by_seller_without_items() -> Result<(), DynError> {
    run_catalog_case("get_items_by_seller_without_items")
}

#[test]
fn get_items_by_nonexistent_seller() -> Result<(), DynError> {
    run_catalog_case("get_items_by_nonexistent_seller")
}

#[test]
fn get_items_by_invalid_seller_id() -> Result<(), DynError> {
    run_catalog_case("get_items_by_invalid_seller_id")
}

#[test]
fn get_items_by_blank_seller_id() -> Result<(), DynError> {
    run_catalog_case("get_items_by_blank_seller_id")
}
