// system-tests/tests/suites/delete_item_v2.rs
// ============================================================================
// Module: Delete Item V2 Suite
// Description: Live cases for DELETE /api/2/item/{id}.
// Purpose: Run each catalog case for this endpoint against the live service.
// Dependencies: system-tests helpers
// ============================================================================

//! Delete Item V2 Suite system tests.
//!
//! `delete_item_v2_repeat` relies on `delete_item_v2_existing` having run
//! first; libtest orders tests by name, which keeps that order.

use helpers::harness::DynError;
use helpers::harness::run_catalog_case;

use crate::helpers;

#[test]
fn delete_item_v2_existing() -> Result<(), DynError> {
    run_catalog_case("delete_item_v2_existing")
}

#[test]
fn delete_item_v2_repeat() -> Result<(), DynError> {
    run_catalog_case("delete_item_v2_repeat")
}

#[test]
fn delete_item_v2_nonexistent() -> Result<(), DynError> {
    run_catalog_case("delete_item_v2_nonexistent")
}

#[test]
fn delete_item_v2_invalid_id() -> Result<(), DynError> {
    run_catalog_case("delete_item_v2_invalid_id")
}
