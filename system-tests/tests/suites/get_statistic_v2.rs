// system-tests/tests/suites/get_statistic_v2.rs
// ============================================================================
// Module: Statistic V2 Suite
// Description: Live cases for GET /api/2/statistic/{id}.
// Purpose: Run each catalog case for this endpoint against the live service.
// Dependencies: system-tests helpers
// ============================================================================

//! Statistic V2 Suite system tests.

use helpers::harness::DynError;
use helpers::harness::run_catalog_case;

use crate::helpers;

#[test]
fn get_statistic_v2_by_existing_id() -> Result<(), DynError> {
    run_catalog_case("get_statistic_v2_by_existing_id")
}

#[test]
fn get_statistic_v2_expect_continue() -> Result<(), DynError> {
    run_catalog_case("get_statistic_v2_expect_continue")
}
