// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Contract Case Harness
// Description: Runs one catalog case against the live service.
// Purpose: Give every system test the same execution and artifact flow.
// Dependencies: ads-contract, system-tests
// ============================================================================

use std::error::Error;

use ads_contract::AdsClient;
use ads_contract::ContractRunner;
use ads_contract::Verdict;
use ads_contract::contract_catalog;
use system_tests::config::SystemTestConfig;

use super::artifacts::TestReporter;

/// Boxed error used by system tests.
pub type DynError = Box<dyn Error + Send + Sync>;

/// Runs the named catalog case and writes its artifacts.
///
/// Probe cases succeed whatever the service answers; their observation is
/// kept in the summary notes.
pub fn run_catalog_case(name: &str) -> Result<(), DynError> {
    let config = SystemTestConfig::load()?;
    let mut reporter = TestReporter::new(name, &config)?;
    let catalog = contract_catalog(&config.contract.fixtures);
    let case = catalog
        .iter()
        .find(|case| case.name == name)
        .ok_or_else(|| format!("{name} is not in the contract catalog"))?;
    let runner = ContractRunner::new(AdsClient::new(&config.contract)?);
    let outcome = runner.run_case(case);

    reporter.artifacts().write_json("transcript.json", &runner.client().transcript())?;
    reporter.artifacts().write_json("outcome.json", &outcome)?;
    let status = match outcome.verdict {
        Verdict::Pass => "pass",
        Verdict::Fail => "fail",
        Verdict::Observed => "observed",
        Verdict::Error => "error",
    };
    let mut notes = vec![case.description.to_string()];
    notes.extend(outcome.detail.clone());
    reporter.finish(
        status,
        notes,
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "transcript.json".to_string(),
            "outcome.json".to_string(),
        ],
    )?;
    drop(reporter);

    match outcome.verdict {
        Verdict::Pass | Verdict::Observed => Ok(()),
        Verdict::Fail | Verdict::Error => Err(format!(
            "{name} {status}: {}",
            outcome.detail.unwrap_or_default()
        )
        .into()),
    }
}
