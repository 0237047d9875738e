// crates/ads-contract/src/runner.rs
// ============================================================================
// Module: Contract Runner
// Description: Sequential executor for contract cases.
// Purpose: Send each case step, verify it, and aggregate verdicts.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`ContractRunner`] executes cases one at a time against a single
//! [`AdsClient`]. A case stops at its first failing step. Ids captured from
//! create confirmations live only for the case that produced them.
//! Invariants:
//! - Asserting cases yield [`Verdict::Pass`], [`Verdict::Fail`], or
//!   [`Verdict::Error`]; probe cases yield [`Verdict::Observed`] or
//!   [`Verdict::Error`].
//! - A transport failure is an error, never a contract failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::CaseGroup;
use crate::catalog::CaseKind;
use crate::catalog::ContractCase;
use crate::catalog::PathArg;
use crate::catalog::Step;
use crate::client::AdsClient;
use crate::client::Exchange;
use crate::endpoint::Endpoint;
use crate::expectation::Violation;
use crate::model::ItemId;
use crate::model::created_item_id;

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Result of one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every step matched.
    Pass,
    /// A step contradicted its expectation.
    Fail,
    /// Probe completed; behavior recorded only.
    Observed,
    /// The harness could not obtain a response.
    Error,
}

impl Verdict {
    /// Returns the upper-case label used in text reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Observed => "OBSERVED",
            Self::Error => "ERROR",
        }
    }
}

/// Outcome of one case with the exchanges it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    /// Case name.
    pub name: String,
    /// Endpoint family.
    pub group: CaseGroup,
    /// Assert or probe.
    pub kind: CaseKind,
    /// Verdict.
    pub verdict: Verdict,
    /// Failure reason or probe observation.
    pub detail: Option<String>,
    /// Exchanges sent by this case, in order.
    pub exchanges: Vec<Exchange>,
}

/// Verdict tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    /// Passed cases.
    pub pass: usize,
    /// Failed cases.
    pub fail: usize,
    /// Observed probes.
    pub observed: usize,
    /// Harness errors.
    pub error: usize,
}

impl RunCounts {
    /// Counts one verdict.
    fn record(&mut self, verdict: Verdict) {
        let slot = match verdict {
            Verdict::Pass => &mut self.pass,
            Verdict::Fail => &mut self.fail,
            Verdict::Observed => &mut self.observed,
            Verdict::Error => &mut self.error,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Outcomes of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Target service root.
    pub base_url: String,
    /// Verdict tallies.
    pub counts: RunCounts,
    /// Per-case outcomes in execution order.
    pub cases: Vec<CaseOutcome>,
}

impl RunReport {
    /// Returns true when no case failed or errored.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.counts.fail == 0 && self.counts.error == 0
    }

    /// Looks up a case outcome by name.
    #[must_use]
    pub fn case(&self, name: &str) -> Option<&CaseOutcome> {
        self.cases.iter().find(|outcome| outcome.name == name)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.cases {
            write!(f, "{:<8} {}", outcome.verdict.label(), outcome.name)?;
            if let Some(detail) = &outcome.detail {
                write!(f, ": {detail}")?;
            }
            writeln!(f)?;
        }
        let counts = self.counts;
        write!(
            f,
            "{} pass, {} fail, {} observed, {} error against {}",
            counts.pass, counts.fail, counts.observed, counts.error, self.base_url
        )
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Why a case stopped before its last step.
enum StepFailure {
    /// Response disagreed with the expectation.
    Violation {
        /// What disagreed.
        violation: Violation,
        /// Response headers of the offending exchange, when one was sent.
        headers: Option<String>,
    },
    /// No response was obtained.
    Harness(String),
}

/// Sequential case executor.
#[derive(Debug, Clone)]
pub struct ContractRunner {
    /// Client shared by every case.
    client: AdsClient,
}

impl ContractRunner {
    /// Wraps a client.
    #[must_use]
    pub const fn new(client: AdsClient) -> Self {
        Self {
            client,
        }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &AdsClient {
        &self.client
    }

    /// Runs cases in order and tallies verdicts.
    #[must_use]
    pub fn run<'a>(&self, cases: impl IntoIterator<Item = &'a ContractCase>) -> RunReport {
        let mut counts = RunCounts::default();
        let mut outcomes = Vec::new();
        for case in cases {
            let outcome = self.run_case(case);
            counts.record(outcome.verdict);
            outcomes.push(outcome);
        }
        RunReport {
            base_url: self.client.base_url().to_string(),
            counts,
            cases: outcomes,
        }
    }

    /// Runs a single case.
    #[must_use]
    pub fn run_case(&self, case: &ContractCase) -> CaseOutcome {
        let mut exchanges = Vec::with_capacity(case.steps.len());
        let result = self.run_steps(case, &mut exchanges);
        let (verdict, detail) = match (case.kind, result) {
            (CaseKind::Assert, Ok(())) => (Verdict::Pass, None),
            (
                CaseKind::Assert,
                Err(StepFailure::Violation {
                    violation,
                    headers,
                }),
            ) => {
                let detail = match headers {
                    Some(headers) => format!("{violation}; headers: {headers}"),
                    None => violation.to_string(),
                };
                (Verdict::Fail, Some(detail))
            }
            (CaseKind::Probe, Ok(())) => (Verdict::Observed, Some(observation(&exchanges))),
            (
                CaseKind::Probe,
                Err(StepFailure::Violation {
                    violation, ..
                }),
            ) => (Verdict::Observed, Some(format!("{}; {violation}", observation(&exchanges)))),
            (_, Err(StepFailure::Harness(message))) => (Verdict::Error, Some(message)),
        };
        CaseOutcome {
            name: case.name.to_string(),
            group: case.group,
            kind: case.kind,
            verdict,
            detail,
            exchanges,
        }
    }

    /// Sends each step, stopping at the first failure.
    fn run_steps(
        &self,
        case: &ContractCase,
        exchanges: &mut Vec<Exchange>,
    ) -> Result<(), StepFailure> {
        let mut created: Option<ItemId> = None;
        for step in &case.steps {
            let exchange = self.send_step(step, created.as_ref())?;
            exchanges.push(exchange.clone());
            step.expect.verify(&exchange).map_err(|violation| StepFailure::Violation {
                violation,
                headers: Some(header_summary(&exchange)),
            })?;
            if step.request.endpoint == Endpoint::CreateItem
                && let Some(id) = captured_id(&exchange)
            {
                created = Some(id);
            }
        }
        Ok(())
    }

    /// Resolves the path argument and sends one step.
    fn send_step(&self, step: &Step, created: Option<&ItemId>) -> Result<Exchange, StepFailure> {
        let request = &step.request;
        let argument = match &request.arg {
            PathArg::None => "",
            PathArg::Literal(value) => value.as_str(),
            PathArg::CreatedItemId => created
                .map(ItemId::as_str)
                .ok_or(StepFailure::Violation {
                    violation: Violation::MissingCreatedId,
                    headers: None,
                })?,
        };
        self.client
            .send(request.endpoint, argument, request.body.as_ref(), &request.headers)
            .map_err(|err| StepFailure::Harness(err.to_string()))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Extracts the created id from a create confirmation body.
fn captured_id(exchange: &Exchange) -> Option<ItemId> {
    let body = exchange.json().ok()?;
    body.get("status").and_then(Value::as_str).and_then(created_item_id)
}

/// Renders response headers as `name: value` pairs.
fn header_summary(exchange: &Exchange) -> String {
    let pairs: Vec<String> = exchange
        .response_headers
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

/// Summarizes what a probe saw.
fn observation(exchanges: &[Exchange]) -> String {
    exchanges.last().map_or_else(
        || "no response".to_string(),
        |exchange| format!("status {}; headers: {}", exchange.status, header_summary(exchange)),
    )
}

// ============================================================================
// SECTION: Tests
// ============================================================================
