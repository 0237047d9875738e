// crates/ads-contract/src/expectation.rs
// ============================================================================
// Module: Response Expectations
// Description: Expected status codes and body predicates.
// Purpose: Check one exchange against its declared outcome.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! An [`Expectation`] is a status code plus an ordered list of
//! [`BodyCheck`]s. The status is checked first; body checks run only when the
//! status matches, and the first failing check is reported.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::client::Exchange;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum number of body characters quoted in a violation message.
const MAX_BODY_EXCERPT_CHARS: usize = 512;

// ============================================================================
// SECTION: Body Checks
// ============================================================================

/// Structural predicate on a JSON response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "check", content = "arg", rename_all = "snake_case")]
pub enum BodyCheck {
    /// Body parses as JSON.
    Json,
    /// Body is an object containing the named top-level field.
    HasField(&'static str),
    /// Body `status` field is a string containing the phrase.
    StatusContains(&'static str),
    /// Body is an array.
    Array,
    /// Body is a non-empty array.
    NonEmptyArray,
    /// Body is an empty array.
    EmptyArray,
}

impl BodyCheck {
    /// Evaluates the check against a decoded body.
    fn verify(self, body: &Value, raw: &str) -> Result<(), Violation> {
        match self {
            Self::Json => Ok(()),
            Self::HasField(field) => {
                if body.as_object().is_some_and(|fields| fields.contains_key(field)) {
                    Ok(())
                } else {
                    Err(Violation::MissingField {
                        field,
                        body: excerpt(raw),
                    })
                }
            }
            Self::StatusContains(phrase) => {
                let status = body.get("status").and_then(Value::as_str);
                if status.is_some_and(|status| status.contains(phrase)) {
                    Ok(())
                } else {
                    Err(Violation::StatusPhraseMissing {
                        phrase,
                        body: excerpt(raw),
                    })
                }
            }
            Self::Array => array_len(body, raw).map(|_| ()),
            Self::NonEmptyArray => match array_len(body, raw)? {
                0 => Err(Violation::EmptyArray),
                _ => Ok(()),
            },
            Self::EmptyArray => match array_len(body, raw)? {
                0 => Ok(()),
                len => Err(Violation::NonEmptyArray {
                    len,
                }),
            },
        }
    }
}

// ============================================================================
// SECTION: Expectations
// ============================================================================

/// Expected outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expectation {
    /// Expected status code.
    pub status: u16,
    /// Body checks applied in order after the status matches.
    pub body: Vec<BodyCheck>,
}

impl Expectation {
    /// Expects `status` with no body checks.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Expects 200.
    #[must_use]
    pub const fn ok() -> Self {
        Self::status(200)
    }

    /// Expects 400 with an `error` field.
    #[must_use]
    pub fn bad_request() -> Self {
        Self::status(400).with(BodyCheck::HasField("error"))
    }

    /// Expects 404 with an `error` field.
    #[must_use]
    pub fn not_found() -> Self {
        Self::status(404).with(BodyCheck::HasField("error"))
    }

    /// Appends a body check.
    #[must_use]
    pub fn with(mut self, check: BodyCheck) -> Self {
        self.body.push(check);
        self
    }

    /// Checks an exchange against the expectation.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found.
    pub fn verify(&self, exchange: &Exchange) -> Result<(), Violation> {
        if exchange.status != self.status {
            return Err(Violation::UnexpectedStatus {
                expected: self.status,
                actual: exchange.status,
                body: excerpt(&exchange.response_body),
            });
        }
        if self.body.is_empty() {
            return Ok(());
        }
        let body = exchange.json().map_err(|err| Violation::InvalidJson {
            reason: err.to_string(),
            body: excerpt(&exchange.response_body),
        })?;
        self.body.iter().try_for_each(|check| check.verify(&body, &exchange.response_body))
    }
}

// ============================================================================
// SECTION: Violations
// ============================================================================

/// Disagreement between a response and its expectation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Status code differs.
    #[error("expected status {expected}, got {actual}; body: {body}")]
    UnexpectedStatus {
        /// Expected status.
        expected: u16,
        /// Received status.
        actual: u16,
        /// Response body excerpt.
        body: String,
    },
    /// Body is not JSON.
    #[error("response body is not json ({reason}); body: {body}")]
    InvalidJson {
        /// Decode error.
        reason: String,
        /// Response body excerpt.
        body: String,
    },
    /// Required field is absent.
    #[error("response body lacks field {field}; body: {body}")]
    MissingField {
        /// Missing field name.
        field: &'static str,
        /// Response body excerpt.
        body: String,
    },
    /// Body is not an array.
    #[error("response body is not a json array; body: {body}")]
    NotAnArray {
        /// Response body excerpt.
        body: String,
    },
    /// Array was expected to hold items.
    #[error("response array is empty")]
    EmptyArray,
    /// Array was expected to be empty.
    #[error("response array holds {len} entries, expected none")]
    NonEmptyArray {
        /// Array length.
        len: usize,
    },
    /// Confirmation phrase missing from `status`.
    #[error("response status does not contain {phrase:?}; body: {body}")]
    StatusPhraseMissing {
        /// Expected phrase.
        phrase: &'static str,
        /// Response body excerpt.
        body: String,
    },
    /// A step needs an item id that no earlier step produced.
    #[error("no created item id available from an earlier step")]
    MissingCreatedId,
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the array length or a [`Violation::NotAnArray`].
fn array_len(body: &Value, raw: &str) -> Result<usize, Violation> {
    body.as_array().map(Vec::len).ok_or_else(|| Violation::NotAnArray {
        body: excerpt(raw),
    })
}

/// Truncates a body for inclusion in messages.
fn excerpt(raw: &str) -> String {
    if raw.chars().count() <= MAX_BODY_EXCERPT_CHARS {
        return raw.to_string();
    }
    let mut out: String = raw.chars().take(MAX_BODY_EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================
