// crates/ads-contract/src/client.rs
// ============================================================================
// Module: Ads HTTP Client
// Description: Blocking HTTP client for the ads service with transcripts.
// Purpose: Send one request per call and keep every exchange for diagnosis.
// Dependencies: reqwest, serde, serde_json, url
// ============================================================================

//! ## Overview
//! [`AdsClient`] sends a single request per call and records the full
//! exchange (request line, headers, JSON body, response status, headers, raw
//! body) in a shared transcript.
//! Invariants:
//! - Requests are never retried; a transport failure is returned as-is.
//! - Non-success statuses are returned as exchanges, not errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::ContractConfig;
use crate::endpoint::Endpoint;
use crate::error::ContractError;

// ============================================================================
// SECTION: Exchanges
// ============================================================================

/// One request/response pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exchange {
    /// Position in the client transcript, starting at 1.
    pub sequence: u64,
    /// HTTP method.
    pub method: String,
    /// Full request URL.
    pub url: String,
    /// Headers set explicitly on the request.
    pub request_headers: BTreeMap<String, String>,
    /// JSON request body, when sent.
    pub request_body: Option<Value>,
    /// Response status code.
    pub status: u16,
    /// Response headers.
    pub response_headers: BTreeMap<String, String>,
    /// Raw response body.
    pub response_body: String,
}

impl Exchange {
    /// Decodes the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the decode error when the body is not JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.response_body)
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Ads service HTTP client with transcript capture.
#[derive(Debug, Clone)]
pub struct AdsClient {
    /// Service root URL.
    base_url: Url,
    /// Underlying blocking client.
    client: Client,
    /// Every exchange sent through this client.
    transcript: Arc<Mutex<Vec<Exchange>>>,
}

impl AdsClient {
    /// Builds a client for the configured target.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ContractConfig) -> Result<Self, ContractError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ContractError::ClientBuild)?;
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self {
            base_url,
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the service root URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a snapshot of the transcript.
    #[must_use]
    pub fn transcript(&self) -> Vec<Exchange> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Sends one request to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::BaseUrl`] when the URL cannot be built and
    /// [`ContractError::Transport`] when no response was received.
    pub fn send(
        &self,
        endpoint: Endpoint,
        argument: &str,
        body: Option<&Value>,
        headers: &[(String, String)],
    ) -> Result<Exchange, ContractError> {
        let url = endpoint.url(&self.base_url, argument)?;
        let method = endpoint.method();
        let method_label = method.as_str().to_string();
        let mut request = self.client.request(method, url.clone());
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let transport = |source: reqwest::Error| ContractError::Transport {
            method: method_label.clone(),
            url: url.to_string(),
            source,
        };
        let response = request.send().map_err(transport)?;
        let status = response.status().as_u16();
        let response_headers = header_map(response.headers());
        let response_body = response.text().map_err(transport)?;
        let exchange = self.record(Exchange {
            sequence: 0,
            method: method_label,
            url: url.to_string(),
            request_headers: headers.iter().cloned().collect(),
            request_body: body.cloned(),
            status,
            response_headers,
            response_body,
        });
        Ok(exchange)
    }

    /// Appends an exchange to the transcript and assigns its sequence.
    fn record(&self, mut exchange: Exchange) -> Exchange {
        let Ok(mut guard) = self.transcript.lock() else {
            return exchange;
        };
        exchange.sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(exchange.clone());
        exchange
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Flattens response headers into a sorted map; repeated names are joined.
fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        map.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    map
}
