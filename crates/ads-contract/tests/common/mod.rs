// crates/ads-contract/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Local HTTP stubs for ads-contract integration tests.
// Purpose: Serve canned or simulated ads responses on a loopback port.
// Dependencies: ads-contract, serde_json, tiny_http, url, uuid
// ============================================================================

//! ## Overview
//! [`StubService`] runs a `tiny_http` server on a background thread and hands
//! every request to a handler closure. [`FakeAds`] is a small in-memory
//! handler that behaves the way the ads contract describes, seeded with the
//! default fixture ids.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;
use std::thread::JoinHandle;

use ads_contract::Fixtures;
use serde_json::Value;
use serde_json::json;
use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;
use url::Url;
use uuid::Uuid;

// ============================================================================
// SECTION: Stub Server
// ============================================================================

/// Request as seen by the stub.
#[derive(Debug, Clone)]
pub struct StubRequest {
    /// HTTP method.
    pub method: String,
    /// Raw request target, still percent-encoded.
    pub url: String,
    /// Request headers, lower-cased names.
    pub headers: BTreeMap<String, String>,
    /// Raw request body.
    pub body: String,
}

/// Response produced by a stub handler.
#[derive(Debug, Clone)]
pub struct StubResponse {
    /// Status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl StubResponse {
    /// JSON response.
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Plain-text response.
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Loopback HTTP server driven by a handler closure.
pub struct StubService {
    /// Bound address.
    addr: SocketAddr,
    /// Shared server handle used for shutdown.
    server: Arc<Server>,
    /// Requests received so far.
    requests: Arc<Mutex<Vec<StubRequest>>>,
    /// Accept loop thread.
    handle: Option<JoinHandle<()>>,
}

impl StubService {
    /// Starts serving on an ephemeral loopback port.
    pub fn spawn<F>(handler: F) -> Self
    where
        F: Fn(&StubRequest) -> StubResponse + Send + 'static,
    {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("http server"));
        let addr = server.server_addr().to_ip().expect("ip listener");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let loop_server = Arc::clone(&server);
        let loop_requests = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            for mut request in loop_server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let seen = StubRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|header| {
                            (
                                header.field.as_str().as_str().to_ascii_lowercase(),
                                header.value.as_str().to_string(),
                            )
                        })
                        .collect(),
                    body,
                };
                let reply = handler(&seen);
                loop_requests.lock().unwrap().push(seen);
                let response = Response::from_string(reply.body)
                    .with_status_code(reply.status)
                    .with_header(
                        Header::from_bytes("Content-Type", "application/json; charset=utf-8")
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });
        Self {
            addr,
            server,
            requests,
            handle: Some(handle),
        }
    }

    /// Serves the same response to every request.
    pub fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::spawn(move |_| StubResponse::text(status, &body))
    }

    /// Returns the service root URL.
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).expect("base url")
    }

    /// Returns the requests received so far.
    pub fn requests(&self) -> Vec<StubRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubService {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// ============================================================================
// SECTION: Fake Ads Service
// ============================================================================

/// In-memory ads service following the documented contract.
#[derive(Debug, Default)]
pub struct FakeAds {
    /// Items by id.
    items: BTreeMap<String, Value>,
    /// Sellers known to the service, with or without items.
    sellers: BTreeSet<i64>,
    /// Ids deleted at least once.
    deleted: BTreeSet<String>,
    /// Counter used to mint item ids.
    next_id: u128,
}

impl FakeAds {
    /// Seeds the fake with the default fixture resources.
    pub fn seeded() -> Self {
        let fixtures = Fixtures::default();
        let mut fake = Self {
            next_id: 1,
            ..Self::default()
        };
        let owner = fixtures.seller_with_items.get();
        for id in [
            &fixtures.existing_item_id,
            &fixtures.statistic_item_id,
            &fixtures.deletable_item_id,
        ] {
            fake.insert(id.as_str().to_string(), "Seed", 100, owner, json!({
                "contacts": 1,
                "likes": 2,
                "viewCount": 3
            }));
        }
        fake.sellers.insert(fixtures.seller_without_items.get());
        fake
    }

    /// Wraps the fake in a thread-safe handler.
    pub fn into_handler(self) -> impl Fn(&StubRequest) -> StubResponse + Send + 'static {
        let state = Mutex::new(self);
        move |request| state.lock().unwrap().handle(request)
    }

    /// Stores an item.
    fn insert(&mut self, id: String, name: &str, price: i64, seller: i64, statistics: Value) {
        self.sellers.insert(seller);
        let item = json!({
            "id": id,
            "name": name,
            "price": price,
            "sellerId": seller,
            "statistics": statistics,
            "createdAt": "2026-10-17 10:00:00 +0000 +0000"
        });
        self.items.insert(id, item);
    }

    /// Routes one request.
    fn handle(&mut self, request: &StubRequest) -> StubResponse {
        let path = request.url.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match (request.method.as_str(), segments.as_slice()) {
            ("POST", ["api", "1", "item"]) => self.create(&request.body),
            ("GET", ["api", "1", "item", id]) => self.lookup(id, |item| json!([item])),
            ("GET", ["api", "1", seller, "item"]) => self.seller_items(seller),
            ("GET", ["api", "1" | "2", "statistic", id]) => {
                self.lookup(id, |item| json!([item["statistics"].clone()]))
            }
            ("DELETE", ["api", "2", "item", id]) => self.delete(id),
            _ => error(404, "route not found"),
        }
    }

    /// Handles `POST /api/1/item`.
    fn create(&mut self, raw: &str) -> StubResponse {
        let Ok(body) = serde_json::from_str::<Value>(raw) else {
            return error(400, "invalid json");
        };
        let name = body.get("name").and_then(Value::as_str);
        let price = body.get("price").and_then(Value::as_i64);
        let seller = body.get("sellerId").and_then(Value::as_i64);
        let (Some(name), Some(price), Some(seller)) = (name, price, seller) else {
            return error(400, "name, price and sellerId are required");
        };
        if name.is_empty() || price < 0 || !(111_111..=999_999).contains(&seller) {
            return error(400, "invalid field value");
        }
        let id = Uuid::from_u128(self.next_id).to_string();
        self.next_id += 1;
        let statistics = body.get("statistics").cloned().unwrap_or_else(|| json!({}));
        self.insert(id.clone(), name, price, seller, statistics);
        StubResponse::json(200, &json!({"status": format!("Сохранили объявление - {id}")}))
    }

    /// Looks up an item and renders it with `render`.
    fn lookup(&self, id: &str, render: impl Fn(&Value) -> Value) -> StubResponse {
        if id.is_empty() {
            return error(404, "not found");
        }
        if Uuid::try_parse(id).is_err() {
            return error(400, "id is not a uuid");
        }
        self.items
            .get(id)
            .map_or_else(|| error(404, "item not found"), |item| StubResponse::json(200, &render(item)))
    }

    /// Handles `GET /api/1/{sellerId}/item`.
    fn seller_items(&self, seller: &str) -> StubResponse {
        let Ok(seller) = seller.parse::<i64>() else {
            return error(400, "sellerId is not a number");
        };
        if !self.sellers.contains(&seller) {
            return error(404, "seller not found");
        }
        let items: Vec<&Value> =
            self.items.values().filter(|item| item["sellerId"] == json!(seller)).collect();
        StubResponse::json(200, &json!(items))
    }

    /// Handles `DELETE /api/2/item/{id}`.
    fn delete(&mut self, id: &str) -> StubResponse {
        if Uuid::try_parse(id).is_err() {
            return error(400, "id is not a uuid");
        }
        if self.items.remove(id).is_some() || self.deleted.contains(id) {
            self.deleted.insert(id.to_string());
            return StubResponse::text(200, "");
        }
        error(404, "item not found")
    }
}

/// Renders the service's error envelope.
fn error(status: u16, message: &str) -> StubResponse {
    StubResponse::json(
        status,
        &json!({
            "result": {"message": message, "messages": {}},
            "status": status.to_string(),
            "error": message
        }),
    )
}
