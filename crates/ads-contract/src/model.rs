// crates/ads-contract/src/model.rs
// ============================================================================
// Module: Ads Data Model
// Description: Item payloads, identifiers, and payload classification.
// Purpose: Encode the input rules the ads service is expected to enforce.
// Dependencies: serde, serde_json, uuid
// ============================================================================

//! ## Overview
//! Wire types for the ads service plus the rules the suite checks them
//! against. The rules are never enforced locally: [`classify_create_payload`]
//! only predicts which status the service must answer with, so negative
//! payloads can still be sent verbatim.
//! Invariants:
//! - Valid seller ids lie in `[SellerId::MIN, SellerId::MAX]`.
//! - Item ids keep their raw text so malformed ids remain sendable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Phrase the service puts in the `status` field of a successful create.
pub const CONFIRMATION_PHRASE: &str = "Сохранили объявление";

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Seller identifier as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(i64);

impl SellerId {
    /// Smallest seller id the service accepts.
    pub const MIN: i64 = 111_111;
    /// Largest seller id the service accepts.
    pub const MAX: i64 = 999_999;

    /// Wraps a raw seller id without validating it.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns true when the id lies inside the accepted range.
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.0 >= Self::MIN && self.0 <= Self::MAX
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item identifier. Expected to be a UUID but stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps raw id text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the id parses as a UUID.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        Uuid::try_parse(&self.0).is_ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Payloads
// ============================================================================

/// Optional counters attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatistics {
    /// Contact requests.
    pub contacts: i64,
    /// Likes.
    pub likes: i64,
    /// Views.
    #[serde(rename = "viewCount")]
    pub view_count: i64,
}

/// Body of `POST /api/1/item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    /// Item title.
    pub name: String,
    /// Price in whole currency units.
    pub price: i64,
    /// Owning seller.
    #[serde(rename = "sellerId")]
    pub seller_id: SellerId,
    /// Optional counters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ItemStatistics>,
}

impl ItemPayload {
    /// Builds a payload with only the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, price: i64, seller_id: i64) -> Self {
        Self {
            name: name.into(),
            price,
            seller_id: SellerId::new(seller_id),
            statistics: None,
        }
    }

    /// Attaches statistics counters.
    #[must_use]
    pub const fn with_statistics(mut self, contacts: i64, likes: i64, view_count: i64) -> Self {
        self.statistics = Some(ItemStatistics {
            contacts,
            likes,
            view_count,
        });
        self
    }

    /// Checks the payload against the service's input rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`PayloadRejection`] the service should report.
    pub fn validate(&self) -> Result<(), PayloadRejection> {
        if self.name.is_empty() {
            return Err(PayloadRejection::EmptyName);
        }
        if self.price < 0 {
            return Err(PayloadRejection::NegativePrice(self.price));
        }
        if !self.seller_id.is_in_range() {
            return Err(PayloadRejection::SellerIdOutOfRange(self.seller_id.get()));
        }
        Ok(())
    }

    /// Returns the JSON wire form of the payload.
    ///
    /// Built field by field so the body is always an object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut body = Map::new();
        body.insert("name".to_string(), Value::from(self.name.as_str()));
        body.insert("price".to_string(), Value::from(self.price));
        body.insert("sellerId".to_string(), Value::from(self.seller_id.get()));
        if let Some(statistics) = self.statistics {
            let mut counters = Map::new();
            counters.insert("contacts".to_string(), Value::from(statistics.contacts));
            counters.insert("likes".to_string(), Value::from(statistics.likes));
            counters.insert("viewCount".to_string(), Value::from(statistics.view_count));
            body.insert("statistics".to_string(), Value::Object(counters));
        }
        Value::Object(body)
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Reason the service is expected to reject a create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadRejection {
    /// Body is not a JSON object.
    NotAnObject,
    /// Required field is absent.
    MissingField(&'static str),
    /// Field has the wrong JSON type.
    WrongType(&'static str),
    /// `name` is an empty string.
    EmptyName,
    /// `price` is below zero.
    NegativePrice(i64),
    /// `sellerId` is outside the accepted range.
    SellerIdOutOfRange(i64),
}

impl fmt::Display for PayloadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("payload is not a json object"),
            Self::MissingField(field) => write!(f, "missing required field {field}"),
            Self::WrongType(field) => write!(f, "field {field} has the wrong type"),
            Self::EmptyName => f.write_str("name is empty"),
            Self::NegativePrice(price) => write!(f, "price {price} is negative"),
            Self::SellerIdOutOfRange(id) => write!(
                f,
                "sellerId {id} outside [{}, {}]",
                SellerId::MIN,
                SellerId::MAX
            ),
        }
    }
}

/// Predicted service verdict for a create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadVerdict {
    /// The service must store the item.
    Accepted,
    /// The service must reject the payload.
    Rejected(PayloadRejection),
}

impl PayloadVerdict {
    /// Returns the status code the service must answer with.
    #[must_use]
    pub const fn expected_status(&self) -> u16 {
        match self {
            Self::Accepted => 200,
            Self::Rejected(_) => 400,
        }
    }
}

/// Classifies a raw create payload.
#[must_use]
pub fn classify_create_payload(payload: &Value) -> PayloadVerdict {
    match check_create_payload(payload) {
        Ok(()) => PayloadVerdict::Accepted,
        Err(rejection) => PayloadVerdict::Rejected(rejection),
    }
}

/// Applies the create rules field by field.
fn check_create_payload(payload: &Value) -> Result<(), PayloadRejection> {
    let Value::Object(fields) = payload else {
        return Err(PayloadRejection::NotAnObject);
    };
    let name = required(fields, "name")?.as_str().ok_or(PayloadRejection::WrongType("name"))?;
    let price = required(fields, "price")?.as_i64().ok_or(PayloadRejection::WrongType("price"))?;
    let seller_id =
        required(fields, "sellerId")?.as_i64().ok_or(PayloadRejection::WrongType("sellerId"))?;
    if let Some(statistics) = fields.get("statistics")
        && !statistics.is_object()
    {
        return Err(PayloadRejection::WrongType("statistics"));
    }
    ItemPayload::new(name, price, seller_id).validate()
}

/// Looks up a required field.
fn required<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, PayloadRejection> {
    fields.get(name).ok_or(PayloadRejection::MissingField(name))
}

/// Extracts the item id the service appends to a create confirmation.
///
/// The service answers `"Сохранили объявление - <uuid>"`; the last token that
/// parses as a UUID wins.
#[must_use]
pub fn created_item_id(status: &str) -> Option<ItemId> {
    status
        .split_whitespace()
        .rev()
        .map(|token| token.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-'))
        .find(|token| Uuid::try_parse(token).is_ok())
        .map(ItemId::new)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
