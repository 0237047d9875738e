// crates/ads-contract/src/endpoint.rs
// ============================================================================
// Module: Ads Endpoints
// Description: Endpoint table for both ads API versions.
// Purpose: Map each operation to its method, version, and URL.
// Dependencies: serde, url
// ============================================================================

//! ## Overview
//! Each [`Endpoint`] is a (method, path template, API version) triple. URLs
//! are built segment by segment so path arguments are percent-encoded as a
//! single segment: a blank seller id becomes `%20` and an empty id leaves a
//! trailing slash.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::ContractError;

// ============================================================================
// SECTION: API Versions
// ============================================================================

/// Ads API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiVersion {
    /// `/api/1`.
    V1,
    /// `/api/2`.
    V2,
}

impl ApiVersion {
    /// Returns the version path segment.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2 => "2",
        }
    }
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

/// Ads service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// `POST /api/1/item`.
    CreateItem,
    /// `GET /api/1/item/{id}`.
    GetItem,
    /// `GET /api/1/{sellerId}/item`.
    GetSellerItems,
    /// `GET /api/1/statistic/{id}`.
    GetStatistic,
    /// `GET /api/2/statistic/{id}`.
    GetStatisticV2,
    /// `DELETE /api/2/item/{id}`.
    DeleteItemV2,
}

impl Endpoint {
    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::CreateItem => Method::POST,
            Self::GetItem | Self::GetSellerItems | Self::GetStatistic | Self::GetStatisticV2 => {
                Method::GET
            }
            Self::DeleteItemV2 => Method::DELETE,
        }
    }

    /// Returns the API version.
    #[must_use]
    pub const fn version(self) -> ApiVersion {
        match self {
            Self::CreateItem | Self::GetItem | Self::GetSellerItems | Self::GetStatistic => {
                ApiVersion::V1
            }
            Self::GetStatisticV2 | Self::DeleteItemV2 => ApiVersion::V2,
        }
    }

    /// Returns the path template relative to the version root.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::CreateItem => "/item",
            Self::GetItem | Self::DeleteItemV2 => "/item/{id}",
            Self::GetSellerItems => "/{sellerId}/item",
            Self::GetStatistic | Self::GetStatisticV2 => "/statistic/{id}",
        }
    }

    /// Returns true when the path carries an argument.
    #[must_use]
    pub const fn takes_argument(self) -> bool {
        !matches!(self, Self::CreateItem)
    }

    /// Returns the method and full path template, e.g.
    /// `GET /api/1/item/{id}`.
    #[must_use]
    pub fn route(self) -> String {
        format!("{} /api/{}{}", self.method(), self.version().segment(), self.template())
    }

    /// Builds the request URL under `base`.
    ///
    /// Any path already present on `base` is kept as a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::BaseUrl`] when `base` cannot carry path
    /// segments.
    pub fn url(self, base: &Url, argument: &str) -> Result<Url, ContractError> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| ContractError::BaseUrl {
                url: base.to_string(),
                reason: "url cannot be a base".to_string(),
            })?;
            segments.pop_if_empty().extend(["api", self.version().segment()]);
            match self {
                Self::CreateItem => {
                    segments.push("item");
                }
                Self::GetItem | Self::DeleteItemV2 => {
                    segments.extend(["item", argument]);
                }
                Self::GetSellerItems => {
                    segments.extend([argument, "item"]);
                }
                Self::GetStatistic | Self::GetStatisticV2 => {
                    segments.extend(["statistic", argument]);
                }
            }
        }
        Ok(url)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
