//! REST client for the external Parcel Service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! service is only reachable from the browser session that owns the cookie.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics so fetch failures degrade a
//! single view without breaking hydration of the rest of the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt::Write as _;

use super::types::{CreateParcelAck, CreateParcelRequest, Parcel, ParcelTypeRecord};

/// Origin used when `PARCEL_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Failure of a Parcel Service call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("not found")]
    NotFound,
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Optional filters understood by `GET /parcels/my`.
///
/// The default query adds no parameters, which lets the service apply its own
/// paging defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParcelListQuery {
    pub parcel_type_id: Option<i64>,
    pub has_delivery_cost: Option<bool>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ParcelListQuery {
    fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(id) = self.parcel_type_id {
            pairs.push(format!("parcel_type_id={id}"));
        }
        if let Some(has) = self.has_delivery_cost {
            pairs.push(format!("has_delivery_cost={has}"));
        }
        if let Some(skip) = self.skip {
            pairs.push(format!("skip={skip}"));
        }
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={limit}"));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Base URL of the Parcel Service, without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("PARCEL_API_URL").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE
    } else {
        trimmed
    }
}

fn create_parcel_endpoint(base: &str) -> String {
    format!("{base}/parcels")
}

fn my_parcels_endpoint(base: &str, query: &ParcelListQuery) -> String {
    format!("{base}/parcels/my{}", query.to_query_string())
}

fn parcel_endpoint(base: &str, parcel_id: &str) -> String {
    format!("{base}/parcels/{}", encode_path_segment(parcel_id))
}

fn parcel_types_endpoint(base: &str) -> String {
    format!("{base}/parcel_types")
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub(crate) fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> ApiError {
    if status == 404 {
        ApiError::NotFound
    } else {
        ApiError::Status(status)
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Submit a new parcel via `POST /parcels`, sending the session cookie.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the service answers
/// with a non-success status.
pub async fn create_parcel(request: &CreateParcelRequest) -> Result<CreateParcelAck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&create_parcel_endpoint(api_base()))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        // The acknowledgement body is informational; an empty 2xx still counts.
        Ok(resp.json::<CreateParcelAck>().await.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, create_parcel_endpoint(api_base()));
        Err(ApiError::Unavailable)
    }
}

/// Fetch the caller's parcels via `GET /parcels/my`, sending the session cookie.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status, or a body that
/// is not a parcel array.
pub async fn fetch_my_parcels(query: &ParcelListQuery) -> Result<Vec<Parcel>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&my_parcels_endpoint(api_base(), query))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = my_parcels_endpoint(api_base(), query);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single parcel via `GET /parcels/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on 404, otherwise the usual transport,
/// status, or decode failure.
pub async fn fetch_parcel(parcel_id: &str) -> Result<Parcel, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&parcel_endpoint(api_base(), parcel_id))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = parcel_endpoint(api_base(), parcel_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the categories known to the service via `GET /parcel_types`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status, or a
/// malformed body.
pub async fn fetch_parcel_types() -> Result<Vec<ParcelTypeRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&parcel_types_endpoint(api_base()))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = parcel_types_endpoint(api_base());
        Err(ApiError::Unavailable)
    }
}
