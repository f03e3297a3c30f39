//! The request description that flows through the middleware chain.

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{HttpError, HttpResult};

/// A single outgoing request, before any augmenter has seen it.
///
/// Descriptors move by value through the chain: an augmenter takes ownership,
/// may produce a modified copy, and forwards it. Nothing is shared, so a
/// descriptor can never be observed half-modified. Header keys are unique
/// (`HeaderMap::insert` semantics).
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Fully resolved target URL.
    pub url: Url,
    /// Headers accumulated so far.
    pub headers: HeaderMap,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Describe a bodyless request. All Pharmadesk traffic is JSON, so the
    /// `Content-Type` header is set up front.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            method,
            url,
            headers,
            body: None,
        }
    }

    /// Attach a JSON body.
    pub fn with_json<T: Serialize>(mut self, payload: &T) -> HttpResult<Self> {
        let value = serde_json::to_value(payload).map_err(|source| HttpError::Encode { source })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Add or replace a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}
