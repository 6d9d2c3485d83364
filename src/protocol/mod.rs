// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to the Govee developer API.
//!
//! The [`Session`](crate::Session) never touches the network itself; it hands
//! fully-formed [`ApiRequest`]s to a [`Transport`]. [`HttpTransport`] is the
//! reqwest-backed implementation; any other type implementing the trait
//! (a proxy, a recording fake, a client with its own retry or deadline
//! policy) can be injected instead.

mod http;

pub use http::{HttpConfig, HttpTransport};

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::error::TransportError;

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, including any query string.
    pub url: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A response as received, whatever its status.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response with the given status and body and no headers.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP capability injected into a [`Session`](crate::Session).
///
/// Implementations return every response they receive, including non-2xx
/// ones; status policy belongs to the session. An `Err` means no response
/// was obtained at all.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends the request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the exchange fails before a response is
    /// received.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
