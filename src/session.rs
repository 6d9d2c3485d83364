// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authenticated session with the Govee developer API.
//!
//! A [`Session`] owns the API key, the injected [`Transport`] and the shared
//! [`RateLimitTracker`]. Every authenticated request goes through
//! [`Session::call`], which first runs the liveness probe and refuses to send
//! anything while the service is down.
//!
//! # Examples
//!
//! ```no_run
//! use govee_lib::Session;
//!
//! # async fn example() -> govee_lib::Result<()> {
//! let session = Session::new("my-api-key")?;
//! println!("{} devices", session.device_count().await?);
//!
//! let lights = session.lights().await?;
//! lights.turn_on("Living Room").await?;
//! println!("{:?}", session.rate_limit());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::{Instrument, Span};

use crate::capabilities::{Capabilities, DeviceFamily};
use crate::directory::{DeviceDirectory, DeviceRecord};
use crate::dispatch::CommandDispatcher;
use crate::error::{Error, ParseError, Result, TransportError, ValueError};
use crate::lights::Lights;
use crate::plugs::Plugs;
use crate::protocol::{ApiRequest, ApiResponse, HttpConfig, HttpTransport, Transport};
use crate::rate_limit::{RateLimit, RateLimitTracker};
use crate::types::MacAddress;

/// Liveness probe endpoint.
pub const PING_ENDPOINT: &str = "/ping";
/// Device list endpoint.
pub const DEVICE_ENDPOINT: &str = "/v1/devices";
/// Device control endpoint.
pub const CONTROL_ENDPOINT: &str = "/v1/devices/control";
/// Device state endpoint.
pub const STATE_ENDPOINT: &str = "/v1/devices/state";
/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "Govee-API-Key";

/// Authenticated connection to the API.
///
/// Cloning is cheap; clones share the transport and the rate-limit state.
pub struct Session<T: Transport = HttpTransport> {
    transport: Arc<T>,
    base_url: Arc<str>,
    headers: Arc<HeaderMap>,
    probe_headers: Arc<HeaderMap>,
    rate_limit: RateLimitTracker,
    span: Span,
}

impl Session<HttpTransport> {
    /// Creates a session against the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty or cannot be sent as a header,
    /// or if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Returns a builder for a customized session.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(api_key)
    }
}

impl<T: Transport> Session<T> {
    /// Returns the standard headers sent with authenticated calls:
    /// `User-Agent`, `Content-Type` and the API key.
    #[must_use]
    pub fn build_headers(&self) -> HeaderMap {
        (*self.headers).clone()
    }

    /// Returns the API root this session talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the injected transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the most recent rate-limit state.
    ///
    /// All fields are `None` until the first successful call.
    #[must_use]
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit.snapshot()
    }

    /// Returns the tracker shared by this session and its clones.
    #[must_use]
    pub fn rate_limit_tracker(&self) -> &RateLimitTracker {
        &self.rate_limit
    }

    /// Probes `GET /ping`.
    ///
    /// The probe is sent without the API key. It succeeds only on a 2xx
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `Error::ServiceUnavailable` on a non-2xx response or when no
    /// response is received.
    pub async fn check_liveness(&self) -> Result<()> {
        let request = ApiRequest::new(Method::GET, self.url(PING_ENDPOINT))
            .with_headers((*self.probe_headers).clone());

        async {
            match self.transport.execute(request).await {
                Ok(response) if response.is_success() => {
                    tracing::trace!("Liveness probe succeeded");
                    Ok(())
                }
                Ok(response) => {
                    tracing::warn!(
                        status = response.status.as_u16(),
                        "Liveness probe failed, API seems offline"
                    );
                    Err(Error::ServiceUnavailable {
                        status: Some(response.status.as_u16()),
                    })
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Liveness probe could not reach the API");
                    Err(Error::ServiceUnavailable { status: None })
                }
            }
        }
        .instrument(self.span.clone())
        .await
    }

    /// Sends an authenticated request.
    ///
    /// Runs [`check_liveness`](Self::check_liveness) first and sends nothing
    /// if it fails. On success the rate-limit state is replaced from the
    /// response headers. Nothing is retried.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Path and query relative to the API root, e.g. `/v1/devices`
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// - `Error::ServiceUnavailable` if the liveness probe fails
    /// - `Error::Transport` if no response is received
    /// - `Error::Api` with the verbatim body on a non-2xx response
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse> {
        self.check_liveness().await?;

        let mut request =
            ApiRequest::new(method, self.url(path)).with_headers((*self.headers).clone());
        if let Some(body) = body {
            request = request.with_body(body);
        }

        async {
            let method = request.method.clone();
            let response = match self.transport.execute(request).await {
                Ok(response) => response,
                Err(e) => return Err(Error::Transport(e)),
            };

            if !response.is_success() {
                tracing::warn!(
                    method = %method,
                    path,
                    status = response.status.as_u16(),
                    body = %response.body,
                    "API returned an error"
                );
                return Err(Error::Api {
                    status: response.status.as_u16(),
                    body: response.body,
                });
            }

            let limit = self.rate_limit.update(&response.headers);
            tracing::debug!(
                method = %method,
                path,
                remaining = ?limit.remaining,
                "API call succeeded"
            );
            Ok(response)
        }
        .instrument(self.span.clone())
        .await
    }

    /// Fetches the full device list.
    ///
    /// Entries whose `device` field is not a MAC address are skipped with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the body cannot be decoded.
    pub async fn device_list(&self) -> Result<Vec<DeviceRecord>> {
        let response = self.call(Method::GET, DEVICE_ENDPOINT, None).await?;
        let list: DeviceListResponse =
            serde_json::from_str(&response.body).map_err(ParseError::Json)?;
        let entries = list
            .data
            .ok_or_else(|| ParseError::MissingField("data".to_string()))?
            .devices;

        let devices: Vec<DeviceRecord> = entries
            .into_iter()
            .filter_map(|raw| match raw.into_record() {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping device with unusable identifier");
                    None
                }
            })
            .collect();

        tracing::debug!(count = devices.len(), "Fetched device list");
        Ok(devices)
    }

    /// Returns the number of devices on the account.
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched.
    pub async fn device_count(&self) -> Result<usize> {
        Ok(self.device_list().await?.len())
    }

    /// Returns the MAC addresses of all devices, in list order.
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched.
    pub async fn device_macs(&self) -> Result<Vec<MacAddress>> {
        Ok(self.device_list().await?.into_iter().map(|d| d.mac).collect())
    }

    /// Returns the display names of all devices, in list order.
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched.
    pub async fn device_names(&self) -> Result<Vec<String>> {
        Ok(self.device_list().await?.into_iter().map(|d| d.name).collect())
    }

    /// Builds a directory of the devices matching `family`.
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched.
    pub async fn directory(&self, family: DeviceFamily) -> Result<DeviceDirectory> {
        let devices = self.device_list().await?;
        Ok(DeviceDirectory::build(devices, family))
    }

    /// Returns the lights (color-capable devices) of the account.
    ///
    /// The directory is built once, now; call again to pick up newly
    /// registered devices.
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched.
    pub async fn lights(&self) -> Result<Lights<T>> {
        let dispatcher = CommandDispatcher::connect(self.clone(), DeviceFamily::LIGHTS).await?;
        Ok(Lights::new(dispatcher))
    }

    /// Returns the plugs (devices without color support) of the account.
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched.
    pub async fn plugs(&self) -> Result<Plugs<T>> {
        let dispatcher = CommandDispatcher::connect(self.clone(), DeviceFamily::PLUGS).await?;
        Ok(Plugs::new(dispatcher))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl<T: Transport> Clone for Session<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: Arc::clone(&self.base_url),
            headers: Arc::clone(&self.headers),
            probe_headers: Arc::clone(&self.probe_headers),
            rate_limit: self.rate_limit.clone(),
            span: self.span.clone(),
        }
    }
}

impl<T: Transport> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The key is never printed.
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("rate_limit", &self.rate_limit.snapshot())
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Session`].
///
/// # Examples
///
/// ```
/// use govee_lib::Session;
/// use std::time::Duration;
///
/// let session = Session::builder("my-api-key")
///     .with_timeout(Duration::from_secs(5))
///     .with_span(tracing::info_span!("govee", tag = "kitchen"))
///     .build()
///     .unwrap();
///
/// assert_eq!(session.base_url(), "https://developer-api.govee.com");
/// ```
#[derive(Debug)]
pub struct SessionBuilder {
    api_key: String,
    config: HttpConfig,
    span: Option<Span>,
}

impl SessionBuilder {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            config: HttpConfig::new(),
            span: None,
        }
    }

    /// Replaces the whole HTTP configuration.
    #[must_use]
    pub fn with_config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    /// Sets the request timeout used by [`build`](Self::build).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Sets the span every request of the session is recorded under.
    ///
    /// Defaults to `info_span!("govee")`.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Builds a session using the reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty or not a valid header value, or
    /// if the HTTP client cannot be created.
    pub fn build(self) -> Result<Session<HttpTransport>> {
        let transport = self.config.build_transport()?;
        self.build_with_transport(transport)
    }

    /// Builds a session using a caller-supplied transport.
    ///
    /// The configured timeout is not applied; deadlines are the transport's
    /// concern.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty or not a valid header value.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<Session<T>> {
        if self.api_key.trim().is_empty() {
            return Err(ValueError::EmptyApiKey.into());
        }

        let user_agent = HeaderValue::from_str(self.config.user_agent())
            .map_err(|_| TransportError::InvalidHeader("User-Agent"))?;
        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| TransportError::InvalidHeader(API_KEY_HEADER))?;
        api_key.set_sensitive(true);

        let mut probe_headers = HeaderMap::new();
        probe_headers.insert(USER_AGENT, user_agent);

        let mut headers = probe_headers.clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, api_key);

        Ok(Session {
            transport: Arc::new(transport),
            base_url: Arc::from(self.config.base_url()),
            headers: Arc::new(headers),
            probe_headers: Arc::new(probe_headers),
            rate_limit: RateLimitTracker::new(),
            span: self
                .span
                .unwrap_or_else(|| tracing::info_span!("govee", tag = "govee")),
        })
    }
}

// ============================================================================
// Device list wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct DeviceListResponse {
    data: Option<DeviceListData>,
}

#[derive(Debug, Deserialize)]
struct DeviceListData {
    #[serde(default)]
    devices: Vec<RawDevice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDevice {
    device: String,
    #[serde(default)]
    device_name: String,
    model: String,
    #[serde(default)]
    controllable: Option<bool>,
    #[serde(default)]
    retrievable: Option<bool>,
    #[serde(default)]
    support_cmds: Capabilities,
}

impl RawDevice {
    fn into_record(self) -> std::result::Result<DeviceRecord, ValueError> {
        Ok(DeviceRecord {
            mac: MacAddress::parse(&self.device)?,
            name: self.device_name,
            model: self.model,
            capabilities: self.support_cmds,
            controllable: self.controllable.unwrap_or(true),
            retrievable: self.retrievable.unwrap_or(true),
        })
    }
}
