// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `govee_lib` library.
//!
//! Failures are grouped by where they are detected: local value validation
//! and device resolution (no request is sent), the liveness probe, the
//! transport, the upstream API and response decoding.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A command parameter violated its documented range.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The request could not be exchanged with the API.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The liveness probe failed, so no command was sent.
    #[error("service unavailable{}", probe_status(.status))]
    ServiceUnavailable {
        /// HTTP status returned by the probe, if a response was received.
        status: Option<u16>,
    },

    /// The API answered a well-formed request with a non-success status.
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The reference matched no device of the addressed family.
    #[error("device not found: {0}")]
    DeviceNotFound(String),
}

impl Error {
    /// Returns the upstream `message` field of an [`Error::Api`] body.
    ///
    /// The Govee API reports failures as `{"message": "..."}`. Falls back to
    /// the raw body when it is not JSON or has no `message` string.
    #[must_use]
    pub fn api_message(&self) -> Option<String> {
        let Self::Api { body, .. } = self else {
            return None;
        };
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned));
        Some(message.unwrap_or_else(|| body.clone()))
    }
}

#[allow(clippy::ref_option)]
fn probe_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

/// Errors related to value validation and constraints.
///
/// These are raised before any network access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        field: &'static str,
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A string is not a colon-separated hex MAC address.
    #[error("invalid MAC address: {0}")]
    InvalidMacAddress(String),

    /// A string is not a valid hex color.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// Power state string not recognized.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// The device does not list the command in its `supportCmds`.
    #[error("device {device} does not support the {command} command")]
    UnsupportedCommand {
        /// MAC of the addressed device.
        device: String,
        /// Rejected command name.
        command: &'static str,
    },

    /// The API key was empty.
    #[error("API key must not be empty")]
    EmptyApiKey,
}

impl ValueError {
    /// Returns the name of the parameter that failed validation, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::OutOfRange { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Errors raised while exchanging a request with the API.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A header value could not be encoded.
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}

/// Errors related to decoding API responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
