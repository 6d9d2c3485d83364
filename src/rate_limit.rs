// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rate-limit bookkeeping from response headers.
//!
//! The API has reported quota usage under two header conventions over its
//! lifetime (`X-RateLimit-*` and `Rate-Limit-*`). Both are normalized here
//! into one [`RateLimit`] snapshot; a header that is absent or not a number
//! is reported as `None`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use reqwest::header::HeaderMap;
use serde::Serialize;

/// Accepted header names for the remaining request count, in lookup order.
const REMAINING_HEADERS: &[&str] = &["X-RateLimit-Remaining", "Rate-Limit-Remaining"];

/// Accepted header names for the reset time (Unix epoch seconds).
const RESET_HEADERS: &[&str] = &["X-RateLimit-Reset", "Rate-Limit-Reset"];

/// Accepted header names for the total quota.
const TOTAL_HEADERS: &[&str] = &["X-RateLimit-Limit", "Rate-Limit-Total", "Rate-Limit-Limit"];

/// Normalized rate-limit state.
///
/// # Examples
///
/// ```
/// use govee_lib::RateLimit;
/// use reqwest::header::{HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("rate-limit-remaining", HeaderValue::from_static("99"));
/// headers.insert("rate-limit-reset", HeaderValue::from_static("1700000000"));
/// headers.insert("rate-limit-total", HeaderValue::from_static("100"));
///
/// let limit = RateLimit::from_headers(&headers);
/// assert_eq!(limit.remaining, Some(99));
/// assert_eq!(limit.total, Some(100));
/// assert!(limit.reset_at().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    /// Requests left in the current window.
    pub remaining: Option<u64>,
    /// Unix epoch (seconds) at which the window resets.
    pub reset: Option<i64>,
    /// Requests allowed per window.
    pub total: Option<u64>,
}

impl RateLimit {
    /// Builds a snapshot from response headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            remaining: lookup(headers, REMAINING_HEADERS),
            reset: lookup(headers, RESET_HEADERS),
            total: lookup(headers, TOTAL_HEADERS),
        }
    }

    /// Returns `true` if the response reported any rate-limit header.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        self.remaining.is_some() || self.reset.is_some() || self.total.is_some()
    }

    /// Returns the reset time as a timestamp.
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        self.reset.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

fn lookup<T: std::str::FromStr>(headers: &HeaderMap, names: &[&str]) -> Option<T> {
    names.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    })
}

/// Shared holder for the most recent [`RateLimit`].
///
/// Clones share the same state, so every facade built from one
/// [`Session`](crate::Session) observes the same quota. Updates replace the
/// whole snapshot under a write lock, so readers never see a mix of two
/// responses.
#[derive(Debug, Clone, Default)]
pub struct RateLimitTracker {
    state: Arc<RwLock<RateLimit>>,
}

impl RateLimitTracker {
    /// Creates a tracker with nothing reported yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the state with the values found in `headers`.
    pub fn update(&self, headers: &HeaderMap) -> RateLimit {
        let limit = RateLimit::from_headers(headers);
        if !limit.is_reported() {
            tracing::trace!("Response carried no rate-limit headers");
        }
        *self.state.write() = limit;
        limit
    }

    /// Returns the most recent snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RateLimit {
        *self.state.read()
    }
}
