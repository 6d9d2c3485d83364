// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device MAC address.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValueError;

/// A device identifier in canonical colon-separated hex form.
///
/// Govee reports device IDs as eight hex pairs (`AA:BB:CC:DD:EE:FF:00:11`);
/// classic six-pair MACs are accepted as well. Parsing is case-insensitive
/// and the stored form is uppercase, so `aa:bb:...` and `AA:BB:...` name the
/// same device.
///
/// # Examples
///
/// ```
/// use govee_lib::types::MacAddress;
///
/// let mac: MacAddress = "aa:bb:cc:dd:ee:ff:00:11".parse().unwrap();
/// assert_eq!(mac.as_str(), "AA:BB:CC:DD:EE:FF:00:11");
///
/// assert!(MacAddress::is_mac_like("AA:BB:CC:DD:EE:FF"));
/// assert!(!MacAddress::is_mac_like("Living Room"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Accepted numbers of hex pairs.
    const PAIR_COUNTS: [usize; 2] = [6, 8];

    /// Parses a MAC address.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidMacAddress` if `value` is not six or eight
    /// colon-separated hex pairs.
    pub fn parse(value: &str) -> Result<Self, ValueError> {
        if Self::is_mac_like(value) {
            Ok(Self(value.to_ascii_uppercase()))
        } else {
            Err(ValueError::InvalidMacAddress(value.to_string()))
        }
    }

    /// Returns whether `value` has the shape of a MAC address.
    #[must_use]
    pub fn is_mac_like(value: &str) -> bool {
        let pairs: Vec<&str> = value.split(':').collect();
        Self::PAIR_COUNTS.contains(&pairs.len())
            && pairs
                .iter()
                .all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_hexdigit()))
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MacAddress {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for MacAddress {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
