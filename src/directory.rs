// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device directory: lookup from display name or MAC to `(mac, model)`.
//!
//! A directory is built once from the device list and a [`DeviceFamily`].
//! Only devices the family matches are indexed; all others are unknown to
//! it. Lookup never touches the network.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::capabilities::{Capabilities, DeviceFamily};
use crate::error::{Error, Result};
use crate::types::MacAddress;

/// One entry of the device list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Device identifier.
    pub mac: MacAddress,
    /// User-assigned display name.
    pub name: String,
    /// Product model code, e.g. `H6159`.
    pub model: String,
    /// Commands the device accepts.
    pub capabilities: Capabilities,
    /// Whether the device accepts control commands.
    pub controllable: bool,
    /// Whether the device state can be queried.
    pub retrievable: bool,
}

/// Two devices of a family sharing a display name.
///
/// The later device in list order owns the name; the earlier one stays
/// reachable through its MAC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    /// The shared display name.
    pub name: String,
    /// Device that the name resolves to.
    pub kept: MacAddress,
    /// Device that lost the name.
    pub shadowed: MacAddress,
}

/// Name and MAC index over the devices of one family.
///
/// # Examples
///
/// ```
/// use govee_lib::{Capabilities, DeviceDirectory, DeviceFamily, DeviceRecord};
///
/// let lamp = DeviceRecord {
///     mac: "AA:BB:CC:DD:EE:FF:00:11".parse().unwrap(),
///     name: "Lamp".to_string(),
///     model: "H6159".to_string(),
///     capabilities: Capabilities::from_commands(["turn", "color"]),
///     controllable: true,
///     retrievable: true,
/// };
///
/// let directory = DeviceDirectory::build([lamp], DeviceFamily::LIGHTS);
/// let (mac, model) = directory.resolve("Lamp").unwrap();
/// assert_eq!(mac.as_str(), "AA:BB:CC:DD:EE:FF:00:11");
/// assert_eq!(model, "H6159");
///
/// // MAC references are case-insensitive.
/// assert!(directory.resolve("aa:bb:cc:dd:ee:ff:00:11").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DeviceDirectory {
    family: DeviceFamily,
    names: HashMap<String, MacAddress>,
    records: BTreeMap<MacAddress, DeviceRecord>,
    collisions: Vec<NameCollision>,
}

impl DeviceDirectory {
    /// Indexes the devices of `family`, in list order.
    ///
    /// When two devices share a display name, the later one wins the name.
    pub fn build(devices: impl IntoIterator<Item = DeviceRecord>, family: DeviceFamily) -> Self {
        let mut names: HashMap<String, MacAddress> = HashMap::new();
        let mut records = BTreeMap::new();
        let mut collisions = Vec::new();

        for device in devices {
            if !family.matches(&device.capabilities) {
                continue;
            }

            if let Some(previous) = names.insert(device.name.clone(), device.mac.clone())
                && previous != device.mac
            {
                tracing::warn!(
                    family = %family,
                    name = %device.name,
                    kept = %device.mac,
                    shadowed = %previous,
                    "Duplicate device name, only the last device is reachable by name"
                );
                collisions.push(NameCollision {
                    name: device.name.clone(),
                    kept: device.mac.clone(),
                    shadowed: previous,
                });
            }
            records.insert(device.mac.clone(), device);
        }

        tracing::debug!(family = %family, devices = records.len(), "Built device directory");

        Self {
            family,
            names,
            records,
            collisions,
        }
    }

    /// Resolves a display name or MAC to the device's `(mac, model)`.
    ///
    /// A reference shaped like a MAC is always looked up as a MAC, and must
    /// belong to this directory.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no device of the family matches.
    pub fn resolve(&self, reference: &str) -> Result<(&MacAddress, &str)> {
        let record = self.record(reference)?;
        Ok((&record.mac, record.model.as_str()))
    }

    /// Returns the full record for a display name or MAC.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no device of the family matches.
    pub fn record(&self, reference: &str) -> Result<&DeviceRecord> {
        let found = if MacAddress::is_mac_like(reference) {
            MacAddress::parse(reference)
                .ok()
                .and_then(|mac| self.records.get(&mac))
        } else {
            self.names.get(reference).and_then(|mac| self.records.get(mac))
        };

        found.ok_or_else(|| {
            tracing::debug!(family = %self.family, reference, "Unknown device reference");
            Error::DeviceNotFound(reference.to_string())
        })
    }

    /// Returns the family this directory was built for.
    #[must_use]
    pub fn family(&self) -> DeviceFamily {
        self.family
    }

    /// Returns the resolvable display names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over the indexed MACs in sorted order.
    pub fn macs(&self) -> impl Iterator<Item = &MacAddress> {
        self.records.keys()
    }

    /// Iterates over the indexed records in MAC order.
    pub fn records(&self) -> impl Iterator<Item = &DeviceRecord> {
        self.records.values()
    }

    /// Returns the name collisions found while building.
    #[must_use]
    pub fn name_collisions(&self) -> &[NameCollision] {
        &self.collisions
    }

    /// Returns the number of indexed devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no device of the family was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
