// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capabilities and device families.
//!
//! The device list reports, for every device, the command names it accepts
//! (`supportCmds`). [`Capabilities`] holds that set; a [`DeviceFamily`] is a
//! named predicate over it that decides which devices a facade addresses.
//!
//! New families are new predicates, not new types:
//!
//! ```
//! use govee_lib::{Capabilities, DeviceFamily};
//!
//! fn dimmable_white(caps: &Capabilities) -> bool {
//!     caps.supports_brightness() && !caps.supports_color()
//! }
//!
//! let family = DeviceFamily::new("dimmable white", dimmable_white);
//! let caps = Capabilities::from_commands(["turn", "brightness"]);
//! assert!(family.matches(&caps));
//! assert!(!DeviceFamily::LIGHTS.matches(&caps));
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Command name for power control.
pub const CMD_TURN: &str = "turn";
/// Command name for brightness control.
pub const CMD_BRIGHTNESS: &str = "brightness";
/// Command name for color temperature control.
pub const CMD_COLOR_TEMPERATURE: &str = "colorTem";
/// Command name for RGB color control.
pub const CMD_COLOR: &str = "color";

/// Set of command names a device supports.
///
/// # Examples
///
/// ```
/// use govee_lib::Capabilities;
///
/// let caps = Capabilities::from_commands(["turn", "brightness", "color", "colorTem"]);
/// assert!(caps.supports_color());
/// assert!(caps.supports_color_temperature());
/// assert_eq!(caps.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(BTreeSet<String>);

impl Capabilities {
    /// Creates a capability set from command names.
    #[must_use]
    pub fn from_commands<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(commands.into_iter().map(Into::into).collect())
    }

    /// Returns whether the device accepts the named command.
    #[must_use]
    pub fn supports(&self, command: &str) -> bool {
        self.0.contains(command)
    }

    /// Returns whether the device can be switched on and off.
    #[must_use]
    pub fn supports_power(&self) -> bool {
        self.supports(CMD_TURN)
    }

    /// Returns whether the device supports brightness control.
    #[must_use]
    pub fn supports_brightness(&self) -> bool {
        self.supports(CMD_BRIGHTNESS)
    }

    /// Returns whether the device supports color temperature control.
    #[must_use]
    pub fn supports_color_temperature(&self) -> bool {
        self.supports(CMD_COLOR_TEMPERATURE)
    }

    /// Returns whether the device supports RGB color control.
    #[must_use]
    pub fn supports_color(&self) -> bool {
        self.supports(CMD_COLOR)
    }

    /// Returns the number of supported commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no command is supported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the supported command names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Capabilities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_commands(iter)
    }
}

/// Capability predicate selecting the devices of a family.
pub type CapabilityPredicate = fn(&Capabilities) -> bool;

/// A named partition of the device list.
///
/// [`Lights`](crate::Lights) address [`DeviceFamily::LIGHTS`] (color-capable
/// devices); [`Plugs`](crate::Plugs) address [`DeviceFamily::PLUGS`]
/// (everything else).
#[derive(Clone, Copy)]
pub struct DeviceFamily {
    name: &'static str,
    predicate: CapabilityPredicate,
}

impl DeviceFamily {
    /// Color-capable devices.
    pub const LIGHTS: Self = Self::new("lights", Capabilities::supports_color);

    /// Devices without color support.
    pub const PLUGS: Self = Self::new("plugs", is_simple_switch);

    /// Creates a family from a name and a capability predicate.
    #[must_use]
    pub const fn new(name: &'static str, predicate: CapabilityPredicate) -> Self {
        Self { name, predicate }
    }

    /// Returns the family name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns whether a device with `capabilities` belongs to this family.
    #[must_use]
    pub fn matches(&self, capabilities: &Capabilities) -> bool {
        (self.predicate)(capabilities)
    }
}

impl fmt::Debug for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeviceFamily").field(&self.name).finish()
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn is_simple_switch(capabilities: &Capabilities) -> bool {
    !capabilities.supports_color()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulb() -> Capabilities {
        Capabilities::from_commands(["turn", "brightness", "color", "colorTem"])
    }

    fn plug() -> Capabilities {
        Capabilities::from_commands(["turn"])
    }

    #[test]
    fn supports_named_commands() {
        let caps = bulb();
        assert!(caps.supports_power());
        assert!(caps.supports_brightness());
        assert!(caps.supports_color());
        assert!(caps.supports_color_temperature());
        assert!(!caps.supports("music"));
    }

    #[test]
    fn families_partition_devices() {
        for caps in [bulb(), plug(), Capabilities::default()] {
            assert_ne!(
                DeviceFamily::LIGHTS.matches(&caps),
                DeviceFamily::PLUGS.matches(&caps)
            );
        }
        assert!(DeviceFamily::LIGHTS.matches(&bulb()));
        assert!(DeviceFamily::PLUGS.matches(&plug()));
    }

    #[test]
    fn membership_is_exact() {
        // "colorTem" alone does not make a device color-capable
        let caps = Capabilities::from_commands(["turn", "colorTem"]);
        assert!(!caps.supports_color());
        assert!(DeviceFamily::PLUGS.matches(&caps));
    }

    #[test]
    fn deserializes_from_support_cmds_array() {
        let caps: Capabilities = serde_json::from_str(r#"["turn","color","turn"]"#).unwrap();
        assert_eq!(caps.len(), 2);
        assert_eq!(caps.iter().collect::<Vec<_>>(), ["color", "turn"]);
    }

    #[test]
    fn family_display_and_debug() {
        assert_eq!(DeviceFamily::LIGHTS.to_string(), "lights");
        assert_eq!(format!("{:?}", DeviceFamily::PLUGS), "DeviceFamily(\"plugs\")");
    }
}
