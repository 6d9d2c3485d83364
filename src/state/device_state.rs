// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded device state.

use serde_json::Value;

use crate::error::ParseError;
use crate::types::{Brightness, MacAddress, PowerState, RgbColor};

/// Reported state of a device.
///
/// All fields are optional: devices only report the properties they have,
/// and a property with an unexpected shape is treated as not reported. The
/// decoded body stays available through [`raw`](Self::raw).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceState {
    device: Option<MacAddress>,
    model: Option<String>,
    online: Option<bool>,
    power: Option<PowerState>,
    brightness: Option<Brightness>,
    color: Option<RgbColor>,
    color_temperature: Option<u16>,
    raw: Value,
}

impl DeviceState {
    /// Decodes a state response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not JSON.
    pub fn from_body(body: &str) -> Result<Self, ParseError> {
        let raw: Value = serde_json::from_str(body)?;
        Ok(Self::from_json(raw))
    }

    /// Extracts the known properties from a decoded body.
    ///
    /// Accepts both the full response (`{"data": {...}}`) and the bare
    /// `data` object.
    #[must_use]
    pub fn from_json(raw: Value) -> Self {
        let mut state = Self::default();
        let data = raw.get("data").unwrap_or(&raw);

        state.device = data
            .get("device")
            .and_then(Value::as_str)
            .and_then(|d| MacAddress::parse(d).ok());
        state.model = data.get("model").and_then(Value::as_str).map(str::to_string);

        let properties = data
            .get("properties")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for (key, value) in properties.iter().filter_map(Value::as_object).flatten() {
            state.apply_property(key, value);
        }

        state.raw = raw;
        state
    }

    fn apply_property(&mut self, key: &str, value: &Value) {
        match key {
            "online" => self.online = as_bool(value),
            "powerState" => {
                self.power = value.as_str().and_then(|s| s.parse().ok());
            }
            "brightness" => {
                self.brightness = value.as_i64().and_then(|b| Brightness::new(b).ok());
            }
            "color" => self.color = serde_json::from_value(value.clone()).ok(),
            "colorTem" | "colorTemInKelvin" => {
                // Some models report 0 while in RGB mode.
                self.color_temperature = value
                    .as_u64()
                    .filter(|k| *k > 0)
                    .and_then(|k| u16::try_from(k).ok());
            }
            other => tracing::trace!(property = other, "Unrecognized state property"),
        }
    }

    /// Returns the reporting device.
    #[must_use]
    pub fn device(&self) -> Option<&MacAddress> {
        self.device.as_ref()
    }

    /// Returns the reporting device's model.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Returns whether the device is reachable by the cloud.
    #[must_use]
    pub fn online(&self) -> Option<bool> {
        self.online
    }

    /// Returns the power state.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Returns the brightness level.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Returns the RGB color.
    #[must_use]
    pub fn color(&self) -> Option<RgbColor> {
        self.color
    }

    /// Returns the color temperature in Kelvin.
    ///
    /// Reported values are passed through without range checking.
    #[must_use]
    pub fn color_temperature(&self) -> Option<u16> {
        self.color_temperature
    }

    /// Returns the decoded response body.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consumes the state and returns the decoded response body.
    #[must_use]
    pub fn into_raw(self) -> Value {
        self.raw
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
