// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Govee control command definitions.
//!
//! Every control request carries exactly one command: a name and a value,
//! addressed to a device by MAC and model.
//!
//! # Available Commands
//!
//! | Command Type | Name | Value |
//! |-------------|------|-------|
//! | [`PowerCommand`] | `turn` | `"on"` / `"off"` |
//! | [`BrightnessCommand`] | `brightness` | `0`..=`100` |
//! | [`ColorTemperatureCommand`] | `colorTem` | `2000`..=`9000` |
//! | [`ColorCommand`] | `color` | `{"r":..,"g":..,"b":..}` |
//!
//! [`DeviceCommand`] wraps all of them in one enum.
//!
//! # Examples
//!
//! ```
//! use govee_lib::command::{BrightnessCommand, Command, ControlRequest};
//! use govee_lib::types::{Brightness, MacAddress};
//!
//! let mac: MacAddress = "AA:BB:CC:DD:EE:FF:00:11".parse().unwrap();
//! let cmd = BrightnessCommand(Brightness::new(75).unwrap());
//! assert_eq!(cmd.name(), "brightness");
//!
//! let body = ControlRequest::new(&mac, "H6159", &cmd).to_json().unwrap();
//! assert_eq!(
//!     body,
//!     r#"{"device":"AA:BB:CC:DD:EE:FF:00:11","model":"H6159","cmd":{"name":"brightness","value":75}}"#
//! );
//! ```

mod light;
mod power;

pub use light::{BrightnessCommand, ColorCommand, ColorTemperatureCommand};
pub use power::PowerCommand;

use serde::Serialize;

use crate::error::ParseError;
use crate::types::{Brightness, ColorTemperature, MacAddress, RgbColor};

/// A command that can be sent to a Govee device.
pub trait Command {
    /// Returns the command name, e.g. `"turn"` or `"colorTem"`.
    fn name(&self) -> &'static str;

    /// Returns the command value as JSON.
    fn value(&self) -> serde_json::Value;

    /// Returns the `cmd` object of a control request.
    fn to_body(&self) -> CommandBody {
        CommandBody {
            name: self.name(),
            value: self.value(),
        }
    }
}

/// Any of the supported commands, as one value.
///
/// # Examples
///
/// ```
/// use govee_lib::command::{Command, DeviceCommand};
/// use govee_lib::types::Brightness;
///
/// let cmd = DeviceCommand::SetBrightness(Brightness::new(30).unwrap());
/// assert_eq!(cmd.name(), "brightness");
/// assert_eq!(DeviceCommand::TurnOff.value(), "off");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    /// Switch on.
    TurnOn,
    /// Switch off.
    TurnOff,
    /// Set the brightness level.
    SetBrightness(Brightness),
    /// Set the white color temperature.
    SetColorTemperature(ColorTemperature),
    /// Set an RGB color.
    SetColor(RgbColor),
}

impl Command for DeviceCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::TurnOn => PowerCommand::On.name(),
            Self::TurnOff => PowerCommand::Off.name(),
            Self::SetBrightness(b) => BrightnessCommand(*b).name(),
            Self::SetColorTemperature(t) => ColorTemperatureCommand(*t).name(),
            Self::SetColor(c) => ColorCommand(*c).name(),
        }
    }

    fn value(&self) -> serde_json::Value {
        match self {
            Self::TurnOn => PowerCommand::On.value(),
            Self::TurnOff => PowerCommand::Off.value(),
            Self::SetBrightness(b) => BrightnessCommand(*b).value(),
            Self::SetColorTemperature(t) => ColorTemperatureCommand(*t).value(),
            Self::SetColor(c) => ColorCommand(*c).value(),
        }
    }
}

impl From<PowerCommand> for DeviceCommand {
    fn from(command: PowerCommand) -> Self {
        match command {
            PowerCommand::On => Self::TurnOn,
            PowerCommand::Off => Self::TurnOff,
        }
    }
}

/// The `cmd` object of a control request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandBody {
    /// Command name.
    pub name: &'static str,
    /// Command value.
    pub value: serde_json::Value,
}

/// Body of `PUT /v1/devices/control`.
#[derive(Debug, Clone, Serialize)]
pub struct ControlRequest<'a> {
    device: &'a MacAddress,
    model: &'a str,
    cmd: CommandBody,
}

impl<'a> ControlRequest<'a> {
    /// Addresses `command` to the device with `mac` and `model`.
    pub fn new<C: Command + ?Sized>(mac: &'a MacAddress, model: &'a str, command: &C) -> Self {
        Self {
            device: mac,
            model,
            cmd: command.to_body(),
        }
    }

    /// Returns the target device.
    #[must_use]
    pub fn device(&self) -> &MacAddress {
        self.device
    }

    /// Returns the target model.
    #[must_use]
    pub fn model(&self) -> &str {
        self.model
    }

    /// Returns the command object.
    #[must_use]
    pub fn command(&self) -> &CommandBody {
        &self.cmd
    }

    /// Serializes the request body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ParseError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mac() -> MacAddress {
        MacAddress::parse("AA:BB:CC:DD:EE:FF:00:11").unwrap()
    }

    #[test]
    fn control_request_shape() {
        let mac = mac();
        let request = ControlRequest::new(&mac, "H6159", &PowerCommand::On);
        let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "device": "AA:BB:CC:DD:EE:FF:00:11",
                "model": "H6159",
                "cmd": {"name": "turn", "value": "on"}
            })
        );
        assert_eq!(request.device(), &mac);
        assert_eq!(request.model(), "H6159");
    }

    #[test]
    fn color_command_value_is_object() {
        let mac = mac();
        let request = ControlRequest::new(&mac, "H6159", &ColorCommand(RgbColor::new(1, 2, 3)));
        assert_eq!(request.command().name, "color");
        assert_eq!(request.command().value, json!({"r": 1, "g": 2, "b": 3}));
    }

    #[test]
    fn commands_work_as_trait_objects() {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(PowerCommand::Off),
            Box::new(ColorTemperatureCommand(ColorTemperature::WARM)),
        ];
        let names: Vec<&str> = commands.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["turn", "colorTem"]);

        let mac = mac();
        let request = ControlRequest::new(&mac, "H6159", commands[1].as_ref());
        assert_eq!(request.command().value, json!(2700));
    }

    #[test]
    fn device_command_matches_typed_commands() {
        let color = RgbColor::new(9, 8, 7);
        let pairs: [(DeviceCommand, Box<dyn Command>); 4] = [
            (DeviceCommand::TurnOn, Box::new(PowerCommand::On)),
            (
                DeviceCommand::SetBrightness(Brightness::MAX),
                Box::new(BrightnessCommand(Brightness::MAX)),
            ),
            (
                DeviceCommand::SetColorTemperature(ColorTemperature::DAYLIGHT),
                Box::new(ColorTemperatureCommand(ColorTemperature::DAYLIGHT)),
            ),
            (DeviceCommand::SetColor(color), Box::new(ColorCommand(color))),
        ];
        for (unified, typed) in &pairs {
            assert_eq!(unified.to_body(), typed.to_body());
        }
        assert_eq!(DeviceCommand::from(PowerCommand::Off), DeviceCommand::TurnOff);
    }
}
