// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control commands.

use serde_json::json;

use crate::capabilities::{CMD_BRIGHTNESS, CMD_COLOR, CMD_COLOR_TEMPERATURE};
use crate::command::Command;
use crate::types::{Brightness, ColorTemperature, RgbColor};

/// Command to set the brightness level.
///
/// # Examples
///
/// ```
/// use govee_lib::command::{BrightnessCommand, Command};
/// use govee_lib::types::Brightness;
///
/// let cmd = BrightnessCommand(Brightness::new(75).unwrap());
/// assert_eq!(cmd.name(), "brightness");
/// assert_eq!(cmd.value(), 75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessCommand(pub Brightness);

impl Command for BrightnessCommand {
    fn name(&self) -> &'static str {
        CMD_BRIGHTNESS
    }

    fn value(&self) -> serde_json::Value {
        json!(self.0.value())
    }
}

/// Command to set the white color temperature.
///
/// # Examples
///
/// ```
/// use govee_lib::command::{ColorTemperatureCommand, Command};
/// use govee_lib::types::ColorTemperature;
///
/// let cmd = ColorTemperatureCommand(ColorTemperature::DAYLIGHT);
/// assert_eq!(cmd.name(), "colorTem");
/// assert_eq!(cmd.value(), 6500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTemperatureCommand(pub ColorTemperature);

impl Command for ColorTemperatureCommand {
    fn name(&self) -> &'static str {
        CMD_COLOR_TEMPERATURE
    }

    fn value(&self) -> serde_json::Value {
        json!(self.0.kelvin())
    }
}

/// Command to set an RGB color.
///
/// # Examples
///
/// ```
/// use govee_lib::command::{ColorCommand, Command};
/// use govee_lib::types::RgbColor;
///
/// let cmd = ColorCommand(RgbColor::new(255, 128, 0));
/// assert_eq!(cmd.name(), "color");
/// assert_eq!(cmd.value()["g"], 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCommand(pub RgbColor);

impl Command for ColorCommand {
    fn name(&self) -> &'static str {
        CMD_COLOR
    }

    fn value(&self) -> serde_json::Value {
        json!({
            "r": self.0.red(),
            "g": self.0.green(),
            "b": self.0.blue(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_bounds_are_sent_verbatim() {
        assert_eq!(BrightnessCommand(Brightness::MIN).value(), 0);
        assert_eq!(BrightnessCommand(Brightness::MAX).value(), 100);
    }

    #[test]
    fn color_temperature_value() {
        let cmd = ColorTemperatureCommand(ColorTemperature::new(2000).unwrap());
        assert_eq!(cmd.value(), 2000);
    }

    #[test]
    fn color_value_matches_serialized_color() {
        let color = RgbColor::new(10, 20, 30);
        assert_eq!(
            ColorCommand(color).value(),
            serde_json::to_value(color).unwrap()
        );
    }
}
