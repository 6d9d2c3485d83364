// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Govee device control.
//!
//! Each type checks its range at construction time, so a command built from
//! these values never needs a network round trip to be rejected.
//!
//! # Types
//!
//! - [`MacAddress`] - Colon-separated hex device identifier
//! - [`Brightness`] - Brightness level (0-100%)
//! - [`ColorTemperature`] - White color temperature in Kelvin (2000-9000)
//! - [`RgbColor`] - RGB color (each channel 0-255)
//! - [`PowerState`] - On or off

mod brightness;
mod color_temperature;
mod mac;
mod power;
mod rgb_color;

pub use brightness::Brightness;
pub use color_temperature::ColorTemperature;
pub use mac::MacAddress;
pub use power::PowerState;
pub use rgb_color::RgbColor;
