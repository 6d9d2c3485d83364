// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Facade for color-capable devices.
//!
//! ```no_run
//! use govee_lib::Session;
//!
//! # async fn example() -> govee_lib::Result<()> {
//! let session = Session::new("my-api-key")?;
//! let lights = session.lights().await?;
//!
//! lights.turn_on("Desk Lamp").await?;
//! lights.set_brightness("Desk Lamp", 60).await?;
//! lights.set_color("AA:BB:CC:DD:EE:FF:00:11", 255, 128, 0).await?;
//!
//! let state = lights.get_device_state("Desk Lamp").await?;
//! println!("{:?}", state.power());
//! # Ok(())
//! # }
//! ```

use crate::command::ColorCommand;
use crate::directory::DeviceDirectory;
use crate::dispatch::{CommandDispatcher, CommandResponse};
use crate::error::Result;
use crate::protocol::{HttpTransport, Transport};
use crate::state::DeviceState;
use crate::types::RgbColor;

/// Devices whose capabilities include `color`.
///
/// Devices are addressed by display name or MAC. The directory is fixed
/// when the facade is created.
#[derive(Debug, Clone)]
pub struct Lights<T: Transport = HttpTransport> {
    dispatcher: CommandDispatcher<T>,
}

impl<T: Transport> Lights<T> {
    /// Wraps a dispatcher built for [`DeviceFamily::LIGHTS`](crate::DeviceFamily::LIGHTS).
    #[must_use]
    pub fn new(dispatcher: CommandDispatcher<T>) -> Self {
        Self { dispatcher }
    }

    /// Returns the directory of lights.
    #[must_use]
    pub fn directory(&self) -> &DeviceDirectory {
        self.dispatcher.directory()
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &CommandDispatcher<T> {
        &self.dispatcher
    }

    /// Switches a light on.
    ///
    /// # Errors
    ///
    /// Returns error if the light is unknown or the call fails.
    pub async fn turn_on(&self, reference: &str) -> Result<CommandResponse> {
        self.dispatcher.turn_on(reference).await
    }

    /// Switches a light off.
    ///
    /// # Errors
    ///
    /// Returns error if the light is unknown or the call fails.
    pub async fn turn_off(&self, reference: &str) -> Result<CommandResponse> {
        self.dispatcher.turn_off(reference).await
    }

    /// Sets the brightness (0-100).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` without any network call if `level`
    /// is out of range; otherwise as [`turn_on`](Self::turn_on).
    pub async fn set_brightness(&self, reference: &str, level: i64) -> Result<CommandResponse> {
        self.dispatcher.set_brightness(reference, level).await
    }

    /// Sets the white color temperature in Kelvin (2000-9000).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` without any network call if `kelvin`
    /// is out of range; otherwise as [`turn_on`](Self::turn_on).
    pub async fn set_color_temperature(
        &self,
        reference: &str,
        kelvin: i64,
    ) -> Result<CommandResponse> {
        self.dispatcher
            .set_color_temperature(reference, kelvin)
            .await
    }

    /// Sets the color from raw channels (each 0-255).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` naming the offending channel without
    /// any network call; otherwise as [`turn_on`](Self::turn_on).
    pub async fn set_color(
        &self,
        reference: &str,
        red: i64,
        green: i64,
        blue: i64,
    ) -> Result<CommandResponse> {
        self.dispatcher.set_color(reference, red, green, blue).await
    }

    /// Sets the color from an already validated [`RgbColor`].
    ///
    /// # Errors
    ///
    /// Returns error if the light is unknown or the call fails.
    pub async fn set_rgb_color(&self, reference: &str, color: RgbColor) -> Result<CommandResponse> {
        self.dispatcher.send(reference, &ColorCommand(color)).await
    }

    /// Fetches the reported state of a light.
    ///
    /// # Errors
    ///
    /// Returns error if the light is unknown, the call fails or the body is
    /// not JSON.
    pub async fn get_device_state(&self, reference: &str) -> Result<DeviceState> {
        self.dispatcher.device_state(reference).await
    }
}
