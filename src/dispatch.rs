// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command dispatch shared by the device facades.
//!
//! A [`CommandDispatcher`] pairs a [`Session`] with a [`DeviceDirectory`].
//! Every operation validates its arguments and resolves the device reference
//! locally; only then is a request sent. A rejected argument or an unknown
//! device therefore costs no network traffic at all.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::capabilities::DeviceFamily;
use crate::command::{
    BrightnessCommand, ColorCommand, ColorTemperatureCommand, Command, ControlRequest,
    PowerCommand,
};
use crate::directory::DeviceDirectory;
use crate::error::{ParseError, Result, ValueError};
use crate::protocol::{HttpTransport, Transport};
use crate::session::{CONTROL_ENDPOINT, STATE_ENDPOINT, Session};
use crate::state::DeviceState;
use crate::types::{Brightness, ColorTemperature, MacAddress, RgbColor};

/// Body of a successful control response.
///
/// # Examples
///
/// ```
/// use govee_lib::CommandResponse;
///
/// let response = CommandResponse::new(r#"{"code":200,"message":"Success","data":{}}"#);
/// let value: serde_json::Value = response.parse().unwrap();
/// assert_eq!(value["message"], "Success");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Wraps a raw response body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body does not decode as `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> std::result::Result<T, ParseError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Consumes the response and returns the raw body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Sends commands to the devices of one family.
#[derive(Debug, Clone)]
pub struct CommandDispatcher<T: Transport = HttpTransport> {
    session: Session<T>,
    directory: DeviceDirectory,
}

impl<T: Transport> CommandDispatcher<T> {
    /// Creates a dispatcher over an existing directory.
    #[must_use]
    pub fn new(session: Session<T>, directory: DeviceDirectory) -> Self {
        Self { session, directory }
    }

    /// Fetches the device list and builds the directory for `family`.
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched.
    pub async fn connect(session: Session<T>, family: DeviceFamily) -> Result<Self> {
        let directory = session.directory(family).await?;
        Ok(Self::new(session, directory))
    }

    /// Returns the session.
    #[must_use]
    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Returns the device directory.
    #[must_use]
    pub fn directory(&self) -> &DeviceDirectory {
        &self.directory
    }

    /// Sends `command` to the device named by `reference`.
    ///
    /// # Errors
    ///
    /// - `Error::DeviceNotFound` if the reference is unknown (nothing is sent)
    /// - `ValueError::UnsupportedCommand` if the device reports capabilities
    ///   that do not include the command (nothing is sent)
    /// - any error of [`Session::call`]
    pub async fn send<C: Command + ?Sized>(
        &self,
        reference: &str,
        command: &C,
    ) -> Result<CommandResponse> {
        let record = self.directory.record(reference)?;
        // An empty list means the API reported nothing; let the device decide.
        if !record.capabilities.is_empty() && !record.capabilities.supports(command.name()) {
            tracing::debug!(
                device = %record.mac,
                command = command.name(),
                "Command not in supportCmds"
            );
            return Err(ValueError::UnsupportedCommand {
                device: record.mac.to_string(),
                command: command.name(),
            }
            .into());
        }
        self.send_to(&record.mac, &record.model, command).await
    }

    async fn send_to<C: Command + ?Sized>(
        &self,
        mac: &MacAddress,
        model: &str,
        command: &C,
    ) -> Result<CommandResponse> {
        let request = ControlRequest::new(mac, model, command);
        let body = request.to_json()?;

        tracing::debug!(
            device = %mac,
            model,
            command = command.name(),
            value = %request.command().value,
            "Sending command"
        );

        let response = self
            .session
            .call(Method::PUT, CONTROL_ENDPOINT, Some(body))
            .await?;
        Ok(CommandResponse::new(response.body))
    }

    /// Switches a device on.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unknown or the call fails.
    pub async fn turn_on(&self, reference: &str) -> Result<CommandResponse> {
        self.send(reference, &PowerCommand::On).await
    }

    /// Switches a device off.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unknown or the call fails.
    pub async fn turn_off(&self, reference: &str) -> Result<CommandResponse> {
        self.send(reference, &PowerCommand::Off).await
    }

    /// Sets the brightness level (0-100).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` before resolving the device if
    /// `level` is out of range; otherwise as [`send`](Self::send).
    pub async fn set_brightness(&self, reference: &str, level: i64) -> Result<CommandResponse> {
        let brightness = Brightness::new(level)?;
        self.send(reference, &BrightnessCommand(brightness)).await
    }

    /// Sets the color temperature in Kelvin (2000-9000).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` before resolving the device if
    /// `kelvin` is out of range; otherwise as [`send`](Self::send).
    pub async fn set_color_temperature(
        &self,
        reference: &str,
        kelvin: i64,
    ) -> Result<CommandResponse> {
        let temperature = ColorTemperature::new(kelvin)?;
        self.send(reference, &ColorTemperatureCommand(temperature))
            .await
    }

    /// Sets an RGB color from raw channel values (each 0-255).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` naming the first bad channel before
    /// resolving the device; otherwise as [`send`](Self::send).
    pub async fn set_color(
        &self,
        reference: &str,
        red: i64,
        green: i64,
        blue: i64,
    ) -> Result<CommandResponse> {
        let color = RgbColor::from_channels(red, green, blue)?;
        self.send(reference, &ColorCommand(color)).await
    }

    /// Fetches the reported state of a device.
    ///
    /// # Errors
    ///
    /// - `Error::DeviceNotFound` if the reference is unknown (nothing is sent)
    /// - any error of [`Session::call`]
    /// - `Error::Parse` if the body is not JSON
    pub async fn device_state(&self, reference: &str) -> Result<DeviceState> {
        let (mac, model) = self.directory.resolve(reference)?;
        let path = format!(
            "{STATE_ENDPOINT}?device={}&model={}",
            urlencoding::encode(mac.as_str()),
            urlencoding::encode(model)
        );

        let response = self.session.call(Method::GET, &path, None).await?;
        Ok(DeviceState::from_body(&response.body)?)
    }
}
