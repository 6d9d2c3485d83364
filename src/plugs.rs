// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Facade for plugs and other devices without color support.

use crate::directory::DeviceDirectory;
use crate::dispatch::{CommandDispatcher, CommandResponse};
use crate::error::Result;
use crate::protocol::{HttpTransport, Transport};
use crate::state::DeviceState;

/// Devices whose capabilities do not include `color`.
///
/// # Examples
///
/// ```no_run
/// use govee_lib::Session;
///
/// # async fn example() -> govee_lib::Result<()> {
/// let plugs = Session::new("my-api-key")?.plugs().await?;
/// plugs.turn_off("Heater").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Plugs<T: Transport = HttpTransport> {
    dispatcher: CommandDispatcher<T>,
}

impl<T: Transport> Plugs<T> {
    /// Wraps a dispatcher built for [`DeviceFamily::PLUGS`](crate::DeviceFamily::PLUGS).
    #[must_use]
    pub fn new(dispatcher: CommandDispatcher<T>) -> Self {
        Self { dispatcher }
    }

    /// Returns the directory of plugs.
    #[must_use]
    pub fn directory(&self) -> &DeviceDirectory {
        self.dispatcher.directory()
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &CommandDispatcher<T> {
        &self.dispatcher
    }

    /// Switches a plug on.
    ///
    /// # Errors
    ///
    /// Returns error if the plug is unknown or the call fails.
    pub async fn turn_on(&self, reference: &str) -> Result<CommandResponse> {
        self.dispatcher.turn_on(reference).await
    }

    /// Switches a plug off.
    ///
    /// # Errors
    ///
    /// Returns error if the plug is unknown or the call fails.
    pub async fn turn_off(&self, reference: &str) -> Result<CommandResponse> {
        self.dispatcher.turn_off(reference).await
    }

    /// Fetches the reported state of a plug.
    ///
    /// # Errors
    ///
    /// Returns error if the plug is unknown, the call fails or the body is
    /// not JSON.
    pub async fn get_device_state(&self, reference: &str) -> Result<DeviceState> {
        self.dispatcher.device_state(reference).await
    }
}
