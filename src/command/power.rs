// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control command.

use crate::capabilities::CMD_TURN;
use crate::command::Command;
use crate::types::PowerState;

/// Command to switch a device on or off.
///
/// # Examples
///
/// ```
/// use govee_lib::command::{Command, PowerCommand};
/// use govee_lib::types::PowerState;
///
/// let cmd = PowerCommand::On;
/// assert_eq!(cmd.name(), "turn");
/// assert_eq!(cmd.value(), "on");
///
/// assert_eq!(PowerCommand::from(PowerState::Off), PowerCommand::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    /// Switch the device on.
    On,
    /// Switch the device off.
    Off,
}

impl PowerCommand {
    /// Returns the target power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        match self {
            Self::On => PowerState::On,
            Self::Off => PowerState::Off,
        }
    }
}

impl From<PowerState> for PowerCommand {
    fn from(state: PowerState) -> Self {
        match state {
            PowerState::On => Self::On,
            PowerState::Off => Self::Off,
        }
    }
}

impl Command for PowerCommand {
    fn name(&self) -> &'static str {
        CMD_TURN
    }

    fn value(&self) -> serde_json::Value {
        serde_json::Value::from(self.state().as_str())
    }
}
