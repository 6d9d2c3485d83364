// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state as reported by `GET /v1/devices/state`.
//!
//! The endpoint answers with a list of single-key property objects. The
//! [`DeviceState`] struct picks out the well-known properties and keeps the
//! decoded body for everything else.
//!
//! # Examples
//!
//! ```
//! use govee_lib::state::DeviceState;
//! use govee_lib::types::PowerState;
//!
//! let body = r#"{"data":{"device":"AA:BB:CC:DD:EE:FF:00:11","model":"H6159",
//!     "properties":[{"online":true},{"powerState":"on"},{"brightness":82}]}}"#;
//!
//! let state = DeviceState::from_body(body).unwrap();
//! assert_eq!(state.power(), Some(PowerState::On));
//! assert_eq!(state.brightness().map(|b| b.value()), Some(82));
//! ```

mod device_state;

pub use device_state::DeviceState;
