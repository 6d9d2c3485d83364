// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Govee Lib - A Rust client for the Govee developer cloud API.
//!
//! This library provides an async API to control Govee lights and smart
//! plugs through `https://developer-api.govee.com`.
//!
//! # Supported Features
//!
//! - **Power control**: Turn lights and plugs on/off
//! - **Light control**: Brightness, color temperature, RGB color
//! - **State queries**: Online status, power, brightness, color
//! - **Device directory**: Address devices by display name or MAC
//! - **Rate-limit tracking**: Remaining quota and reset time
//!
//! Every authenticated call is preceded by a liveness probe (`GET /ping`);
//! while the service is down no command is sent. Arguments are validated and
//! device references resolved before anything goes over the wire.
//!
//! # Quick Start
//!
//! ```no_run
//! use govee_lib::Session;
//!
//! #[tokio::main]
//! async fn main() -> govee_lib::Result<()> {
//!     let session = Session::new("my-api-key")?;
//!
//!     let lights = session.lights().await?;
//!     lights.turn_on("Living Room").await?;
//!     lights.set_brightness("Living Room", 75).await?;
//!     lights.set_color_temperature("Living Room", 2700).await?;
//!
//!     let plugs = session.plugs().await?;
//!     plugs.turn_off("Heater").await?;
//!
//!     let limit = session.rate_limit();
//!     println!("{:?} requests left", limit.remaining);
//!     Ok(())
//! }
//! ```
//!
//! # Custom Transport
//!
//! Anything implementing [`protocol::Transport`] can replace the default
//! reqwest client:
//!
//! ```no_run
//! use govee_lib::Session;
//! use govee_lib::protocol::HttpTransport;
//!
//! # fn example(client: reqwest::Client) -> govee_lib::Result<()> {
//! let _session = Session::builder("my-api-key")
//!     .with_span(tracing::info_span!("govee", tag = "office"))
//!     .build_with_transport(HttpTransport::with_client(client))?;
//! # Ok(())
//! # }
//! ```

mod capabilities;
pub mod command;
mod directory;
mod dispatch;
pub mod error;
mod lights;
mod plugs;
pub mod protocol;
mod rate_limit;
mod session;
pub mod state;
pub mod types;

pub use capabilities::{
    CMD_BRIGHTNESS, CMD_COLOR, CMD_COLOR_TEMPERATURE, CMD_TURN, Capabilities, CapabilityPredicate,
    DeviceFamily,
};
pub use command::{
    BrightnessCommand, ColorCommand, ColorTemperatureCommand, Command, CommandBody,
    ControlRequest, DeviceCommand, PowerCommand,
};
pub use directory::{DeviceDirectory, DeviceRecord, NameCollision};
pub use dispatch::{CommandDispatcher, CommandResponse};
pub use error::{Error, ParseError, Result, TransportError, ValueError};
pub use lights::Lights;
pub use plugs::Plugs;
pub use protocol::{HttpConfig, HttpTransport, Transport};
pub use rate_limit::{RateLimit, RateLimitTracker};
pub use session::{
    API_KEY_HEADER, CONTROL_ENDPOINT, DEVICE_ENDPOINT, PING_ENDPOINT, STATE_ENDPOINT, Session,
    SessionBuilder,
};
pub use state::DeviceState;
pub use types::{Brightness, ColorTemperature, MacAddress, PowerState, RgbColor};
