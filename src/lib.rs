// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `weback_climate` - A Rust library to integrate WeBack CK002 smart
//! thermostats with home-automation platforms.
//!
//! This library maps a standard climate-control abstraction onto the
//! WeBack vendor API: platform calls (set HVAC mode, set preset, set
//! temperature) become `device_control` payloads, and the device's raw
//! status record becomes typed read-only properties.
//!
//! # Supported Features
//!
//! - **HVAC control**: off, heat, and schedule-driven auto modes
//! - **Presets**: `Manual` and `Automatic` labels mapped onto the device mode
//! - **Target temperature**: half-degree device encoding with range validation
//! - **Status refresh**: wholesale snapshot replacement, published on a watch channel
//!
//! # Bring Your Own Vendor Client
//!
//! The crate does not talk to the WeBack cloud itself. Implement
//! [`DeviceApi`] with your transport and session handling; the adapter
//! drives it and never retries or times out on its own.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use weback_climate::status::{ThingDescription, ThingStatus};
//! use weback_climate::types::{Celsius, ControlPayload, HvacMode};
//! use weback_climate::{setup_platform, ApiError, ClimateEntity, DeviceApi, SetTemperature};
//!
//! struct CloudClient;
//!
//! impl DeviceApi for CloudClient {
//!     async fn device_control(
//!         &self,
//!         _sub_type: &str,
//!         _thing_name: &str,
//!         _payload: &ControlPayload,
//!     ) -> Result<(), ApiError> {
//!         // Deliver the payload to the vendor cloud here.
//!         Ok(())
//!     }
//!
//!     async fn thing_info(
//!         &self,
//!         _sub_type: &str,
//!         _thing_name: &str,
//!     ) -> Result<ThingStatus, ApiError> {
//!         // Fetch the device's status record here.
//!         Ok(ThingStatus::new())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> weback_climate::Result<()> {
//!     let api = Arc::new(CloudClient);
//!     // Device descriptions come from the vendor account listing.
//!     let things: Vec<ThingDescription> = Vec::new();
//!
//!     let thermostats = setup_platform(&api, things);
//!     for thermostat in &thermostats {
//!         thermostat.set_hvac_mode(HvacMode::Auto).await?;
//!         thermostat
//!             .set_temperature(SetTemperature::new().with_temperature(Celsius::new(21.5)))
//!             .await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Watching State
//!
//! The adapter publishes its derived [`ClimateState`] after every
//! command and refresh:
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use weback_climate::Ck002Thermostat;
//!
//! # use weback_climate::{ApiError, DeviceApi};
//! # use weback_climate::status::ThingStatus;
//! # use weback_climate::types::ControlPayload;
//! # struct CloudClient;
//! # impl DeviceApi for CloudClient {
//! #     async fn device_control(
//! #         &self,
//! #         _: &str,
//! #         _: &str,
//! #         _: &ControlPayload,
//! #     ) -> Result<(), ApiError> {
//! #         Ok(())
//! #     }
//! #     async fn thing_info(&self, _: &str, _: &str) -> Result<ThingStatus, ApiError> {
//! #         Ok(ThingStatus::new())
//! #     }
//! # }
//! # async fn example(thermostat: Ck002Thermostat<CloudClient>) -> weback_climate::Result<()> {
//! let thermostat = Arc::new(thermostat);
//! let mut updates = thermostat.watch_state();
//!
//! let poller = Arc::clone(&thermostat);
//! tokio::spawn(async move { poller.run_polling(Duration::from_secs(30)).await });
//!
//! updates.changed().await.ok();
//! println!("{:?}", updates.borrow_and_update().hvac_mode);
//! # Ok(())
//! # }
//! ```

mod api;
pub mod climate;
pub mod command;
pub mod error;
mod setup;
pub mod status;
pub mod types;

pub use api::DeviceApi;
pub use climate::{
    Ck002Thermostat, ClimateEntity, ClimateState, SetTemperature, SupportedFeatures,
};
pub use command::{Command, HvacModeCommand, PresetModeCommand, TargetTemperatureCommand};
pub use error::{ApiError, Error, ParseError, Result, ValueError};
pub use setup::setup_platform;
pub use status::{StatusSnapshot, ThingDescription, ThingStatus};
pub use types::{
    Celsius, ControlPayload, DeciCelsius, DeviceMode, HalfCelsius, HvacAction, HvacMode,
    PresetMode, TemperatureUnit, WorkingStatus,
};
