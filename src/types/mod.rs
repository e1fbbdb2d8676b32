// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for WeBack thermostat control.
//!
//! This module provides type-safe representations of the values the
//! adapter exchanges with the host platform and the vendor API. Wire
//! enumerations carry the exact strings the vendor uses; temperature
//! types keep the device's integer scaling factors at the conversion
//! boundary.
//!
//! # Types
//!
//! - [`HvacMode`] / [`HvacAction`] - platform-facing operating mode and activity
//! - [`PresetMode`] - user-facing Manual/Automatic preset labels
//! - [`WorkingStatus`] / [`DeviceMode`] - vendor wire enumerations (on/off, auto/manual)
//! - [`Celsius`] - temperature in degrees Celsius
//! - [`DeciCelsius`] - ambient reading in tenths of a degree (`air_tem`)
//! - [`HalfCelsius`] - target temperature in half degrees (`set_tem`)
//! - [`TemperatureUnit`] - unit of measurement reported to the platform
//! - [`ControlPayload`] - keys-only-if-present body for `device_control`

mod control;
mod hvac;
mod preset;
mod temperature;
mod wire;

pub use control::ControlPayload;
pub use hvac::{HvacAction, HvacMode};
pub use preset::PresetMode;
pub use temperature::{Celsius, DeciCelsius, HalfCelsius, TemperatureUnit};
pub use wire::{DeviceMode, WorkingStatus};
