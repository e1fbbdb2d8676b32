// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate control commands.
//!
//! This module provides the commands for switching HVAC mode, selecting
//! a preset, and changing the target temperature.

use crate::command::Command;
use crate::types::{
    Celsius, ControlPayload, DeviceMode, HalfCelsius, HvacMode, PresetMode, WorkingStatus,
};

/// Command to switch the device's HVAC mode.
///
/// `Off` sends only `working_status: "off"`; the running modes send
/// `working_status: "on"` together with the device mode (`auto` for
/// [`HvacMode::Auto`], `manual` for [`HvacMode::Heat`]).
///
/// # Examples
///
/// ```
/// use weback_climate::command::{Command, HvacModeCommand};
/// use weback_climate::types::{DeviceMode, HvacMode, WorkingStatus};
///
/// let auto = HvacModeCommand::new(HvacMode::Auto);
/// let payload = auto.payload();
/// assert_eq!(payload.working_status(), Some(WorkingStatus::On));
/// assert_eq!(payload.mode(), Some(DeviceMode::Auto));
///
/// let off = HvacModeCommand::off();
/// assert_eq!(off.payload().working_status(), Some(WorkingStatus::Off));
/// assert_eq!(off.payload().mode(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HvacModeCommand(HvacMode);

impl HvacModeCommand {
    /// Creates a command for the given HVAC mode.
    #[must_use]
    pub const fn new(mode: HvacMode) -> Self {
        Self(mode)
    }

    /// Creates a command that switches the device off.
    #[must_use]
    pub const fn off() -> Self {
        Self(HvacMode::Off)
    }

    /// Creates a command that starts heating to the set temperature.
    #[must_use]
    pub const fn heat() -> Self {
        Self(HvacMode::Heat)
    }

    /// Creates a command that hands control to the device schedule.
    #[must_use]
    pub const fn auto() -> Self {
        Self(HvacMode::Auto)
    }

    /// Returns the HVAC mode this command selects.
    #[must_use]
    pub const fn mode(&self) -> HvacMode {
        self.0
    }
}

impl Command for HvacModeCommand {
    fn name(&self) -> &'static str {
        "HvacMode"
    }

    fn payload(&self) -> ControlPayload {
        match self.0 {
            HvacMode::Off => ControlPayload::new().with_working_status(WorkingStatus::Off),
            HvacMode::Auto => ControlPayload::new()
                .with_working_status(WorkingStatus::On)
                .with_mode(DeviceMode::Auto),
            HvacMode::Heat => ControlPayload::new()
                .with_working_status(WorkingStatus::On)
                .with_mode(DeviceMode::Manual),
        }
    }
}

/// Command to select the device's preset mode.
///
/// # Examples
///
/// ```
/// use weback_climate::command::{Command, PresetModeCommand};
/// use weback_climate::types::DeviceMode;
///
/// let cmd = PresetModeCommand::from_label("Automatic");
/// assert_eq!(cmd.payload().mode(), Some(DeviceMode::Auto));
///
/// // Unknown labels degrade to manual operation.
/// let fallback = PresetModeCommand::from_label("eco");
/// assert_eq!(fallback.payload().mode(), Some(DeviceMode::Manual));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetModeCommand(DeviceMode);

impl PresetModeCommand {
    /// Creates a command for the given preset.
    #[must_use]
    pub const fn new(preset: PresetMode) -> Self {
        Self(match preset {
            PresetMode::Manual => DeviceMode::Manual,
            PresetMode::Automatic => DeviceMode::Auto,
        })
    }

    /// Creates a command from a preset label.
    ///
    /// The label `"Automatic"` selects auto mode; any other label
    /// selects manual mode.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::new(PresetMode::from_label(label))
    }

    /// Returns the device mode this command selects.
    #[must_use]
    pub const fn device_mode(&self) -> DeviceMode {
        self.0
    }
}

impl Command for PresetModeCommand {
    fn name(&self) -> &'static str {
        "PresetMode"
    }

    fn payload(&self) -> ControlPayload {
        ControlPayload::new().with_mode(self.0)
    }
}

/// Command to change the target temperature.
///
/// The target travels as the device's half-degree integer encoding.
///
/// # Examples
///
/// ```
/// use weback_climate::command::{Command, TargetTemperatureCommand};
/// use weback_climate::types::Celsius;
///
/// let cmd = TargetTemperatureCommand::from_celsius(Celsius::new(21.5));
/// assert_eq!(cmd.payload().set_tem().unwrap().value(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTemperatureCommand(HalfCelsius);

impl TargetTemperatureCommand {
    /// Creates a command for an already encoded target.
    #[must_use]
    pub const fn new(target: HalfCelsius) -> Self {
        Self(target)
    }

    /// Creates a command from a Celsius temperature, rounding to the
    /// nearest half degree.
    #[must_use]
    pub fn from_celsius(celsius: Celsius) -> Self {
        Self(HalfCelsius::from_celsius(celsius))
    }

    /// Returns the encoded target.
    #[must_use]
    pub const fn target(&self) -> HalfCelsius {
        self.0
    }
}

impl Command for TargetTemperatureCommand {
    fn name(&self) -> &'static str {
        "TargetTemperature"
    }

    fn payload(&self) -> ControlPayload {
        ControlPayload::new().with_set_tem(self.0)
    }
}
