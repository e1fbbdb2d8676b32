// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WeBack control command definitions.
//!
//! This module provides typed representations of the control requests
//! the adapter sends through [`device_control`](crate::DeviceApi::device_control).
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Payload keys |
//! |-------------|---------|--------------|
//! | [`HvacModeCommand`] | Switch the device off or into heat/auto | `working_status`, `mode` |
//! | [`PresetModeCommand`] | Select manual or automatic operation | `mode` |
//! | [`TargetTemperatureCommand`] | Change the set temperature | `set_tem` |
//!
//! # Command Structure
//!
//! Each command consists of:
//! - A command name used for logging (e.g., `"HvacMode"`)
//! - A [`ControlPayload`] carrying only the keys the command changes
//!
//! # Examples
//!
//! ```
//! use weback_climate::command::{Command, HvacModeCommand, TargetTemperatureCommand};
//! use weback_climate::types::{Celsius, HvacMode, WorkingStatus};
//!
//! // Switch the device off: only working_status is sent.
//! let off = HvacModeCommand::new(HvacMode::Off);
//! assert_eq!(off.payload().working_status(), Some(WorkingStatus::Off));
//! assert_eq!(off.payload().mode(), None);
//!
//! // Target 21.5 °C encodes to 43 half degrees.
//! let target = TargetTemperatureCommand::from_celsius(Celsius::new(21.5));
//! assert_eq!(target.payload().set_tem().unwrap().value(), 43);
//! ```

mod climate;

pub use climate::{HvacModeCommand, PresetModeCommand, TargetTemperatureCommand};

use crate::types::ControlPayload;

/// A control request that can be sent to a WeBack thermostat.
///
/// Commands translate a platform-level intent into the vendor payload
/// for `device_control`.
pub trait Command {
    /// Returns the command name for logging and diagnostics.
    ///
    /// For example, `"HvacMode"` or `"TargetTemperature"`.
    fn name(&self) -> &'static str;

    /// Returns the control payload this command sends.
    ///
    /// The payload carries only the keys the command changes; all other
    /// keys are omitted from the serialized request.
    fn payload(&self) -> ControlPayload;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HvacMode;

    #[test]
    fn command_names() {
        assert_eq!(HvacModeCommand::new(HvacMode::Off).name(), "HvacMode");
        assert_eq!(PresetModeCommand::from_label("Manual").name(), "PresetMode");
    }

    #[test]
    fn payloads_carry_only_set_keys() {
        let payload = PresetModeCommand::from_label("Automatic").payload();
        assert!(payload.working_status().is_none());
        assert!(payload.set_tem().is_none());
        assert!(payload.mode().is_some());
    }
}
