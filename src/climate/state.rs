// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-visible climate state.

use serde::Serialize;

use crate::status::ThingStatus;
use crate::types::{Celsius, HvacAction, HvacMode, PresetMode};

/// The platform-level view of a thermostat, derived from a status
/// record.
///
/// Every field is a pure function of the underlying [`ThingStatus`];
/// the adapter never stores mode or preset independently. Snapshots of
/// this state are published on the adapter's watch channel.
///
/// # Examples
///
/// ```
/// use weback_climate::climate::ClimateState;
/// use weback_climate::status::ThingStatus;
/// use weback_climate::types::{HvacAction, HvacMode};
///
/// let status = ThingStatus::from_json(
///     r#"{"working_status":"on","mode":"manual","air_tem":208,"set_tem":44}"#,
/// ).unwrap();
/// let state = ClimateState::from_status(&status);
///
/// assert_eq!(state.hvac_mode, HvacMode::Heat);
/// assert_eq!(state.hvac_action, HvacAction::Heating);
/// assert_eq!(state.target_temperature.unwrap().value(), 22.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateState {
    /// Requested operating mode.
    pub hvac_mode: HvacMode,

    /// Observed current activity.
    pub hvac_action: HvacAction,

    /// User-facing preset label.
    pub preset_mode: PresetMode,

    /// Ambient temperature, if the device reported one.
    pub current_temperature: Option<Celsius>,

    /// Target temperature, if the device reported one.
    pub target_temperature: Option<Celsius>,
}

impl ClimateState {
    /// Derives the platform-level state from a raw status record.
    #[must_use]
    pub fn from_status(status: &ThingStatus) -> Self {
        Self {
            hvac_mode: status.hvac_mode(),
            hvac_action: status.hvac_action(),
            preset_mode: status.preset_mode(),
            current_temperature: status.current_temperature(),
            target_temperature: status.target_temperature(),
        }
    }
}

impl From<&ThingStatus> for ClimateState {
    fn from(status: &ThingStatus) -> Self {
        Self::from_status(status)
    }
}
