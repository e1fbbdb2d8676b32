// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC mode and action types.
//!
//! These are the platform-facing enumerations a climate entity exposes:
//! the requested operating mode and the observed current activity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Requested operating mode of the climate device.
///
/// This is what the user asked the device to do, derived from the
/// device's `working_status` and `mode` fields. The CK002 supports
/// `Off`, `Heat`, and `Auto`.
///
/// # Examples
///
/// ```
/// use weback_climate::types::HvacMode;
///
/// assert_eq!(HvacMode::Heat.as_str(), "heat");
/// assert_eq!("auto".parse::<HvacMode>().unwrap(), HvacMode::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HvacMode {
    /// The device is switched off.
    Off,
    /// The device heats to the set temperature.
    Heat,
    /// The device follows its internal schedule.
    Auto,
}

impl HvacMode {
    /// Returns the platform string for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heat => "heat",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "heat" => Ok(Self::Heat),
            "auto" => Ok(Self::Auto),
            _ => Err(ValueError::InvalidHvacMode(s.to_string())),
        }
    }
}

/// Observed current activity of the climate device.
///
/// Distinct from [`HvacMode`]: the mode is what was requested, the
/// action is what the device is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HvacAction {
    /// The device is actively heating.
    Heating,
    /// The device is idle.
    Idle,
}

impl HvacAction {
    /// Returns the platform string for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heating => "heating",
            Self::Idle => "idle",
        }
    }
}

impl fmt::Display for HvacAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
