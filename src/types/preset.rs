// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset mode type.
//!
//! The preset mode is the user-facing label for the device's underlying
//! automatic/manual control mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::DeviceMode;

/// User-facing preset label for the device's control mode.
///
/// The CK002 advertises exactly two presets, `"Manual"` and
/// `"Automatic"`, mapping one-to-one onto the device's
/// [`DeviceMode`].
///
/// # Examples
///
/// ```
/// use weback_climate::types::{DeviceMode, PresetMode};
///
/// assert_eq!(PresetMode::Automatic.as_str(), "Automatic");
/// assert_eq!(DeviceMode::from(PresetMode::Manual), DeviceMode::Manual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetMode {
    /// The device holds the set temperature.
    Manual,
    /// The device follows its internal schedule.
    Automatic,
}

impl PresetMode {
    /// Returns the advertised preset label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Automatic => "Automatic",
        }
    }

    /// Maps an arbitrary preset label onto a preset mode.
    ///
    /// The label `"Automatic"` selects [`PresetMode::Automatic`]; every
    /// other label, recognized or not, selects [`PresetMode::Manual`].
    /// This is the mapping the device control path uses, so an unknown
    /// label degrades to manual operation instead of failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use weback_climate::types::PresetMode;
    ///
    /// assert_eq!(PresetMode::from_label("Automatic"), PresetMode::Automatic);
    /// assert_eq!(PresetMode::from_label("Manual"), PresetMode::Manual);
    /// assert_eq!(PresetMode::from_label("eco"), PresetMode::Manual);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "Automatic" {
            Self::Automatic
        } else {
            Self::Manual
        }
    }
}

impl fmt::Display for PresetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PresetMode {
    type Err = ValueError;

    /// Parses one of the advertised labels exactly.
    ///
    /// Unlike [`PresetMode::from_label`], unrecognized labels are an
    /// error here. Use this to validate input against the advertised
    /// preset list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manual" => Ok(Self::Manual),
            "Automatic" => Ok(Self::Automatic),
            _ => Err(ValueError::InvalidPresetMode(s.to_string())),
        }
    }
}

impl From<PresetMode> for DeviceMode {
    fn from(preset: PresetMode) -> Self {
        match preset {
            PresetMode::Manual => Self::Manual,
            PresetMode::Automatic => Self::Auto,
        }
    }
}

impl From<DeviceMode> for PresetMode {
    fn from(mode: DeviceMode) -> Self {
        match mode {
            DeviceMode::Manual => Self::Manual,
            DeviceMode::Auto => Self::Automatic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_mode_as_str() {
        assert_eq!(PresetMode::Manual.as_str(), "Manual");
        assert_eq!(PresetMode::Automatic.as_str(), "Automatic");
    }

    #[test]
    fn preset_mode_from_label() {
        assert_eq!(PresetMode::from_label("Automatic"), PresetMode::Automatic);
        assert_eq!(PresetMode::from_label("Manual"), PresetMode::Manual);
        // Anything that is not exactly "Automatic" maps to manual.
        assert_eq!(PresetMode::from_label("automatic"), PresetMode::Manual);
        assert_eq!(PresetMode::from_label("eco"), PresetMode::Manual);
        assert_eq!(PresetMode::from_label(""), PresetMode::Manual);
    }

    #[test]
    fn preset_mode_from_str() {
        assert_eq!("Manual".parse::<PresetMode>().unwrap(), PresetMode::Manual);
        assert_eq!(
            "Automatic".parse::<PresetMode>().unwrap(),
            PresetMode::Automatic
        );
    }

    #[test]
    fn preset_mode_from_str_invalid() {
        let result = "automatic".parse::<PresetMode>();
        assert!(matches!(
            result,
            Err(ValueError::InvalidPresetMode(s)) if s == "automatic"
        ));
    }

    #[test]
    fn preset_mode_device_mode_round_trip() {
        assert_eq!(DeviceMode::from(PresetMode::Automatic), DeviceMode::Auto);
        assert_eq!(DeviceMode::from(PresetMode::Manual), DeviceMode::Manual);
        assert_eq!(PresetMode::from(DeviceMode::Auto), PresetMode::Automatic);
        assert_eq!(PresetMode::from(DeviceMode::Manual), PresetMode::Manual);
    }

    #[test]
    fn preset_mode_serializes_label() {
        let json = serde_json::to_string(&PresetMode::Automatic).unwrap();
        assert_eq!(json, "\"Automatic\"");
    }
}
