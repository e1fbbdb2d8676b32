// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire-level enumerations for WeBack status and control fields.
//!
//! These types mirror the string values the vendor API reports in status
//! records and accepts in control payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Whether the device is actively running.
///
/// Reported in status records under `working_status` and accepted in
/// control payloads under the same key.
///
/// # Examples
///
/// ```
/// use weback_climate::types::WorkingStatus;
///
/// assert_eq!(WorkingStatus::On.as_str(), "on");
/// assert_eq!(WorkingStatus::Off.as_str(), "off");
/// assert_eq!("on".parse::<WorkingStatus>().unwrap(), WorkingStatus::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkingStatus {
    /// The device is switched off.
    Off,
    /// The device is running.
    On,
}

impl WorkingStatus {
    /// Returns the vendor wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns `true` if the device is running.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for WorkingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkingStatus {
    type Err = ValueError;

    /// Parses the exact vendor wire string.
    ///
    /// Matching is case sensitive: the status derivation treats any
    /// value other than the literal `"on"` as not running, so `"ON"` is
    /// an error here, not an alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            _ => Err(ValueError::InvalidWorkingStatus(s.to_string())),
        }
    }
}

impl From<bool> for WorkingStatus {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// The device's internal control mode.
///
/// Reported in status records under `mode` and accepted in control
/// payloads under the same key. `Auto` means the device follows its own
/// internal schedule; `Manual` means it holds the set temperature.
///
/// # Examples
///
/// ```
/// use weback_climate::types::DeviceMode;
///
/// assert_eq!(DeviceMode::Auto.as_str(), "auto");
/// assert_eq!("manual".parse::<DeviceMode>().unwrap(), DeviceMode::Manual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    /// The device follows its internal schedule.
    Auto,
    /// The device holds the set temperature.
    Manual,
}

impl DeviceMode {
    /// Returns the vendor wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceMode {
    type Err = ValueError;

    /// Parses the exact vendor wire string, case sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            _ => Err(ValueError::InvalidDeviceMode(s.to_string())),
        }
    }
}
