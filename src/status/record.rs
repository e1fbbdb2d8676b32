// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw device status records and snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::types::{
    Celsius, DeciCelsius, DeviceMode, HalfCelsius, HvacAction, HvacMode, PresetMode, WorkingStatus,
};

/// The device's raw reported state, as returned by the vendor API.
///
/// Not all fields are present in every record. The string fields keep
/// their raw wire values; the typed accessors parse them leniently, so
/// an unknown value reads as absent rather than failing at the read
/// site.
///
/// # Examples
///
/// ```
/// use weback_climate::status::ThingStatus;
/// use weback_climate::types::HvacMode;
///
/// let json = r#"{"working_status":"on","mode":"auto","air_tem":215,"set_tem":40}"#;
/// let status = ThingStatus::from_json(json).unwrap();
///
/// assert_eq!(status.hvac_mode(), HvacMode::Auto);
/// assert_eq!(status.current_temperature().unwrap().value(), 21.5);
/// assert_eq!(status.target_temperature().unwrap().value(), 20.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThingStatus {
    /// Raw `working_status` value ("on" or "off").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    working_status: Option<String>,

    /// Raw `mode` value ("auto" or "manual").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mode: Option<String>,

    /// Ambient temperature in tenths of a degree Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    air_tem: Option<i16>,

    /// Target temperature in half degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    set_tem: Option<i16>,
}

impl ThingStatus {
    /// Creates an empty status record with all fields absent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            working_status: None,
            mode: None,
            air_tem: None,
            set_tem: None,
        }
    }

    /// Parses a status record from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the input is not valid JSON or a
    /// field has the wrong type. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a status record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedFormat`] if the value is not an
    /// object, or [`ParseError::Json`] if a field has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ParseError> {
        if !value.is_object() {
            return Err(ParseError::UnexpectedFormat(
                "status record must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Sets the `working_status` field.
    #[must_use]
    pub fn with_working_status(mut self, status: WorkingStatus) -> Self {
        self.working_status = Some(status.as_str().to_string());
        self
    }

    /// Sets the `mode` field.
    #[must_use]
    pub fn with_mode(mut self, mode: DeviceMode) -> Self {
        self.mode = Some(mode.as_str().to_string());
        self
    }

    /// Sets the ambient temperature reading.
    #[must_use]
    pub const fn with_air_tem(mut self, reading: DeciCelsius) -> Self {
        self.air_tem = Some(reading.value());
        self
    }

    /// Sets the target temperature.
    #[must_use]
    pub const fn with_set_tem(mut self, target: HalfCelsius) -> Self {
        self.set_tem = Some(target.value());
        self
    }

    // ========== Typed field accessors ==========

    /// Returns the working status, if present and recognized.
    #[must_use]
    pub fn working_status(&self) -> Option<WorkingStatus> {
        self.working_status.as_ref().and_then(|s| s.parse().ok())
    }

    /// Returns the device control mode, if present and recognized.
    #[must_use]
    pub fn device_mode(&self) -> Option<DeviceMode> {
        self.mode.as_ref().and_then(|s| s.parse().ok())
    }

    /// Returns the ambient temperature reading, if present.
    #[must_use]
    pub fn air_tem(&self) -> Option<DeciCelsius> {
        self.air_tem.map(DeciCelsius::new)
    }

    /// Returns the raw target temperature, if present.
    #[must_use]
    pub fn set_tem(&self) -> Option<HalfCelsius> {
        self.set_tem.map(HalfCelsius::new)
    }

    // ========== Derived climate properties ==========

    /// Returns `true` if the device reports itself as running.
    ///
    /// Any value other than the literal `"on"`, including an absent or
    /// unrecognized `working_status`, reads as not running.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.working_status().is_some_and(|s| s.is_on())
    }

    /// Derives the HVAC mode from the status fields.
    ///
    /// The device is [`HvacMode::Off`] unless it is running; a running
    /// device is [`HvacMode::Auto`] in auto mode and [`HvacMode::Heat`]
    /// otherwise.
    #[must_use]
    pub fn hvac_mode(&self) -> HvacMode {
        if !self.is_on() {
            return HvacMode::Off;
        }
        match self.device_mode() {
            Some(DeviceMode::Auto) => HvacMode::Auto,
            _ => HvacMode::Heat,
        }
    }

    /// Derives the HVAC action from the status fields.
    #[must_use]
    pub fn hvac_action(&self) -> HvacAction {
        if self.is_on() {
            HvacAction::Heating
        } else {
            HvacAction::Idle
        }
    }

    /// Derives the preset mode from the status fields.
    #[must_use]
    pub fn preset_mode(&self) -> PresetMode {
        match self.device_mode() {
            Some(DeviceMode::Auto) => PresetMode::Automatic,
            _ => PresetMode::Manual,
        }
    }

    /// Returns the ambient temperature in degrees Celsius.
    #[must_use]
    pub fn current_temperature(&self) -> Option<Celsius> {
        self.air_tem().map(DeciCelsius::to_celsius)
    }

    /// Returns the target temperature in degrees Celsius.
    #[must_use]
    pub fn target_temperature(&self) -> Option<Celsius> {
        self.set_tem().map(HalfCelsius::to_celsius)
    }
}

/// A status record together with the instant it was received.
///
/// The adapter holds one snapshot and replaces it wholesale on each
/// refresh; the timestamp lets callers judge staleness.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    status: ThingStatus,
    received_at: DateTime<Utc>,
}

impl StatusSnapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn new(status: ThingStatus) -> Self {
        Self {
            status,
            received_at: Utc::now(),
        }
    }

    /// Returns the status record.
    #[must_use]
    pub const fn status(&self) -> &ThingStatus {
        &self.status
    }

    /// Returns when the status was received.
    #[must_use]
    pub const fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

impl From<ThingStatus> for StatusSnapshot {
    fn from(status: ThingStatus) -> Self {
        Self::new(status)
    }
}
