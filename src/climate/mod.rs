// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The climate-entity abstraction and the CK002 adapter.
//!
//! [`ClimateEntity`] is the capability interface a home-automation host
//! consumes: read accessors for the derived state and async command
//! methods for control. [`Ck002Thermostat`] implements it on top of a
//! [`DeviceApi`](crate::DeviceApi) client.

mod features;
mod state;
mod thermostat;

pub use features::SupportedFeatures;
pub use state::ClimateState;
pub use thermostat::Ck002Thermostat;

use crate::error::Result;
use crate::types::{Celsius, HvacAction, HvacMode, PresetMode, TemperatureUnit};

/// A temperature change request.
///
/// Hosts pass temperature changes as a bag of optional values; a
/// request without a temperature is a no-op for devices that only
/// support a single setpoint.
///
/// # Examples
///
/// ```
/// use weback_climate::climate::SetTemperature;
/// use weback_climate::types::Celsius;
///
/// let request = SetTemperature::new().with_temperature(Celsius::new(21.5));
/// assert_eq!(request.temperature(), Some(Celsius::new(21.5)));
///
/// assert_eq!(SetTemperature::new().temperature(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SetTemperature {
    temperature: Option<Celsius>,
}

impl SetTemperature {
    /// Creates an empty request.
    #[must_use]
    pub const fn new() -> Self {
        Self { temperature: None }
    }

    /// Sets the requested target temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: Celsius) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Returns the requested target temperature, if any.
    #[must_use]
    pub const fn temperature(&self) -> Option<Celsius> {
        self.temperature
    }
}

impl From<Celsius> for SetTemperature {
    fn from(temperature: Celsius) -> Self {
        Self::new().with_temperature(temperature)
    }
}

/// The climate-control contract a host platform consumes.
///
/// Read accessors are pure functions of the adapter's cached status
/// snapshot; they never perform I/O. Command methods send exactly one
/// control request each and surface API failures unmodified.
#[allow(async_fn_in_trait)]
pub trait ClimateEntity {
    /// Returns the display name of the entity.
    fn name(&self) -> &str;

    /// Returns the optional operations this entity supports.
    fn supported_features(&self) -> SupportedFeatures;

    /// Returns the unit for all temperatures this entity reports.
    fn temperature_unit(&self) -> TemperatureUnit;

    /// Returns the HVAC modes this entity can be set to.
    fn hvac_modes(&self) -> &[HvacMode];

    /// Returns the preset modes this entity advertises.
    fn preset_modes(&self) -> &[PresetMode];

    /// Returns the requested operating mode.
    fn hvac_mode(&self) -> HvacMode;

    /// Returns the observed current activity.
    fn hvac_action(&self) -> HvacAction;

    /// Returns the active preset mode.
    fn preset_mode(&self) -> PresetMode;

    /// Returns the ambient temperature, if known.
    fn current_temperature(&self) -> Option<Celsius>;

    /// Returns the target temperature, if known.
    fn target_temperature(&self) -> Option<Celsius>;

    /// Returns the lowest settable target temperature.
    fn min_temp(&self) -> Celsius;

    /// Returns the highest settable target temperature.
    fn max_temp(&self) -> Celsius;

    /// Returns the granularity of target temperature changes.
    fn target_temperature_step(&self) -> Celsius;

    /// Sets the HVAC mode.
    ///
    /// # Errors
    ///
    /// Returns error if the control request fails.
    async fn set_hvac_mode(&self, mode: HvacMode) -> Result<()>;

    /// Sets the preset mode from its label.
    ///
    /// # Errors
    ///
    /// Returns error if the control request fails.
    async fn set_preset_mode(&self, preset: &str) -> Result<()>;

    /// Applies a temperature change request.
    ///
    /// A request without a temperature is a no-op.
    ///
    /// # Errors
    ///
    /// Returns error if the temperature is out of range or the control
    /// request fails.
    async fn set_temperature(&self, request: SetTemperature) -> Result<()>;

    /// Fetches a fresh status snapshot and replaces the cached one
    /// wholesale.
    ///
    /// # Errors
    ///
    /// Returns error if the status request fails.
    async fn update(&self) -> Result<()>;

    /// Turns the entity off.
    ///
    /// # Errors
    ///
    /// Returns error if the control request fails.
    async fn turn_off(&self) -> Result<()> {
        self.set_hvac_mode(HvacMode::Off).await
    }

    /// Turns the entity on, selecting the first advertised mode that is
    /// not off.
    ///
    /// # Errors
    ///
    /// Returns error if the control request fails.
    async fn turn_on(&self) -> Result<()> {
        let mode = self
            .hvac_modes()
            .iter()
            .copied()
            .find(|mode| *mode != HvacMode::Off)
            .unwrap_or(HvacMode::Heat);
        self.set_hvac_mode(mode).await
    }
}
