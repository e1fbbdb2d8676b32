// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The CK002 thermostat adapter.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::api::DeviceApi;
use crate::climate::{ClimateEntity, ClimateState, SetTemperature, SupportedFeatures};
use crate::command::{Command, HvacModeCommand, PresetModeCommand, TargetTemperatureCommand};
use crate::error::{Error, Result, ValueError};
use crate::status::{StatusSnapshot, ThingDescription};
use crate::types::{Celsius, HvacAction, HvacMode, PresetMode, TemperatureUnit};

const HVAC_MODES: [HvacMode; 3] = [HvacMode::Off, HvacMode::Heat, HvacMode::Auto];
const PRESET_MODES: [PresetMode; 2] = [PresetMode::Manual, PresetMode::Automatic];

/// A WeBack CK002 heating thermostat.
///
/// The adapter maps [`ClimateEntity`] calls onto vendor control
/// payloads and derives the platform-level state from the device's raw
/// status record. It holds the last-known status as a snapshot,
/// replaced wholesale by [`update`](ClimateEntity::update); commands
/// never mutate it.
///
/// # Type Parameter
///
/// `A` is the [`DeviceApi`] implementation that carries requests to the
/// vendor cloud. One client is typically shared by every device in an
/// account, so the adapter takes it as an [`Arc`].
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use weback_climate::climate::{ClimateEntity, SetTemperature};
/// use weback_climate::status::ThingDescription;
/// use weback_climate::types::{Celsius, HvacMode};
/// use weback_climate::Ck002Thermostat;
///
/// # use weback_climate::{ApiError, DeviceApi};
/// # use weback_climate::status::ThingStatus;
/// # use weback_climate::types::ControlPayload;
/// # struct Api;
/// # impl DeviceApi for Api {
/// #     async fn device_control(
/// #         &self,
/// #         _: &str,
/// #         _: &str,
/// #         _: &ControlPayload,
/// #     ) -> Result<(), ApiError> {
/// #         Ok(())
/// #     }
/// #     async fn thing_info(&self, _: &str, _: &str) -> Result<ThingStatus, ApiError> {
/// #         Ok(ThingStatus::new())
/// #     }
/// # }
/// # async fn example(api: Arc<Api>, thing: ThingDescription) -> weback_climate::Result<()> {
/// let thermostat = Ck002Thermostat::new(api, thing)?;
///
/// thermostat.set_hvac_mode(HvacMode::Auto).await?;
/// thermostat
///     .set_temperature(SetTemperature::new().with_temperature(Celsius::new(21.5)))
///     .await?;
/// thermostat.update().await?;
/// # Ok(())
/// # }
/// ```
pub struct Ck002Thermostat<A: DeviceApi> {
    api: Arc<A>,
    sub_type: String,
    thing_name: String,
    name: String,
    snapshot: RwLock<StatusSnapshot>,
    state_tx: watch::Sender<ClimateState>,
}

impl<A: DeviceApi> Ck002Thermostat<A> {
    /// The model family this adapter handles.
    pub const SUB_TYPE: &'static str = "CK002";

    /// Lowest settable target temperature.
    pub const MIN_TEMP: Celsius = Celsius::new(7.0);

    /// Highest settable target temperature.
    pub const MAX_TEMP: Celsius = Celsius::new(35.0);

    /// Granularity of target temperature changes.
    pub const TEMP_STEP: Celsius = Celsius::new(0.5);

    /// Features the CK002 supports.
    pub const FEATURES: SupportedFeatures = SupportedFeatures::TARGET_TEMPERATURE
        .union(SupportedFeatures::PRESET_MODE)
        .union(SupportedFeatures::TURN_OFF)
        .union(SupportedFeatures::TURN_ON);

    /// Creates an adapter for a registered device.
    ///
    /// The display name is the thing's nickname, falling back to its
    /// identifier when no nickname is set. The description's status
    /// becomes the initial snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSubType`] if the description is not
    /// a CK002 device.
    pub fn new(api: Arc<A>, thing: ThingDescription) -> Result<Self> {
        if thing.sub_type != Self::SUB_TYPE {
            return Err(Error::UnsupportedSubType(thing.sub_type));
        }

        let name = thing.display_name().to_string();
        let ThingDescription {
            thing_name,
            sub_type,
            thing_status,
            ..
        } = thing;

        let snapshot = StatusSnapshot::new(thing_status);
        let (state_tx, _) = watch::channel(ClimateState::from_status(snapshot.status()));

        Ok(Self {
            api,
            sub_type,
            thing_name,
            name,
            snapshot: RwLock::new(snapshot),
            state_tx,
        })
    }

    /// Returns the device's model family identifier.
    #[must_use]
    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    /// Returns the device's unique identifier.
    #[must_use]
    pub fn thing_name(&self) -> &str {
        &self.thing_name
    }

    /// Returns a copy of the cached status snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        self.snapshot.read().clone()
    }

    /// Returns the current platform-level state.
    #[must_use]
    pub fn state(&self) -> ClimateState {
        ClimateState::from_status(self.snapshot.read().status())
    }

    /// Creates a watch receiver for state updates.
    ///
    /// A new state is published after construction, after every
    /// command, and after every refresh.
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<ClimateState> {
        self.state_tx.subscribe()
    }

    /// Runs a periodic refresh loop until the first failure.
    ///
    /// Refreshes immediately, then once per `period`; a missed tick
    /// delays the schedule instead of bursting. Retry policy belongs to
    /// the embedding application.
    ///
    /// # Errors
    ///
    /// Returns the first refresh error.
    pub async fn run_polling(&self, period: Duration) -> Result<()> {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.update().await?;
        }
    }

    /// Sends one control request, then republishes the derived state.
    async fn send_command<C: Command + Sync>(&self, command: &C) -> Result<()> {
        let payload = command.payload();
        tracing::debug!(
            thing = %self.thing_name,
            command = command.name(),
            payload = ?payload,
            "Sending device control"
        );
        self.api
            .device_control(&self.sub_type, &self.thing_name, &payload)
            .await
            .map_err(Error::Api)?;
        self.publish_state();
        Ok(())
    }

    fn publish_state(&self) {
        let state = ClimateState::from_status(self.snapshot.read().status());
        // Ignore send errors (no receivers)
        let _ = self.state_tx.send(state);
    }

    fn validate_target(&self, temperature: Celsius) -> Result<()> {
        if !(Self::MIN_TEMP..=Self::MAX_TEMP).contains(&temperature) {
            return Err(Error::Value(ValueError::TemperatureOutOfRange {
                min: Self::MIN_TEMP.value(),
                max: Self::MAX_TEMP.value(),
                actual: temperature.value(),
            }));
        }
        Ok(())
    }
}

impl<A: DeviceApi> ClimateEntity for Ck002Thermostat<A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_features(&self) -> SupportedFeatures {
        Self::FEATURES
    }

    fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::Celsius
    }

    fn hvac_modes(&self) -> &[HvacMode] {
        &HVAC_MODES
    }

    fn preset_modes(&self) -> &[PresetMode] {
        &PRESET_MODES
    }

    fn hvac_mode(&self) -> HvacMode {
        self.snapshot.read().status().hvac_mode()
    }

    fn hvac_action(&self) -> HvacAction {
        self.snapshot.read().status().hvac_action()
    }

    fn preset_mode(&self) -> PresetMode {
        self.snapshot.read().status().preset_mode()
    }

    fn current_temperature(&self) -> Option<Celsius> {
        self.snapshot.read().status().current_temperature()
    }

    fn target_temperature(&self) -> Option<Celsius> {
        self.snapshot.read().status().target_temperature()
    }

    fn min_temp(&self) -> Celsius {
        Self::MIN_TEMP
    }

    fn max_temp(&self) -> Celsius {
        Self::MAX_TEMP
    }

    fn target_temperature_step(&self) -> Celsius {
        Self::TEMP_STEP
    }

    async fn set_hvac_mode(&self, mode: HvacMode) -> Result<()> {
        self.send_command(&HvacModeCommand::new(mode)).await
    }

    async fn set_preset_mode(&self, preset: &str) -> Result<()> {
        self.send_command(&PresetModeCommand::from_label(preset)).await
    }

    async fn set_temperature(&self, request: SetTemperature) -> Result<()> {
        let Some(temperature) = request.temperature() else {
            return Ok(());
        };
        self.validate_target(temperature)?;
        self.send_command(&TargetTemperatureCommand::from_celsius(temperature))
            .await
    }

    async fn update(&self) -> Result<()> {
        let status = self
            .api
            .thing_info(&self.sub_type, &self.thing_name)
            .await
            .map_err(Error::Api)?;
        tracing::debug!(thing = %self.thing_name, "Refreshed device status");
        *self.snapshot.write() = StatusSnapshot::new(status);
        self.publish_state();
        Ok(())
    }
}

impl<A: DeviceApi> fmt::Debug for Ck002Thermostat<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ck002Thermostat")
            .field("name", &self.name)
            .field("sub_type", &self.sub_type)
            .field("thing_name", &self.thing_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::status::ThingStatus;
    use crate::types::{ControlPayload, DeciCelsius, DeviceMode, HalfCelsius, WorkingStatus};

    struct NullApi;

    impl DeviceApi for NullApi {
        async fn device_control(
            &self,
            _sub_type: &str,
            _thing_name: &str,
            _payload: &ControlPayload,
        ) -> std::result::Result<(), ApiError> {
            Ok(())
        }

        async fn thing_info(
            &self,
            _sub_type: &str,
            _thing_name: &str,
        ) -> std::result::Result<ThingStatus, ApiError> {
            Ok(ThingStatus::new())
        }
    }

    fn ck002(status: ThingStatus) -> Ck002Thermostat<NullApi> {
        let thing = ThingDescription::new("thermo-01", "Living room", "CK002", status);
        Ck002Thermostat::new(Arc::new(NullApi), thing).unwrap()
    }

    #[test]
    fn rejects_unsupported_subtype() {
        let thing = ThingDescription::new("vac-1", "Vacuum", "GV668", ThingStatus::new());
        let result = Ck002Thermostat::new(Arc::new(NullApi), thing);
        assert!(matches!(
            result,
            Err(Error::UnsupportedSubType(sub_type)) if sub_type == "GV668"
        ));
    }

    #[test]
    fn name_prefers_nickname() {
        assert_eq!(ck002(ThingStatus::new()).name(), "Living room");
    }

    #[test]
    fn name_falls_back_to_thing_name() {
        let thing = ThingDescription::new("thermo-01", "", "CK002", ThingStatus::new());
        let thermostat = Ck002Thermostat::new(Arc::new(NullApi), thing).unwrap();
        assert_eq!(thermostat.name(), "thermo-01");
    }

    #[test]
    fn accessors_derive_from_initial_status() {
        let status = ThingStatus::new()
            .with_working_status(WorkingStatus::On)
            .with_mode(DeviceMode::Auto)
            .with_air_tem(DeciCelsius::new(215))
            .with_set_tem(HalfCelsius::new(40));
        let thermostat = ck002(status);

        assert_eq!(thermostat.hvac_mode(), HvacMode::Auto);
        assert_eq!(thermostat.hvac_action(), HvacAction::Heating);
        assert_eq!(thermostat.preset_mode(), PresetMode::Automatic);
        assert!((thermostat.current_temperature().unwrap().value() - 21.5).abs() < f64::EPSILON);
        assert!((thermostat.target_temperature().unwrap().value() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn advertises_ck002_capabilities() {
        let thermostat = ck002(ThingStatus::new());

        assert!(thermostat.supported_features().contains(
            SupportedFeatures::TARGET_TEMPERATURE
                | SupportedFeatures::PRESET_MODE
                | SupportedFeatures::TURN_OFF
                | SupportedFeatures::TURN_ON
        ));
        assert_eq!(
            thermostat.hvac_modes(),
            [HvacMode::Off, HvacMode::Heat, HvacMode::Auto]
        );
        assert_eq!(
            thermostat.preset_modes(),
            [PresetMode::Manual, PresetMode::Automatic]
        );
        assert_eq!(thermostat.temperature_unit(), TemperatureUnit::Celsius);
        assert_eq!(thermostat.min_temp(), Celsius::new(7.0));
        assert_eq!(thermostat.max_temp(), Celsius::new(35.0));
        assert_eq!(thermostat.target_temperature_step(), Celsius::new(0.5));
    }

    #[tokio::test]
    async fn set_temperature_rejects_out_of_range() {
        let thermostat = ck002(ThingStatus::new());
        let request = SetTemperature::new().with_temperature(Celsius::new(40.0));
        let result = thermostat.set_temperature(request).await;
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::TemperatureOutOfRange { .. }))
        ));
    }

    #[tokio::test]
    async fn set_temperature_without_temperature_is_noop() {
        let thermostat = ck002(ThingStatus::new());
        thermostat.set_temperature(SetTemperature::new()).await.unwrap();
    }

    #[test]
    fn debug_omits_api_client() {
        let rendered = format!("{:?}", ck002(ThingStatus::new()));
        assert!(rendered.contains("Living room"));
        assert!(rendered.contains("CK002"));
    }
}
