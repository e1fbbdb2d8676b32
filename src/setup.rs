// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform setup.
//!
//! The host platform hands over the account's registered devices as a
//! list of [`ThingDescription`]s; setup builds an adapter for each
//! supported thermostat and skips everything else.

use std::sync::Arc;

use crate::api::DeviceApi;
use crate::climate::Ck002Thermostat;
use crate::status::ThingDescription;

/// Builds thermostat adapters for every supported device description.
///
/// Descriptions whose subtype is not `"CK002"` are skipped with a
/// warning; the shared API client is handed to each adapter.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use weback_climate::setup_platform;
/// use weback_climate::status::ThingDescription;
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
/// # fn example(api: Arc<Api>, things: Vec<ThingDescription>) {
/// let thermostats = setup_platform(&api, things);
/// for thermostat in &thermostats {
///     println!("added {}", thermostat.thing_name());
/// }
/// # }
/// ```
pub fn setup_platform<A: DeviceApi>(
    api: &Arc<A>,
    things: Vec<ThingDescription>,
) -> Vec<Ck002Thermostat<A>> {
    let mut thermostats = Vec::with_capacity(things.len());
    for thing in things {
        let display_name = thing.display_name().to_string();
        match Ck002Thermostat::new(Arc::clone(api), thing) {
            Ok(thermostat) => {
                tracing::debug!(thing = %thermostat.thing_name(), "Added thermostat");
                thermostats.push(thermostat);
            }
            Err(err) => {
                tracing::warn!(thing = %display_name, error = %err, "Skipping unsupported device");
            }
        }
    }
    thermostats
}
