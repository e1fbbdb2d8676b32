// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The vendor API seam.
//!
//! This crate does not speak to the WeBack cloud itself. Transport,
//! session handling, and authentication belong to the embedding
//! application, which plugs them in behind the [`DeviceApi`] trait.

use crate::error::ApiError;
use crate::status::ThingStatus;
use crate::types::ControlPayload;

/// Client for the vendor's device API.
///
/// Implementations are addressed by the device's `sub_type` (model
/// family) and `thing_name` (account-unique identifier), matching the
/// vendor's own call signatures.
///
/// # Examples
///
/// A trivial implementation for tests or dry runs:
///
/// ```
/// use weback_climate::{ApiError, DeviceApi};
/// use weback_climate::status::ThingStatus;
/// use weback_climate::types::ControlPayload;
///
/// struct NullApi;
///
/// impl DeviceApi for NullApi {
///     async fn device_control(
///         &self,
///         _sub_type: &str,
///         _thing_name: &str,
///         _payload: &ControlPayload,
///     ) -> Result<(), ApiError> {
///         Ok(())
///     }
///
///     async fn thing_info(
///         &self,
///         _sub_type: &str,
///         _thing_name: &str,
///     ) -> Result<ThingStatus, ApiError> {
///         Ok(ThingStatus::new())
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait DeviceApi {
    /// Sends a control payload to a device.
    ///
    /// This is a fire-and-forget call: the vendor acknowledges receipt
    /// but returns no device state.
    ///
    /// # Arguments
    ///
    /// * `sub_type` - The device's model family identifier
    /// * `thing_name` - The device's unique identifier
    /// * `payload` - The control keys to change
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request cannot be delivered or the
    /// vendor rejects it.
    async fn device_control(
        &self,
        sub_type: &str,
        thing_name: &str,
        payload: &ControlPayload,
    ) -> Result<(), ApiError>;

    /// Fetches a fresh status record for a device.
    ///
    /// This backs the vendor's `user_thing_info_get` call.
    ///
    /// # Arguments
    ///
    /// * `sub_type` - The device's model family identifier
    /// * `thing_name` - The device's unique identifier
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request cannot be delivered or the
    /// vendor rejects it.
    async fn thing_info(&self, sub_type: &str, thing_name: &str)
    -> Result<ThingStatus, ApiError>;
}
