// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control payload for `device_control` calls.
//!
//! A control payload carries only the fields a command intends to
//! change; absent fields are omitted from the serialized form entirely,
//! matching what the vendor API expects.

use serde::{Deserialize, Serialize};

use crate::types::{DeviceMode, HalfCelsius, WorkingStatus};

/// The body of a `device_control` request.
///
/// Keys are drawn from `working_status`, `mode`, and `set_tem`; only the
/// keys set on the payload are serialized.
///
/// # Examples
///
/// ```
/// use weback_climate::types::{ControlPayload, DeviceMode, WorkingStatus};
///
/// let payload = ControlPayload::new()
///     .with_working_status(WorkingStatus::On)
///     .with_mode(DeviceMode::Auto);
///
/// assert_eq!(payload.working_status(), Some(WorkingStatus::On));
/// assert_eq!(payload.mode(), Some(DeviceMode::Auto));
/// assert_eq!(payload.set_tem(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    working_status: Option<WorkingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<DeviceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    set_tem: Option<HalfCelsius>,
}

impl ControlPayload {
    /// Creates an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            working_status: None,
            mode: None,
            set_tem: None,
        }
    }

    /// Sets the `working_status` key.
    #[must_use]
    pub const fn with_working_status(mut self, status: WorkingStatus) -> Self {
        self.working_status = Some(status);
        self
    }

    /// Sets the `mode` key.
    #[must_use]
    pub const fn with_mode(mut self, mode: DeviceMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the `set_tem` key.
    #[must_use]
    pub const fn with_set_tem(mut self, target: HalfCelsius) -> Self {
        self.set_tem = Some(target);
        self
    }

    /// Returns the `working_status` key, if set.
    #[must_use]
    pub const fn working_status(&self) -> Option<WorkingStatus> {
        self.working_status
    }

    /// Returns the `mode` key, if set.
    #[must_use]
    pub const fn mode(&self) -> Option<DeviceMode> {
        self.mode
    }

    /// Returns the `set_tem` key, if set.
    #[must_use]
    pub const fn set_tem(&self) -> Option<HalfCelsius> {
        self.set_tem
    }

    /// Returns `true` if no keys are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.working_status.is_none() && self.mode.is_none() && self.set_tem.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_payload_serializes_to_empty_object() {
        let value = serde_json::to_value(ControlPayload::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn absent_keys_are_omitted() {
        let payload = ControlPayload::new().with_working_status(WorkingStatus::Off);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"working_status": "off"}));
    }

    #[test]
    fn full_payload_serializes_all_keys() {
        let payload = ControlPayload::new()
            .with_working_status(WorkingStatus::On)
            .with_mode(DeviceMode::Auto)
            .with_set_tem(HalfCelsius::new(43));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({"working_status": "on", "mode": "auto", "set_tem": 43})
        );
    }

    #[test]
    fn payload_deserializes_partial_object() {
        let payload: ControlPayload = serde_json::from_str(r#"{"mode": "manual"}"#).unwrap();
        assert_eq!(payload.mode(), Some(DeviceMode::Manual));
        assert_eq!(payload.working_status(), None);
        assert_eq!(payload.set_tem(), None);
    }

    #[test]
    fn is_empty() {
        assert!(ControlPayload::new().is_empty());
        assert!(!ControlPayload::new().with_mode(DeviceMode::Auto).is_empty());
    }
}
