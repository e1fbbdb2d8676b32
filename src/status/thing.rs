// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device descriptions handed over by the host platform.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::status::ThingStatus;

/// Description of a registered device, as supplied at setup time.
///
/// This is the record the platform passes when it asks the integration
/// to build an entity: identity, display name, model family, and the
/// initial status.
///
/// # Examples
///
/// ```
/// use weback_climate::status::{ThingDescription, ThingStatus};
///
/// let thing = ThingDescription::new(
///     "thermo-01",
///     "Living room",
///     "CK002",
///     ThingStatus::new(),
/// );
/// assert_eq!(thing.sub_type, "CK002");
/// assert_eq!(thing.display_name(), "Living room");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingDescription {
    /// Unique device identifier within the vendor account.
    pub thing_name: String,

    /// User-assigned display name; may be empty.
    pub thing_nickname: String,

    /// Model family identifier, e.g. `"CK002"`.
    pub sub_type: String,

    /// Status reported at registration time.
    pub thing_status: ThingStatus,
}

impl ThingDescription {
    /// Creates a description from its parts.
    pub fn new(
        thing_name: impl Into<String>,
        thing_nickname: impl Into<String>,
        sub_type: impl Into<String>,
        thing_status: ThingStatus,
    ) -> Self {
        Self {
            thing_name: thing_name.into(),
            thing_nickname: thing_nickname.into(),
            sub_type: sub_type.into(),
            thing_status,
        }
    }

    /// Parses a description from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedFormat`] if the value is not an
    /// object, [`ParseError::MissingField`] naming the first required
    /// key that is absent, or [`ParseError::Json`] if a field has the
    /// wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ParseError> {
        let Some(object) = value.as_object() else {
            return Err(ParseError::UnexpectedFormat(
                "thing description must be a JSON object".to_string(),
            ));
        };
        for key in ["thing_name", "thing_nickname", "sub_type", "thing_status"] {
            if !object.contains_key(key) {
                return Err(ParseError::MissingField(key.to_string()));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the name to display for this device.
    ///
    /// The nickname wins when the user has set one; otherwise the
    /// device identifier is used.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.thing_nickname.is_empty() {
            &self.thing_name
        } else {
            &self.thing_nickname
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_parses_complete_description() {
        let value = json!({
            "thing_name": "thermo-01",
            "thing_nickname": "Living room",
            "sub_type": "CK002",
            "thing_status": {"working_status": "on", "mode": "auto"}
        });
        let thing = ThingDescription::from_value(value).unwrap();
        assert_eq!(thing.thing_name, "thermo-01");
        assert_eq!(thing.sub_type, "CK002");
        assert!(thing.thing_status.is_on());
    }

    #[test]
    fn from_value_reports_missing_key() {
        let value = json!({
            "thing_name": "thermo-01",
            "sub_type": "CK002",
            "thing_status": {}
        });
        let result = ThingDescription::from_value(value);
        assert!(matches!(
            result,
            Err(ParseError::MissingField(key)) if key == "thing_nickname"
        ));
    }

    #[test]
    fn from_value_rejects_non_object() {
        let result = ThingDescription::from_value(json!("thermo-01"));
        assert!(matches!(result, Err(ParseError::UnexpectedFormat(_))));
    }

    #[test]
    fn display_name_prefers_nickname() {
        let named = ThingDescription::new("thermo-01", "Hallway", "CK002", ThingStatus::new());
        assert_eq!(named.display_name(), "Hallway");

        let unnamed = ThingDescription::new("thermo-01", "", "CK002", ThingStatus::new());
        assert_eq!(unnamed.display_name(), "thermo-01");
    }
}
