// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `weback_climate` library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation, vendor API communication, and status
//! parsing.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when
/// interacting with WeBack thermostat devices.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the vendor API.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Error occurred while parsing a status record.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device subtype is not handled by this adapter.
    #[error("unsupported device subtype: {0}")]
    UnsupportedSubType(String),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A target temperature is outside the device's allowed range.
    #[error("temperature {actual} is out of range [{min}, {max}]")]
    TemperatureOutOfRange {
        /// Minimum allowed temperature in Celsius.
        min: f64,
        /// Maximum allowed temperature in Celsius.
        max: f64,
        /// The actual temperature that was provided.
        actual: f64,
    },

    /// An invalid HVAC mode string was provided.
    #[error("invalid HVAC mode: {0}")]
    InvalidHvacMode(String),

    /// An invalid preset mode label was provided.
    #[error("invalid preset mode: {0}")]
    InvalidPresetMode(String),

    /// An invalid working status string was provided.
    #[error("invalid working status: {0}")]
    InvalidWorkingStatus(String),

    /// An invalid device mode string was provided.
    #[error("invalid device mode: {0}")]
    InvalidDeviceMode(String),
}

/// Errors a [`DeviceApi`](crate::DeviceApi) implementation may surface.
///
/// The adapter never handles these locally; they propagate to the caller
/// unmodified.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection to the vendor cloud failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The vendor API rejected the request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Errors related to parsing vendor status records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the record.
    #[error("missing field in record: {0}")]
    MissingField(String),

    /// Unexpected record format.
    #[error("unexpected record format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::TemperatureOutOfRange {
            min: 7.0,
            max: 35.0,
            actual: 40.0,
        };
        assert_eq!(err.to_string(), "temperature 40 is out of range [7, 35]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidHvacMode("cool".to_string());
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidHvacMode(mode)) if mode == "cool"
        ));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("thing_name".to_string());
        assert_eq!(err.to_string(), "missing field in record: thing_name");
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::Timeout(5000);
        assert_eq!(err.to_string(), "request timed out after 5000 ms");
    }
}
