// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature types and device encodings.
//!
//! The CK002 reports and accepts temperatures as scaled integers: the
//! ambient reading (`air_tem`) in tenths of a degree and the target
//! (`set_tem`) in half degrees. These types keep the scaling factors at
//! the conversion boundary instead of scattered through the adapter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A temperature in degrees Celsius.
///
/// # Examples
///
/// ```
/// use weback_climate::types::Celsius;
///
/// let t = Celsius::new(21.5);
/// assert_eq!(t.value(), 21.5);
/// assert_eq!(t.to_string(), "21.5°C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Celsius(f64);

impl Celsius {
    /// Creates a new temperature value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl From<f64> for Celsius {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// An ambient temperature reading in tenths of a degree Celsius.
///
/// This is the encoding of the `air_tem` status field: a reading of
/// `215` means 21.5 °C.
///
/// # Examples
///
/// ```
/// use weback_climate::types::DeciCelsius;
///
/// let reading = DeciCelsius::new(215);
/// assert_eq!(reading.to_celsius().value(), 21.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeciCelsius(i16);

impl DeciCelsius {
    /// Creates a reading from a raw `air_tem` value.
    #[must_use]
    pub const fn new(value: i16) -> Self {
        Self(value)
    }

    /// Returns the raw wire value.
    #[must_use]
    pub const fn value(&self) -> i16 {
        self.0
    }

    /// Converts the reading to degrees Celsius.
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius(f64::from(self.0) / 10.0)
    }
}

impl From<i16> for DeciCelsius {
    fn from(value: i16) -> Self {
        Self(value)
    }
}

/// A target temperature in half degrees Celsius.
///
/// This is the encoding of the `set_tem` field in both status records
/// and control payloads: a value of `43` means 21.5 °C.
///
/// # Examples
///
/// ```
/// use weback_climate::types::{Celsius, HalfCelsius};
///
/// let target = HalfCelsius::from_celsius(Celsius::new(21.5));
/// assert_eq!(target.value(), 43);
/// assert_eq!(target.to_celsius().value(), 21.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HalfCelsius(i16);

impl HalfCelsius {
    /// Creates a target from a raw `set_tem` value.
    #[must_use]
    pub const fn new(value: i16) -> Self {
        Self(value)
    }

    /// Encodes a Celsius temperature as half degrees, rounding to the
    /// nearest step.
    ///
    /// # Examples
    ///
    /// ```
    /// use weback_climate::types::{Celsius, HalfCelsius};
    ///
    /// assert_eq!(HalfCelsius::from_celsius(Celsius::new(20.0)).value(), 40);
    /// assert_eq!(HalfCelsius::from_celsius(Celsius::new(21.8)).value(), 44);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_celsius(celsius: Celsius) -> Self {
        Self((celsius.value() * 2.0).round() as i16)
    }

    /// Returns the raw wire value.
    #[must_use]
    pub const fn value(&self) -> i16 {
        self.0
    }

    /// Converts the target to degrees Celsius.
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius(f64::from(self.0) / 2.0)
    }
}

impl From<i16> for HalfCelsius {
    fn from(value: i16) -> Self {
        Self(value)
    }
}

/// Unit of measurement for temperatures reported by a climate entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the unit symbol.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deci_celsius_to_celsius() {
        assert!((DeciCelsius::new(215).to_celsius().value() - 21.5).abs() < f64::EPSILON);
        assert!((DeciCelsius::new(180).to_celsius().value() - 18.0).abs() < f64::EPSILON);
        assert!((DeciCelsius::new(0).to_celsius().value() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn half_celsius_to_celsius() {
        assert!((HalfCelsius::new(40).to_celsius().value() - 20.0).abs() < f64::EPSILON);
        assert!((HalfCelsius::new(43).to_celsius().value() - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn half_celsius_from_celsius() {
        assert_eq!(HalfCelsius::from_celsius(Celsius::new(21.5)).value(), 43);
        assert_eq!(HalfCelsius::from_celsius(Celsius::new(20.0)).value(), 40);
        assert_eq!(HalfCelsius::from_celsius(Celsius::new(7.0)).value(), 14);
    }

    #[test]
    fn half_celsius_from_celsius_rounds_to_nearest() {
        // Off-step inputs round to the nearest half degree.
        assert_eq!(HalfCelsius::from_celsius(Celsius::new(21.8)).value(), 44);
        assert_eq!(HalfCelsius::from_celsius(Celsius::new(21.2)).value(), 42);
    }

    #[test]
    fn half_celsius_from_celsius_negative() {
        assert_eq!(HalfCelsius::from_celsius(Celsius::new(-2.0)).value(), -4);
    }

    #[test]
    fn celsius_display() {
        assert_eq!(Celsius::new(21.5).to_string(), "21.5°C");
        assert_eq!(Celsius::new(21.0).to_string(), "21°C");
    }

    #[test]
    fn celsius_ordering() {
        assert!(Celsius::new(7.0) < Celsius::new(35.0));
    }

    #[test]
    fn temperature_unit_symbol() {
        assert_eq!(TemperatureUnit::Celsius.as_str(), "°C");
        assert_eq!(TemperatureUnit::Fahrenheit.as_str(), "°F");
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
    }

    #[test]
    fn wire_values_survive_serde() {
        let json = serde_json::to_string(&HalfCelsius::new(43)).unwrap();
        assert_eq!(json, "43");
        let back: HalfCelsius = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), 43);
    }
}
