// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity feature flags.
//!
//! A climate entity advertises which optional operations it supports so
//! the host platform only offers the matching controls.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of optional operations a climate entity supports.
///
/// Combine flags with `|`:
///
/// ```
/// use weback_climate::climate::SupportedFeatures;
///
/// let features = SupportedFeatures::TARGET_TEMPERATURE | SupportedFeatures::PRESET_MODE;
/// assert!(features.contains(SupportedFeatures::PRESET_MODE));
/// assert!(!features.contains(SupportedFeatures::TURN_ON));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SupportedFeatures(u8);

impl SupportedFeatures {
    /// No optional features.
    pub const NONE: Self = Self(0);

    /// The target temperature can be set.
    pub const TARGET_TEMPERATURE: Self = Self(1);

    /// Preset modes can be selected.
    pub const PRESET_MODE: Self = Self(1 << 1);

    /// The entity can be turned off.
    pub const TURN_OFF: Self = Self(1 << 2);

    /// The entity can be turned on.
    pub const TURN_ON: Self = Self(1 << 3);

    /// Returns the raw flag bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every flag in `other` is present.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the combination of both flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if no flags are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for SupportedFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SupportedFeatures {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for SupportedFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(SupportedFeatures, &str); 4] = [
            (SupportedFeatures::TARGET_TEMPERATURE, "target_temperature"),
            (SupportedFeatures::PRESET_MODE, "preset_mode"),
            (SupportedFeatures::TURN_OFF, "turn_off"),
            (SupportedFeatures::TURN_ON, "turn_on"),
        ];

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(SupportedFeatures::default().is_empty());
        assert_eq!(SupportedFeatures::default(), SupportedFeatures::NONE);
    }

    #[test]
    fn union_combines_flags() {
        let features = SupportedFeatures::TARGET_TEMPERATURE
            | SupportedFeatures::PRESET_MODE
            | SupportedFeatures::TURN_OFF;
        assert!(features.contains(SupportedFeatures::TARGET_TEMPERATURE));
        assert!(features.contains(SupportedFeatures::PRESET_MODE));
        assert!(features.contains(SupportedFeatures::TURN_OFF));
        assert!(!features.contains(SupportedFeatures::TURN_ON));
    }

    #[test]
    fn contains_requires_all_flags() {
        let features = SupportedFeatures::TARGET_TEMPERATURE;
        let both = SupportedFeatures::TARGET_TEMPERATURE | SupportedFeatures::PRESET_MODE;
        assert!(!features.contains(both));
        assert!(both.contains(features));
    }

    #[test]
    fn bitor_assign_accumulates() {
        let mut features = SupportedFeatures::NONE;
        features |= SupportedFeatures::TURN_ON;
        features |= SupportedFeatures::TURN_OFF;
        assert!(features.contains(SupportedFeatures::TURN_ON | SupportedFeatures::TURN_OFF));
    }

    #[test]
    fn display_lists_set_flags() {
        let features = SupportedFeatures::TARGET_TEMPERATURE | SupportedFeatures::TURN_ON;
        assert_eq!(features.to_string(), "target_temperature | turn_on");
        assert_eq!(SupportedFeatures::NONE.to_string(), "none");
    }
}
