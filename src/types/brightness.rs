// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light control.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::Brightness;
///
/// let level = Brightness::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// assert_eq!(Brightness::default().value(), 70);
///
/// // Invalid values return error
/// assert!(Brightness::new(101).is_err());
/// assert!(Brightness::new(-1).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100);

    /// Brightness of a freshly installed light (70%).
    pub const DEFAULT: Self = Self(70);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [0, 100].
    pub fn new(value: i32) -> Result<Self, ValueError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX.0 => Ok(Self(v)),
            _ => Err(ValueError::OutOfRange {
                setting: "brightness",
                min: i32::from(Self::MIN.0),
                max: i32::from(Self::MAX.0),
                actual: value,
            }),
        }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i32> for Brightness {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brightness> for i32 {
    fn from(value: Brightness) -> Self {
        i32::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_valid_values() {
        for v in 0..=100 {
            let level = Brightness::new(v).unwrap();
            assert_eq!(i32::from(level), v);
        }
    }

    #[test]
    fn brightness_invalid_values() {
        assert!(Brightness::new(101).is_err());
        assert!(Brightness::new(150).is_err());
        assert!(Brightness::new(-1).is_err());
        assert!(Brightness::new(i32::MAX).is_err());
    }

    #[test]
    fn brightness_error_carries_actual_value() {
        let err = Brightness::new(-5).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                setting: "brightness",
                min: 0,
                max: 100,
                actual: -5,
            }
        );
    }

    #[test]
    fn brightness_default_is_seventy() {
        assert_eq!(Brightness::default(), Brightness::DEFAULT);
        assert_eq!(Brightness::DEFAULT.value(), 70);
    }

    #[test]
    fn brightness_bounds() {
        assert_eq!(Brightness::new(0).unwrap(), Brightness::MIN);
        assert_eq!(Brightness::new(100).unwrap(), Brightness::MAX);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(85).unwrap().to_string(), "85%");
    }

    #[test]
    fn brightness_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Brightness>("40").is_ok());
        assert!(serde_json::from_str::<Brightness>("140").is_err());
    }
}
